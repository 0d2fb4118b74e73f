use tracing::{info, instrument};

use crate::fetcher::ResultsFetcher;
use crate::payload::{extract_draw_date, extract_ticket_number};
use crate::resolver::determine_prize;
use crate::types::{DateSelector, DrawDate, PrizeMatch, TicketNumber};
use crate::utils::guess_recent_draw_iso;

#[derive(Debug, Clone, PartialEq)]
pub enum CheckOutcome {
    /// Nothing in the payload looks like a ticket number; scan again.
    NoTicketNumber,
    /// The draw could not be worked out from the payload, or its results
    /// could not be fetched; ask the user for a date.
    NeedsDate {
        ticket: TicketNumber,
        suggested: DrawDate,
    },
    ResultsUnavailable {
        ticket: TicketNumber,
        selector: DateSelector,
    },
    Resolved {
        ticket: TicketNumber,
        draw_date: String,
        prize: PrizeMatch,
    },
}

#[derive(Debug, Clone)]
pub struct CheckReport {
    pub outcome: CheckOutcome,
    /// Status lines in the order they were produced.
    pub diagnostics: Vec<String>,
}

/// Runs one payload through parse, fetch and resolve.
pub struct TicketChecker {
    fetcher: ResultsFetcher,
}

impl TicketChecker {
    pub fn new(fetcher: ResultsFetcher) -> Self {
        Self { fetcher }
    }

    /// `manual` overrides any date found in the payload.
    #[instrument(skip(self))]
    pub async fn check(&self, raw: &str, manual: Option<DateSelector>) -> CheckReport {
        let mut diagnostics = Vec::new();

        let Some(ticket) = extract_ticket_number(raw) else {
            diagnostics.push("Could not read a ticket number, please scan again".to_string());
            return CheckReport {
                outcome: CheckOutcome::NoTicketNumber,
                diagnostics,
            };
        };
        diagnostics.push(format!("Ticket number read: {ticket}"));

        let (selector, from_payload) = match manual {
            Some(selector) => (selector, false),
            None => match extract_draw_date(raw) {
                Some(date) => {
                    diagnostics.push(format!("Draw date found in QR: {date}"));
                    (DateSelector::Draw(date), true)
                }
                None => {
                    diagnostics.push("No draw date in QR data, please choose the draw date".to_string());
                    return CheckReport {
                        outcome: CheckOutcome::NeedsDate {
                            ticket,
                            suggested: guess_recent_draw_iso(),
                        },
                        diagnostics,
                    };
                }
            },
        };

        diagnostics.push(format!("Fetching results for draw {selector}..."));
        let tiers = self
            .fetcher
            .fetch_results(&selector, &mut |message: String| diagnostics.push(message))
            .await;

        let outcome = match tiers {
            Some(tiers) => {
                let prize = determine_prize(&ticket, &tiers);
                info!(%ticket, draw = %tiers.date, ?prize, "ticket checked");
                CheckOutcome::Resolved {
                    ticket,
                    draw_date: tiers.date,
                    prize,
                }
            }
            None if from_payload => {
                diagnostics.push("Could not fetch results for the draw date in the QR data".to_string());
                CheckOutcome::NeedsDate {
                    ticket,
                    suggested: guess_recent_draw_iso(),
                }
            }
            None => {
                diagnostics.push(format!("No prize results found for draw {selector}"));
                CheckOutcome::ResultsUnavailable { ticket, selector }
            }
        };

        CheckReport {
            outcome,
            diagnostics,
        }
    }
}
