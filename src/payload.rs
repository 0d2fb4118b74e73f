//! Ticket number and draw date extraction from QR payload text.
//!
//! Ticket QR codes are commonly `AA-BB-CC-DDDDDD-EEEE`, with the 6-digit
//! ticket number in the fourth group. Other issuers vary, so everything past
//! the canonical pattern is a best-effort heuristic.

use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

use crate::types::{DrawDate, TicketNumber};
use crate::utils::is_plausible_draw_day;

static CANONICAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]{2})-([0-9]{2})-([0-9]{2})-([0-9]{6})-([0-9]{4})$")
        .expect("canonical payload pattern is valid")
});

static DIGIT_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+").expect("digit run pattern is valid"));

pub fn extract_ticket_number(raw: &str) -> Option<TicketNumber> {
    let text = raw.trim();

    if let Some(caps) = CANONICAL.captures(text) {
        return TicketNumber::parse(&caps[4]);
    }

    let parts: Vec<&str> = text.split('-').collect();
    if parts.len() >= 4 {
        if let Some(ticket) = six_digit_group(parts[3]) {
            return Some(ticket);
        }
    }

    // The true last group is usually a 4-digit serial, so a trailing 6-digit
    // run tends to be noise: take the second-to-last.
    let runs: Vec<&str> = DIGIT_RUN
        .find_iter(text)
        .map(|m| m.as_str())
        .filter(|run| run.len() == 6)
        .collect();
    debug!(runs = runs.len(), "scanning payload for 6-digit runs");
    match runs.len() {
        0 => None,
        1 => TicketNumber::parse(runs[0]),
        n => TicketNumber::parse(runs[n - 2]),
    }
}

/// Derives the draw date from the first three groups of a canonical payload.
///
/// The group order is not documented, so `yy-mm-dd`, `dd-mm-yy` and `yy-dd-mm`
/// are tried in that order and the first real date landing on a draw day wins.
pub fn extract_draw_date(raw: &str) -> Option<DrawDate> {
    let caps = CANONICAL.captures(raw.trim())?;
    let (g1, g2, g3) = (&caps[1], &caps[2], &caps[3]);

    [(g1, g2, g3), (g3, g2, g1), (g1, g3, g2)]
        .into_iter()
        .filter_map(|(yy, mm, dd)| two_digit_ymd(yy, mm, dd))
        .find(is_plausible_draw_day)
}

fn two_digit_ymd(yy: &str, mm: &str, dd: &str) -> Option<DrawDate> {
    let year: i32 = yy.parse().ok()?;
    let month: u32 = mm.parse().ok()?;
    let day: u32 = dd.parse().ok()?;
    DrawDate::from_ymd(2000 + year, month, day)
}

/// A split group counts only as-is: `" 123456"` is not a ticket here.
fn six_digit_group(group: &str) -> Option<TicketNumber> {
    if group.len() == 6 {
        TicketNumber::parse(group)
    } else {
        None
    }
}
