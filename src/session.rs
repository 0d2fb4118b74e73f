use anyhow::Result;
use std::io::{self, BufRead, BufReader, Stdin, Write};
use tracing::{info, warn};

use crate::checker::{CheckOutcome, CheckReport, TicketChecker};
use crate::error::ScanError;
use crate::scanner::{LineScanner, QrScanner, ScanGuard, read_trimmed_line};
use crate::types::{DateSelector, DrawDate};

/// Where the operator answers the draw date question.
pub trait DatePrompt {
    /// One trimmed answer; `None` once the input is closed.
    fn answer(&mut self) -> Result<Option<String>, ScanError>;
}

/// Answers read line by line.
pub struct LinePrompt<R> {
    reader: R,
}

impl<R: BufRead> LinePrompt<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> DatePrompt for LinePrompt<R> {
    fn answer(&mut self) -> Result<Option<String>, ScanError> {
        read_trimmed_line(&mut self.reader)
    }
}

/// Interactive scan-and-check loop.
pub struct Session {
    checker: TicketChecker,
}

impl Session {
    pub fn new(checker: TicketChecker) -> Self {
        Self { checker }
    }

    pub async fn serve<S, P, W>(
        &self,
        scanner: &mut S,
        prompt: &mut P,
        mut writer: W,
    ) -> Result<()>
    where
        S: QrScanner + ?Sized,
        P: DatePrompt + ?Sized,
        W: Write,
    {
        loop {
            writeln!(writer, "Paste QR data (Ctrl-D to quit):")?;
            writer.flush()?;

            let payload = {
                let mut scan = ScanGuard::acquire(scanner)?;
                scan.next_payload()?
            };
            let Some(payload) = payload else {
                info!("input closed, ending session");
                break;
            };
            writeln!(writer, "QR Data: {payload}")?;

            let mut report = self.checker.check(&payload, None).await;

            if let CheckOutcome::NeedsDate { suggested, .. } = &report.outcome {
                let suggested = *suggested;
                write_diagnostics(&mut writer, &report)?;
                writeln!(
                    writer,
                    "Draw date (YYYY-MM-DD or 'latest') [{suggested}]:"
                )?;
                writer.flush()?;

                let Some(answer) = prompt.answer()? else {
                    break;
                };
                let Some(selector) = parse_date_answer(&answer, suggested) else {
                    warn!(%answer, "unusable draw date entered");
                    writeln!(writer, "Please choose a draw date as YYYY-MM-DD")?;
                    continue;
                };
                report = self.checker.check(&payload, Some(selector)).await;
            }

            write_report(&mut writer, &report)?;
        }

        Ok(())
    }
}

/// Empty answer accepts the suggestion.
pub fn parse_date_answer(answer: &str, suggested: DrawDate) -> Option<DateSelector> {
    match answer.trim() {
        "" => Some(DateSelector::Draw(suggested)),
        text if text.eq_ignore_ascii_case("latest") => Some(DateSelector::Latest),
        text => DrawDate::parse_iso(text).map(DateSelector::Draw),
    }
}

fn write_diagnostics<W: Write>(writer: &mut W, report: &CheckReport) -> io::Result<()> {
    for line in &report.diagnostics {
        writeln!(writer, "  {line}")?;
    }
    Ok(())
}

fn write_report<W: Write>(writer: &mut W, report: &CheckReport) -> io::Result<()> {
    write_diagnostics(writer, report)?;
    if let CheckOutcome::Resolved {
        ticket,
        draw_date,
        prize,
    } = &report.outcome
    {
        let mark = if prize.is_winner() { "🎉" } else { "—" };
        writeln!(writer, "Ticket:    {ticket}")?;
        writeln!(writer, "Draw date: {draw_date}")?;
        writeln!(writer, "Result:    {mark} {prize}")?;
    }
    writeln!(writer)?;
    writer.flush()
}

// Payloads and answers both come from stdin. A one-byte buffer keeps either
// reader from pulling lines meant for the other out of stdin's shared buffer.
fn stdin_reader() -> BufReader<Stdin> {
    BufReader::with_capacity(1, io::stdin())
}

pub fn stdin_scanner() -> LineScanner<BufReader<Stdin>> {
    LineScanner::new(stdin_reader())
}

pub fn stdin_prompt() -> LinePrompt<BufReader<Stdin>> {
    LinePrompt::new(stdin_reader())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_answers() {
        let suggested = DrawDate::parse_iso("2024-10-16").unwrap();
        assert_eq!(parse_date_answer("  ", suggested), Some(DateSelector::Draw(suggested)));
        assert_eq!(parse_date_answer("Latest", suggested), Some(DateSelector::Latest));
        assert_eq!(
            parse_date_answer("2024-11-01", suggested),
            DrawDate::parse_iso("2024-11-01").map(DateSelector::Draw)
        );
        assert_eq!(parse_date_answer("1/11/2024", suggested), None);
    }

    #[test]
    fn line_prompt_keeps_empty_answers() {
        let mut prompt = LinePrompt::new(io::Cursor::new("\n latest \n"));
        assert_eq!(prompt.answer().unwrap().as_deref(), Some(""));
        assert_eq!(prompt.answer().unwrap().as_deref(), Some("latest"));
        assert_eq!(prompt.answer().unwrap(), None);
    }
}
