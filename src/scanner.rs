//! QR payload sources.
//!
//! Decoding itself is outside this crate: a scanner only has to hand over
//! payload text. The caller owns the scanner and opens it through
//! [`ScanGuard`], which stops it again as soon as the guard is dropped, so a
//! lookup never runs while the scanner is live.

use std::io::BufRead;
use tracing::debug;

use crate::error::ScanError;

pub trait QrScanner {
    fn start(&mut self) -> Result<(), ScanError>;

    /// Blocks until the next payload; `None` when the source is exhausted.
    fn next_payload(&mut self) -> Result<Option<String>, ScanError>;

    fn stop(&mut self);
}

/// A running scanner, stopped on drop.
pub struct ScanGuard<'a, S: QrScanner + ?Sized> {
    scanner: &'a mut S,
}

impl<'a, S: QrScanner + ?Sized> ScanGuard<'a, S> {
    pub fn acquire(scanner: &'a mut S) -> Result<Self, ScanError> {
        scanner.start()?;
        Ok(Self { scanner })
    }

    pub fn next_payload(&mut self) -> Result<Option<String>, ScanError> {
        self.scanner.next_payload()
    }
}

impl<S: QrScanner + ?Sized> Drop for ScanGuard<'_, S> {
    fn drop(&mut self) {
        self.scanner.stop();
    }
}

/// Reads pasted payloads, one per line; blank lines are skipped.
pub struct LineScanner<R> {
    reader: R,
    running: bool,
}

impl<R: BufRead> LineScanner<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            running: false,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Reads one raw line, blank or not.
    pub fn read_line(&mut self) -> Result<Option<String>, ScanError> {
        read_trimmed_line(&mut self.reader)
    }
}

/// `None` at end of input.
pub(crate) fn read_trimmed_line<R: BufRead>(reader: &mut R) -> Result<Option<String>, ScanError> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

impl<R: BufRead> QrScanner for LineScanner<R> {
    fn start(&mut self) -> Result<(), ScanError> {
        debug!("scanner started");
        self.running = true;
        Ok(())
    }

    fn next_payload(&mut self) -> Result<Option<String>, ScanError> {
        if !self.running {
            return Err(ScanError::NotStarted);
        }
        while let Some(line) = self.read_line()? {
            if !line.is_empty() {
                return Ok(Some(line));
            }
        }
        Ok(None)
    }

    fn stop(&mut self) {
        if self.running {
            debug!("scanner stopped");
        }
        self.running = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn guard_stops_scanner_on_drop() {
        let mut scanner = LineScanner::new(Cursor::new("12-03-67-551144-9981\n"));
        {
            let mut guard = ScanGuard::acquire(&mut scanner).unwrap();
            assert_eq!(
                guard.next_payload().unwrap().as_deref(),
                Some("12-03-67-551144-9981")
            );
        }
        assert!(!scanner.is_running());
    }

    #[test]
    fn payloads_require_a_started_scanner() {
        let mut scanner = LineScanner::new(Cursor::new("551144\n"));
        assert!(matches!(scanner.next_payload(), Err(ScanError::NotStarted)));
    }

    #[test]
    fn blank_lines_are_skipped_until_eof() {
        let mut scanner = LineScanner::new(Cursor::new("\n  \nfirst\n\n"));
        let mut guard = ScanGuard::acquire(&mut scanner).unwrap();
        assert_eq!(guard.next_payload().unwrap().as_deref(), Some("first"));
        assert_eq!(guard.next_payload().unwrap(), None);
    }

    #[test]
    fn read_line_keeps_empty_answers() {
        let mut scanner = LineScanner::new(Cursor::new("\n2024-10-16\n"));
        assert_eq!(scanner.read_line().unwrap().as_deref(), Some(""));
        assert_eq!(scanner.read_line().unwrap().as_deref(), Some("2024-10-16"));
        assert_eq!(scanner.read_line().unwrap(), None);
    }
}
