//! Forward-only line traversal over a log source.
//!
//! The scanner is the single traversal primitive underneath every record
//! store operation: advance one line, seek until a line containing a marker,
//! or accumulate lines until a marker. There is no random access and no
//! rewind; anything that needs prior context must capture it before
//! advancing.

use std::io::BufRead;

use crate::error::{DaylogError, Result};

/// A forward-only cursor over the lines of a log source.
pub struct LineScanner<R> {
    source: R,
}

impl<R: BufRead> LineScanner<R> {
    pub fn new(source: R) -> Self {
        LineScanner { source }
    }

    /// Advance to the next line, with the trailing newline stripped.
    ///
    /// Returns `Ok(None)` at end of stream. A read failure is `IoRead`.
    pub fn next_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        match self.source.read_line(&mut line) {
            Ok(0) => Ok(None),
            Ok(_) => {
                if line.ends_with('\n') {
                    line.pop();
                    if line.ends_with('\r') {
                        line.pop();
                    }
                }
                Ok(Some(line))
            }
            Err(err) => Err(DaylogError::io_read(err)),
        }
    }

    /// Advance until a line containing `token`, returning that line.
    ///
    /// Returns `Ok(None)` when the stream ends first. Whether end of stream
    /// is a structural fault is the caller's decision.
    pub fn seek_contains(&mut self, token: &str) -> Result<Option<String>> {
        while let Some(line) = self.next_line()? {
            if line.contains(token) {
                return Ok(Some(line));
            }
        }
        Ok(None)
    }

    /// Collect lines until one containing `token`. The marker line itself is
    /// consumed but not included.
    ///
    /// Returns `Ok(None)` when the stream ends before the marker.
    pub fn accumulate_until(&mut self, token: &str) -> Result<Option<Vec<String>>> {
        let mut lines = Vec::new();
        while let Some(line) = self.next_line()? {
            if line.contains(token) {
                return Ok(Some(lines));
            }
            lines.push(line);
        }
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn scanner(text: &str) -> LineScanner<Cursor<Vec<u8>>> {
        LineScanner::new(Cursor::new(text.as_bytes().to_vec()))
    }

    #[test]
    fn test_next_line_strips_newline() {
        let mut scan = scanner("one\ntwo\r\nthree");
        assert_eq!(scan.next_line().unwrap().as_deref(), Some("one"));
        assert_eq!(scan.next_line().unwrap().as_deref(), Some("two"));
        assert_eq!(scan.next_line().unwrap().as_deref(), Some("three"));
        assert_eq!(scan.next_line().unwrap(), None);
    }

    #[test]
    fn test_seek_contains_finds_marker_line() {
        let mut scan = scanner("a\nb MARK b\nc\n");
        let line = scan.seek_contains("MARK").unwrap().unwrap();
        assert_eq!(line, "b MARK b");
        assert_eq!(scan.next_line().unwrap().as_deref(), Some("c"));
    }

    #[test]
    fn test_seek_contains_end_of_stream() {
        let mut scan = scanner("a\nb\n");
        assert_eq!(scan.seek_contains("MARK").unwrap(), None);
    }

    #[test]
    fn test_accumulate_until_excludes_marker() {
        let mut scan = scanner("a\nb\nEND\nrest\n");
        let lines = scan.accumulate_until("END").unwrap().unwrap();
        assert_eq!(lines, vec!["a".to_string(), "b".to_string()]);
        assert_eq!(scan.next_line().unwrap().as_deref(), Some("rest"));
    }

    #[test]
    fn test_accumulate_until_end_of_stream() {
        let mut scan = scanner("a\nb\n");
        assert_eq!(scan.accumulate_until("END").unwrap(), None);
    }
}
