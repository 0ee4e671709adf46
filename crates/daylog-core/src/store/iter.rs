//! Lazy traversal of every entry in on-disk order.

use std::io::BufRead;

use crate::error::{DaylogError, Result};
use crate::id::EntryId;
use crate::scanner::LineScanner;

use super::types::Entry;
use super::{content_marker, join_content, END_CONTENT, END_ENTRIES, ENTRY_ID};

/// Iterator over `(ID, content)` pairs from `BEGIN ENTRIES` to
/// `END ENTRIES`.
///
/// Forward-only and finite: the first structural fault ends the sequence
/// after yielding the error. Restartable only by asking the store for a new
/// traversal.
pub struct Entries<R> {
    scanner: LineScanner<R>,
    done: bool,
}

impl<R: BufRead> Entries<R> {
    pub(super) fn new(scanner: LineScanner<R>) -> Self {
        Entries {
            scanner,
            done: false,
        }
    }

    fn next_entry(&mut self) -> Result<Option<Entry>> {
        let id = loop {
            let Some(line) = self.scanner.next_line()? else {
                return Err(DaylogError::Structure(format!(
                    "end of log before {}",
                    END_ENTRIES
                )));
            };
            if line.contains(END_ENTRIES) {
                return Ok(None);
            }
            if line.contains(ENTRY_ID) {
                break EntryId::from_marker_line(&line).ok_or_else(|| {
                    DaylogError::Structure(format!("unreadable ID in marker: {}", line))
                })?;
            }
        };

        if self.scanner.seek_contains(&content_marker(&id))?.is_none() {
            return Err(DaylogError::Structure(format!(
                "content marker missing for entry {}",
                id
            )));
        }

        let lines = self.scanner.accumulate_until(END_CONTENT)?.ok_or_else(|| {
            DaylogError::Structure(format!("content never closed for entry {}", id))
        })?;

        Ok(Some(Entry {
            id,
            content: join_content(lines),
        }))
    }
}

impl<R: BufRead> Iterator for Entries<R> {
    type Item = Result<Entry>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.next_entry() {
            Ok(Some(entry)) => Some(Ok(entry)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(err) => {
                self.done = true;
                Some(Err(err))
            }
        }
    }
}
