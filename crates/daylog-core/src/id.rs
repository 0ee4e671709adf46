//! Calendar-date entry identifiers.
//!
//! Every entry is keyed by the day it belongs to, encoded as the fixed
//! 8-character string `DDMMYYYY` (zero-padded, no separators). The same
//! encoding appears verbatim inside the log file's marker lines.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Local};
use serde::{Deserialize, Serialize};

use crate::error::{DaylogError, Result};

/// Length of the textual identifier.
pub const ID_LEN: usize = 8;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// A `DDMMYYYY` entry identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(String);

impl EntryId {
    /// Today's ID from the current local date.
    ///
    /// The record store never calls this itself; callers supply today's ID
    /// explicitly wherever it matters.
    pub fn today() -> Self {
        let now = Local::now();
        EntryId(format!(
            "{:02}{:02}{:04}",
            now.day(),
            now.month(),
            now.year()
        ))
    }

    /// The raw 8-character form.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Extract the ID from a marker line: the 8 characters following the
    /// first `=` (and its separating space).
    ///
    /// Returns `None` when the line carries no `=` or the remainder is not a
    /// well-formed ID.
    pub fn from_marker_line(line: &str) -> Option<Self> {
        let rest = &line[line.find('=')? + 1..];
        let rest = rest.strip_prefix(' ').unwrap_or(rest);
        rest.get(..ID_LEN)?.parse().ok()
    }

    /// Human-readable date label, e.g. `"3 September 2021"`.
    ///
    /// A single leading zero on the day is dropped. A month outside 1-12 is
    /// an error rather than undefined behavior.
    pub fn label(&self) -> Result<String> {
        let day: u32 = self.0[0..2]
            .parse()
            .map_err(|_| DaylogError::InvalidId(self.0.clone()))?;
        let month: usize = self.0[2..4]
            .parse()
            .map_err(|_| DaylogError::InvalidId(self.0.clone()))?;
        let year = &self.0[4..8];

        let name = month
            .checked_sub(1)
            .and_then(|idx| MONTH_NAMES.get(idx))
            .ok_or_else(|| DaylogError::InvalidId(self.0.clone()))?;

        Ok(format!("{} {} {}", day, name, year))
    }
}

impl FromStr for EntryId {
    type Err = DaylogError;

    fn from_str(s: &str) -> Result<Self> {
        if s.len() == ID_LEN && s.bytes().all(|b| b.is_ascii_digit()) {
            Ok(EntryId(s.to_string()))
        } else {
            Err(DaylogError::InvalidId(s.to_string()))
        }
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
