//! Record date with degrade-to-sentinel parsing
//!
//! Dates are entered as "YYYY-MM-DD" strings. A malformed string does not
//! reject the record; it parses to a sentinel that every grouping operation
//! treats as a distinct "unknown" bucket matching no real period.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The (year, month) bucket for records whose date failed to parse
pub const UNKNOWN_PERIOD: (i32, u32) = (0, 0);

/// A calendar date as entered by the user
///
/// Keeps the raw input string alongside the parsed date so display always
/// shows what was typed, while aggregation uses [`RecordDate::parts`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct RecordDate {
    raw: String,
    parsed: Option<NaiveDate>,
}

impl RecordDate {
    /// Parse a date from user input; never fails
    ///
    /// Anything that is not a valid "YYYY-MM-DD" date yields a sentinel
    /// value whose `parts()` are `(0, 0, 0)`.
    pub fn parse(input: &str) -> Self {
        let raw = input.trim().to_string();
        let parsed = NaiveDate::parse_from_str(&raw, "%Y-%m-%d").ok();
        Self { raw, parsed }
    }

    /// The raw string as entered (trimmed)
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Whether the date parsed as a real calendar date
    pub fn is_valid(&self) -> bool {
        self.parsed.is_some()
    }

    /// Decompose into (year, month, day); `(0, 0, 0)` for malformed input
    ///
    /// Callers must treat the sentinel as "ungrouped/invalid", not a real
    /// date.
    pub fn parts(&self) -> (i32, u32, u32) {
        match self.parsed {
            Some(date) => (date.year(), date.month(), date.day()),
            None => (0, 0, 0),
        }
    }

    /// The (year, month) grouping key; [`UNKNOWN_PERIOD`] for malformed input
    pub fn period(&self) -> (i32, u32) {
        let (year, month, _) = self.parts();
        (year, month)
    }
}

impl From<NaiveDate> for RecordDate {
    fn from(date: NaiveDate) -> Self {
        Self {
            raw: date.format("%Y-%m-%d").to_string(),
            parsed: Some(date),
        }
    }
}

impl From<String> for RecordDate {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl From<RecordDate> for String {
    fn from(date: RecordDate) -> Self {
        date.raw
    }
}

impl fmt::Display for RecordDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.raw.is_empty() {
            write!(f, "(no date)")
        } else {
            write!(f, "{}", self.raw)
        }
    }
}

/// Three-letter month name for report labels; "???" outside 1-12
pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "Jan",
        2 => "Feb",
        3 => "Mar",
        4 => "Apr",
        5 => "May",
        6 => "Jun",
        7 => "Jul",
        8 => "Aug",
        9 => "Sep",
        10 => "Oct",
        11 => "Nov",
        12 => "Dec",
        _ => "???",
    }
}
