use super::activity::ActivityKind;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Strict combined format every retained row must satisfy.
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M";
pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIME_FORMAT: &str = "%H:%M";

// chrono skips blanks before numbers and takes a signed year, so the
// text shape is checked first
static DATE_SHAPE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}-[0-9]{1,2}-[0-9]{1,2}$").ok());
static TIME_SHAPE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[0-9]{1,2}:[0-9]{1,2}$").ok());

/// `YYYY-MM-DD` digits only, no padding blanks or sign.
pub(crate) fn is_date_shaped(s: &str) -> bool {
    DATE_SHAPE.as_ref().is_some_and(|re| re.is_match(s))
}

/// `HH:MM` digits only.
pub(crate) fn is_time_shaped(s: &str) -> bool {
    TIME_SHAPE.as_ref().is_some_and(|re| re.is_match(s))
}

/// A validated shift. Only the reconciler produces these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkEntry {
    pub date: NaiveDate,           // ⇔ shifts.date (TEXT "YYYY-MM-DD")
    pub time: NaiveTime,           // ⇔ shifts.time (TEXT "HH:MM")
    pub activity: ActivityKind,    // ⇔ shifts.activity
    pub hours: f64,                // ⇔ shifts.hours (REAL)
}

impl WorkEntry {
    pub fn date_str(&self) -> String {
        self.date.format(DATE_FORMAT).to_string()
    }

    pub fn time_str(&self) -> String {
        self.time.format(TIME_FORMAT).to_string()
    }

    pub fn timestamp(&self) -> NaiveDateTime {
        self.date.and_time(self.time)
    }

    /// Back to the editable form, e.g. before a table sync.
    pub fn to_row(&self) -> ShiftRow {
        ShiftRow {
            date: self.date_str(),
            time: self.time_str(),
            activity: self.activity,
            hours: self.hours,
        }
    }
}

/// A row as the user typed it or as it stands after a table edit.
/// Date and time are free text until reconciliation validates them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftRow {
    pub date: String,
    pub time: String,
    pub activity: ActivityKind,
    pub hours: f64,
}

impl ShiftRow {
    /// Parse `date + " " + time` strictly as `YYYY-MM-DD HH:MM`.
    pub fn validate(&self) -> Option<WorkEntry> {
        if !is_date_shaped(&self.date) || !is_time_shaped(&self.time) {
            return None;
        }

        let combined = format!("{} {}", self.date, self.time);
        let dt = NaiveDateTime::parse_from_str(&combined, DATETIME_FORMAT).ok()?;

        Some(WorkEntry {
            date: dt.date(),
            time: dt.time(),
            activity: self.activity,
            hours: self.hours,
        })
    }
}

/// A new-entry submission, before time normalization.
#[derive(Debug, Clone, PartialEq)]
pub struct NewShift {
    pub date: String,
    pub raw_time: String,
    pub activity: ActivityKind,
    pub hours: f64,
}
