// src/export/excel_date.rs

use chrono::{NaiveDate, NaiveTime, Timelike};

/// Excel serial day number of `date` (1900 date system).
pub(crate) fn date_to_excel_serial(date: NaiveDate) -> f64 {
    // 1899-12-30 absorbs Excel's fictitious 1900-02-29
    match NaiveDate::from_ymd_opt(1899, 12, 30) {
        Some(epoch) => (date - epoch).num_days() as f64,
        None => 0.0,
    }
}

/// Fraction of a day, the way Excel stores a time of day.
pub(crate) fn time_to_excel_fraction(time: NaiveTime) -> f64 {
    time.num_seconds_from_midnight() as f64 / 86400.0
}

pub(crate) fn parse_date(s: &str) -> Option<f64> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .map(date_to_excel_serial)
}

pub(crate) fn parse_time(s: &str) -> Option<f64> {
    NaiveTime::parse_from_str(s, "%H:%M")
        .ok()
        .map(time_to_excel_fraction)
}
