// src/export/model.rs

use crate::models::{Semester, WorkEntry};
use serde::Serialize;

/// Flat export record for one shift.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct ShiftExport {
    pub date: String,
    pub time: String,
    pub activity: String,
    pub hours: f64,
    pub semester: String,
}

impl From<&WorkEntry> for ShiftExport {
    fn from(e: &WorkEntry) -> Self {
        Self {
            date: e.date_str(),
            time: e.time_str(),
            activity: e.activity.label(),
            hours: e.hours,
            semester: Semester::of(e.date).to_string(),
        }
    }
}

/// Column headers for CSV / XLSX.
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec!["date", "time", "activity", "hours", "semester"]
}

pub(crate) fn shift_to_row(e: &ShiftExport) -> Vec<String> {
    vec![
        e.date.clone(),
        e.time.clone(),
        e.activity.clone(),
        e.hours.to_string(),
        e.semester.clone(),
    ]
}
