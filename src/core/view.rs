//! The work-log table as the user sees it: filtered by semester,
//! newest first, times on a 12-hour clock.

use crate::models::{ActivityKind, SemesterBucket, SemesterFilter, WorkEntry, WorkLog};

pub const EMPTY_LOG: &str = "No work log entries yet.";
pub const EMPTY_SEMESTER: &str = "No work log entries found for this semester.";
pub const AUTOCLEAN_NOTICE: [&str; 2] = [
    "Some invalid entries were detected and automatically removed from your work log.",
    "Please make sure to enter time in HH:MM format next time!",
];

#[derive(Debug, Clone, PartialEq)]
pub struct DisplayRow {
    /// 1-based position in the unfiltered newest-first order.
    pub index: usize,
    pub date: String,
    pub time: String,
    pub activity: ActivityKind,
    pub hours: f64,
}

impl DisplayRow {
    fn from_entry(index: usize, entry: &WorkEntry) -> Self {
        Self {
            index,
            date: entry.date_str(),
            time: entry.time.format("%-I:%M").to_string(),
            activity: entry.activity,
            hours: entry.hours,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum WorkLogView {
    /// Nothing has been logged at all.
    Empty { notice: bool },
    /// The filter left nothing to show.
    NoneForSemester { notice: bool },
    Rows { rows: Vec<DisplayRow>, notice: bool },
}

impl WorkLogView {
    /// `invalid_flag` is the flag returned by the last reconciliation.
    pub fn build(log: &WorkLog, filter: &SemesterFilter, invalid_flag: bool) -> Self {
        if log.is_empty() {
            return WorkLogView::Empty {
                notice: invalid_flag,
            };
        }

        let entries = log.entries();
        let rows: Vec<DisplayRow> = log
            .display_order()
            .into_iter()
            .enumerate()
            .filter(|(_, pos)| filter.matches(&SemesterBucket::from(entries[*pos].date)))
            .map(|(i, pos)| DisplayRow::from_entry(i + 1, &entries[pos]))
            .collect();

        if rows.is_empty() {
            WorkLogView::NoneForSemester {
                notice: invalid_flag,
            }
        } else {
            WorkLogView::Rows {
                rows,
                notice: invalid_flag,
            }
        }
    }

    pub fn shows_notice(&self) -> bool {
        match self {
            WorkLogView::Empty { notice }
            | WorkLogView::NoneForSemester { notice }
            | WorkLogView::Rows { notice, .. } => *notice,
        }
    }

    pub fn rows(&self) -> &[DisplayRow] {
        match self {
            WorkLogView::Rows { rows, .. } => rows,
            _ => &[],
        }
    }
}
