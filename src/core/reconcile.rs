//! Work-log reconciliation.
//!
//! Every change to the log goes through [`reconcile`]: a submission or a
//! table sync is merged into a working set, then every row that does not
//! parse as `YYYY-MM-DD HH:MM` is dropped. Nothing here fails; dropped rows
//! are reported back so the caller can warn the user.

use crate::models::{NewShift, ShiftRow, WorkEntry, WorkLog};
use tracing::{debug, warn};

/// What happened to the log.
#[derive(Debug, Clone, PartialEq)]
pub enum LogEvent {
    /// A new shift submitted by the user.
    Submit(NewShift),
    /// The full table after an in-place edit or a row deletion.
    /// A row missing here is gone.
    TableSync(Vec<ShiftRow>),
    /// No user action: re-validate the current log as is.
    Refresh,
}

impl LogEvent {
    pub fn is_submit(&self) -> bool {
        matches!(self, LogEvent::Submit(_))
    }
}

/// Outcome of a reconciliation pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Reconciled {
    pub log: WorkLog,
    /// True when at least one row was auto-removed.
    pub invalid_rows: bool,
    /// The rows that were auto-removed, in their original order.
    pub removed: Vec<ShiftRow>,
}

/// Normalize free-text time input.
///
/// - `""` stays empty (and fails validation later)
/// - `"9"` becomes `"09:00"`
/// - `"1:0"` becomes `"01:00"`, `"14:9"` becomes `"14:09"`
/// - anything else is returned unchanged
pub fn clean_time_input(raw: &str) -> String {
    let s = raw.trim();

    if s.is_empty() {
        return String::new();
    }

    if s.chars().all(|c| c.is_ascii_digit()) {
        return format!("{:0>2}:00", s);
    }

    if s.contains(':') {
        let mut parts = s.split(':');
        let hour = parts.next().unwrap_or_default();
        let minute = parts.next().unwrap_or_default();
        return format!("{:0>2}:{:0>2}", hour, minute);
    }

    s.to_string()
}

/// Merge `event` into `current` and purge rows that fail validation.
pub fn reconcile(current: &WorkLog, event: LogEvent) -> Reconciled {
    let is_submit = event.is_submit();

    let working_set: Vec<ShiftRow> = match event {
        LogEvent::Submit(shift) => {
            let mut rows = current.to_rows();
            let row = ShiftRow {
                date: shift.date,
                time: clean_time_input(&shift.raw_time),
                activity: shift.activity,
                hours: shift.hours,
            };
            debug!(date = %row.date, time = %row.time, activity = %row.activity, hours = row.hours, "added row");
            rows.push(row);
            rows
        }
        LogEvent::TableSync(rows) => {
            debug!(rows = rows.len(), "table edit or deletion, replacing working set");
            rows
        }
        LogEvent::Refresh => current.to_rows(),
    };

    let mut kept: Vec<WorkEntry> = Vec::with_capacity(working_set.len());
    let mut removed = Vec::new();

    for row in working_set {
        match row.validate() {
            Some(entry) => kept.push(entry),
            None => {
                warn!(date = %row.date, time = %row.time, activity = %row.activity, "auto-removed invalid row");
                removed.push(row);
            }
        }
    }

    let invalid_detected = !removed.is_empty();

    // a clean submission clears any stale warning
    let invalid_rows = if is_submit && !invalid_detected {
        false
    } else {
        invalid_detected
    };

    Reconciled {
        log: WorkLog::from(kept),
        invalid_rows,
        removed,
    }
}
