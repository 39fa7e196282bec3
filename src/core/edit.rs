use crate::core::logic::Core;
use crate::core::reconcile::{LogEvent, Reconciled, clean_time_input};
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::load_work_log;
use crate::errors::{AppError, AppResult};
use crate::models::ActivityKind;

/// Fields to overwrite on an existing row. `None` keeps the current value.
#[derive(Debug, Clone, Default)]
pub struct RowPatch {
    pub date: Option<String>,
    pub time: Option<String>,
    pub activity: Option<ActivityKind>,
    pub hours: Option<f64>,
}

impl RowPatch {
    pub fn is_empty(&self) -> bool {
        self.date.is_none() && self.time.is_none() && self.activity.is_none() && self.hours.is_none()
    }
}

/// In-place edit of one row, propagated as a table sync.
pub struct EditLogic;

impl EditLogic {
    /// `index` is the 1-based row number shown by `list`.
    pub fn apply(pool: &mut DbPool, index: usize, patch: RowPatch) -> AppResult<Reconciled> {
        let log = load_work_log(pool)?;
        let pos = log.position_of(index).ok_or(AppError::InvalidRow(index))?;

        let mut rows = log.to_rows();
        let before = format!("{} {}", rows[pos].date, rows[pos].time);

        let row = &mut rows[pos];
        if let Some(date) = patch.date {
            row.date = date.trim().to_string();
        }
        if let Some(time) = patch.time {
            row.time = clean_time_input(&time);
        }
        if let Some(activity) = patch.activity {
            row.activity = activity;
        }
        if let Some(hours) = patch.hours {
            row.hours = hours;
        }

        let message = format!(
            "Edited shift #{} → {} {} {} {} h",
            index, row.date, row.time, row.activity, row.hours
        );

        let outcome = Core::commit(pool, LogEvent::TableSync(rows))?;

        if let Err(e) = ttlog(&pool.conn, "edit", &before, &message) {
            eprintln!("⚠️ Failed to write internal log: {}", e);
        }

        Ok(outcome)
    }
}
