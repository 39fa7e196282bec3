use crate::core::logic::Core;
use crate::core::reconcile::{LogEvent, Reconciled};
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::load_work_log;
use crate::errors::{AppError, AppResult};
use crate::models::WorkEntry;

pub struct DeleteLogic;

impl DeleteLogic {
    /// The row `list` shows as `#index`, if any.
    pub fn find(pool: &mut DbPool, index: usize) -> AppResult<WorkEntry> {
        let log = load_work_log(pool)?;
        let pos = log.position_of(index).ok_or(AppError::InvalidRow(index))?;
        Ok(log.entries()[pos].clone())
    }

    /// Delete row `#index` by syncing the table without it.
    pub fn apply(pool: &mut DbPool, index: usize) -> AppResult<Reconciled> {
        let log = load_work_log(pool)?;
        let pos = log.position_of(index).ok_or(AppError::InvalidRow(index))?;

        let mut rows = log.to_rows();
        let gone = rows.remove(pos);

        let outcome = Core::commit(pool, LogEvent::TableSync(rows))?;

        if let Err(e) = ttlog(
            &pool.conn,
            "del",
            &format!("{} {}", gone.date, gone.time),
            &format!("Deleted {} shift, {} h", gone.activity, gone.hours),
        ) {
            eprintln!("⚠️ Failed to write internal log: {}", e);
        }

        Ok(outcome)
    }
}
