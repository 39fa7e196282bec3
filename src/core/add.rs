use crate::core::logic::Core;
use crate::core::reconcile::{LogEvent, Reconciled};
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::NewShift;

/// High-level business logic for the `add` command.
pub struct AddLogic;

impl AddLogic {
    pub fn apply(pool: &mut DbPool, shift: NewShift) -> AppResult<Reconciled> {
        let target = format!("{} {}", shift.date, shift.raw_time);
        let message = format!("Submitted {} shift, {} h", shift.activity, shift.hours);

        let outcome = Core::commit(pool, LogEvent::Submit(shift))?;

        if let Err(e) = ttlog(&pool.conn, "add", &target, &message) {
            eprintln!("⚠️ Failed to write internal log: {}", e);
        }

        Ok(outcome)
    }
}
