use crate::core::reconcile::{LogEvent, Reconciled, reconcile};
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::{load_work_log, replace_work_log, store_invalid_flag};
use crate::errors::AppResult;
use tracing::info;

pub struct Core;

impl Core {
    /// Load the latest stored snapshot, reconcile `event` into it and
    /// store the result as the new snapshot. The snapshot, the invalid-rows
    /// flag and the autoclean audit rows are written in one transaction.
    pub fn commit(pool: &mut DbPool, event: LogEvent) -> AppResult<Reconciled> {
        let current = load_work_log(pool)?;
        let outcome = reconcile(&current, event);

        let tx = pool.conn.transaction()?;

        replace_work_log(&tx, &outcome.log)?;
        store_invalid_flag(&tx, outcome.invalid_rows)?;

        for row in &outcome.removed {
            ttlog(
                &tx,
                "autoclean",
                &format!("{} {}", row.date, row.time),
                &format!(
                    "Auto-removed invalid row ({}, {} h)",
                    row.activity, row.hours
                ),
            )?;
        }

        // dropped without commit on any error above, which rolls back
        tx.commit()?;

        info!(
            before = current.len(),
            after = outcome.log.len(),
            removed = outcome.removed.len(),
            "work log reconciled"
        );

        Ok(outcome)
    }
}
