// src/export/logic.rs

use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::load_work_log;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::ShiftExport;
use crate::export::xlsx::export_xlsx;
use crate::models::{SemesterBucket, SemesterFilter, WorkLog};
use crate::ui::messages::warning;
use std::path::Path;

pub struct ExportLogic;

impl ExportLogic {
    /// Export the shifts of `filter`, oldest first.
    ///
    /// Returns the number of exported shifts; nothing is written when the
    /// selection is empty.
    pub fn export(
        pool: &mut DbPool,
        format: ExportFormat,
        file: &str,
        filter: &SemesterFilter,
        force: bool,
    ) -> AppResult<usize> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "output file path must be absolute: {file}"
            )));
        }

        let log = load_work_log(pool)?;
        let shifts = select_shifts(&log, filter);

        if shifts.is_empty() {
            warning(format!("No shifts found for semester filter '{}'.", filter));
            return Ok(0);
        }

        ensure_writable(path, force)?;

        match format {
            ExportFormat::Csv => export_csv(&shifts, path)?,
            ExportFormat::Json => export_json(&shifts, path)?,
            ExportFormat::Xlsx => export_xlsx(&shifts, path)?,
        }

        let _ = ttlog(
            &pool.conn,
            "export",
            &path.to_string_lossy(),
            &format!(
                "Exported {} shifts ({}) as {}",
                shifts.len(),
                filter,
                format.as_str()
            ),
        );

        Ok(shifts.len())
    }
}

/// Filtered shifts in chronological order.
pub fn select_shifts(log: &WorkLog, filter: &SemesterFilter) -> Vec<ShiftExport> {
    let mut entries: Vec<_> = log
        .iter()
        .filter(|e| filter.matches(&SemesterBucket::from(e.date)))
        .collect();
    entries.sort_by_key(|e| e.timestamp());

    entries.into_iter().map(ShiftExport::from).collect()
}
