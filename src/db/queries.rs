use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::entry::{DATE_FORMAT, TIME_FORMAT};
use crate::models::{ActivityKind, WorkEntry, WorkLog};
use chrono::{NaiveDate, NaiveTime};
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

const INVALID_ROWS_KEY: &str = "invalid_rows";

/// Load the stored work log in insertion order.
pub fn load_work_log(pool: &mut DbPool) -> AppResult<WorkLog> {
    let mut stmt = pool
        .conn
        .prepare("SELECT date, time, activity, hours FROM shifts ORDER BY id ASC")?;

    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(WorkLog::from(out))
}

pub fn map_row(row: &Row) -> Result<WorkEntry> {
    let date_str: String = row.get("date")?;
    let time_str: String = row.get("time")?;

    let date = NaiveDate::parse_from_str(&date_str, DATE_FORMAT).map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(date_str.clone())),
        )
    })?;

    let time = NaiveTime::parse_from_str(&time_str, TIME_FORMAT).map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            1,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidTime(time_str.clone())),
        )
    })?;

    let activity_str: String = row.get("activity")?;
    let activity = ActivityKind::from_db_str(&activity_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            2,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidActivity(activity_str.clone())),
        )
    })?;

    Ok(WorkEntry {
        date,
        time,
        activity,
        hours: row.get("hours")?,
    })
}

/// Replace the stored log with `log`.
///
/// Run it inside the caller's transaction so the new snapshot, the flag and
/// the audit rows land together.
pub fn replace_work_log(conn: &Connection, log: &WorkLog) -> AppResult<()> {
    conn.execute("DELETE FROM shifts", [])?;

    let mut stmt = conn.prepare(
        "INSERT INTO shifts (date, time, activity, hours)
         VALUES (?1, ?2, ?3, ?4)",
    )?;

    for entry in log {
        stmt.execute(params![
            entry.date_str(),
            entry.time_str(),
            entry.activity.to_db_str(),
            entry.hours,
        ])?;
    }

    Ok(())
}

/// The invalid-rows flag left by the last reconciliation.
pub fn load_invalid_flag(conn: &Connection) -> AppResult<bool> {
    let value: Option<String> = conn
        .query_row(
            "SELECT value FROM state WHERE key = ?1",
            [INVALID_ROWS_KEY],
            |row| row.get(0),
        )
        .optional()?;

    Ok(matches!(value.as_deref(), Some("1")))
}

pub fn store_invalid_flag(conn: &Connection, flag: bool) -> AppResult<()> {
    conn.execute(
        "INSERT INTO state (key, value) VALUES (?1, ?2)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value",
        params![INVALID_ROWS_KEY, if flag { "1" } else { "0" }],
    )?;
    Ok(())
}
