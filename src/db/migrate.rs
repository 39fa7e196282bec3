use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt = conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

fn migration_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn mark_applied(conn: &Connection, version: &str, message: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;
    Ok(())
}

/// Create the `shifts` table holding the canonical work log.
fn create_shifts_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS shifts (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            time      TEXT NOT NULL,
            activity  TEXT NOT NULL CHECK(activity IN ('tour','registration','org wide','other','training')),
            hours     REAL NOT NULL DEFAULT 0
        );

        CREATE INDEX IF NOT EXISTS idx_shifts_date_time ON shifts(date, time);
        "#,
    )?;
    Ok(())
}

/// Key/value table for session state that outlives a single command.
fn migrate_add_state_table(conn: &Connection) -> Result<()> {
    let version = "20250301_0002_add_state_table";

    if migration_applied(conn, version)? {
        return Ok(());
    }

    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS state (
            key    TEXT PRIMARY KEY,
            value  TEXT NOT NULL
        );
        "#,
    )?;

    mark_applied(conn, version, "Added state table")?;
    success(format!("Migration applied: {} → added 'state' table", version));

    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Called by db::init_db().
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;

    if !table_exists(conn, "shifts")? {
        create_shifts_table(conn)?;
        mark_applied(conn, "20250301_0001_create_shifts", "Created shifts table")?;
        success("Created shifts table.");
    }

    migrate_add_state_table(conn)?;

    Ok(())
}
