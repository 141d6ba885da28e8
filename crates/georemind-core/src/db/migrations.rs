//! Schema migrations for the reminder store

use rusqlite::Connection;

use crate::error::Result;

const LATEST_SCHEMA: i32 = 1;

/// Bring the schema up to [`LATEST_SCHEMA`]
pub fn run(conn: &Connection) -> Result<()> {
    let applied = schema_version(conn)?;
    if applied >= LATEST_SCHEMA {
        tracing::debug!("Reminder schema at version {applied}");
        return Ok(());
    }

    if applied < 1 {
        apply(conn, 1, CREATE_REMINDERS)?;
    }
    Ok(())
}

/// 0 for a fresh database
fn schema_version(conn: &Connection) -> Result<i32> {
    let has_table: bool = conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type='table' AND name='schema_version')",
        [],
        |row| row.get(0),
    )?;
    if !has_table {
        return Ok(0);
    }

    Ok(conn.query_row(
        "SELECT IFNULL(MAX(version), 0) FROM schema_version",
        [],
        |row| row.get(0),
    )?)
}

const CREATE_REMINDERS: &str = "
    CREATE TABLE IF NOT EXISTS reminders (
        id TEXT PRIMARY KEY NOT NULL,
        title TEXT,
        description TEXT,
        location TEXT,
        latitude REAL,
        longitude REAL
    );
";

fn apply(conn: &Connection, version: i32, sql: &str) -> Result<()> {
    conn.execute_batch(&format!(
        "BEGIN;
         CREATE TABLE IF NOT EXISTS schema_version (version INTEGER PRIMARY KEY);
         {sql}
         INSERT INTO schema_version (version) VALUES ({version});
         COMMIT;"
    ))
    .inspect_err(|_| {
        conn.execute_batch("ROLLBACK").ok();
    })?;

    tracing::info!("Applied reminder schema version {version}");
    Ok(())
}
