use crate::errors::AppResult;
use rusqlite::{Connection, OptionalExtension};

/// Create the `presses` table and its lookup index if they are missing.
/// This is a one-shot bootstrap for a fresh database file; an existing
/// table is left exactly as it is.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS presses (
            id               INTEGER PRIMARY KEY AUTOINCREMENT,
            duration_minutes INTEGER NOT NULL,
            location         TEXT NOT NULL,
            recorded_at      TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_presses_location_time ON presses(location, recorded_at);
        "#,
    )?;
    Ok(())
}

/// Check if the `presses` table exists.
pub fn presses_table_exists(conn: &Connection) -> AppResult<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name='presses'")?;
    let exists: Option<String> = stmt.query_row([], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}
