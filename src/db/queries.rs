use crate::errors::AppResult;
use crate::models::press::{NewPress, PressEvent, Sample};
use crate::utils::time::{format_timestamp, parse_timestamp};
use chrono::{DateTime, Utc};
use rusqlite::{Connection, Row, params};

fn timestamp_column(row: &Row, column: &str) -> rusqlite::Result<DateTime<Utc>> {
    let raw: String = row.get(column)?;
    parse_timestamp(&raw).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
    })
}

pub fn map_row(row: &Row) -> rusqlite::Result<PressEvent> {
    Ok(PressEvent {
        id: row.get("id")?,
        duration_minutes: row.get("duration_minutes")?,
        location: row.get("location")?,
        recorded_at: timestamp_column(row, "recorded_at")?,
    })
}

fn map_sample(row: &Row) -> rusqlite::Result<Sample> {
    Ok(Sample {
        duration_minutes: row.get("duration_minutes")?,
        recorded_at: timestamp_column(row, "recorded_at")?,
    })
}

/// Append one press. A single INSERT, so it either lands whole or not at all.
pub fn insert_press(conn: &Connection, press: &NewPress) -> AppResult<PressEvent> {
    let minutes = press.button.minutes();

    let mut stmt = conn.prepare_cached(
        "INSERT INTO presses (duration_minutes, location, recorded_at)
         VALUES (?1, ?2, ?3)",
    )?;
    stmt.execute(params![
        minutes,
        press.location,
        format_timestamp(&press.recorded_at),
    ])?;

    Ok(PressEvent {
        id: conn.last_insert_rowid(),
        duration_minutes: minutes,
        location: press.location.clone(),
        recorded_at: press.recorded_at,
    })
}

/// Every stored press, oldest id first.
pub fn load_all(conn: &Connection) -> AppResult<Vec<PressEvent>> {
    let mut stmt = conn.prepare(
        "SELECT id, duration_minutes, location, recorded_at
         FROM presses
         ORDER BY id ASC",
    )?;

    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// The `limit` most recent presses for `location`, newest first.
pub fn load_recent(conn: &Connection, location: &str, limit: u32) -> AppResult<Vec<Sample>> {
    let mut stmt = conn.prepare_cached(
        "SELECT duration_minutes, recorded_at
         FROM presses
         WHERE location = ?1
         ORDER BY recorded_at DESC, id DESC
         LIMIT ?2",
    )?;

    let rows = stmt.query_map(params![location, limit], map_sample)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Every location with at least one press, sorted.
pub fn distinct_locations(conn: &Connection) -> AppResult<Vec<String>> {
    let mut stmt = conn.prepare("SELECT DISTINCT location FROM presses ORDER BY location ASC")?;

    let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn count_presses(conn: &Connection) -> AppResult<i64> {
    Ok(conn.query_row("SELECT COUNT(*) FROM presses", [], |row| row.get(0))?)
}
