//! Time utilities: the stored timestamp format and minute arithmetic.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Utc};

/// Fixed-width UTC format; lexical order of stored values equals time order.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6fZ";

pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}

/// Accepts any RFC 3339 timestamp, so rows written by other tools still load.
pub fn parse_timestamp(s: &str) -> AppResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| AppError::InvalidTimestamp(s.to_string()))
}

/// Fractional minutes from `earlier` to `later` (negative if reversed).
pub fn minutes_between(later: DateTime<Utc>, earlier: DateTime<Utc>) -> f64 {
    let delta = later - earlier;
    match delta.num_microseconds() {
        Some(us) => us as f64 / 60_000_000.0,
        None => delta.num_milliseconds() as f64 / 60_000.0,
    }
}
