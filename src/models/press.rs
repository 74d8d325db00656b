use super::button::Button;
use chrono::{DateTime, SubsecRound, Utc};
use serde::Serialize;

/// Location stored when the client does not send one.
pub const DEFAULT_LOCATION: &str = "unknown";

/// One stored button press. Rows are never updated or deleted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PressEvent {
    pub id: i64,                    // ⇔ presses.id
    pub duration_minutes: u32,      // ⇔ presses.duration_minutes (5..25)
    pub location: String,           // ⇔ presses.location
    pub recorded_at: DateTime<Utc>, // ⇔ presses.recorded_at (TEXT, UTC)
}

/// A press as it is about to be written: no id yet.
#[derive(Debug, Clone)]
pub struct NewPress {
    pub button: Button,
    pub location: String,
    pub recorded_at: DateTime<Utc>,
}

impl NewPress {
    /// Build a press stamped with the current server time.
    pub fn now(button: Button, location: Option<String>) -> Self {
        Self::at(button, location, Utc::now())
    }

    /// The timestamp is cut to microseconds, the precision the store keeps.
    pub fn at(button: Button, location: Option<String>, recorded_at: DateTime<Utc>) -> Self {
        Self {
            button,
            location: location.unwrap_or_else(|| DEFAULT_LOCATION.to_string()),
            recorded_at: recorded_at.trunc_subsecs(6),
        }
    }
}

/// The two columns the estimator reads.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub duration_minutes: u32,
    pub recorded_at: DateTime<Utc>,
}
