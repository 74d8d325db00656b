use crate::errors::{AppError, AppResult};
use serde::Serialize;

/// Every duration a press can carry, in minutes.
pub const DURATION_SET: [u32; 5] = [5, 10, 15, 20, 25];

/// One of the five frontend buttons. The button is the only way a
/// duration value enters the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Button {
    Five,       // 0
    Ten,        // 1
    Fifteen,    // 2
    Twenty,     // 3
    TwentyFive, // 4
}

impl Button {
    pub const ALL: [Button; 5] = [
        Button::Five,
        Button::Ten,
        Button::Fifteen,
        Button::Twenty,
        Button::TwentyFive,
    ];

    /// Identifier used by the frontend (`data-button` attribute).
    pub fn id(&self) -> u8 {
        match self {
            Button::Five => 0,
            Button::Ten => 1,
            Button::Fifteen => 2,
            Button::Twenty => 3,
            Button::TwentyFive => 4,
        }
    }

    pub fn minutes(&self) -> u32 {
        match self {
            Button::Five => 5,
            Button::Ten => 10,
            Button::Fifteen => 15,
            Button::Twenty => 20,
            Button::TwentyFive => 25,
        }
    }

    /// Convert transport string → enum. Only the exact decimal ids match.
    pub fn from_id(s: &str) -> Option<Self> {
        match s {
            "0" => Some(Button::Five),
            "1" => Some(Button::Ten),
            "2" => Some(Button::Fifteen),
            "3" => Some(Button::Twenty),
            "4" => Some(Button::TwentyFive),
            _ => None,
        }
    }

    pub fn from_index(n: i64) -> Option<Self> {
        Button::ALL.into_iter().find(|b| i64::from(b.id()) == n)
    }
}

/// Check the button table against the identifier space the frontend uses:
/// ids `0..N` in order, each round-tripping through `from_id`, with distinct
/// durations taken from [`DURATION_SET`].
pub fn validate_table() -> AppResult<()> {
    let mut seen = Vec::with_capacity(Button::ALL.len());

    for (index, button) in Button::ALL.iter().enumerate() {
        if usize::from(button.id()) != index {
            return Err(AppError::ButtonTable(format!(
                "{button:?} has id {} at position {index}",
                button.id()
            )));
        }

        if Button::from_id(&button.id().to_string()) != Some(*button) {
            return Err(AppError::ButtonTable(format!(
                "id {} does not resolve back to {button:?}",
                button.id()
            )));
        }

        let minutes = button.minutes();
        if minutes == 0 || !DURATION_SET.contains(&minutes) {
            return Err(AppError::ButtonTable(format!(
                "{button:?} maps to unsupported duration {minutes}"
            )));
        }

        if seen.contains(&minutes) {
            return Err(AppError::ButtonTable(format!(
                "duration {minutes} is mapped twice"
            )));
        }
        seen.push(minutes);
    }

    Ok(())
}
