use crate::db::pool::DbPool;
use crate::db::queries::{insert_press, load_all};
use crate::errors::{AppError, AppResult};
use crate::models::button::Button;
use crate::models::press::{NewPress, PressEvent};
use tracing::debug;

/// High-level logic for recording a press.
pub struct PressLogic;

impl PressLogic {
    /// Resolve a transport-level button id. Unknown ids never reach the store.
    pub fn resolve(button_id: &str) -> AppResult<Button> {
        Button::from_id(button_id).ok_or_else(|| AppError::UnknownButton(button_id.to_string()))
    }

    /// Append one press stamped with the server time at insert.
    pub async fn record(
        pool: &DbPool,
        button: Button,
        location: Option<String>,
    ) -> AppResult<PressEvent> {
        let stored = pool
            .run(move |conn| insert_press(conn, &NewPress::now(button, location)))
            .await?;

        debug!(
            "Recorded press #{} ({} min) at {:?}",
            stored.id, stored.duration_minutes, stored.location
        );
        Ok(stored)
    }

    /// Every stored press, oldest first.
    pub async fn all(pool: &DbPool) -> AppResult<Vec<PressEvent>> {
        pool.run(load_all).await
    }
}
