use super::state::AppState;
use crate::core::calculator::weighted::Estimate;
use crate::core::estimate::EstimateLogic;
use crate::core::press::PressLogic;
use crate::errors::{AppError, AppResult};
use crate::models::button::Button;
use crate::models::press::PressEvent;
use axum::{
    Json,
    extract::{Path, State},
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The frontend sends `buttonId` as a string; numeric ids are accepted too.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ButtonIdInput {
    Text(String),
    Number(i64),
}

impl ButtonIdInput {
    pub fn resolve(&self) -> AppResult<Button> {
        match self {
            ButtonIdInput::Text(s) => PressLogic::resolve(s),
            ButtonIdInput::Number(n) => {
                Button::from_index(*n).ok_or_else(|| AppError::UnknownButton(n.to_string()))
            }
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct PressPayload {
    #[serde(rename = "buttonId")]
    pub button_id: Option<ButtonIdInput>,
    #[serde(default)]
    pub location: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PressAck {
    pub ok: bool,
}

#[derive(Debug, Serialize)]
pub struct DumpResponse {
    pub rows: Vec<PressEvent>,
}

pub async fn press_handler(
    State(state): State<AppState>,
    Json(payload): Json<PressPayload>,
) -> AppResult<Json<PressAck>> {
    let button = match &payload.button_id {
        Some(id) => id.resolve()?,
        None => return Err(AppError::UnknownButton("<missing>".into())),
    };

    PressLogic::record(&state.pool, button, payload.location).await?;

    Ok(Json(PressAck { ok: true }))
}

pub async fn dump_handler(State(state): State<AppState>) -> AppResult<Json<DumpResponse>> {
    let rows = PressLogic::all(&state.pool).await?;
    Ok(Json(DumpResponse { rows }))
}

pub async fn time_handler(
    State(state): State<AppState>,
    Path(location): Path<String>,
) -> AppResult<Json<Estimate>> {
    let est = EstimateLogic::for_location(&state.pool, &location).await?;
    Ok(Json(est))
}

pub async fn times_handler(
    State(state): State<AppState>,
) -> AppResult<Json<BTreeMap<String, Estimate>>> {
    let all = EstimateLogic::for_all(&state.pool).await?;
    Ok(Json(all))
}
