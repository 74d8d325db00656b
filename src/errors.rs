//! Unified application error type.
//! Store, core, server and cli modules all return AppError so that a
//! failure travels up to either the HTTP layer or `main` unchanged.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::io;
use thiserror::Error;
use tracing::{error, warn};

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Connection pool error: {0}")]
    Pool(String),

    #[error("Background task failed: {0}")]
    Join(#[from] tokio::task::JoinError),

    // ---------------------------
    // Input
    // ---------------------------
    #[error("Unknown button identifier: {0}")]
    UnknownButton(String),

    #[error("Invalid button table: {0}")]
    ButtonTable(String),

    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("CSV export error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::UnknownButton(id) => {
                warn!("Dropping press with unknown button id {id:?}");
                StatusCode::BAD_REQUEST.into_response()
            }
            other => {
                error!("Request failed: {other}");
                (StatusCode::INTERNAL_SERVER_ERROR, other.to_string()).into_response()
            }
        }
    }
}
