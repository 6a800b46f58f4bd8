//! Error handling for the PaddyTrack backend
//!
//! Errors render as `{"error": "<message>"}`; internal causes are logged
//! server-side and never sent to the client.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use shared::{SynthesisError, MISSING_PARAMETERS_MESSAGE};
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Validation errors
    #[error("{}", MISSING_PARAMETERS_MESSAGE)]
    MissingParameters,

    #[error("{0}")]
    InvalidInput(String),

    // Internal errors
    #[error("Internal server error during analysis.")]
    Internal(#[from] anyhow::Error),
}

/// Error response structure
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::MissingParameters | AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<SynthesisError> for AppError {
    fn from(err: SynthesisError) -> Self {
        match err {
            SynthesisError::InvalidDate(message) => AppError::InvalidInput(message.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Log the error for debugging
        match &self {
            AppError::Internal(cause) => tracing::error!("Analysis failed: {:?}", cause),
            _ => tracing::warn!("Rejected request: {}", self),
        }

        let body = ErrorResponse {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// Result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;
