use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use screener::{PipelineError, ScreenerError, StoreError};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unprocessable entity: {0}")]
    UnprocessableEntity(String),

    #[error("Requirements unavailable: {0}")]
    Requirements(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<ScreenerError> for AppError {
    fn from(err: ScreenerError) -> Self {
        match err {
            ScreenerError::UnsupportedFormat(_) => {
                AppError::Validation("Only PDF/DOCX allowed".to_string())
            }
            // only reached from a submitted requirements document
            ScreenerError::Config(e) => AppError::Validation(e.to_string()),
            ScreenerError::Pipeline(PipelineError::Config(e)) => AppError::Requirements(e.to_string()),
            ScreenerError::Pipeline(PipelineError::Processing(e)) => {
                AppError::UnprocessableEntity(e.to_string())
            }
            ScreenerError::Store(StoreError::InvalidName(name)) => {
                AppError::Validation(format!("Invalid file name: {name}"))
            }
            other => AppError::Internal(other.into()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::UnprocessableEntity(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "UNPROCESSABLE_ENTITY",
                msg.clone(),
            ),
            AppError::Requirements(msg) => {
                tracing::error!("Requirements load failed: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "REQUIREMENTS_ERROR",
                    "Requirements load failed".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
