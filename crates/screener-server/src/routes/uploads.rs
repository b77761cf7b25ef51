use std::path::Path as FsPath;

use axum::{
    extract::{Path, State},
    http::header,
    response::{IntoResponse, Response},
};
use screener::{DocumentFormat, ScreenerError};

use crate::errors::AppError;
use crate::state::AppState;

fn content_type(filename: &str) -> &'static str {
    match DocumentFormat::from_path(FsPath::new(filename)) {
        Some(DocumentFormat::Pdf) => "application/pdf",
        Some(DocumentFormat::Docx) => {
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
        }
        None => "application/octet-stream",
    }
}

/// GET /uploads/:filename
/// Sends a stored resume as an attachment.
pub async fn download(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> Result<Response, AppError> {
    let path = state
        .screener
        .document_path(&filename)
        .map_err(ScreenerError::from)?
        .ok_or_else(|| AppError::NotFound(format!("Document '{filename}' not found")))?;

    let bytes = tokio::fs::read(&path)
        .await
        .map_err(|e| AppError::Internal(e.into()))?;

    let headers = [
        (header::CONTENT_TYPE, content_type(&filename).to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{filename}\""),
        ),
    ];

    Ok((headers, bytes).into_response())
}
