use axum::{
    extract::{Multipart, State},
    Json,
};
use screener::CandidateRecord;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::info;

use crate::errors::AppError;
use crate::state::AppState;

use super::run_blocking;

/// Multipart field carrying the resume.
const RESUME_FIELD: &str = "resume";

#[derive(Debug, Deserialize)]
pub struct DeleteCandidateRequest {
    pub email: String,
    pub phone: String,
}

/// POST /api/upload
/// Scores one resume and returns the stored candidate record.
pub async fn upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<CandidateRecord>, AppError> {
    let mut upload = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed upload: {e}")))?
    {
        if field.name() != Some(RESUME_FIELD) {
            continue;
        }
        let file_name = field.file_name().unwrap_or("").to_string();
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")))?;
        upload = Some((file_name, data));
        break;
    }

    let (file_name, data) = upload.ok_or_else(|| AppError::Validation("No file uploaded".to_string()))?;
    if file_name.is_empty() {
        return Err(AppError::Validation("No file selected".to_string()));
    }

    info!("Received {} ({} bytes)", file_name, data.len());

    let screener = state.screener.clone();
    let record = run_blocking(move || Ok(screener.evaluate_upload(&file_name, &data)?)).await?;

    Ok(Json(record))
}

/// GET /api/candidates
pub async fn list_candidates(
    State(state): State<AppState>,
) -> Result<Json<Vec<CandidateRecord>>, AppError> {
    let screener = state.screener.clone();
    let candidates = run_blocking(move || Ok(screener.candidates())).await?;
    Ok(Json(candidates))
}

/// POST /api/delete_candidate
/// Removes every record with the given email and phone.
pub async fn delete_candidate(
    State(state): State<AppState>,
    Json(request): Json<DeleteCandidateRequest>,
) -> Result<Json<Value>, AppError> {
    let screener = state.screener.clone();
    let removed = run_blocking(move || {
        Ok(screener.delete_candidate(&request.email, &request.phone)?)
    })
    .await?;

    Ok(Json(json!({
        "message": "Candidate deleted",
        "removed": removed
    })))
}
