use axum::{extract::State, Json};
use screener::Requirements;
use serde_json::{json, Value};

use crate::errors::AppError;
use crate::state::AppState;

use super::run_blocking;

/// GET /api/requirements
pub async fn get_requirements(
    State(state): State<AppState>,
) -> Result<Json<Requirements>, AppError> {
    let screener = state.screener.clone();
    let requirements = run_blocking(move || {
        screener
            .requirements()
            .map_err(|e| AppError::Requirements(e.to_string()))
    })
    .await?;
    Ok(Json(requirements))
}

/// POST /api/requirements
/// Validates and replaces the requirements document.
pub async fn update_requirements(
    State(state): State<AppState>,
    Json(document): Json<Value>,
) -> Result<Json<Value>, AppError> {
    let screener = state.screener.clone();
    run_blocking(move || Ok(screener.update_requirements(document)?)).await?;

    Ok(Json(json!({ "message": "Requirements updated" })))
}
