pub mod health;
pub mod requirements;
pub mod screening;
pub mod uploads;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::errors::AppError;
use crate::state::AppState;

/// Upper bound for a request body, uploads included.
const MAX_UPLOAD_BYTES: usize = 16 * 1024 * 1024;

/// Runs synchronous screener work (document parsing, JSON file I/O) off the
/// async executor.
pub(crate) async fn run_blocking<T, F>(work: F) -> Result<T, AppError>
where
    F: FnOnce() -> Result<T, AppError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(work)
        .await
        .map_err(|e| AppError::Internal(e.into()))?
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/upload", post(screening::upload))
        .route("/api/candidates", get(screening::list_candidates))
        .route("/api/delete_candidate", post(screening::delete_candidate))
        .route(
            "/api/requirements",
            get(requirements::get_requirements).post(requirements::update_requirements),
        )
        .route("/uploads/:filename", get(uploads::download))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .with_state(state)
}
