use std::sync::Arc;

use screener::Screener;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub screener: Arc<Screener>,
}
