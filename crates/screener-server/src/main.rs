mod config;
mod errors;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use screener::{
    DocumentStorage, JsonCandidateStore, JsonRequirementsStore, Screener, ScreeningPipeline,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::ServerConfig;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = ServerConfig::from_env()?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "screener={level},screener_server={level},tower_http={level}",
                level = &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting resume screener v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Data directory {}, uploads in {}",
        config.data_dir.display(),
        config.upload_dir.display()
    );

    let screener = Screener::new(
        ScreeningPipeline::new(),
        Arc::new(JsonRequirementsStore::new(&config.requirements_path)),
        Arc::new(JsonCandidateStore::new(&config.candidates_path)),
        DocumentStorage::new(&config.upload_dir),
    );

    let state = AppState {
        screener: Arc::new(screener),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
