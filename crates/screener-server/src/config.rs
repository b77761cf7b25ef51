use std::path::PathBuf;

use anyhow::{Context, Result};

/// Server settings loaded from environment variables (and `.env` if present).
/// Every setting has a default; only malformed values are errors.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub data_dir: PathBuf,
    pub upload_dir: PathBuf,
    pub requirements_path: PathBuf,
    pub candidates_path: PathBuf,
    pub port: u16,
    pub rust_log: String,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let data_dir = PathBuf::from(lookup("SCREENER_DATA_DIR").unwrap_or_else(|| ".".to_string()));
        let path_or = |key: &str, default: &str| {
            lookup(key)
                .map(PathBuf::from)
                .unwrap_or_else(|| data_dir.join(default))
        };

        Ok(ServerConfig {
            upload_dir: path_or("SCREENER_UPLOAD_DIR", "uploads"),
            requirements_path: path_or("SCREENER_REQUIREMENTS_PATH", "requirements.json"),
            candidates_path: path_or("SCREENER_CANDIDATES_PATH", "candidates.json"),
            port: lookup("PORT")
                .unwrap_or_else(|| "5000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            data_dir,
        })
    }
}
