use std::path::PathBuf;
use thiserror::Error;

use crate::pipeline::PipelineError;

#[derive(Error, Debug)]
pub enum ScreenerError {
    #[error("Unsupported document format: {0}")]
    UnsupportedFormat(String),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Pipeline error: {0}")]
    Pipeline(#[from] PipelineError),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read requirements file '{path}': {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse requirements JSON: {0}")]
    ParseJson(#[from] serde_json::Error),

    #[error("Requirements validation failed: {message}")]
    Validation { message: String },

    #[error("Schema validation failed: {errors}")]
    SchemaValidation { errors: String },

    #[error("No requirements configured")]
    Missing,
}

#[derive(Error, Debug)]
pub enum ProcessError {
    #[error("Failed to read document '{path}': {source}")]
    ReadDocument {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to process PDF: {0}")]
    PdfProcessing(String),

    #[error("Failed to process DOCX: {0}")]
    DocxProcessing(String),
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to read '{path}': {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write '{path}': {source}")]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to create directory '{path}': {source}")]
    CreateDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Collection '{path}' is corrupt: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize collection: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("File already exists: {0}")]
    FileExists(PathBuf),

    #[error("Invalid document name: {0}")]
    InvalidName(String),

    #[error("Store lock poisoned")]
    LockPoisoned,
}

pub type Result<T> = std::result::Result<T, ScreenerError>;
