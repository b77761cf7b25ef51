//! Test harness for isolated test execution.
//!
//! The `TestHarness` wires a `Screener` to JSON stores and an upload
//! directory inside a temporary directory, so every test sees fresh state
//! and can inspect exactly what was written to disk.

#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use serde_json::Value;
use tempfile::TempDir;

use screener::{
    CandidateRecord, DocumentStorage, JsonCandidateStore, JsonRequirementsStore, Screener,
    ScreeningPipeline,
};

pub struct TestHarness {
    temp_dir: TempDir,
    pub upload_dir: PathBuf,
    pub requirements_path: PathBuf,
    pub candidates_path: PathBuf,
    pub screener: Screener,
}

impl TestHarness {
    /// A harness with no requirements file.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let upload_dir = temp_dir.path().join("uploads");
        let requirements_path = temp_dir.path().join("requirements.json");
        let candidates_path = temp_dir.path().join("candidates.json");

        let screener = Screener::new(
            ScreeningPipeline::new(),
            Arc::new(JsonRequirementsStore::new(&requirements_path)),
            Arc::new(JsonCandidateStore::new(&candidates_path)),
            DocumentStorage::new(&upload_dir),
        );

        Self {
            temp_dir,
            upload_dir,
            requirements_path,
            candidates_path,
            screener,
        }
    }

    pub fn with_requirements(requirements: Value) -> Self {
        let harness = Self::new();
        harness.write_requirements(&requirements);
        harness
    }

    pub fn write_requirements(&self, requirements: &Value) {
        std::fs::write(
            &self.requirements_path,
            serde_json::to_string_pretty(requirements).unwrap(),
        )
        .expect("Failed to write requirements");
    }

    pub fn upload(&self, filename: &str, content: &[u8]) -> screener::Result<CandidateRecord> {
        self.screener.evaluate_upload(filename, content)
    }

    /// Raw records as persisted; empty when the collection file does not exist.
    pub fn stored_candidates(&self) -> Vec<Value> {
        match std::fs::read_to_string(&self.candidates_path) {
            Ok(content) => serde_json::from_str(&content).expect("candidates.json is not JSON"),
            Err(_) => vec![],
        }
    }

    /// Sorted names of the files in the upload directory.
    pub fn uploaded_files(&self) -> Vec<String> {
        let mut names: Vec<String> = match std::fs::read_dir(&self.upload_dir) {
            Ok(entries) => entries
                .filter_map(|e| e.ok())
                .map(|e| e.file_name().to_string_lossy().into_owned())
                .collect(),
            Err(_) => vec![],
        };
        names.sort();
        names
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}
