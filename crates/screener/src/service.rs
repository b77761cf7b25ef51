use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{info, info_span, warn};

use crate::candidate::CandidateRecord;
use crate::config::{load_requirements_from_value, Requirements};
use crate::error::{Result, ScreenerError, StoreError};
use crate::pipeline::{PipelineError, ScreeningPipeline};
use crate::processor::DocumentFormat;
use crate::sanitize;
use crate::store::{CandidateStore, DocumentStorage, RequirementsStore};

/// The upload flow and the record-keeping operations around it.
pub struct Screener {
    pipeline: ScreeningPipeline,
    requirements: Arc<dyn RequirementsStore>,
    candidates: Arc<dyn CandidateStore>,
    documents: DocumentStorage,
}

impl Screener {
    pub fn new(
        pipeline: ScreeningPipeline,
        requirements: Arc<dyn RequirementsStore>,
        candidates: Arc<dyn CandidateStore>,
        documents: DocumentStorage,
    ) -> Self {
        Self {
            pipeline,
            requirements,
            candidates,
            documents,
        }
    }

    /// Validates, stores, scores and records one uploaded resume.
    ///
    /// The extension is checked and the requirements loaded before anything
    /// touches the disk; the document is saved before its text is read. A
    /// document that fails to parse is removed again and no record is written.
    pub fn evaluate_upload(&self, original_filename: &str, content: &[u8]) -> Result<CandidateRecord> {
        let _span = info_span!("evaluate_upload").entered();

        let secured = sanitize::secure_filename(original_filename);
        if DocumentFormat::from_path(Path::new(&secured)).is_none() {
            return Err(ScreenerError::UnsupportedFormat(secured));
        }

        let requirements = self.requirements.load().map_err(PipelineError::Config)?;

        let (stored_name, stored_path) = self.documents.store(original_filename, content)?;

        let record = match self.pipeline.run(&stored_path, &requirements) {
            Ok(record) => record,
            Err(e) => {
                if let Err(remove_err) = self.documents.remove(&stored_path) {
                    warn!("Failed to remove unparsable upload {}: {}", stored_name, remove_err);
                }
                return Err(e.into());
            }
        };

        self.candidates.append(record.clone())?;

        info!(
            "Evaluated {} -> {} ({})",
            stored_name, record.final_score, record.status
        );

        Ok(record)
    }

    pub fn candidates(&self) -> Vec<CandidateRecord> {
        self.candidates.list()
    }

    pub fn delete_candidate(&self, email: &str, phone: &str) -> Result<usize> {
        let removed = self.candidates.delete_by_contact(email, phone)?;
        info!("Deleted {} candidate record(s)", removed);
        Ok(removed)
    }

    pub fn requirements(&self) -> Result<Requirements> {
        Ok(self.requirements.load()?)
    }

    /// Validates a raw requirements document and replaces the stored one.
    pub fn update_requirements(&self, document: serde_json::Value) -> Result<Requirements> {
        let requirements = load_requirements_from_value(document)?;
        self.requirements.save(&requirements)?;
        info!(
            "Requirements updated: {} keyword(s), mode {}, threshold {}",
            requirements.requirements.len(),
            requirements.search_mode,
            requirements.threshold
        );
        Ok(requirements)
    }

    /// Path of a stored document, if the name is valid and the file exists.
    pub fn document_path(&self, filename: &str) -> std::result::Result<Option<PathBuf>, StoreError> {
        let path = self.documents.resolve(filename)?;
        Ok(path.is_file().then_some(path))
    }
}
