use std::path::PathBuf;

use crate::candidate::CandidateRecord;
use crate::contact::ContactInfo;
use crate::processor::ExtractedText;
use crate::scoring::Status;

use super::error::PipelineError;

pub struct ScreeningContext {
    // Input
    pub document_path: PathBuf,
    pub resume_filename: String,

    // Step 1 result; every later step refuses to run while this is None
    pub extracted: Option<ExtractedText>,

    // Step 2 result
    pub contact: Option<ContactInfo>,

    // Step 3 results
    pub structure_score: Option<u8>,
    pub content_score: Option<f64>,

    // Step 4 results
    pub final_score: Option<f64>,
    pub status: Option<Status>,
}

impl ScreeningContext {
    pub fn new(document_path: impl Into<PathBuf>) -> Self {
        let document_path = document_path.into();
        let resume_filename = document_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        Self {
            document_path,
            resume_filename,
            extracted: None,
            contact: None,
            structure_score: None,
            content_score: None,
            final_score: None,
            status: None,
        }
    }

    pub fn text(&self) -> Result<&ExtractedText, PipelineError> {
        self.extracted.as_ref().ok_or(PipelineError::TextNotExtracted)
    }

    /// Assembles the candidate record once every step has filled its slot.
    pub fn into_record(self, threshold: f64) -> Result<CandidateRecord, PipelineError> {
        if self.extracted.is_none() {
            return Err(PipelineError::TextNotExtracted);
        }

        Ok(CandidateRecord {
            contact: self
                .contact
                .ok_or(PipelineError::StepSkipped("extract_contact"))?,
            content_score: self.content_score.ok_or(PipelineError::StepSkipped("score"))?,
            structure_score: self
                .structure_score
                .ok_or(PipelineError::StepSkipped("score"))?,
            final_score: self.final_score.ok_or(PipelineError::StepSkipped("decide"))?,
            threshold,
            status: self.status.ok_or(PipelineError::StepSkipped("decide"))?,
            resume_filename: self.resume_filename,
        })
    }
}
