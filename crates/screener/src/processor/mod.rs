pub mod docx;
pub mod pdf;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ProcessError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    Pdf,
    Docx,
}

impl DocumentFormat {
    /// Case-insensitive lookup; anything but `pdf` and `docx` is unsupported.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "pdf" => Some(DocumentFormat::Pdf),
            "docx" => Some(DocumentFormat::Docx),
            _ => None,
        }
    }

    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(Self::from_extension)
    }
}

/// Plain text pulled out of a document, tagged with the format it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedText {
    pub text: String,
    /// `None` when the extension was not recognized and no parsing happened.
    pub format: Option<DocumentFormat>,
}

impl ExtractedText {
    pub fn unsupported() -> Self {
        Self {
            text: String::new(),
            format: None,
        }
    }
}

pub trait DocumentProcessor: Send + Sync {
    fn extract(&self, path: &Path) -> Result<String, ProcessError>;
    fn supports(&self, format: DocumentFormat) -> bool;
}

pub struct ProcessorRegistry {
    processors: Vec<Box<dyn DocumentProcessor>>,
}

impl ProcessorRegistry {
    pub fn new() -> Self {
        let processors: Vec<Box<dyn DocumentProcessor>> = vec![
            Box::new(pdf::PdfProcessor::new()),
            Box::new(docx::DocxProcessor::new()),
        ];

        Self { processors }
    }

    /// Extracts the document's text.
    ///
    /// An unrecognized extension, or a format no registered processor
    /// handles, yields empty text rather than an error; a recognized
    /// document that cannot be parsed is always an error.
    pub fn extract(&self, path: &Path) -> Result<ExtractedText, ProcessError> {
        let Some(format) = DocumentFormat::from_path(path) else {
            return Ok(ExtractedText::unsupported());
        };

        for processor in &self.processors {
            if processor.supports(format) {
                let text = processor.extract(path)?;
                return Ok(ExtractedText {
                    text,
                    format: Some(format),
                });
            }
        }

        Ok(ExtractedText::unsupported())
    }
}

impl Default for ProcessorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience wrapper around a default [`ProcessorRegistry`].
pub fn extract_text(path: &Path) -> Result<ExtractedText, ProcessError> {
    ProcessorRegistry::new().extract(path)
}
