use std::path::Path;

use crate::error::ProcessError;
use crate::processor::{DocumentFormat, DocumentProcessor};

pub struct PdfProcessor;

impl PdfProcessor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PdfProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentProcessor for PdfProcessor {
    fn extract(&self, path: &Path) -> Result<String, ProcessError> {
        let pdf_bytes = std::fs::read(path).map_err(|e| ProcessError::ReadDocument {
            path: path.to_path_buf(),
            source: e,
        })?;

        let doc = lopdf::Document::load_mem(&pdf_bytes)
            .map_err(|e| ProcessError::PdfProcessing(format!("Failed to load PDF: {}", e)))?;

        extract_text_from_pdf(&doc)
    }

    fn supports(&self, format: DocumentFormat) -> bool {
        matches!(format, DocumentFormat::Pdf)
    }
}

/// Concatenates each page's text in page order, exactly as lopdf lays it out.
fn extract_text_from_pdf(doc: &lopdf::Document) -> Result<String, ProcessError> {
    let mut text = String::new();

    // get_pages is keyed by page number, so iteration is already in page order
    for page_num in doc.get_pages().into_keys() {
        let page_text = doc.extract_text(&[page_num]).map_err(|e| {
            ProcessError::PdfProcessing(format!("Failed to extract page {}: {}", page_num, e))
        })?;
        text.push_str(&page_text);
    }

    Ok(text)
}
