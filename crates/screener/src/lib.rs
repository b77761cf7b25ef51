pub mod candidate;
pub mod config;
pub mod contact;
pub mod error;
pub mod pipeline;
pub mod processor;
pub mod sanitize;
pub mod scoring;
pub mod service;
pub mod store;

#[cfg(test)]
mod testing;

pub use candidate::CandidateRecord;
pub use config::{load_requirements, Keywords, Requirements, SearchMode};
pub use contact::{extract_contact, ContactInfo, FirstLineNameExtractor, NameExtractor};
pub use error::{ConfigError, ProcessError, Result, ScreenerError, StoreError};
pub use pipeline::{PipelineError, ScreeningContext, ScreeningPipeline};
pub use processor::{extract_text, DocumentFormat, ExtractedText, ProcessorRegistry};
pub use scoring::{content_score, final_score, score_document, structure_score, Status};
pub use service::Screener;
pub use store::{
    CandidateStore, DocumentStorage, JsonCandidateStore, JsonRequirementsStore,
    MemoryCandidateStore, MemoryRequirementsStore, RequirementsStore,
};
