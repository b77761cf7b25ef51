use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Document processing failed: {0}")]
    Processing(#[from] crate::error::ProcessError),

    #[error("Requirements could not be loaded: {0}")]
    Config(#[from] crate::error::ConfigError),

    #[error("Text has not been extracted from the document yet")]
    TextNotExtracted,

    #[error("Pipeline step '{0}' has not run")]
    StepSkipped(&'static str),
}
