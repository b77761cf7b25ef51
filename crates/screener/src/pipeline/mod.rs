pub mod context;
pub mod error;
pub mod runner;

pub use context::ScreeningContext;
pub use error::PipelineError;
pub use runner::ScreeningPipeline;
