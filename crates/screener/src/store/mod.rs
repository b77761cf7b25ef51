//! Persistence seams for requirements, candidate records and uploaded files.
//!
//! The scoring core only sees the traits; JSON files are the default backing
//! and can be replaced by any implementation with the same contract.

pub mod documents;
pub mod json;
pub mod memory;

use crate::candidate::CandidateRecord;
use crate::config::Requirements;
use crate::error::{ConfigError, StoreError};

pub use documents::DocumentStorage;
pub use json::{JsonCandidateStore, JsonRequirementsStore};
pub use memory::{MemoryCandidateStore, MemoryRequirementsStore};

pub trait RequirementsStore: Send + Sync {
    /// Loads and validates the current requirements. Never falls back to an
    /// empty configuration.
    fn load(&self) -> Result<Requirements, ConfigError>;

    fn save(&self, requirements: &Requirements) -> Result<(), StoreError>;
}

pub trait CandidateStore: Send + Sync {
    /// All records in insertion order; an unreadable store lists as empty.
    fn list(&self) -> Vec<CandidateRecord>;

    fn append(&self, record: CandidateRecord) -> Result<(), StoreError>;

    /// Removes every record with this exact `(email, phone)` pair and returns
    /// how many were removed.
    fn delete_by_contact(&self, email: &str, phone: &str) -> Result<usize, StoreError>;
}
