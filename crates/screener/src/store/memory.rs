//! In-memory stores for tests and embedding.

use std::sync::Mutex;

use crate::candidate::CandidateRecord;
use crate::config::Requirements;
use crate::error::{ConfigError, StoreError};

use super::{CandidateStore, RequirementsStore};

#[derive(Default)]
pub struct MemoryRequirementsStore {
    requirements: Mutex<Option<Requirements>>,
}

impl MemoryRequirementsStore {
    pub fn new(requirements: Option<Requirements>) -> Self {
        Self {
            requirements: Mutex::new(requirements),
        }
    }
}

impl RequirementsStore for MemoryRequirementsStore {
    fn load(&self) -> Result<Requirements, ConfigError> {
        let guard = self
            .requirements
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        guard.clone().ok_or(ConfigError::Missing)
    }

    fn save(&self, requirements: &Requirements) -> Result<(), StoreError> {
        let mut guard = self
            .requirements
            .lock()
            .map_err(|_| StoreError::LockPoisoned)?;
        *guard = Some(requirements.clone());
        Ok(())
    }
}

#[derive(Default)]
pub struct MemoryCandidateStore {
    records: Mutex<Vec<CandidateRecord>>,
}

impl MemoryCandidateStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CandidateStore for MemoryCandidateStore {
    fn list(&self) -> Vec<CandidateRecord> {
        self.records
            .lock()
            .map(|records| records.clone())
            .unwrap_or_default()
    }

    fn append(&self, record: CandidateRecord) -> Result<(), StoreError> {
        let mut records = self.records.lock().map_err(|_| StoreError::LockPoisoned)?;
        records.push(record);
        Ok(())
    }

    fn delete_by_contact(&self, email: &str, phone: &str) -> Result<usize, StoreError> {
        let mut records = self.records.lock().map_err(|_| StoreError::LockPoisoned)?;
        let before = records.len();
        records.retain(|r| !r.matches_contact(email, phone));
        Ok(before - records.len())
    }
}
