//! File-backed stores holding whole JSON documents.
//!
//! Every mutation rewrites the file through a temporary sibling and a rename,
//! so readers never observe a half-written collection.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde::Serialize;
use tracing::warn;

use crate::candidate::CandidateRecord;
use crate::config::{load_requirements, Requirements};
use crate::error::{ConfigError, StoreError};
use crate::sanitize;

use super::{CandidateStore, RequirementsStore};

/// Pretty-prints `value` with four-space indentation and atomically replaces
/// `path` with it.
pub(crate) fn write_json_atomic<T: Serialize + ?Sized>(
    path: &Path,
    value: &T,
) -> Result<(), StoreError> {
    let mut buffer = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    value
        .serialize(&mut serializer)
        .map_err(StoreError::Serialize)?;

    let directory = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    if !directory.exists() {
        std::fs::create_dir_all(&directory).map_err(|e| StoreError::CreateDirectory {
            path: directory.clone(),
            source: e,
        })?;
    }

    let write_err = |e: std::io::Error| StoreError::WriteFile {
        path: path.to_path_buf(),
        source: e,
    };

    let mut temp = tempfile::NamedTempFile::new_in(&directory).map_err(write_err)?;
    temp.write_all(&buffer).map_err(write_err)?;
    temp.persist(path).map_err(|e| write_err(e.error))?;

    Ok(())
}

pub struct JsonRequirementsStore {
    path: PathBuf,
}

impl JsonRequirementsStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RequirementsStore for JsonRequirementsStore {
    fn load(&self) -> Result<Requirements, ConfigError> {
        load_requirements(&self.path)
    }

    fn save(&self, requirements: &Requirements) -> Result<(), StoreError> {
        write_json_atomic(&self.path, requirements)
    }
}

/// Candidate collection kept as one JSON array.
///
/// Read-modify-write cycles are serialized by an in-process lock; separate
/// processes writing the same file are not coordinated.
pub struct JsonCandidateStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonCandidateStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// A missing file is an empty collection; anything unparsable is corrupt.
    fn read_all(&self) -> Result<Vec<CandidateRecord>, StoreError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(StoreError::ReadFile {
                    path: self.path.clone(),
                    source: e,
                })
            }
        };

        serde_json::from_str(&content).map_err(|e| StoreError::Corrupt {
            path: self.path.clone(),
            source: e,
        })
    }
}

impl CandidateStore for JsonCandidateStore {
    fn list(&self) -> Vec<CandidateRecord> {
        match self.read_all() {
            Ok(records) => records,
            Err(e) => {
                warn!(
                    "Candidate store {} unreadable, listing as empty: {}",
                    sanitize::redact_path(&self.path),
                    e
                );
                Vec::new()
            }
        }
    }

    fn append(&self, record: CandidateRecord) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().map_err(|_| StoreError::LockPoisoned)?;

        let mut records = self.read_all()?;
        records.push(record);
        write_json_atomic(&self.path, &records)
    }

    fn delete_by_contact(&self, email: &str, phone: &str) -> Result<usize, StoreError> {
        let _guard = self.write_lock.lock().map_err(|_| StoreError::LockPoisoned)?;

        let mut records = self.read_all()?;
        let before = records.len();
        records.retain(|r| !r.matches_contact(email, phone));
        let removed = before - records.len();

        if removed > 0 {
            write_json_atomic(&self.path, &records)?;
        }
        Ok(removed)
    }
}
