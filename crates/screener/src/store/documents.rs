use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::StoreError;
use crate::sanitize::secure_filename;

/// Uploaded resumes on disk.
///
/// Candidate records refer to these files by name; the files outlive the
/// records and are never overwritten by a later upload.
pub struct DocumentStorage {
    upload_directory: PathBuf,
}

impl DocumentStorage {
    pub fn new<P: AsRef<Path>>(upload_directory: P) -> Self {
        Self {
            upload_directory: upload_directory.as_ref().to_path_buf(),
        }
    }

    pub fn upload_directory(&self) -> &Path {
        &self.upload_directory
    }

    /// Saves `content` under a sanitized version of `original_filename`.
    ///
    /// Returns the stored file name (which may carry a `_N` suffix when the
    /// name was taken) and its full path.
    pub fn store(
        &self,
        original_filename: &str,
        content: &[u8],
    ) -> Result<(String, PathBuf), StoreError> {
        let filename = secure_filename(original_filename);
        if filename.is_empty() {
            return Err(StoreError::InvalidName(original_filename.to_string()));
        }

        self.ensure_directory(&self.upload_directory)?;
        self.store_with_atomic_creation(&filename, content)
    }

    /// Maps a stored file name back to its path.
    ///
    /// Only plain names produced by [`DocumentStorage::store`] are accepted, so
    /// a request cannot walk out of the upload directory.
    pub fn resolve(&self, filename: &str) -> Result<PathBuf, StoreError> {
        if filename.is_empty() || secure_filename(filename) != filename {
            return Err(StoreError::InvalidName(filename.to_string()));
        }
        Ok(self.upload_directory.join(filename))
    }

    /// Removes a stored document. Used to drop a document that failed to parse.
    pub fn remove(&self, path: &Path) -> Result<(), StoreError> {
        std::fs::remove_file(path).map_err(|e| StoreError::WriteFile {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Creates the file with `create_new` so an existing document is never
    /// replaced; taken names get numbered variants.
    fn store_with_atomic_creation(
        &self,
        filename: &str,
        content: &[u8],
    ) -> Result<(String, PathBuf), StoreError> {
        let (base, ext) = if let Some(dot_pos) = filename.rfind('.') {
            (&filename[..dot_pos], Some(&filename[dot_pos..]))
        } else {
            (filename, None)
        };

        for counter in 1..=1000 {
            let try_filename = if counter == 1 {
                filename.to_string()
            } else {
                match ext {
                    Some(ext) => format!("{}_{}{}", base, counter, ext),
                    None => format!("{}_{}", base, counter),
                }
            };

            let try_path = self.upload_directory.join(&try_filename);

            match std::fs::OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(&try_path)
            {
                Ok(mut file) => {
                    file.write_all(content)
                        .map_err(|e| StoreError::WriteFile {
                            path: try_path.clone(),
                            source: e,
                        })?;
                    return Ok((try_filename, try_path));
                }
                Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => continue,
                Err(e) => {
                    return Err(StoreError::WriteFile {
                        path: try_path,
                        source: e,
                    });
                }
            }
        }

        Err(StoreError::FileExists(self.upload_directory.join(filename)))
    }

    fn ensure_directory(&self, path: &Path) -> Result<(), StoreError> {
        if !path.exists() {
            std::fs::create_dir_all(path).map_err(|e| StoreError::CreateDirectory {
                path: path.to_path_buf(),
                source: e,
            })?;
        }
        Ok(())
    }
}
