//! File-backed store: one JSON file per key under a root directory

use crate::core::error::{ArcadeError, Result};
use crate::persist::KeyValueStore;
use std::path::{Path, PathBuf};

/// Stores each key as `<root>/<key>.json`.
///
/// All errors are contained here: the typed internals return [`Result`], the
/// trait surface swallows failures per the port contract.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> Result<PathBuf> {
        // Keys are dotted identifiers; anything resembling a path is rejected
        // so a hostile key cannot escape the root directory.
        if key.is_empty() || !key.chars().all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-' || c == '_') {
            return Err(ArcadeError::InvalidKey(key.to_string()));
        }
        Ok(self.root.join(format!("{}.json", key)))
    }

    fn try_read(&self, key: &str) -> Result<String> {
        let path = self.path_for(key)?;
        Ok(std::fs::read_to_string(path)?)
    }

    fn try_write(&self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key)?;
        std::fs::create_dir_all(&self.root)?;
        std::fs::write(path, value)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn read(&self, key: &str) -> Option<String> {
        match self.try_read(key) {
            Ok(raw) => Some(raw),
            Err(e) => {
                tracing::debug!("read of {} fell back to default: {}", key, e);
                None
            }
        }
    }

    fn write(&mut self, key: &str, value: &str) {
        if let Err(e) = self.try_write(key, value) {
            tracing::debug!("dropped write of {}: {}", key, e);
        }
    }
}
