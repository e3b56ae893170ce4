//! File-backed session storage
//!
//! Session state is a flat JSON object of string values. Every write
//! rewrites the whole file through a temporary sibling and an atomic rename,
//! so a crash mid-write leaves either the old or the new state on disk.

use std::collections::BTreeMap;
use std::io::Write as _;
use std::path::{Path, PathBuf};

use cargas_core::SessionStorage;
use cargas_domain::{CargasError, Result};
use parking_lot::Mutex;
use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::debug;

type SessionMap = BTreeMap<String, String>;

/// Failures while reading or rewriting the session file.
#[derive(Debug, Error)]
pub enum FileStorageError {
    #[error("session file I/O failed at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("session file {path} is not a JSON object of strings: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to replace session file {path}: {source}")]
    Persist {
        path: PathBuf,
        #[source]
        source: tempfile::PersistError,
    },
}

impl From<FileStorageError> for CargasError {
    fn from(err: FileStorageError) -> Self {
        CargasError::Storage(err.to_string())
    }
}

/// [`SessionStorage`] persisted as a JSON file.
#[derive(Debug)]
pub struct FileSessionStorage {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileSessionStorage {
    /// The file is created on first write; a missing file reads as empty.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), write_lock: Mutex::new(()) }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_map(&self) -> std::result::Result<SessionMap, FileStorageError> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(SessionMap::new()),
            Err(source) => return Err(FileStorageError::Io { path: self.path.clone(), source }),
        };

        if contents.trim().is_empty() {
            return Ok(SessionMap::new());
        }

        serde_json::from_str(&contents)
            .map_err(|source| FileStorageError::Corrupt { path: self.path.clone(), source })
    }

    fn write_map(&self, values: &SessionMap) -> std::result::Result<(), FileStorageError> {
        let io_err = |source| FileStorageError::Io { path: self.path.clone(), source };

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        std::fs::create_dir_all(&dir).map_err(io_err)?;

        let json = serde_json::to_vec_pretty(values)
            .map_err(|source| FileStorageError::Corrupt { path: self.path.clone(), source })?;

        let mut temp = NamedTempFile::new_in(&dir).map_err(io_err)?;
        temp.write_all(&json).map_err(io_err)?;
        temp.as_file().sync_all().map_err(io_err)?;
        temp.persist(&self.path)
            .map_err(|source| FileStorageError::Persist { path: self.path.clone(), source })?;

        debug!(path = %self.path.display(), keys = values.len(), "session file written");
        Ok(())
    }

    fn update(&self, change: impl FnOnce(&mut SessionMap) -> bool) -> Result<()> {
        let _guard = self.write_lock.lock();
        let mut values = self.read_map()?;
        if change(&mut values) {
            self.write_map(&values)?;
        }
        Ok(())
    }
}

impl SessionStorage for FileSessionStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_map()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.update(|values| {
            values.insert(key.to_string(), value.to_string());
            true
        })
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.update(|values| values.remove(key).is_some())
    }

    fn remove_many(&self, keys: &[&str]) -> Result<()> {
        self.update(|values| {
            let before = values.len();
            for key in keys {
                values.remove(*key);
            }
            values.len() != before
        })
    }
}
