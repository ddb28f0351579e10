//! Persistence adapter: one fixed key, whole collection, durable backend.
//!
//! [`KeyValueStore`] is the capability everything here is written against:
//! get and set on string keys, nothing else. Two backends ship:
//! [`FileStore`] for real use and [`MemoryStore`] for tests. Both take an
//! optional byte capacity, and a set that would exceed it fails with
//! [`StorageError::QuotaExceeded`] before any byte is written.
//!
//! [`BookmarkVault`] owns the fixed key and the JSON layout. The entire
//! collection is rewritten on every save (no deltas), and load never fails:
//! a missing slot is a first run, a corrupt one is logged and treated as
//! empty. Availability wins over preservation on the read path; the write
//! path never clobbers prior state on failure.

use crate::types::TravelBookmark;
use log::{debug, error, warn};
use std::collections::HashMap;
use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;
use thiserror::Error;

/// Slot the bookmark collection persists under. The `_v1` suffix is the only
/// schema version marker; a breaking layout change means a new key.
pub const BOOKMARKS_KEY: &str = "wandermark_bookmarks_v1";

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error(
        "storage quota exceeded ({attempted} bytes against a {capacity} byte limit); \
         remove bookmarks or large images to free space"
    )]
    QuotaExceeded { attempted: usize, capacity: usize },
}

/// Minimal key-value capability the persistence layer is written against.
pub trait KeyValueStore {
    /// Value stored under `key`, or `None` if the slot was never written.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace the value under `key`. All-or-nothing: after an error the
    /// previously stored value is still intact.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// File-backed store: one `<key>.json` file per key under a data directory.
///
/// Writes go through a temp file in the same directory and an atomic rename,
/// so a crash or a full disk mid-write leaves the old value in place.
pub struct FileStore {
    dir: PathBuf,
    capacity_bytes: Option<usize>,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            capacity_bytes: None,
        }
    }

    /// Cap the byte size of any single stored value.
    pub fn with_capacity(dir: impl Into<PathBuf>, capacity_bytes: usize) -> Self {
        Self {
            dir: dir.into(),
            capacity_bytes: Some(capacity_bytes),
        }
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match std::fs::read_to_string(self.key_path(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::Io(e)),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        if let Some(capacity) = self.capacity_bytes
            && value.len() > capacity
        {
            return Err(StorageError::QuotaExceeded {
                attempted: value.len(),
                capacity,
            });
        }

        std::fs::create_dir_all(&self.dir)?;
        let mut temp = NamedTempFile::new_in(&self.dir)?;
        temp.write_all(value.as_bytes())?;
        temp.flush()?;
        temp.persist(self.key_path(key))
            .map_err(|e| StorageError::Io(e.error))?;
        Ok(())
    }
}

/// In-memory store: same contract as [`FileStore`], no filesystem.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
    capacity_bytes: Option<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cap the byte size of any single stored value.
    pub fn with_capacity(capacity_bytes: usize) -> Self {
        Self {
            values: HashMap::new(),
            capacity_bytes: Some(capacity_bytes),
        }
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        if let Some(capacity) = self.capacity_bytes
            && value.len() > capacity
        {
            return Err(StorageError::QuotaExceeded {
                attempted: value.len(),
                capacity,
            });
        }
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Persistence adapter for the bookmark collection.
pub struct BookmarkVault<S: KeyValueStore> {
    backend: S,
}

impl<S: KeyValueStore> BookmarkVault<S> {
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    /// Serialize the whole collection into the fixed slot.
    ///
    /// On failure the previously persisted bytes are intact. In-memory state
    /// belongs to the caller and is deliberately not rolled back; the next
    /// successful save reconverges the two.
    pub fn save(&mut self, records: &[TravelBookmark]) -> Result<(), StorageError> {
        let json = serde_json::to_string(records)?;
        match self.backend.set(BOOKMARKS_KEY, &json) {
            Ok(()) => {
                debug!("saved {} bookmarks ({} bytes)", records.len(), json.len());
                Ok(())
            }
            Err(e) => {
                error!("bookmark save failed: {}", e);
                Err(e)
            }
        }
    }

    /// Load the collection from the fixed slot.
    ///
    /// Never fails: a missing slot is a normal first run, and an unreadable
    /// or corrupt one is reported and treated as empty so the app still
    /// starts.
    pub fn load(&self) -> Vec<TravelBookmark> {
        let raw = match self.backend.get(BOOKMARKS_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!("no persisted bookmarks, starting empty");
                return Vec::new();
            }
            Err(e) => {
                warn!("failed to read persisted bookmarks, starting empty: {}", e);
                return Vec::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(records) => records,
            Err(e) => {
                warn!("persisted bookmarks are corrupt, starting empty: {}", e);
                Vec::new()
            }
        }
    }
}
