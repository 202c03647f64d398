//! Key-value persistence port
//!
//! The catalog is stored as one blob under one key. Backends only need to
//! read back the last value written for a key and replace it wholesale.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use crate::error::StorageError;

/// Storage backend addressed by string keys
pub trait KvStore {
    /// Returns the last value written under `key`, or `None` if never written
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replaces the value stored under `key`
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<T: KvStore + ?Sized> KvStore for &T {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }
}

/// In-memory implementation of KvStore
///
/// Clones share the same map, so a test can hand one handle to a store and
/// inspect writes through another.
#[derive(Debug, Clone, Default)]
pub struct MemoryKvStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryKvStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with one entry
    pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        let store = Self::new();
        store
            .entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.into(), value.into());
        store
    }
}

impl KvStore for MemoryKvStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// File-backed implementation of KvStore
///
/// Each key maps to `<dir>/<key>.json`. Writes go to a sibling temp file
/// that is renamed over the target, so readers never see a partial blob.
#[derive(Debug, Clone)]
pub struct FileKvStore {
    dir: PathBuf,
}

impl FileKvStore {
    /// Creates a file store rooted at `dir`
    ///
    /// The directory is created lazily on the first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file holding `key`
    pub fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        let valid = !key.is_empty()
            && !key.starts_with('.')
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));
        if !valid {
            return Err(StorageError::InvalidKey(key.to_string()));
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

impl KvStore for FileKvStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key)?;
        match std::fs::read_to_string(&path) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::io(path.display().to_string(), e)),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        std::fs::create_dir_all(&self.dir)
            .map_err(|e| StorageError::io(self.dir.display().to_string(), e))?;

        let tmp = path.with_extension("json.tmp");
        std::fs::write(&tmp, value)
            .map_err(|e| StorageError::io(tmp.display().to_string(), e))?;
        std::fs::rename(&tmp, &path)
            .map_err(|e| StorageError::io(path.display().to_string(), e))?;

        tracing::debug!("Wrote {} bytes to {}", value.len(), path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_roundtrip() {
        let store = MemoryKvStore::new();
        assert_eq!(store.get("k").unwrap(), None);

        store.set("k", "v1").unwrap();
        store.set("k", "v2").unwrap();
        assert_eq!(store.get("k").unwrap(), Some("v2".to_string()));
    }

    #[test]
    fn test_memory_store_clones_share_entries() {
        let store = MemoryKvStore::new();
        let observer = store.clone();

        store.set("k", "v").unwrap();
        assert_eq!(observer.get("k").unwrap(), Some("v".to_string()));
    }

    #[test]
    fn test_file_store_missing_key_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileKvStore::new(dir.path().join("nested"));
        assert_eq!(store.get("healthcareServices").unwrap(), None);
    }

    #[test]
    fn test_file_store_creates_dir_and_replaces_value() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileKvStore::new(dir.path().join("nested"));
        assert_eq!(store.dir(), dir.path().join("nested"));
        assert!(!store.dir().exists());

        store.set("healthcareServices", "[1]").unwrap();
        store.set("healthcareServices", "[2]").unwrap();

        assert_eq!(
            store.get("healthcareServices").unwrap(),
            Some("[2]".to_string())
        );
        let path = store.path_for("healthcareServices").unwrap();
        assert!(store.dir().is_dir());
        assert!(path.exists());
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[test]
    fn test_file_store_rejects_path_like_keys() {
        let store = FileKvStore::new("/tmp/unused");
        for key in ["", "../escape", ".hidden", "a/b", "a b"] {
            assert!(
                matches!(store.path_for(key), Err(StorageError::InvalidKey(_))),
                "key {key:?}"
            );
        }
    }
}
