//! Raw key-value storage backends.

use anyhow::{anyhow, Context, Result};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, RwLock};

/// String key-value storage, the equivalent of a browser's local storage.
///
/// Methods take `&self` so a single backend can be shared between the task
/// repository and the theme preference.
pub trait StorageBackend: Send + Sync + std::fmt::Debug {
    /// Read the value stored under `key`, `None` if the key was never written.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Delete the value under `key`. Deleting a missing key is not an error.
    fn remove(&self, key: &str) -> Result<()>;

    /// Whether anything is stored under `key`.
    fn contains(&self, key: &str) -> Result<bool> {
        Ok(self.get(key)?.is_some())
    }
}

/// Shared storage backend handle.
pub type SharedStorage = Arc<dyn StorageBackend>;

/// In-process storage.
///
/// An optional byte quota makes writes fail once the total size of stored
/// keys and values would exceed it, the way local storage reports
/// "quota exceeded".
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RwLock<HashMap<String, String>>,
    quota: Option<usize>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a storage that rejects writes past `bytes` total.
    pub fn with_quota(bytes: usize) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            quota: Some(bytes),
        }
    }

    /// Wrap into a shared handle.
    pub fn shared(self) -> SharedStorage {
        Arc::new(self)
    }

    fn used_bytes(entries: &HashMap<String, String>, skip: &str) -> usize {
        entries
            .iter()
            .filter(|(k, _)| k.as_str() != skip)
            .map(|(k, v)| k.len() + v.len())
            .sum()
    }
}

impl StorageBackend for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let entries = self
            .entries
            .read()
            .map_err(|_| anyhow!("memory storage lock poisoned"))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| anyhow!("memory storage lock poisoned"))?;

        if let Some(quota) = self.quota {
            let needed = Self::used_bytes(&entries, key) + key.len() + value.len();
            if needed > quota {
                return Err(anyhow!(
                    "Storage quota exceeded writing '{}': {} bytes needed, {} allowed",
                    key,
                    needed,
                    quota
                ));
            }
        }

        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| anyhow!("memory storage lock poisoned"))?;
        entries.remove(key);
        Ok(())
    }
}

/// File-backed storage: each key lives in `{dir}/{key}.json`.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Create a storage rooted at `dir`. The directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Wrap into a shared handle.
    pub fn shared(self) -> SharedStorage {
        Arc::new(self)
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl StorageBackend for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }
        let contents = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Ok(Some(contents))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        std::fs::create_dir_all(&self.dir)
            .with_context(|| format!("Failed to create {}", self.dir.display()))?;

        let path = self.path_for(key);
        std::fs::write(&path, value)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let path = self.path_for(key);
        if path.exists() {
            std::fs::remove_file(&path)
                .with_context(|| format!("Failed to remove {}", path.display()))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_memory_storage_basic() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get("k").unwrap(), None);
        assert!(!storage.contains("k").unwrap());

        storage.set("k", "v").unwrap();
        assert_eq!(storage.get("k").unwrap().as_deref(), Some("v"));
        assert!(storage.contains("k").unwrap());

        storage.remove("k").unwrap();
        assert_eq!(storage.get("k").unwrap(), None);
        storage.remove("k").unwrap();
    }

    #[test]
    fn test_memory_storage_quota() {
        let storage = MemoryStorage::with_quota(10);
        storage.set("ab", "12345678").unwrap();

        // Overwriting the same key only counts the new value
        storage.set("ab", "87654321").unwrap();

        assert!(storage.set("ab", "123456789").is_err());
        assert!(storage.set("c", "x").is_err());
        assert_eq!(storage.get("ab").unwrap().as_deref(), Some("87654321"));
    }

    #[test]
    fn test_file_storage_lifecycle() {
        let temp = tempdir().unwrap();
        let storage = FileStorage::new(temp.path().join("nested/data"));

        assert_eq!(storage.get("tasks").unwrap(), None);

        storage.set("tasks", "[]").unwrap();
        assert!(temp.path().join("nested/data/tasks.json").exists());
        assert_eq!(storage.get("tasks").unwrap().as_deref(), Some("[]"));

        storage.remove("tasks").unwrap();
        assert!(!storage.contains("tasks").unwrap());
    }

    #[test]
    fn test_file_storage_write_failure() {
        let temp = tempdir().unwrap();
        // A regular file where the data directory should be
        let blocker = temp.path().join("blocked");
        std::fs::write(&blocker, "not a dir").unwrap();

        let storage = FileStorage::new(blocker.clone());
        assert!(storage.set("tasks", "[]").is_err());
    }
}
