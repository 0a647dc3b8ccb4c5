//! Typed, best-effort persistence over a storage backend.

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use super::backend::SharedStorage;

/// Why a read or write against storage did not succeed.
///
/// These never reach callers of `PersistentStore`: they are logged and the
/// in-memory state stays authoritative.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("Failed to read '{key}' from storage: {source}")]
    Read {
        key: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("Failed to write '{key}' to storage: {source}")]
    Write {
        key: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("Failed to serialize value for '{key}': {source}")]
    Serialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Stored value under '{key}' is not valid: {source}")]
    Deserialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Outcome of reading a key.
///
/// `Unreadable` covers both backend read errors and data that does not
/// deserialize, and is kept apart from `Missing` so callers never mistake
/// damaged data for a first run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stored<T> {
    Missing,
    Found(T),
    Unreadable,
}

/// JSON persistence over a shared backend.
///
/// `load` never fails: a missing or unreadable entry yields the supplied
/// default. `save` never fails either: errors are logged and reported only as
/// `false`.
#[derive(Debug, Clone)]
pub struct PersistentStore {
    backend: SharedStorage,
}

impl PersistentStore {
    pub fn new(backend: SharedStorage) -> Self {
        Self { backend }
    }

    /// Read and deserialize the value under `key`, telling apart a key that
    /// was never written from one that could not be read.
    pub fn fetch<T: DeserializeOwned>(&self, key: &str) -> Stored<T> {
        match self.try_load(key) {
            Ok(Some(value)) => Stored::Found(value),
            Ok(None) => Stored::Missing,
            Err(e) => {
                tracing::warn!("{}", e);
                Stored::Unreadable
            }
        }
    }

    /// Load and deserialize the value under `key`, or return `default`.
    pub fn load<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        match self.fetch(key) {
            Stored::Found(value) => value,
            Stored::Missing => {
                tracing::debug!("No stored value under '{}', using default", key);
                default
            }
            Stored::Unreadable => {
                tracing::warn!("Using default for '{}'", key);
                default
            }
        }
    }

    /// Serialize `value` and write it under `key`.
    ///
    /// Returns whether the write landed.
    pub fn save<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> bool {
        match self.try_save(key, value) {
            Ok(()) => {
                tracing::debug!("Saved '{}' to storage", key);
                true
            }
            Err(e) => {
                tracing::error!("{}", e);
                false
            }
        }
    }

    /// Read the raw string under `key` without JSON decoding.
    pub fn read_string(&self, key: &str) -> Option<String> {
        match self.backend.get(key) {
            Ok(value) => value,
            Err(source) => {
                let e = PersistenceError::Read {
                    key: key.to_string(),
                    source,
                };
                tracing::warn!("{}", e);
                None
            }
        }
    }

    /// Write a raw string under `key` without JSON encoding.
    pub fn write_string(&self, key: &str, value: &str) -> bool {
        match self.backend.set(key, value) {
            Ok(()) => true,
            Err(source) => {
                let e = PersistenceError::Write {
                    key: key.to_string(),
                    source,
                };
                tracing::error!("{}", e);
                false
            }
        }
    }

    fn try_load<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, PersistenceError> {
        let raw = self
            .backend
            .get(key)
            .map_err(|source| PersistenceError::Read {
                key: key.to_string(),
                source,
            })?;

        let Some(raw) = raw else {
            return Ok(None);
        };

        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|source| PersistenceError::Deserialize {
                key: key.to_string(),
                source,
            })
    }

    fn try_save<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), PersistenceError> {
        let contents =
            serde_json::to_string(value).map_err(|source| PersistenceError::Serialize {
                key: key.to_string(),
                source,
            })?;

        self.backend
            .set(key, &contents)
            .map_err(|source| PersistenceError::Write {
                key: key.to_string(),
                source,
            })
    }
}
