use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// The persistence primitive: a string key-value store.
///
/// Typed stores (`ProfileStore`, `SessionStore`) sit on top and handle the
/// schema-versioned JSON envelope; adapters only move opaque strings.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Fetch the payload stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be reached.
    async fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous payload.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the write fails.
    async fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove the entry for `key` if present.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the delete fails.
    async fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Versioned wrapper around every persisted payload. A version bump makes
/// older (or corrupt) payloads decode to `None`, so callers degrade to
/// defaults instead of failing.
#[derive(Debug, serde::Serialize, serde::Deserialize)]
struct Envelope<T> {
    schema_version: u32,
    data: T,
}

/// Serialize `data` inside a versioned envelope.
///
/// # Errors
///
/// Returns `StorageError::Serialization` if encoding fails.
pub fn encode_envelope<T: Serialize>(
    schema_version: u32,
    data: &T,
) -> Result<String, StorageError> {
    serde_json::to_string(&Envelope {
        schema_version,
        data,
    })
    .map_err(|err| StorageError::Serialization(err.to_string()))
}

/// Decode a payload previously written with `encode_envelope`. Malformed
/// JSON or a version mismatch yields `None`; storage corruption is never
/// fatal to callers.
#[must_use]
pub fn decode_envelope<T: DeserializeOwned>(raw: &str, expected_version: u32) -> Option<T> {
    let envelope: Envelope<T> = serde_json::from_str(raw).ok()?;
    (envelope.schema_version == expected_version).then_some(envelope.data)
}

/// Simple in-memory store for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl InMemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStore for InMemoryStore {
    async fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        let guard = self
            .entries
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.get(key).cloned())
    }

    async fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut guard = self
            .entries
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut guard = self
            .entries
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.remove(key);
        Ok(())
    }
}

/// Aggregates the key-value backend behind a trait object for easy backend
/// swapping between SQLite and the in-memory store.
#[derive(Clone)]
pub struct Storage {
    pub kv: Arc<dyn KeyValueStore>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            kv: Arc::new(InMemoryStore::new()),
        }
    }
}
