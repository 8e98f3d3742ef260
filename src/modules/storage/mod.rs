//! Key-value storage backing the application state
//!
//! Everything the service persists (report collection, session markers,
//! UI preferences) lives under a handful of string keys holding JSON text.
//! Two backends are provided: process memory and a single JSON file.

mod file_storage;
mod memory_storage;

use async_trait::async_trait;
use thiserror::Error;

pub use file_storage::FileStorage;
pub use memory_storage::MemoryStorage;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// String key-value persistence
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, `None` if absent
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value
    async fn set(&self, key: &str, value: String) -> Result<(), StorageError>;

    /// Remove `key`. Removing a missing key is not an error.
    async fn remove(&self, key: &str) -> Result<(), StorageError>;
}
