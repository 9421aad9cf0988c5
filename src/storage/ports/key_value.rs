//! Key-value storage port consumed by the task store and settings layer.

use std::sync::Arc;
use thiserror::Error;

/// Result type for key-value storage operations.
pub type KeyValueResult<T> = Result<T, KeyValueError>;

/// String-keyed, string-valued persistent storage.
///
/// Writes are synchronous: `set` returns only after the value is durable (or
/// has failed).
pub trait KeyValueStore: Send + Sync {
    /// Reads the value stored under `key`.
    ///
    /// Returns `Ok(None)` when nothing has been stored for the key.
    ///
    /// # Errors
    ///
    /// Returns [`KeyValueError`] when the backend cannot be read.
    fn get(&self, key: &str) -> KeyValueResult<Option<String>>;

    /// Replaces the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`KeyValueError`] when the key is invalid or the backend
    /// rejects the write.
    fn set(&self, key: &str, value: &str) -> KeyValueResult<()>;
}

/// Errors returned by key-value storage adapters.
#[derive(Debug, Clone, Error)]
pub enum KeyValueError {
    /// The key cannot be mapped onto the backend.
    #[error("invalid storage key '{0}'")]
    InvalidKey(String),

    /// Backend failure.
    #[error("storage backend error: {0}")]
    Backend(Arc<dyn std::error::Error + Send + Sync>),
}

impl KeyValueError {
    /// Wraps a backend error.
    pub fn backend(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Backend(Arc::new(err))
    }
}
