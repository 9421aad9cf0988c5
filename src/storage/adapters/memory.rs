//! In-memory key-value store for tests and ephemeral sessions.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::storage::ports::{KeyValueError, KeyValueResult, KeyValueStore};

/// Thread-safe in-memory key-value store.
///
/// Clones share the same underlying map, so a test can keep a handle and
/// inspect what a service persisted.
#[derive(Debug, Clone, Default)]
pub struct InMemoryKeyValueStore {
    state: Arc<RwLock<InMemoryState>>,
}

#[derive(Debug, Default)]
struct InMemoryState {
    entries: HashMap<String, String>,
    fail_writes: bool,
    writes: usize,
}

impl InMemoryKeyValueStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with one entry.
    #[must_use]
    pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        let store = Self::new();
        if let Ok(mut state) = store.state.write() {
            state.entries.insert(key.into(), value.into());
        }
        store
    }

    /// Makes subsequent writes fail with a backend error.
    ///
    /// # Errors
    ///
    /// Returns [`KeyValueError::Backend`] when lock acquisition fails.
    pub fn set_fail_writes(&self, fail: bool) -> KeyValueResult<()> {
        let mut state = self
            .state
            .write()
            .map_err(|err| KeyValueError::backend(std::io::Error::other(err.to_string())))?;
        state.fail_writes = fail;
        Ok(())
    }

    /// Number of successful writes performed so far.
    ///
    /// # Errors
    ///
    /// Returns [`KeyValueError::Backend`] when lock acquisition fails.
    pub fn write_count(&self) -> KeyValueResult<usize> {
        let state = self
            .state
            .read()
            .map_err(|err| KeyValueError::backend(std::io::Error::other(err.to_string())))?;
        Ok(state.writes)
    }
}

impl KeyValueStore for InMemoryKeyValueStore {
    fn get(&self, key: &str) -> KeyValueResult<Option<String>> {
        let state = self
            .state
            .read()
            .map_err(|err| KeyValueError::backend(std::io::Error::other(err.to_string())))?;
        Ok(state.entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> KeyValueResult<()> {
        let mut state = self
            .state
            .write()
            .map_err(|err| KeyValueError::backend(std::io::Error::other(err.to_string())))?;
        if state.fail_writes {
            return Err(KeyValueError::backend(std::io::Error::other(
                "writes disabled for this store",
            )));
        }
        state.entries.insert(key.to_owned(), value.to_owned());
        state.writes += 1;
        Ok(())
    }
}
