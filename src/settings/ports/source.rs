//! Read-only capability the resolver uses to fetch persisted overrides.

use tracing::warn;

use crate::storage::ports::KeyValueStore;

/// Source of persisted configuration values.
///
/// Reads never fail: an unreadable value is reported as absent so the
/// resolver falls back to its defaults.
pub trait ConfigSource: Send + Sync {
    /// Returns the raw value stored under `key`, if any.
    fn read(&self, key: &str) -> Option<String>;
}

impl<K> ConfigSource for K
where
    K: KeyValueStore,
{
    fn read(&self, key: &str) -> Option<String> {
        match self.get(key) {
            Ok(value) => value,
            Err(err) => {
                warn!(key, error = %err, "failed to read configuration value");
                None
            }
        }
    }
}

