//! Reads and writes the user's settings form.

use std::sync::Arc;

use thiserror::Error;
use tracing::debug;

use crate::settings::{
    domain::{Integration, IntegrationDefaults, IntegrationOverrides, SETTINGS_KEY},
    services::ConfigResolver,
};
use crate::storage::ports::{KeyValueError, KeyValueStore};

/// Errors raised while saving settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The form could not be serialised.
    #[error("failed to encode settings: {0}")]
    Encode(#[from] serde_json::Error),
    /// The storage backend rejected the write.
    #[error(transparent)]
    Storage(#[from] KeyValueError),
}

/// Loads the settings form with defaults filled in and persists edits.
#[derive(Clone)]
pub struct SettingsEditor<K>
where
    K: KeyValueStore,
{
    store: Arc<K>,
    defaults: IntegrationDefaults,
}

impl<K> SettingsEditor<K>
where
    K: KeyValueStore,
{
    /// Creates an editor over the given store.
    #[must_use]
    pub const fn new(store: Arc<K>, defaults: IntegrationDefaults) -> Self {
        Self { store, defaults }
    }

    /// Returns the current form, applying the same precedence rules the
    /// gateway sees.
    #[must_use]
    pub fn load(&self) -> IntegrationOverrides {
        let resolver = ConfigResolver::new(Arc::clone(&self.store), self.defaults.clone());
        let automation = resolver.resolve(Integration::Automation);
        let ai = resolver.resolve(Integration::Ai);
        IntegrationOverrides {
            n8n_webhook: automation.endpoint().to_owned(),
            n8n_enabled: automation.enabled(),
            ollama_endpoint: ai.endpoint().to_owned(),
            ollama_model: ai.model().unwrap_or(&self.defaults.ai.model).to_owned(),
            ollama_enabled: ai.enabled(),
        }
    }

    /// Persists the form as the new override blob.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError`] when encoding or the storage write fails.
    pub fn save(&self, overrides: &IntegrationOverrides) -> Result<(), SettingsError> {
        let encoded = serde_json::to_string(overrides)?;
        self.store.set(SETTINGS_KEY, &encoded)?;
        debug!(key = SETTINGS_KEY, "saved integration settings");
        Ok(())
    }
}
