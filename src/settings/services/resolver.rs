//! Layered configuration resolution.

use std::sync::Arc;

use tracing::debug;

use crate::settings::{
    domain::{EffectiveConfig, Integration, IntegrationDefaults, OverrideBlob, SETTINGS_KEY},
    ports::ConfigSource,
};

/// Merges persisted overrides over static defaults.
///
/// Resolution is a pure read performed on every call, so a settings change
/// takes effect on the next gateway operation without any cache to
/// invalidate.
#[derive(Clone)]
pub struct ConfigResolver<S>
where
    S: ConfigSource,
{
    source: Arc<S>,
    defaults: IntegrationDefaults,
}

impl<S> ConfigResolver<S>
where
    S: ConfigSource,
{
    /// Creates a resolver over the given source and defaults.
    #[must_use]
    pub const fn new(source: Arc<S>, defaults: IntegrationDefaults) -> Self {
        Self { source, defaults }
    }

    /// Resolves the effective settings for one integration.
    ///
    /// A missing, unreadable, or malformed override blob resolves to the
    /// defaults in full.
    #[must_use]
    pub fn resolve(&self, integration: Integration) -> EffectiveConfig {
        let blob = self.read_overrides().unwrap_or_default();
        match integration {
            Integration::Automation => {
                let defaults = &self.defaults.automation;
                EffectiveConfig::new(
                    blob.n8n_webhook().unwrap_or(&defaults.webhook_url).to_owned(),
                    blob.n8n_enabled().unwrap_or(defaults.enabled),
                    None,
                )
            }
            Integration::Ai => {
                let defaults = &self.defaults.ai;
                EffectiveConfig::new(
                    blob.ollama_endpoint().unwrap_or(&defaults.endpoint).to_owned(),
                    blob.ollama_enabled().unwrap_or(defaults.enabled),
                    Some(blob.ollama_model().unwrap_or(&defaults.model).to_owned()),
                )
            }
        }
    }

    fn read_overrides(&self) -> Option<OverrideBlob> {
        let raw = self.source.read(SETTINGS_KEY)?;
        let blob = OverrideBlob::parse(&raw);
        if blob.is_none() {
            debug!(key = SETTINGS_KEY, "ignoring malformed settings override");
        }
        blob
    }
}
