//! Integration identifiers and their resolved configuration.

use std::fmt;

/// External integrations driven by the gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Integration {
    /// Automation webhook receiving task batches.
    Automation,
    /// Local AI inference service.
    Ai,
}

impl Integration {
    /// Returns a short human-readable name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Automation => "automation",
            Self::Ai => "ai",
        }
    }
}

impl fmt::Display for Integration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Settings for one integration after merging overrides over defaults.
///
/// Produced per call by the resolver and never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectiveConfig {
    endpoint: String,
    enabled: bool,
    model: Option<String>,
}

impl EffectiveConfig {
    /// Creates a resolved configuration.
    #[must_use]
    pub const fn new(endpoint: String, enabled: bool, model: Option<String>) -> Self {
        Self {
            endpoint,
            enabled,
            model,
        }
    }

    /// Webhook URL (automation) or service base URL (AI).
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Whether the integration may perform work.
    #[must_use]
    pub const fn enabled(&self) -> bool {
        self.enabled
    }

    /// Model name, present only for the AI integration.
    #[must_use]
    pub fn model(&self) -> Option<&str> {
        self.model.as_deref()
    }
}
