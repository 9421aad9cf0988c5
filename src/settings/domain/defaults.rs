//! Static built-in defaults for each integration.

use serde::{Deserialize, Serialize};

/// Default automation webhook settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutomationDefaults {
    /// Webhook receiving task batches.
    pub webhook_url: String,
    /// Whether dispatch is enabled when the user has not said otherwise.
    pub enabled: bool,
}

impl Default for AutomationDefaults {
    fn default() -> Self {
        Self {
            webhook_url: "http://localhost:5678/webhook/tasks".to_owned(),
            enabled: true,
        }
    }
}

/// Default AI inference service settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AiDefaults {
    /// Base URL of the inference service.
    pub endpoint: String,
    /// Model name sent with each generation request.
    pub model: String,
    /// Whether AI features are enabled when the user has not said otherwise.
    pub enabled: bool,
}

impl Default for AiDefaults {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:11434".to_owned(),
            model: "llama2".to_owned(),
            enabled: true,
        }
    }
}

/// The full set of static defaults consulted by the resolver.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntegrationDefaults {
    /// Automation webhook defaults.
    pub automation: AutomationDefaults,
    /// AI inference defaults.
    pub ai: AiDefaults,
}
