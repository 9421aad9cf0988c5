//! User-persisted integration overrides.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Storage key holding the override blob.
pub const SETTINGS_KEY: &str = "integration-settings";

const N8N_WEBHOOK: &str = "n8nWebhook";
const N8N_ENABLED: &str = "n8nEnabled";
const OLLAMA_ENDPOINT: &str = "ollamaEndpoint";
const OLLAMA_MODEL: &str = "ollamaModel";
const OLLAMA_ENABLED: &str = "ollamaEnabled";

/// Complete settings form as written back by the settings editor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntegrationOverrides {
    /// Automation webhook URL.
    pub n8n_webhook: String,
    /// Automation enable flag.
    pub n8n_enabled: bool,
    /// AI service base URL.
    pub ollama_endpoint: String,
    /// AI model name.
    pub ollama_model: String,
    /// AI enable flag.
    pub ollama_enabled: bool,
}

/// Loosely-typed view over a persisted override blob.
///
/// The blob is user-controlled and may have any shape, so fields are read
/// individually and anything unexpected falls back to the default.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OverrideBlob {
    fields: Map<String, Value>,
}

impl OverrideBlob {
    /// Parses a raw blob.
    ///
    /// Returns `None` when the text is not JSON or not a JSON object.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match serde_json::from_str::<Value>(raw) {
            Ok(Value::Object(fields)) => Some(Self { fields }),
            _ => None,
        }
    }

    /// Automation webhook override, if set to a non-empty string.
    #[must_use]
    pub fn n8n_webhook(&self) -> Option<&str> {
        self.non_empty_str(N8N_WEBHOOK)
    }

    /// Automation enable flag, if set to a JSON boolean.
    #[must_use]
    pub fn n8n_enabled(&self) -> Option<bool> {
        self.enabled_flag(N8N_ENABLED)
    }

    /// AI endpoint override, if set to a non-empty string.
    #[must_use]
    pub fn ollama_endpoint(&self) -> Option<&str> {
        self.non_empty_str(OLLAMA_ENDPOINT)
    }

    /// AI model override, if set to a non-empty string.
    #[must_use]
    pub fn ollama_model(&self) -> Option<&str> {
        self.non_empty_str(OLLAMA_MODEL)
    }

    /// AI enable flag, if set to a JSON boolean.
    #[must_use]
    pub fn ollama_enabled(&self) -> Option<bool> {
        self.enabled_flag(OLLAMA_ENABLED)
    }

    fn non_empty_str(&self, key: &str) -> Option<&str> {
        self.fields
            .get(key)
            .and_then(Value::as_str)
            .filter(|value| !value.is_empty())
    }

    // Only JSON booleans count. `"false"`, `0` and `null` are not a `false`.
    fn enabled_flag(&self, key: &str) -> Option<bool> {
        self.fields.get(key).and_then(Value::as_bool)
    }
}
