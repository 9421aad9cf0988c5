//! Request and response bodies exchanged with the integrations.

use serde::{Deserialize, Serialize};

use crate::task::domain::TaskRecord;

/// Tag identifying this system as the sender of a dispatch.
pub const DISPATCH_SOURCE: &str = "daily-task-automator";

/// Body posted to the automation webhook.
#[derive(Debug, Clone, Serialize)]
pub struct DispatchPayload<'a> {
    /// The whole task list, sent as one batch.
    pub tasks: &'a [TaskRecord],
    /// ISO-8601 send time.
    pub timestamp: String,
    /// Sender tag.
    pub source: &'static str,
}

impl<'a> DispatchPayload<'a> {
    /// Creates a dispatch body for the given snapshot.
    #[must_use]
    pub const fn new(tasks: &'a [TaskRecord], timestamp: String) -> Self {
        Self {
            tasks,
            timestamp,
            source: DISPATCH_SOURCE,
        }
    }
}

/// Body posted to the automation webhook when probing connectivity.
#[derive(Debug, Clone, Serialize)]
pub struct ProbePayload {
    /// Always `true`.
    pub test: bool,
    /// ISO-8601 send time.
    pub timestamp: String,
}

impl ProbePayload {
    /// Creates a probe body.
    #[must_use]
    pub const fn new(timestamp: String) -> Self {
        Self {
            test: true,
            timestamp,
        }
    }
}

/// Body posted to the AI service's generate endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateRequest<'a> {
    /// Model name.
    pub model: &'a str,
    /// Prompt text.
    pub prompt: &'a str,
    /// Always `false`; responses are read in one piece.
    pub stream: bool,
}

impl<'a> GenerateRequest<'a> {
    /// Creates a non-streaming generation request.
    #[must_use]
    pub const fn new(model: &'a str, prompt: &'a str) -> Self {
        Self {
            model,
            prompt,
            stream: false,
        }
    }
}

/// Relevant part of the AI service's generate response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct GenerateResponse {
    /// Completion text, absent when the service produced none.
    #[serde(default)]
    pub response: Option<String>,
}
