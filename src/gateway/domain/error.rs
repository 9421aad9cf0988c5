//! Errors raised while talking to an integration.

use thiserror::Error;

use crate::gateway::ports::TransportError;

/// Failure of a single integration request.
///
/// Only summarisation returns this to callers. Dispatch converts it into a
/// [`super::DispatchOutcome::Failed`], and suggestion generation logs it and
/// returns no suggestions.
#[derive(Debug, Error)]
pub enum IntegrationError {
    /// The prompt template could not be rendered.
    #[error("failed to render prompt: {0}")]
    Prompt(#[from] minijinja::Error),

    /// The request body could not be encoded.
    #[error("failed to encode request: {0}")]
    Encode(#[from] serde_json::Error),

    /// The request never produced an HTTP response.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The service answered with a non-2xx status.
    #[error("HTTP error! status: {status}")]
    Status {
        /// HTTP status code.
        status: u16,
    },

    /// The response body was not the expected JSON.
    #[error("failed to decode response: {0}")]
    Decode(serde_json::Error),
}
