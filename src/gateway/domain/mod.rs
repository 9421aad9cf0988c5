//! Domain types for the integration gateway.

mod error;
mod outcome;
mod payload;
mod prompt;
mod suggestions;

pub use error::IntegrationError;
pub use outcome::DispatchOutcome;
pub use payload::{DISPATCH_SOURCE, DispatchPayload, GenerateRequest, GenerateResponse, ProbePayload};
pub use prompt::{suggestion_prompt, summary_prompt};
pub use suggestions::{BOOTSTRAP_SUGGESTIONS, MAX_SUGGESTIONS, bootstrap_suggestions, normalize_suggestions};
