//! Integration gateway for the automation webhook and the AI service.
//!
//! Every operation resolves its integration's settings afresh, performs at
//! most one HTTP request through the [`ports::HttpTransport`] port, and
//! reports back without touching the task store. Failures are absorbed into
//! data for dispatch, probing and suggestions; only summarisation surfaces
//! an error to the caller.
//!
//! - Payloads, outcomes and text normalisation in [`domain`]
//! - The transport contract in [`ports`]
//! - `reqwest` and recording transports in [`adapters`]
//! - The gateway service in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
