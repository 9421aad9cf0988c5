//! Shared construction and helpers for the integration gateway.

use chrono::SecondsFormat;
use mockable::Clock;
use std::sync::Arc;

use crate::gateway::ports::HttpTransport;
use crate::settings::{ports::ConfigSource, services::ConfigResolver};

/// Drives the automation webhook and the AI inference service.
///
/// The gateway reads effective settings on every call and never mutates
/// the task collection; callers pass in a snapshot.
#[derive(Clone)]
pub struct IntegrationGateway<T, S, C>
where
    T: HttpTransport,
    S: ConfigSource,
    C: Clock + Send + Sync,
{
    pub(super) transport: Arc<T>,
    pub(super) resolver: ConfigResolver<S>,
    pub(super) clock: Arc<C>,
}

impl<T, S, C> IntegrationGateway<T, S, C>
where
    T: HttpTransport,
    S: ConfigSource,
    C: Clock + Send + Sync,
{
    /// Creates a gateway.
    #[must_use]
    pub const fn new(transport: Arc<T>, resolver: ConfigResolver<S>, clock: Arc<C>) -> Self {
        Self {
            transport,
            resolver,
            clock,
        }
    }

    /// Current time as an ISO-8601 UTC string with millisecond precision.
    pub(super) fn timestamp(&self) -> String {
        self.clock
            .utc()
            .to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}

/// Joins an AI service base URL and an API path.
pub(super) fn api_url(endpoint: &str, path: &str) -> String {
    format!("{}/{path}", endpoint.trim_end_matches('/'))
}
