//! Automation webhook dispatch and probing.

use mockable::Clock;
use serde_json::Value;
use tracing::{debug, info, warn};

use super::IntegrationGateway;
use crate::gateway::{
    domain::{DispatchOutcome, DispatchPayload, IntegrationError, ProbePayload},
    ports::HttpTransport,
};
use crate::settings::{domain::Integration, ports::ConfigSource};
use crate::task::domain::TaskRecord;

const DISABLED_MESSAGE: &str = "n8n integration is disabled";

impl<T, S, C> IntegrationGateway<T, S, C>
where
    T: HttpTransport,
    S: ConfigSource,
    C: Clock + Send + Sync,
{
    /// Sends the whole task list to the automation webhook in one request.
    ///
    /// Never fails: a disabled integration yields
    /// [`DispatchOutcome::Declined`] without any request, and transport,
    /// status, or decoding problems yield [`DispatchOutcome::Failed`].
    pub async fn submit(&self, tasks: &[TaskRecord]) -> DispatchOutcome {
        let config = self.resolver.resolve(Integration::Automation);
        if !config.enabled() {
            debug!("automation integration disabled, skipping dispatch");
            return DispatchOutcome::Declined {
                message: DISABLED_MESSAGE.to_owned(),
            };
        }

        match self.dispatch(config.endpoint(), tasks).await {
            Ok(data) => {
                info!(task_count = tasks.len(), "dispatched tasks to automation webhook");
                DispatchOutcome::Delivered { data }
            }
            Err(err) => {
                warn!(error = %err, "failed to dispatch tasks to automation webhook");
                DispatchOutcome::Failed {
                    error: err.to_string(),
                }
            }
        }
    }

    /// Checks that the automation webhook answers with a 2xx status.
    ///
    /// The enable flag is not consulted.
    pub async fn test_automation(&self) -> bool {
        let config = self.resolver.resolve(Integration::Automation);
        let body = match serde_json::to_value(ProbePayload::new(self.timestamp())) {
            Ok(body) => body,
            Err(err) => {
                warn!(error = %err, "failed to encode automation probe");
                return false;
            }
        };
        match self.transport.post_json(config.endpoint(), &body).await {
            Ok(response) => response.is_success(),
            Err(err) => {
                warn!(error = %err, "automation connection test failed");
                false
            }
        }
    }

    async fn dispatch(&self, url: &str, tasks: &[TaskRecord]) -> Result<Value, IntegrationError> {
        let body = serde_json::to_value(DispatchPayload::new(tasks, self.timestamp()))?;
        let response = self.transport.post_json(url, &body).await?;
        if !response.is_success() {
            return Err(IntegrationError::Status {
                status: response.status(),
            });
        }
        response.json().map_err(IntegrationError::Decode)
    }
}
