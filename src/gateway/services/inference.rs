//! AI suggestion generation, summarisation and probing.

use mockable::Clock;
use tracing::{debug, warn};

use super::{IntegrationGateway, gateway::api_url};
use crate::gateway::{
    domain::{
        GenerateRequest, GenerateResponse, IntegrationError, bootstrap_suggestions,
        normalize_suggestions, suggestion_prompt, summary_prompt,
    },
    ports::HttpTransport,
};
use crate::settings::{
    domain::{EffectiveConfig, Integration},
    ports::ConfigSource,
};
use crate::task::domain::TaskRecord;

const GENERATE_PATH: &str = "api/generate";
const TAGS_PATH: &str = "api/tags";

impl<T, S, C> IntegrationGateway<T, S, C>
where
    T: HttpTransport,
    S: ConfigSource,
    C: Clock + Send + Sync,
{
    /// Asks the AI service for up to three follow-up task titles.
    ///
    /// Returns the fixed bootstrap suggestions for an empty task list
    /// without contacting the service. Every failure collapses to an empty
    /// list.
    pub async fn suggest(&self, tasks: &[TaskRecord]) -> Vec<String> {
        let config = self.resolver.resolve(Integration::Ai);
        if !config.enabled() {
            debug!("AI integration disabled, no suggestions");
            return Vec::new();
        }
        if tasks.is_empty() {
            return bootstrap_suggestions();
        }

        let completion = match suggestion_prompt(tasks) {
            Ok(prompt) => self.generate(&config, &prompt).await,
            Err(err) => Err(IntegrationError::from(err)),
        };
        match completion {
            Ok(text) => normalize_suggestions(&text),
            Err(err) => {
                warn!(error = %err, "failed to generate task suggestions");
                Vec::new()
            }
        }
    }

    /// Asks the AI service for a short summary of the task list.
    ///
    /// Returns an empty string when the integration is disabled or the
    /// service returned no text.
    ///
    /// # Errors
    ///
    /// Returns [`IntegrationError`] when the prompt cannot be built, the
    /// request fails, the service answers with a non-2xx status, or the
    /// response cannot be decoded.
    pub async fn summarize(&self, tasks: &[TaskRecord]) -> Result<String, IntegrationError> {
        let config = self.resolver.resolve(Integration::Ai);
        if !config.enabled() {
            debug!("AI integration disabled, no summary");
            return Ok(String::new());
        }

        let prompt = summary_prompt(tasks)?;
        self.generate(&config, &prompt).await.inspect_err(|err| {
            warn!(error = %err, "failed to summarize tasks");
        })
    }

    /// Checks that the AI service lists its models with a 2xx status.
    ///
    /// The enable flag is not consulted.
    pub async fn test_ai(&self) -> bool {
        let config = self.resolver.resolve(Integration::Ai);
        match self.transport.get(&api_url(config.endpoint(), TAGS_PATH)).await {
            Ok(response) => response.is_success(),
            Err(err) => {
                warn!(error = %err, "AI connection test failed");
                false
            }
        }
    }

    async fn generate(
        &self,
        config: &EffectiveConfig,
        prompt: &str,
    ) -> Result<String, IntegrationError> {
        let url = api_url(config.endpoint(), GENERATE_PATH);
        let request = GenerateRequest::new(config.model().unwrap_or_default(), prompt);
        let body = serde_json::to_value(&request)?;
        debug!(%url, model = request.model, "requesting completion");

        let response = self.transport.post_json(&url, &body).await?;
        if !response.is_success() {
            return Err(IntegrationError::Status {
                status: response.status(),
            });
        }
        let decoded: GenerateResponse = response.json().map_err(IntegrationError::Decode)?;
        Ok(decoded.response.unwrap_or_default())
    }
}
