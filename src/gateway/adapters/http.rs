//! `reqwest`-backed transport.

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use crate::gateway::ports::{HttpTransport, TransportError, TransportResponse, TransportResult};

/// Transport sending real HTTP requests with a shared `reqwest` client.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Creates a transport with a default client.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

async fn into_response(response: reqwest::Response) -> TransportResult<TransportResponse> {
    let status = response.status().as_u16();
    let body = response.text().await.map_err(TransportError::network)?;
    Ok(TransportResponse::new(status, body))
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn post_json(&self, url: &str, body: &Value) -> TransportResult<TransportResponse> {
        debug!(url, "POST");
        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(TransportError::network)?;
        into_response(response).await
    }

    async fn get(&self, url: &str) -> TransportResult<TransportResponse> {
        debug!(url, "GET");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(TransportError::network)?;
        into_response(response).await
    }
}
