//! Scripted transport that records every request.
//!
//! Responses are consumed in the order they were queued. A request made with
//! an empty queue fails with a transport error, which makes unexpected
//! network calls visible in tests.

use async_trait::async_trait;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::gateway::ports::{HttpTransport, TransportError, TransportResponse, TransportResult};

/// HTTP method of a recorded request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordedMethod {
    /// `GET`.
    Get,
    /// `POST` with a JSON body.
    Post,
}

/// A request observed by [`RecordingTransport`].
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    /// Request method.
    pub method: RecordedMethod,
    /// Target URL.
    pub url: String,
    /// JSON body for `POST` requests.
    pub body: Option<Value>,
}

/// In-memory transport returning queued responses.
#[derive(Debug, Clone, Default)]
pub struct RecordingTransport {
    state: Arc<Mutex<RecordingState>>,
}

#[derive(Debug, Default)]
struct RecordingState {
    responses: VecDeque<TransportResult<TransportResponse>>,
    requests: Vec<RecordedRequest>,
}

fn lock_error(err: impl std::fmt::Display) -> TransportError {
    TransportError::network(std::io::Error::other(err.to_string()))
}

impl RecordingTransport {
    /// Creates a transport with no queued responses.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a response with the given status and body.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] when lock acquisition fails.
    pub fn respond_with(&self, status: u16, body: impl Into<String>) -> TransportResult<()> {
        let mut state = self.state.lock().map_err(lock_error)?;
        state
            .responses
            .push_back(Ok(TransportResponse::new(status, body)));
        Ok(())
    }

    /// Queues a network-level failure.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] when lock acquisition fails.
    pub fn fail_with(&self, message: impl Into<String>) -> TransportResult<()> {
        let mut state = self.state.lock().map_err(lock_error)?;
        state.responses.push_back(Err(TransportError::network(
            std::io::Error::new(std::io::ErrorKind::ConnectionRefused, message.into()),
        )));
        Ok(())
    }

    /// Returns every request observed so far.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] when lock acquisition fails.
    pub fn requests(&self) -> TransportResult<Vec<RecordedRequest>> {
        let state = self.state.lock().map_err(lock_error)?;
        Ok(state.requests.clone())
    }

    fn record(&self, request: RecordedRequest) -> TransportResult<TransportResponse> {
        let mut state = self.state.lock().map_err(lock_error)?;
        let url = request.url.clone();
        state.requests.push(request);
        state.responses.pop_front().unwrap_or_else(|| {
            Err(TransportError::network(std::io::Error::other(format!(
                "no scripted response for {url}"
            ))))
        })
    }
}

#[async_trait]
impl HttpTransport for RecordingTransport {
    async fn post_json(&self, url: &str, body: &Value) -> TransportResult<TransportResponse> {
        self.record(RecordedRequest {
            method: RecordedMethod::Post,
            url: url.to_owned(),
            body: Some(body.clone()),
        })
    }

    async fn get(&self, url: &str) -> TransportResult<TransportResponse> {
        self.record(RecordedRequest {
            method: RecordedMethod::Get,
            url: url.to_owned(),
            body: None,
        })
    }
}
