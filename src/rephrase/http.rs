//! HTTP rephrasing client
//!
//! POSTs the structured reply with game context to a remote endpoint and
//! expects `{"message": "..."}` back. Every request is bounded by a timeout.

use reqwest::Client;
use std::time::Duration;
use tracing::debug;

use crate::errors::{Result, TutorError};
use crate::rephrase::payload::{RephraseRequest, RephraseResponse};
use crate::rephrase::Rephraser;

/// Default request bound in milliseconds
pub const DEFAULT_TIMEOUT_MS: u64 = 8_000;

/// Remote rephrasing service client
#[derive(Debug, Clone)]
pub struct HttpRephraser {
    client: Client,
    endpoint: String,
    timeout: Duration,
}

impl HttpRephraser {
    pub fn new(endpoint: &str) -> Result<Self> {
        Self::with_timeout(endpoint, Duration::from_millis(DEFAULT_TIMEOUT_MS))
    }

    pub fn with_timeout(endpoint: &str, timeout: Duration) -> Result<Self> {
        if endpoint.trim().is_empty() {
            return Err(TutorError::ConfigError("rephrase endpoint is empty".to_string()));
        }

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(TutorError::HttpError)?;

        Ok(Self {
            client,
            endpoint: endpoint.to_string(),
            timeout,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    async fn send(&self, request: &RephraseRequest) -> Result<String> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| unavailable(format!("request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(unavailable(format!("HTTP {}", status)));
        }

        let body: RephraseResponse = response
            .json()
            .await
            .map_err(|e| unavailable(format!("malformed body: {}", e)))?;

        debug!(source = ?body.source, "Rephrasing service replied");

        match body.message {
            Some(message) if !message.trim().is_empty() => Ok(message),
            _ => Err(unavailable("response has no message".to_string())),
        }
    }
}

#[async_trait::async_trait]
impl Rephraser for HttpRephraser {
    fn name(&self) -> &'static str {
        "http"
    }

    async fn rephrase(&self, request: &RephraseRequest) -> Result<String> {
        match tokio::time::timeout(self.timeout, self.send(request)).await {
            Ok(result) => result,
            Err(_) => Err(TutorError::Timeout {
                duration_ms: self.timeout.as_millis() as u64,
            }),
        }
    }
}

fn unavailable(reason: String) -> TutorError {
    TutorError::RephraseUnavailable(reason)
}
