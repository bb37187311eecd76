use std::time::Duration;

use reqwest::{Client, Response};
use tracing::debug;

use crate::api::error::ApiError;
use crate::api::types::{VisitRequest, VisitResponse};
use crate::config::CounterConfig;

/// HTTP half of the visitor counter.
///
/// Owns one `reqwest::Client` carrying the configured transport timeouts;
/// every trigger shares it. One call per trigger, no retries.
pub struct CountingClient {
    client: Client,
    endpoint: String,
}

impl CountingClient {
    pub fn new(endpoint: String, config: &CounterConfig) -> Self {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(u64::from(config.connect_timeout_seconds)))
            .timeout(Duration::from_secs(u64::from(config.request_timeout_seconds)))
            .build()
            .expect("Failed to build counting client");

        Self { client, endpoint }
    }

    /// The resolved endpoint this client posts to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Records one visit and returns the new count.
    pub async fn record_visit(&self, request: &VisitRequest) -> Result<u64, ApiError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|source| ApiError::Transport { source })?;

        Self::read_count(response).await
    }

    /// Reads the current count without incrementing it.
    pub async fn current_count(&self) -> Result<u64, ApiError> {
        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|source| ApiError::Transport { source })?;

        Self::read_count(response).await
    }

    async fn read_count(response: Response) -> Result<u64, ApiError> {
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Service {
                status: status.as_u16(),
            });
        }

        let body: VisitResponse = response.json().await.map_err(|e| ApiError::Protocol {
            detail: format!("unusable response body: {e}"),
        })?;

        if !body.is_usable() {
            return Err(ApiError::Protocol {
                detail: "service reported success=false".to_string(),
            });
        }

        debug!(count = body.count, "counting service answered");
        Ok(body.count)
    }
}
