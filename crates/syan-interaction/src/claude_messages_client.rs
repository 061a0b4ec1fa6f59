//! ClaudeMessagesClient - the relay's upstream, a direct REST client for the
//! Messages API.
//!
//! The client forwards an already-assembled request body exactly once and hands
//! back the upstream status and JSON body untouched. It does not interpret
//! error statuses; that is up to whoever receives the reply.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use syan_core::config::{ApiKey, DEFAULT_ANTHROPIC_VERSION, DEFAULT_UPSTREAM_URL, RelayConfig};
use syan_core::upstream::{MessagesUpstream, UpstreamReply};
use syan_core::{Result, SyanError};

/// Upstream implementation that talks to the Messages HTTP API.
#[derive(Clone)]
pub struct ClaudeMessagesClient {
    client: Client,
    api_key: ApiKey,
    endpoint: String,
    anthropic_version: String,
}

impl ClaudeMessagesClient {
    /// Creates a client for the public endpoint with no request timeout.
    pub fn new(api_key: ApiKey) -> Self {
        Self {
            client: Client::new(),
            api_key,
            endpoint: DEFAULT_UPSTREAM_URL.to_string(),
            anthropic_version: DEFAULT_ANTHROPIC_VERSION.to_string(),
        }
    }

    /// Creates a client from relay settings.
    pub fn from_config(config: &RelayConfig, api_key: ApiKey) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(secs) = config.upstream_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|err| SyanError::config(format!("Failed to build HTTP client: {err}")))?;

        Ok(Self {
            client,
            api_key,
            endpoint: config.upstream_url.clone(),
            anthropic_version: config.anthropic_version.clone(),
        })
    }

    /// Overrides the endpoint after construction.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn transport_error(&self, context: &str, err: reqwest::Error) -> SyanError {
        SyanError::transport(self.api_key.redact(&format!("{context}: {err}")))
    }
}

#[async_trait]
impl MessagesUpstream for ClaudeMessagesClient {
    async fn send(&self, body: &Value) -> Result<UpstreamReply> {
        let response = self
            .client
            .post(&self.endpoint)
            .header("x-api-key", self.api_key.expose())
            .header("anthropic-version", &self.anthropic_version)
            .header("content-type", "application/json")
            .json(body)
            .send()
            .await
            .map_err(|err| self.transport_error("Messages API request failed", err))?;

        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|err| self.transport_error("Failed to read Messages API response", err))?;

        let body: Value = serde_json::from_slice(&bytes).map_err(|err| SyanError::Serialization {
            format: "JSON".to_string(),
            message: format!("Failed to parse Messages API response ({status}): {err}"),
        })?;

        if status.is_success() {
            tracing::debug!("[Upstream] {} answered {}", self.endpoint, status);
        } else {
            tracing::warn!("[Upstream] {} answered {}", self.endpoint, status);
        }

        Ok(UpstreamReply {
            status: status.as_u16(),
            body,
        })
    }
}
