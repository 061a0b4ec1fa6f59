//! RelayClient - caller side of the relay contract.
//!
//! The dashboard never talks to the upstream directly and never holds the
//! credential; every analysis goes through the relay.

use reqwest::Client;
use serde::Serialize;
use syan_core::report::RelayResult;
use syan_core::{OutboundRequest, Result, SyanError};

pub const DEFAULT_RELAY_URL: &str = "http://127.0.0.1:8787/.netlify/functions/analyze";

#[derive(Clone)]
pub struct RelayClient {
    client: Client,
    url: String,
}

impl RelayClient {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Sends a composed request and returns the relay's status and body.
    pub async fn analyze(&self, request: &OutboundRequest) -> Result<RelayResult> {
        self.post(request).await
    }

    /// Sends any JSON body, e.g. the `{query, dataSources}` shape.
    pub async fn post<B: Serialize + ?Sized>(&self, body: &B) -> Result<RelayResult> {
        let response = self
            .client
            .post(&self.url)
            .json(body)
            .send()
            .await
            .map_err(|err| SyanError::transport(format!("Relay request failed: {err}")))?;

        let status = response.status().as_u16();
        let body_text = response
            .text()
            .await
            .map_err(|err| SyanError::transport(format!("Failed to read relay response: {err}")))?;

        tracing::debug!("[RelayClient] {} answered {}", self.url, status);
        Ok(RelayResult { status, body_text })
    }
}
