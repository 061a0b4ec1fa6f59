//! The relay endpoint.
//!
//! Per invocation:
//! 1. `OPTIONS` answers the CORS preflight without touching the body.
//! 2. Anything but `POST` is rejected with 405.
//! 3. The body is parsed, normalized and completed with defaults.
//! 4. One upstream call is made; its status and JSON body are passed back.
//!
//! Every non-preflight answer is JSON with `Access-Control-Allow-Origin: *`.

use std::sync::Arc;

use axum::body::{self, Body};
use axum::extract::{Request, State};
use axum::http::{Method, StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde_json::Value;
use syan_core::config::{ApiKey, RelayConfig};
use syan_core::upstream::{MessagesUpstream, UpstreamReply};

use crate::error::RelayError;
use crate::inbound::InboundBody;

/// Request bodies larger than this are rejected as malformed.
pub const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

/// Immutable state shared by all invocations.
#[derive(Clone)]
pub struct AppState {
    config: Arc<RelayConfig>,
    upstream: Arc<dyn MessagesUpstream>,
    api_key: Option<ApiKey>,
}

impl AppState {
    pub fn new(config: RelayConfig, upstream: Arc<dyn MessagesUpstream>) -> Self {
        Self {
            config: Arc::new(config),
            upstream,
            api_key: None,
        }
    }

    /// Registers the credential so it is scrubbed from every error body.
    pub fn with_redaction(mut self, api_key: ApiKey) -> Self {
        self.api_key = Some(api_key);
        self
    }

    pub fn config(&self) -> &RelayConfig {
        &self.config
    }
}

/// Axum handler mounted as the router fallback.
pub async fn relay(State(state): State<AppState>, request: Request) -> Response {
    let method = request.method().clone();

    if method == Method::OPTIONS {
        return preflight();
    }
    if method != Method::POST {
        tracing::debug!("[Relay] rejecting {} request", method);
        return error_response(&RelayError::MethodNotAllowed, state.api_key.as_ref());
    }

    let bytes = match body::to_bytes(request.into_body(), MAX_BODY_BYTES).await {
        Ok(bytes) => bytes,
        Err(err) => {
            let err = RelayError::InvalidBody(format!("Failed to read request body: {err}"));
            return error_response(&err, state.api_key.as_ref());
        }
    };

    match forward(&state, &bytes).await {
        Ok(reply) => {
            let status = StatusCode::from_u16(reply.status).unwrap_or(StatusCode::BAD_GATEWAY);
            json_response(status, &reply.body)
        }
        Err(err) => {
            let body = err.to_body(state.api_key.as_ref());
            tracing::warn!("[Relay] {} {}", err.status_code(), body["error"]);
            json_response(err.status_code(), &body)
        }
    }
}

/// Parse, normalize, apply defaults and call the upstream once.
async fn forward(state: &AppState, bytes: &[u8]) -> Result<UpstreamReply, RelayError> {
    let normalized = InboundBody::parse(bytes)?.normalize()?;
    let query_shape = normalized.shape.is_query();
    let forward_body = normalized.into_forward_body(&state.config);

    tracing::info!(
        "[Relay] forwarding model={} max_tokens={} messages={} query_shape={} tools={} mcp_servers={}",
        forward_body.model,
        forward_body.max_tokens,
        forward_body.messages.len(),
        query_shape,
        forward_body.tools.is_some(),
        forward_body.mcp_servers.is_some()
    );

    let payload = serde_json::to_value(&forward_body)?;
    let reply = state.upstream.send(&payload).await?;

    tracing::info!("[Relay] upstream answered {}", reply.status);
    Ok(reply)
}

fn preflight() -> Response {
    (
        StatusCode::OK,
        [
            (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
            (header::ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type"),
            (header::ACCESS_CONTROL_ALLOW_METHODS, "POST, OPTIONS"),
        ],
        Body::empty(),
    )
        .into_response()
}

fn error_response(err: &RelayError, api_key: Option<&ApiKey>) -> Response {
    json_response(err.status_code(), &err.to_body(api_key))
}

fn json_response(status: StatusCode, body: &Value) -> Response {
    (
        status,
        [
            (header::CONTENT_TYPE, "application/json"),
            (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
        ],
        body.to_string(),
    )
        .into_response()
}
