//! Upstream chat-completion service trait.
//!
//! The relay only knows this interface; the HTTP implementation lives in
//! `syan-interaction`, tests plug in stubs.

use serde_json::Value;

use crate::error::Result;

/// Status and parsed JSON body returned by the upstream.
#[derive(Debug, Clone, PartialEq)]
pub struct UpstreamReply {
    pub status: u16,
    pub body: Value,
}

/// A chat-completion endpoint that accepts a Messages API request body.
///
/// Implementations make exactly one call per `send` and never retry. Non-2xx
/// answers are returned as `Ok` replies so callers can pass the status through;
/// `Err` is reserved for transport and decoding failures. Error messages must
/// not contain the credential.
#[async_trait::async_trait]
pub trait MessagesUpstream: Send + Sync {
    async fn send(&self, body: &Value) -> Result<UpstreamReply>;
}
