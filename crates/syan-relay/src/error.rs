//! Relay failures and their HTTP rendering.

use axum::http::StatusCode;
use serde_json::{Value, json};
use syan_core::SyanError;
use syan_core::config::ApiKey;
use thiserror::Error;

pub const MISSING_FIELD_MESSAGE: &str = "Missing required field: messages or query";

/// Everything that ends an invocation without an upstream reply.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("Method Not Allowed")]
    MethodNotAllowed,

    #[error("Missing required field: messages or query")]
    MissingField,

    /// Body could not be read or is not the JSON object we expect
    #[error("{0}")]
    InvalidBody(String),

    /// Transport or decoding failure talking to the upstream
    #[error("{0}")]
    Upstream(String),
}

impl RelayError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::MissingField => StatusCode::BAD_REQUEST,
            Self::InvalidBody(_) | Self::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// `{"error": message}` with the credential scrubbed.
    pub fn to_body(&self, api_key: Option<&ApiKey>) -> Value {
        let message = self.to_string();
        let message = match api_key {
            Some(key) => key.redact(&message),
            None => message,
        };
        json!({ "error": message })
    }
}

impl From<serde_json::Error> for RelayError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidBody(err.to_string())
    }
}

impl From<SyanError> for RelayError {
    fn from(err: SyanError) -> Self {
        Self::Upstream(err.to_string())
    }
}
