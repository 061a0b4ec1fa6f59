//! Inbound body parsing and normalization.
//!
//! The relay accepts two body shapes: a ready `messages` array, or a
//! `{query, dataSources}` shortcut that gets expanded into a single user
//! message. Both are resolved into [`InboundShape`] before defaults are applied.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use syan_core::config::RelayConfig;

use crate::error::RelayError;

/// Raw caller body. Every field is optional at this stage.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InboundBody {
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub max_tokens: Option<u32>,
    #[serde(default)]
    pub messages: Option<Vec<Value>>,
    #[serde(default)]
    pub query: Option<String>,
    #[serde(default, rename = "dataSources", alias = "data_sources")]
    pub data_sources: Option<Vec<String>>,
    #[serde(default)]
    pub system: Option<String>,
    #[serde(default)]
    pub tools: Option<Value>,
    #[serde(default)]
    pub mcp_servers: Option<Value>,
    /// Older dashboards send MCP servers under this name
    #[serde(default, rename = "externalServices")]
    pub external_services: Option<Value>,
}

/// The two accepted request shapes.
#[derive(Debug, Clone, PartialEq)]
pub enum InboundShape {
    /// Caller supplied `messages`; forwarded as-is.
    Direct { messages: Vec<Value> },
    /// Caller supplied `query` (+ optional `dataSources`).
    Query {
        query: String,
        data_sources: Vec<String>,
    },
}

impl InboundShape {
    pub fn is_query(&self) -> bool {
        matches!(self, Self::Query { .. })
    }

    fn into_messages(self) -> Vec<Value> {
        match self {
            Self::Direct { messages } => messages,
            Self::Query {
                query,
                data_sources,
            } => vec![json!({
                "role": "user",
                "content": query_prompt(&query, &data_sources),
            })],
        }
    }
}

/// A body whose shape has been resolved, defaults not yet applied.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedRequest {
    pub shape: InboundShape,
    pub model: Option<String>,
    pub max_tokens: Option<u32>,
    pub system: Option<String>,
    pub tools: Option<Value>,
    pub mcp_servers: Option<Value>,
}

/// The exact body sent upstream.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForwardBody {
    pub model: String,
    pub max_tokens: u32,
    pub messages: Vec<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tools: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mcp_servers: Option<Value>,
}

impl InboundBody {
    /// Parses a raw request body.
    pub fn parse(bytes: &[u8]) -> Result<Self, RelayError> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Resolves the body shape. `messages` wins when both are present; an
    /// empty `query` counts as absent. `mcp_servers` wins over
    /// `externalServices`.
    pub fn normalize(self) -> Result<NormalizedRequest, RelayError> {
        let shape = match (self.messages, non_empty(self.query)) {
            (Some(messages), _) => InboundShape::Direct { messages },
            (None, Some(query)) => InboundShape::Query {
                query,
                data_sources: self.data_sources.unwrap_or_default(),
            },
            (None, None) => return Err(RelayError::MissingField),
        };

        Ok(NormalizedRequest {
            shape,
            model: non_empty(self.model),
            max_tokens: self.max_tokens.filter(|n| *n > 0),
            system: non_empty(self.system),
            tools: self.tools.filter(|v| !v.is_null()),
            mcp_servers: self
                .mcp_servers
                .filter(|v| !v.is_null())
                .or(self.external_services.filter(|v| !v.is_null())),
        })
    }
}

impl NormalizedRequest {
    /// Applies the configured defaults.
    ///
    /// The query-shape system prompt is used only when the caller sent no
    /// `system` and used the query shape.
    pub fn into_forward_body(self, config: &RelayConfig) -> ForwardBody {
        let system = match self.system {
            Some(system) => Some(system),
            None if self.shape.is_query() => Some(config.query_system_prompt.clone()),
            None => None,
        };

        ForwardBody {
            model: self.model.unwrap_or_else(|| config.default_model.clone()),
            max_tokens: self.max_tokens.unwrap_or(config.default_max_tokens),
            messages: self.shape.into_messages(),
            system,
            tools: self.tools,
            mcp_servers: self.mcp_servers,
        }
    }
}

/// Single user message for the `{query, dataSources}` shape.
pub fn query_prompt(query: &str, data_sources: &[String]) -> String {
    format!(
        "Analyze this climate correlation query:

Query: {query}

Data Sources to consider: {sources}

Provide analysis with:
1. Finding title
2. Confidence score (0-100%)
3. Correlation type
4. Key variables
5. R-value estimate
6. Layman's summary (2-3 sentences anyone can understand)
7. Problem solved (real-world impact)
8. Ideal organizations that would benefit

Format response as JSON.",
        sources = data_sources.join(", ")
    )
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
