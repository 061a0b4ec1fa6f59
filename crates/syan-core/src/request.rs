//! Outbound chat-completion request model.
//!
//! Serializes to the wire shape accepted by the Messages API and by the relay's
//! direct input shape.

use serde::{Deserialize, Serialize};

pub const DEFAULT_MODEL: &str = "claude-sonnet-4-20250514";

pub const WEB_SEARCH_TOOL_TYPE: &str = "web_search_20250305";
pub const WEB_SEARCH_TOOL_NAME: &str = "web_search";

pub const KNOWLEDGE_BASE_URL: &str = "https://mcp.notion.com/mcp";
pub const KNOWLEDGE_BASE_NAME: &str = "notion-mcp";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// A server-side tool the model may call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolDescriptor {
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
}

impl ToolDescriptor {
    pub fn web_search() -> Self {
        Self {
            kind: WEB_SEARCH_TOOL_TYPE.to_string(),
            name: WEB_SEARCH_TOOL_NAME.to_string(),
        }
    }
}

/// A remote MCP server exposed to the model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct McpServerDescriptor {
    #[serde(rename = "type")]
    pub kind: String,
    pub url: String,
    pub name: String,
}

impl McpServerDescriptor {
    pub fn knowledge_base() -> Self {
        Self {
            kind: "url".to_string(),
            url: KNOWLEDGE_BASE_URL.to_string(),
            name: KNOWLEDGE_BASE_NAME.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutboundRequest {
    pub model: String,
    pub max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,
    pub messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tools: Option<Vec<ToolDescriptor>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mcp_servers: Option<Vec<McpServerDescriptor>>,
}
