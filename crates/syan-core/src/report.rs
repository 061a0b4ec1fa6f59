//! Relay results as seen by the dashboard.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::catalog::DomainCategory;
use crate::error::{Result, SyanError};

pub const NO_ANALYSIS_TEXT: &str = "No analysis returned";

/// Raw relay answer: HTTP status plus the opaque JSON body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayResult {
    pub status: u16,
    pub body_text: String,
}

impl RelayResult {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Concatenates the `text` content blocks of the body, newline-joined.
    ///
    /// Returns `None` when the body has no text blocks.
    pub fn text_blocks(&self) -> Result<Option<String>> {
        let body: Value = serde_json::from_str(&self.body_text)?;
        Ok(extract_text(&body))
    }

    /// The `error` field of an error body, if present.
    pub fn error_message(&self) -> Option<String> {
        let body: Value = serde_json::from_str(&self.body_text).ok()?;
        match body.get("error")? {
            Value::String(message) => Some(message.clone()),
            // Upstream errors nest the message: {"error": {"type", "message"}}
            nested => nested
                .get("message")
                .and_then(Value::as_str)
                .map(str::to_string)
                .or_else(|| Some(nested.to_string())),
        }
    }
}

/// Joins every `{"type": "text", "text": ...}` block of `content`, in order.
pub fn extract_text(body: &Value) -> Option<String> {
    let texts: Vec<&str> = body
        .get("content")?
        .as_array()?
        .iter()
        .filter(|block| block.get("type").and_then(Value::as_str) == Some("text"))
        .filter_map(|block| block.get("text").and_then(Value::as_str))
        .collect();
    if texts.is_empty() {
        None
    } else {
        Some(texts.join("\n"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolsUsed {
    pub web_search: bool,
    pub knowledge_base: bool,
}

/// What the dashboard renders after a successful analysis.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub analysis: String,
    pub sources: Vec<String>,
    pub domains: Vec<DomainCategory>,
    pub timestamp: DateTime<Utc>,
    pub tools_used: ToolsUsed,
}

impl AnalysisReport {
    /// Builds a report from a relay answer.
    ///
    /// Non-success statuses become [`SyanError::Upstream`] carrying the body's
    /// error message so the view can show a banner.
    pub fn from_relay_result(
        result: &RelayResult,
        sources: Vec<String>,
        domains: Vec<DomainCategory>,
        tools_used: ToolsUsed,
    ) -> Result<Self> {
        if !result.is_success() {
            let message = result
                .error_message()
                .unwrap_or_else(|| result.body_text.clone());
            return Err(SyanError::upstream(result.status, message));
        }

        let analysis = result
            .text_blocks()?
            .unwrap_or_else(|| NO_ANALYSIS_TEXT.to_string());

        Ok(Self {
            analysis,
            sources,
            domains,
            timestamp: Utc::now(),
            tools_used,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn result(status: u16, body: Value) -> RelayResult {
        RelayResult {
            status,
            body_text: body.to_string(),
        }
    }

    const TOOLS: ToolsUsed = ToolsUsed {
        web_search: true,
        knowledge_base: false,
    };

    #[test]
    fn test_extract_text_skips_non_text_blocks() {
        let body = json!({
            "content": [
                {"type": "text", "text": "First"},
                {"type": "server_tool_use", "name": "web_search"},
                {"type": "web_search_tool_result", "content": []},
                {"type": "text", "text": "Second"}
            ]
        });
        assert_eq!(extract_text(&body).as_deref(), Some("First\nSecond"));
        assert_eq!(extract_text(&json!({"content": []})), None);
        assert_eq!(extract_text(&json!({})), None);
    }

    #[test]
    fn test_report_from_success() {
        let relay = result(200, json!({"content": [{"type": "text", "text": "R = 0.62"}]}));
        let report = AnalysisReport::from_relay_result(
            &relay,
            vec!["HadCET".into(), "NOAA SST".into()],
            vec![DomainCategory::Weather, DomainCategory::Ocean],
            TOOLS,
        )
        .unwrap();
        assert_eq!(report.analysis, "R = 0.62");
        assert_eq!(report.sources.len(), 2);
    }

    #[test]
    fn test_report_without_text_uses_placeholder() {
        let relay = result(200, json!({"content": [{"type": "tool_use"}]}));
        let report = AnalysisReport::from_relay_result(&relay, vec![], vec![], TOOLS).unwrap();
        assert_eq!(report.analysis, NO_ANALYSIS_TEXT);
    }

    #[test]
    fn test_report_from_relay_error() {
        let relay = result(500, json!({"error": "connection refused"}));
        let err = AnalysisReport::from_relay_result(&relay, vec![], vec![], TOOLS).unwrap_err();
        assert_eq!(err, SyanError::upstream(500, "connection refused"));
    }

    #[test]
    fn test_report_from_upstream_error_body() {
        let relay = result(
            529,
            json!({"type": "error", "error": {"type": "overloaded_error", "message": "Overloaded"}}),
        );
        let err = AnalysisReport::from_relay_result(&relay, vec![], vec![], TOOLS).unwrap_err();
        assert_eq!(err.upstream_status(), Some(529));
        assert!(err.to_string().contains("Overloaded"));
    }
}
