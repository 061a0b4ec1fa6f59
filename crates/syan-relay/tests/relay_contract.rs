use std::sync::{Arc, Mutex};

use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use axum::response::Response;
use serde_json::{Value, json};
use syan_core::config::{ApiKey, RelayConfig};
use syan_core::upstream::{MessagesUpstream, UpstreamReply};
use syan_core::{Result, SyanError};
use syan_relay::{AppState, MISSING_FIELD_MESSAGE, router};
use tower::ServiceExt;

const KEY: &str = "sk-ant-relay-test-key";

/// Records every body it receives and answers with a canned reply.
struct StubUpstream {
    calls: Mutex<Vec<Value>>,
    reply: std::result::Result<UpstreamReply, SyanError>,
}

impl StubUpstream {
    fn replying(status: u16, body: Value) -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            reply: Ok(UpstreamReply { status, body }),
        })
    }

    fn failing(err: SyanError) -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            reply: Err(err),
        })
    }

    fn calls(&self) -> Vec<Value> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl MessagesUpstream for StubUpstream {
    async fn send(&self, body: &Value) -> Result<UpstreamReply> {
        self.calls.lock().unwrap().push(body.clone());
        self.reply.clone()
    }
}

fn app(upstream: Arc<StubUpstream>) -> axum::Router {
    let state = AppState::new(RelayConfig::default(), upstream).with_redaction(ApiKey::new(KEY));
    router(state)
}

fn post(body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/.netlify/functions/analyze")
        .header(header::CONTENT_TYPE, "application/json")
        .body(body.into())
        .unwrap()
}

async fn read(response: Response) -> (StatusCode, String) {
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

fn assert_json_cors(response: &Response) {
    let headers = response.headers();
    assert_eq!(headers[header::CONTENT_TYPE], "application/json");
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
}

#[tokio::test]
async fn test_preflight_ignores_body() {
    let upstream = StubUpstream::replying(200, json!({}));
    let request = Request::builder()
        .method("OPTIONS")
        .uri("/anything")
        .body(Body::from("{not json at all"))
        .unwrap();

    let response = app(upstream.clone()).oneshot(request).await.unwrap();
    let headers = response.headers().clone();
    let (status, body) = read(response).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.is_empty());
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_HEADERS], "Content-Type");
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_METHODS], "POST, OPTIONS");
    assert!(upstream.calls().is_empty());
}

#[tokio::test]
async fn test_other_methods_are_rejected() {
    let upstream = StubUpstream::replying(200, json!({}));
    let request = Request::builder()
        .method("GET")
        .uri("/")
        .body(Body::empty())
        .unwrap();

    let response = app(upstream.clone()).oneshot(request).await.unwrap();
    assert_json_cors(&response);
    let (status, body) = read(response).await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(
        serde_json::from_str::<Value>(&body).unwrap(),
        json!({"error": "Method Not Allowed"})
    );
    assert!(upstream.calls().is_empty());
}

#[tokio::test]
async fn test_missing_messages_and_query_is_400() {
    let upstream = StubUpstream::replying(200, json!({}));
    let response = app(upstream.clone()).oneshot(post("{}")).await.unwrap();
    assert_json_cors(&response);
    let (status, body) = read(response).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        serde_json::from_str::<Value>(&body).unwrap(),
        json!({"error": MISSING_FIELD_MESSAGE})
    );
    assert!(upstream.calls().is_empty());
}

#[tokio::test]
async fn test_malformed_json_is_500() {
    let upstream = StubUpstream::replying(200, json!({}));
    let response = app(upstream.clone()).oneshot(post("{\"query\":")).await.unwrap();
    assert_json_cors(&response);
    let (status, body) = read(response).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = serde_json::from_str(&body).unwrap();
    assert!(!body["error"].as_str().unwrap().is_empty());
    assert!(upstream.calls().is_empty());
}

#[tokio::test]
async fn test_query_shape_is_expanded_with_defaults() {
    let upstream = StubUpstream::replying(200, json!({"content": [{"type": "text", "text": "done"}]}));
    let body = json!({"query": "X", "dataSources": ["A", "B"]}).to_string();

    let response = app(upstream.clone()).oneshot(post(body)).await.unwrap();
    let (status, _) = read(response).await;
    assert_eq!(status, StatusCode::OK);

    let calls = upstream.calls();
    assert_eq!(calls.len(), 1);
    let sent = &calls[0];
    assert_eq!(sent["model"], "claude-sonnet-4-20250514");
    assert_eq!(sent["max_tokens"], 4096);
    assert!(sent["system"].as_str().unwrap().contains("SYAN.EARTH Correlation Engine"));

    let messages = sent["messages"].as_array().unwrap();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0]["role"], "user");
    let content = messages[0]["content"].as_str().unwrap();
    assert!(content.contains('X'));
    assert!(content.contains('A'));
    assert!(content.contains('B'));
}

#[tokio::test]
async fn test_direct_shape_passes_through_verbatim() {
    let upstream = StubUpstream::replying(200, json!({"id": "msg_1"}));
    let body = json!({
        "model": "claude-opus-4-1-20250805",
        "max_tokens": 2000,
        "system": "sys",
        "messages": [{"role": "user", "content": "hello"}],
        "tools": [{"type": "web_search_20250305", "name": "web_search"}],
        "mcp_servers": [{"type": "url", "url": "https://mcp.notion.com/mcp", "name": "notion-mcp"}]
    });

    let response = app(upstream.clone()).oneshot(post(body.to_string())).await.unwrap();
    let (status, response_body) = read(response).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        serde_json::from_str::<Value>(&response_body).unwrap(),
        json!({"id": "msg_1"})
    );

    assert_eq!(upstream.calls(), vec![body]);
}

#[tokio::test]
async fn test_upstream_status_is_passed_through() {
    let upstream = StubUpstream::replying(529, json!({"type": "error"}));
    let body = json!({"messages": [{"role": "user", "content": "hi"}]}).to_string();

    let response = app(upstream.clone()).oneshot(post(body)).await.unwrap();
    assert_json_cors(&response);
    let (status, body) = read(response).await;

    assert_eq!(status.as_u16(), 529);
    assert_eq!(serde_json::from_str::<Value>(&body).unwrap(), json!({"type": "error"}));
    assert_eq!(upstream.calls().len(), 1);
}

#[tokio::test]
async fn test_upstream_failure_is_500_without_credential() {
    let upstream = StubUpstream::failing(SyanError::transport(format!(
        "Messages API request failed: connection refused (key {KEY})"
    )));
    let body = json!({"query": "X"}).to_string();

    let response = app(upstream.clone()).oneshot(post(body)).await.unwrap();
    assert_json_cors(&response);
    let (status, body) = read(response).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(!body.contains(KEY));
    let body: Value = serde_json::from_str(&body).unwrap();
    let message = body["error"].as_str().unwrap();
    assert!(message.contains("connection refused"));
    assert_eq!(upstream.calls().len(), 1);
}
