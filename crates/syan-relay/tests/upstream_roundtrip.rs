use std::sync::Arc;

use axum::Json;
use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use axum::routing::post;
use serde_json::{Value, json};
use syan_core::config::{ApiKey, RelayConfig};
use syan_interaction::ClaudeMessagesClient;
use syan_relay::{AppState, router};
use tokio::net::TcpListener;
use tower::ServiceExt;

const KEY: &str = "sk-ant-roundtrip-secret";

async fn spawn_upstream(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}/v1/messages")
}

async fn closed_endpoint() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/v1/messages")
}

fn relay_for(endpoint: String) -> Router {
    let upstream = ClaudeMessagesClient::new(ApiKey::new(KEY)).with_endpoint(endpoint);
    let state =
        AppState::new(RelayConfig::default(), Arc::new(upstream)).with_redaction(ApiKey::new(KEY));
    router(state)
}

fn analyze_request(body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/.netlify/functions/analyze")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_overloaded_upstream_passes_through() {
    let upstream = Router::new().route(
        "/v1/messages",
        post(|| async {
            (
                StatusCode::from_u16(529).unwrap(),
                Json(json!({"type": "error", "error": {"type": "overloaded_error", "message": "Overloaded"}})),
            )
        }),
    );
    let app = relay_for(spawn_upstream(upstream).await);

    let response = app
        .oneshot(analyze_request(json!({"query": "X", "dataSources": ["A", "B"]})))
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 529);
    assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(
        body,
        json!({"type": "error", "error": {"type": "overloaded_error", "message": "Overloaded"}})
    );
}

#[tokio::test]
async fn test_unreachable_upstream_is_500_without_credential() {
    let app = relay_for(closed_endpoint().await);

    let response = app
        .oneshot(analyze_request(json!({"messages": [{"role": "user", "content": "hi"}]})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "application/json");

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let text = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(!text.contains(KEY));

    let body: Value = serde_json::from_str(&text).unwrap();
    let message = body["error"].as_str().unwrap();
    assert!(!message.is_empty());
    assert!(message.contains("Messages API request failed"));
}
