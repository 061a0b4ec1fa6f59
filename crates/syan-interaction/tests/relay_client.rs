use axum::Router;
use axum::Json;
use axum::http::StatusCode;
use axum::routing::post;
use serde_json::{Value, json};
use syan_core::engine::GLOBAL_ENGINE;
use syan_core::{ComposeOptions, SelectionState, compose};
use syan_interaction::RelayClient;
use tokio::net::TcpListener;

async fn spawn(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}/.netlify/functions/analyze")
}

#[tokio::test]
async fn test_analyze_posts_composed_request() {
    let app = Router::new().route(
        "/.netlify/functions/analyze",
        post(|Json(body): Json<Value>| async move {
            Json(json!({
                "content": [{"type": "text", "text": body["model"].as_str().unwrap_or_default()}]
            }))
        }),
    );
    let client = RelayClient::new(spawn(app).await);

    let mut selection = SelectionState::new(&GLOBAL_ENGINE);
    selection.toggle(&GLOBAL_ENGINE, "hadcet").unwrap();
    selection.toggle(&GLOBAL_ENGINE, "noaa-sst").unwrap();
    let request = compose(&selection, &GLOBAL_ENGINE, &ComposeOptions::default()).unwrap();

    let result = client.analyze(&request).await.unwrap();
    assert!(result.is_success());
    assert_eq!(
        result.text_blocks().unwrap().as_deref(),
        Some(request.model.as_str())
    );
}

#[tokio::test]
async fn test_error_status_is_returned_as_result() {
    let app = Router::new().route(
        "/.netlify/functions/analyze",
        post(|| async {
            (
                StatusCode::BAD_REQUEST,
                Json(json!({"error": "Missing required field: messages or query"})),
            )
        }),
    );
    let client = RelayClient::new(spawn(app).await);

    let result = client.post(&json!({})).await.unwrap();
    assert_eq!(result.status, 400);
    assert_eq!(
        result.error_message().as_deref(),
        Some("Missing required field: messages or query")
    );
}
