//! Router assembly and process bootstrap.

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use syan_core::config::{ApiKey, RelayConfig};
use syan_interaction::ClaudeMessagesClient;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::handler::{AppState, relay};

/// Every path reaches the relay handler, including the
/// `/.netlify/functions/analyze` path older dashboards post to.
pub fn router(state: AppState) -> Router {
    Router::new()
        .fallback(relay)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Binds `config.bind_addr` and serves until Ctrl-C.
pub async fn serve(config: RelayConfig, api_key: ApiKey) -> Result<()> {
    let upstream = ClaudeMessagesClient::from_config(&config, api_key.clone())
        .context("Failed to create upstream client")?;
    let state = AppState::new(config.clone(), Arc::new(upstream)).with_redaction(api_key);

    let listener = TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr))?;
    tracing::info!(
        "[Relay] listening on {} -> {}",
        listener.local_addr()?,
        config.upstream_url
    );

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Relay server failed")?;

    tracing::info!("[Relay] shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("[Relay] failed to listen for Ctrl-C: {}", err);
        std::future::pending::<()>().await;
    }
}
