use std::path::PathBuf;

use anyhow::Result;
use syan_core::config::{RelayConfig, resolve_api_key};

/// Loads configuration and credential, then runs the relay until Ctrl-C.
pub async fn run(addr: Option<String>, config: Option<PathBuf>, secret: Option<PathBuf>) -> Result<()> {
    let lookup = |key: &str| std::env::var(key).ok();

    let mut relay_config = RelayConfig::load(config.as_deref())?.apply_env(lookup)?;
    if let Some(addr) = addr {
        relay_config.bind_addr = addr;
    }
    let api_key = resolve_api_key(secret.as_deref(), lookup)?;

    syan_relay::serve(relay_config, api_key).await
}
