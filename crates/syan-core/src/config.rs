//! Relay configuration.
//!
//! Non-secret settings come from `~/.config/syan/relay.toml` (or an explicit
//! path) with environment overrides. The upstream credential comes from
//! `~/.config/syan/secret.json`, falling back to `ANTHROPIC_API_KEY`.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, SyanError};
use crate::request::DEFAULT_MODEL;

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8787";
pub const DEFAULT_UPSTREAM_URL: &str = "https://api.anthropic.com/v1/messages";
pub const DEFAULT_ANTHROPIC_VERSION: &str = "2023-06-01";
pub const DEFAULT_RELAY_MAX_TOKENS: u32 = 4096;
pub const API_KEY_ENV: &str = "ANTHROPIC_API_KEY";

pub const DEFAULT_QUERY_SYSTEM_PROMPT: &str = "You are the SYAN.EARTH Correlation Engine, an expert in climate-ocean-biology pattern analysis. Focus on harmful algal blooms, particularly Karenia brevis in Tampa Bay and Gulf of Mexico. Provide scientifically grounded analysis with practical applications.";

/// Settings for the relay process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RelayConfig {
    pub bind_addr: String,
    pub upstream_url: String,
    pub anthropic_version: String,
    pub default_model: String,
    pub default_max_tokens: u32,
    /// System prompt used for `{query, dataSources}` requests without `system`.
    pub query_system_prompt: String,
    /// No deadline on the upstream call when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upstream_timeout_secs: Option<u64>,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            upstream_url: DEFAULT_UPSTREAM_URL.to_string(),
            anthropic_version: DEFAULT_ANTHROPIC_VERSION.to_string(),
            default_model: DEFAULT_MODEL.to_string(),
            default_max_tokens: DEFAULT_RELAY_MAX_TOKENS,
            query_system_prompt: DEFAULT_QUERY_SYSTEM_PROMPT.to_string(),
            upstream_timeout_secs: None,
        }
    }
}

impl RelayConfig {
    /// Loads configuration from `path`, or from the default location when `None`.
    ///
    /// A missing file yields the defaults; a malformed one is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => match config_dir() {
                Ok(dir) => dir.join("relay.toml"),
                Err(_) => return Ok(Self::default()),
            },
        };

        if !path.exists() {
            tracing::debug!("[Config] {} not found, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        let config: Self = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Applies `SYAN_*` overrides read through `lookup`.
    ///
    /// Taking a lookup function keeps this testable without touching the
    /// process environment.
    pub fn apply_env<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(addr) = lookup("SYAN_BIND_ADDR") {
            self.bind_addr = addr;
        }
        if let Some(url) = lookup("SYAN_UPSTREAM_URL") {
            self.upstream_url = url;
        }
        if let Some(model) = lookup("SYAN_DEFAULT_MODEL") {
            self.default_model = model;
        }
        if let Some(raw) = lookup("SYAN_DEFAULT_MAX_TOKENS") {
            self.default_max_tokens = raw.parse().map_err(|_| {
                SyanError::config(format!("SYAN_DEFAULT_MAX_TOKENS is not a number: {raw}"))
            })?;
        }
        self.validate()?;
        Ok(self)
    }

    fn validate(&self) -> Result<()> {
        if self.default_max_tokens == 0 {
            return Err(SyanError::config("default_max_tokens must be positive"));
        }
        if self.default_model.trim().is_empty() {
            return Err(SyanError::config("default_model must not be empty"));
        }
        if self.upstream_url.trim().is_empty() {
            return Err(SyanError::config("upstream_url must not be empty"));
        }
        Ok(())
    }
}

/// Upstream credential. `Debug` and `Display` never print the value.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Replaces every occurrence of the key in `text`.
    pub fn redact(&self, text: &str) -> String {
        if self.0.is_empty() {
            text.to_string()
        } else {
            text.replace(&self.0, "[redacted]")
        }
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey([redacted])")
    }
}

impl fmt::Display for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[redacted]")
    }
}

/// Root structure of secret.json
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SecretConfig {
    #[serde(default)]
    pub anthropic: Option<AnthropicSecret>,
}

#[derive(Clone, Deserialize)]
pub struct AnthropicSecret {
    pub api_key: String,
}

impl fmt::Debug for AnthropicSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnthropicSecret")
            .field("api_key", &"[redacted]")
            .finish()
    }
}

impl SecretConfig {
    /// Reads a secret.json file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            SyanError::config(format!(
                "Failed to read secret file at {}: {}",
                path.display(),
                e
            ))
        })?;
        serde_json::from_str(&content).map_err(|e| {
            SyanError::config(format!(
                "Failed to parse secret file at {}: {}",
                path.display(),
                e
            ))
        })
    }
}

/// Resolves the upstream credential.
///
/// Priority:
/// 1. `secret_path` (default `~/.config/syan/secret.json`) when it exists
/// 2. `ANTHROPIC_API_KEY` via `lookup`
pub fn resolve_api_key<F>(secret_path: Option<&Path>, lookup: F) -> Result<ApiKey>
where
    F: Fn(&str) -> Option<String>,
{
    let secret_path = match secret_path {
        Some(p) => Some(p.to_path_buf()),
        None => config_dir().ok().map(|dir| dir.join("secret.json")),
    };

    if let Some(path) = secret_path.filter(|p| p.exists()) {
        let secrets = SecretConfig::load_from(&path)?;
        if let Some(anthropic) = secrets.anthropic
            && !anthropic.api_key.trim().is_empty()
        {
            return Ok(ApiKey::new(anthropic.api_key));
        }
    }

    lookup(API_KEY_ENV)
        .filter(|v| !v.trim().is_empty())
        .map(ApiKey::new)
        .ok_or_else(|| {
            SyanError::config(format!(
                "{API_KEY_ENV} not found in ~/.config/syan/secret.json or environment variables"
            ))
        })
}

/// Returns `~/.config/syan`.
pub fn config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| SyanError::config("Could not determine home directory"))?;
    Ok(home.join(".config").join("syan"))
}
