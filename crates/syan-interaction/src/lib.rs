//! HTTP clients for SYAN.EARTH.
//!
//! - [`ClaudeMessagesClient`]: the relay's upstream, holds the credential.
//! - [`RelayClient`]: what the dashboard uses to reach the relay.

pub mod claude_messages_client;
pub mod relay_client;

pub use claude_messages_client::ClaudeMessagesClient;
pub use relay_client::{DEFAULT_RELAY_URL, RelayClient};
