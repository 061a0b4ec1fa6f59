//! Stateless CORS relay in front of the Messages API.
//!
//! The relay holds the upstream credential so the dashboard never has to.

pub mod error;
pub mod handler;
pub mod inbound;
pub mod server;

pub use error::{MISSING_FIELD_MESSAGE, RelayError};
pub use handler::AppState;
pub use inbound::{ForwardBody, InboundBody, InboundShape, NormalizedRequest};
pub use server::{router, serve};
