pub mod analysis;
pub mod catalog;
pub mod composer;
pub mod config;
pub mod engine;
pub mod error;
pub mod report;
pub mod request;
pub mod selection;
pub mod upstream;

// Re-export common types
pub use composer::{ComposeOptions, compose};
pub use engine::{Engine, find_engine};
pub use error::{Result, SyanError};
pub use request::OutboundRequest;
pub use selection::SelectionState;
