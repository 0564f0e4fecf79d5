//! Roster Server Library
//!
//! In-memory user registry behind an HTTP API: list active users, create,
//! replace, patch and logically delete records.
//!
//! This library exposes the core components for testing purposes.

pub mod api;
pub mod config;
pub mod error;
pub mod state;

// Re-export commonly used types for convenience
pub use config::ServerConfig;
pub use error::{Result, ServerError};
pub use state::AppState;
