/// Core error types for Roster
use crate::types::UserId;
use thiserror::Error;

/// Result type alias using `CoreError`
pub type Result<T> = std::result::Result<T, CoreError>;

/// Core error type for Roster store operations
#[derive(Error, Debug)]
pub enum CoreError {
    /// Missing or empty required field
    #[error("{0}")]
    Validation(String),

    /// User not found
    #[error("User not found: {0}")]
    NotFound(UserId),
}
