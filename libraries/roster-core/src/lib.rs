//! Roster core library
//!
//! Domain types and the in-memory user store shared by the Roster
//! applications. There is no persistence layer: the store lives in process
//! memory for the lifetime of the serving process, and deletion is logical
//! (records are marked inactive, never removed).

pub mod error;
pub mod store;
pub mod types;

// Re-export commonly used types for convenience
pub use error::{CoreError, Result};
pub use store::UserStore;
pub use types::{User, UserDraft, UserId, UserPatch};
