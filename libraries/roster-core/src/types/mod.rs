/// Domain types for Roster entities
mod ids;
mod user;

pub use ids::UserId;
pub use user::{User, UserDraft, UserPatch};
