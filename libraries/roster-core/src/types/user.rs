/// User domain types
use crate::types::UserId;
use serde::{Deserialize, Serialize};

/// A registered user record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier, assigned at creation and never changed
    pub id: UserId,

    /// Display name, always non-empty
    pub name: String,

    /// Contact email, always non-empty (no format validation is performed)
    pub email: String,

    /// Active flag; logical deletion clears this
    pub is_active: bool,
}

impl User {
    /// Create a new active user with a freshly generated id
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: UserId::generate(),
            name: name.into(),
            email: email.into(),
            is_active: true,
        }
    }
}

/// Full-record input payload for create and replace operations.
///
/// Every field is optional at the payload level so that an absent key can be
/// told apart from a supplied value; create and replace reject drafts whose
/// `name` or `email` is absent or empty. Unknown keys in the source JSON are
/// silently ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserDraft {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub email: Option<String>,

    #[serde(default)]
    pub is_active: Option<bool>,
}

/// Partial-record input payload for the patch operation.
///
/// Absent fields leave the stored record untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserPatch {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub email: Option<String>,

    #[serde(default)]
    pub is_active: Option<bool>,
}
