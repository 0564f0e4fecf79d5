/// In-memory user store
use crate::error::{CoreError, Result};
use crate::types::{User, UserDraft, UserId, UserPatch};

/// Insertion-ordered collection of user records held in process memory.
///
/// Records are never physically removed; the delete operation only clears
/// the active flag. Identifier uniqueness comes from the generation scheme
/// alone, there is no explicit uniqueness check on input.
#[derive(Debug, Default)]
pub struct UserStore {
    users: Vec<User>,
}

impl UserStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self { users: Vec::new() }
    }

    /// Create a store pre-loaded with the sample fixture records: two
    /// active users and one inactive one.
    pub fn with_sample_users() -> Self {
        let mut store = Self::new();
        store.users.push(User::new("User01", "user01@example.com"));
        store.users.push(User::new("User02", "user02@example.com"));
        let mut inactive = User::new("User03", "user03@example.com");
        inactive.is_active = false;
        store.users.push(inactive);
        store
    }

    /// All records, active and inactive, in insertion order
    pub fn records(&self) -> &[User] {
        &self.users
    }

    /// Number of records in the store, active or not
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Whether the store holds no records at all
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Active users only, in insertion order
    pub fn list_active(&self) -> Vec<User> {
        self.users.iter().filter(|u| u.is_active).cloned().collect()
    }

    /// First record whose id matches, if any. Linear scan.
    pub fn find_by_id(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|u| u.id.as_str() == id)
    }

    fn find_by_id_mut(&mut self, id: &str) -> Option<&mut User> {
        self.users.iter_mut().find(|u| u.id.as_str() == id)
    }

    /// Create a new user from a draft and append it to the store.
    ///
    /// The id is generated here and any client-supplied active flag is
    /// ignored: new records always start active.
    pub fn create(&mut self, draft: &UserDraft) -> Result<User> {
        let (name, email) = validated_fields(draft)?;
        let user = User::new(name, email);
        self.users.push(user.clone());
        Ok(user)
    }

    /// Replace `name`, `email` and `is_active` of an existing record,
    /// keeping its id.
    ///
    /// The draft is validated before the id lookup, so an invalid body on
    /// an unknown id reports a validation error rather than not-found.
    /// When the draft carries no active flag it defaults to `true`.
    pub fn replace(&mut self, id: &str, draft: &UserDraft) -> Result<User> {
        let (name, email) = validated_fields(draft)?;
        let is_active = draft.is_active.unwrap_or(true);
        let user = self
            .find_by_id_mut(id)
            .ok_or_else(|| CoreError::NotFound(UserId::new(id)))?;
        user.name = name;
        user.email = email;
        user.is_active = is_active;
        Ok(user.clone())
    }

    /// Apply the supplied fields of a patch to an existing record, leaving
    /// absent fields untouched. The lookup happens first, so an unknown id
    /// reports not-found even when the patch itself is invalid.
    ///
    /// Fields are applied one at a time with no rollback: when `name` has
    /// already been applied and `email` then fails the emptiness check, the
    /// new name sticks. This mirrors the historical behavior of the API and
    /// is relied upon by its tests.
    pub fn patch(&mut self, id: &str, patch: &UserPatch) -> Result<User> {
        let user = self
            .find_by_id_mut(id)
            .ok_or_else(|| CoreError::NotFound(UserId::new(id)))?;

        if let Some(name) = &patch.name {
            if name.is_empty() {
                return Err(CoreError::Validation(
                    "The field 'name' must not be empty".to_string(),
                ));
            }
            user.name = name.clone();
        }

        if let Some(email) = &patch.email {
            if email.is_empty() {
                return Err(CoreError::Validation(
                    "The field 'email' must not be empty".to_string(),
                ));
            }
            user.email = email.clone();
        }

        if let Some(is_active) = patch.is_active {
            user.is_active = is_active;
        }

        Ok(user.clone())
    }

    /// Logical delete: mark the record inactive. The record stays in the
    /// store and remains reachable by id.
    pub fn logical_delete(&mut self, id: &str) -> Result<User> {
        let user = self
            .find_by_id_mut(id)
            .ok_or_else(|| CoreError::NotFound(UserId::new(id)))?;
        user.is_active = false;
        Ok(user.clone())
    }
}

/// Validate that a draft carries both required fields, non-empty.
fn validated_fields(draft: &UserDraft) -> Result<(String, String)> {
    let (Some(name), Some(email)) = (&draft.name, &draft.email) else {
        return Err(CoreError::Validation(
            "The fields 'name' and 'email' are required".to_string(),
        ));
    };
    if name.is_empty() || email.is_empty() {
        return Err(CoreError::Validation(
            "The fields 'name' and 'email' must not be empty".to_string(),
        ));
    }
    Ok((name.clone(), email.clone()))
}
