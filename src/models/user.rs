use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::domain::UserId;

/// The user aggregate root.
///
/// Claims, external logins and role memberships hang off the user in the
/// store; this model carries only the user's own attributes. Collection
/// reads (`get_claims`, `get_logins`, `get_roles`) always return snapshots,
/// never views into persisted state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub created_at: String,
    pub updated_at: String,
}

impl User {
    /// Creates a user with a freshly generated id and current timestamps.
    #[must_use]
    pub fn new(username: impl Into<String>) -> Self {
        Self::with_id(UserId::generate(), username)
    }

    /// Creates a user keeping a caller-supplied id (identity adapters hand
    /// ids in from the outside).
    #[must_use]
    pub fn with_id(id: UserId, username: impl Into<String>) -> Self {
        let now = Utc::now().to_rfc3339();
        Self {
            id,
            username: username.into(),
            created_at: now.clone(),
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_user_gets_distinct_ids() {
        let a = User::new("alice");
        let b = User::new("alice");
        assert_ne!(a.id, b.id);
        assert_eq!(a.username, "alice");
    }

    #[test]
    fn with_id_keeps_the_given_id() {
        let id = UserId::generate();
        let user = User::with_id(id, "bob");
        assert_eq!(user.id, id);
    }
}
