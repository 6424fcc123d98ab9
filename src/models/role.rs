use serde::{Deserialize, Serialize};

use crate::domain::RoleId;

/// A named group users can be members of. Roles are shared: deleting a user
/// never deletes the roles it belonged to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    pub id: RoleId,
    pub name: String,
}

impl Role {
    /// Creates a role with a freshly generated id.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: RoleId::generate(),
            name: name.into(),
        }
    }
}
