//! Domain service for role lifecycle management.

use thiserror::Error;

use crate::domain::RoleId;
use crate::models::Role;

/// Errors specific to role operations.
#[derive(Debug, Error)]
pub enum RoleError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(&'static str),

    #[error("Role not found: {0}")]
    NotFound(String),

    #[error("Role already exists: {0}")]
    AlreadyExists(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<sea_orm::DbErr> for RoleError {
    fn from(err: sea_orm::DbErr) -> Self {
        Self::Database(err.to_string())
    }
}

impl From<anyhow::Error> for RoleError {
    fn from(err: anyhow::Error) -> Self {
        Self::Database(err.to_string())
    }
}

/// Domain service trait for role management. Role names are unique; creation
/// of a duplicate name is rejected up front rather than surfaced as a
/// constraint violation.
#[async_trait::async_trait]
pub trait RoleService: Send + Sync {
    /// Creates a role with the given name.
    ///
    /// # Errors
    ///
    /// Returns [`RoleError::InvalidArgument`] on a blank name and
    /// [`RoleError::AlreadyExists`] when the name is taken.
    async fn create_role(&self, name: &str) -> Result<Role, RoleError>;

    /// Renames an existing role.
    async fn update_role(&self, role: &Role) -> Result<(), RoleError>;

    /// Deletes a role; membership rows cascade, users survive.
    async fn delete_role(&self, role: &Role) -> Result<(), RoleError>;

    async fn find_by_id(&self, id: RoleId) -> Result<Option<Role>, RoleError>;

    async fn find_by_name(&self, name: &str) -> Result<Option<Role>, RoleError>;

    async fn list_roles(&self) -> Result<Vec<Role>, RoleError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_error_display() {
        let err = RoleError::NotFound("admin".to_string());
        assert_eq!(err.to_string(), "Role not found: admin");

        let err = RoleError::AlreadyExists("admin".to_string());
        assert_eq!(err.to_string(), "Role already exists: admin");
    }
}
