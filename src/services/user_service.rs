//! Domain service for user lifecycle and membership mutations.
//!
//! Single entry point for everything that touches a user: the user row
//! itself, its claims, its external logins, and its role memberships. All
//! writes funnel through the store's commit boundary.

use thiserror::Error;

use crate::domain::{ClaimValue, LoginInfo, UserId};
use crate::models::{ExternalLogin, User};

/// Errors specific to user operations.
#[derive(Debug, Error)]
pub enum UserError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(&'static str),

    #[error("User not found: {0}")]
    UserNotFound(UserId),

    #[error("Role not found: {0}")]
    RoleNotFound(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<sea_orm::DbErr> for UserError {
    fn from(err: sea_orm::DbErr) -> Self {
        Self::Database(err.to_string())
    }
}

impl From<anyhow::Error> for UserError {
    fn from(err: anyhow::Error) -> Self {
        Self::Database(err.to_string())
    }
}

/// Domain service trait for user management.
///
/// Lookups (`find_*`) treat absence as a value and return `Option`; every
/// other operation that needs an existing user fails with
/// [`UserError::UserNotFound`] before mutating anything. Removal of claims,
/// logins and memberships is idempotent: removing something that is not
/// there succeeds and changes nothing.
#[async_trait::async_trait]
pub trait UserService: Send + Sync {
    /// Persists a new user and returns it with its assigned identifiers.
    ///
    /// # Errors
    ///
    /// Returns [`UserError::InvalidArgument`] if the username is blank.
    async fn create_user(&self, user: User) -> Result<User, UserError>;

    /// Deletes the user; owned claims, logins and memberships cascade.
    ///
    /// # Errors
    ///
    /// Returns [`UserError::UserNotFound`] if the user no longer exists.
    async fn delete_user(&self, user: &User) -> Result<(), UserError>;

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserError>;

    async fn find_by_name(&self, username: &str) -> Result<Option<User>, UserError>;

    /// Persists a changed username.
    ///
    /// # Errors
    ///
    /// Returns [`UserError::InvalidArgument`] on a blank username and
    /// [`UserError::UserNotFound`] if the user row is gone.
    async fn update_user(&self, user: &User) -> Result<(), UserError>;

    /// Appends a claim owned by the user.
    async fn add_claim(&self, user_id: UserId, claim: &ClaimValue) -> Result<(), UserError>;

    /// Snapshot of the user's claims. Mutating the returned list has no
    /// effect on stored state.
    async fn get_claims(&self, user_id: UserId) -> Result<Vec<ClaimValue>, UserError>;

    /// Removes the first claim matching (type, value). Removing a claim the
    /// user does not hold is a no-op that still succeeds.
    async fn remove_claim(&self, user_id: UserId, claim: &ClaimValue) -> Result<(), UserError>;

    /// Binds an external login to the user.
    async fn add_login(&self, user_id: UserId, login: LoginInfo) -> Result<(), UserError>;

    /// Removes the login matching (provider, key); absent logins are a
    /// silent no-op.
    async fn remove_login(&self, user_id: UserId, login: &LoginInfo) -> Result<(), UserError>;

    /// Looks a login up by (provider, key) with no user context at all.
    async fn find_login(&self, login: &LoginInfo) -> Result<Option<ExternalLogin>, UserError>;

    /// Snapshot of the user's (provider, key) pairs.
    async fn get_logins(&self, user_id: UserId) -> Result<Vec<LoginInfo>, UserError>;

    /// Adds the user to a role, found by name.
    ///
    /// # Errors
    ///
    /// - [`UserError::InvalidArgument`] on a blank role name
    /// - [`UserError::UserNotFound`] / [`UserError::RoleNotFound`] when
    ///   either side of the membership is missing
    async fn add_to_role(&self, user_id: UserId, role_name: &str) -> Result<(), UserError>;

    /// Removes the user from a role. A membership that does not exist is a
    /// no-op; an unknown role name is still [`UserError::RoleNotFound`].
    async fn remove_from_role(&self, user_id: UserId, role_name: &str) -> Result<(), UserError>;

    /// Snapshot of the names of the user's roles.
    async fn get_roles(&self, user_id: UserId) -> Result<Vec<String>, UserError>;

    /// Membership test by role name.
    ///
    /// # Errors
    ///
    /// Returns [`UserError::InvalidArgument`] on a blank role name.
    async fn is_in_role(&self, user_id: UserId, role_name: &str) -> Result<bool, UserError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn user_error_display() {
        let err = UserError::InvalidArgument("username must not be blank");
        assert_eq!(
            err.to_string(),
            "Invalid argument: username must not be blank"
        );

        let id = UserId::new(Uuid::nil());
        let err = UserError::UserNotFound(id);
        assert_eq!(
            err.to_string(),
            "User not found: 00000000-0000-0000-0000-000000000000"
        );

        let err = UserError::RoleNotFound("admin".to_string());
        assert_eq!(err.to_string(), "Role not found: admin");
    }
}
