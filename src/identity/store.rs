//! The storage contract an authentication framework expects.

use uuid::Uuid;

use crate::domain::{ClaimValue, LoginInfo};
use crate::identity::{IdentityRole, IdentityStoreError, IdentityUser};

/// User storage as required by the identity framework: user lifecycle plus
/// claim, login and role-membership management, addressed by raw UUIDs.
#[async_trait::async_trait]
pub trait UserStore: Send + Sync {
    /// Persists the given user record (the framework supplies the id).
    async fn create(&self, user: IdentityUser) -> Result<IdentityUser, IdentityStoreError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<IdentityUser>, IdentityStoreError>;

    async fn find_by_name(
        &self,
        username: &str,
    ) -> Result<Option<IdentityUser>, IdentityStoreError>;

    async fn update(&self, user: &IdentityUser) -> Result<(), IdentityStoreError>;

    async fn delete(&self, user: &IdentityUser) -> Result<(), IdentityStoreError>;

    async fn add_claim(
        &self,
        user_id: Uuid,
        claim: ClaimValue,
    ) -> Result<(), IdentityStoreError>;

    async fn remove_claim(
        &self,
        user_id: Uuid,
        claim: &ClaimValue,
    ) -> Result<(), IdentityStoreError>;

    async fn get_claims(&self, user_id: Uuid) -> Result<Vec<ClaimValue>, IdentityStoreError>;

    async fn add_login(&self, user_id: Uuid, login: LoginInfo) -> Result<(), IdentityStoreError>;

    async fn remove_login(
        &self,
        user_id: Uuid,
        login: &LoginInfo,
    ) -> Result<(), IdentityStoreError>;

    async fn get_logins(&self, user_id: Uuid) -> Result<Vec<LoginInfo>, IdentityStoreError>;

    /// Finds the user a federated login belongs to, if any.
    async fn find_by_login(
        &self,
        login: &LoginInfo,
    ) -> Result<Option<IdentityUser>, IdentityStoreError>;

    async fn add_to_role(
        &self,
        user_id: Uuid,
        role_name: &str,
    ) -> Result<(), IdentityStoreError>;

    async fn remove_from_role(
        &self,
        user_id: Uuid,
        role_name: &str,
    ) -> Result<(), IdentityStoreError>;

    async fn get_roles(&self, user_id: Uuid) -> Result<Vec<String>, IdentityStoreError>;

    async fn is_in_role(
        &self,
        user_id: Uuid,
        role_name: &str,
    ) -> Result<bool, IdentityStoreError>;
}

/// Role storage as required by the identity framework.
#[async_trait::async_trait]
pub trait RoleStore: Send + Sync {
    async fn create(&self, role_name: &str) -> Result<IdentityRole, IdentityStoreError>;

    async fn update(&self, role: &IdentityRole) -> Result<(), IdentityStoreError>;

    async fn delete(&self, role: &IdentityRole) -> Result<(), IdentityStoreError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<IdentityRole>, IdentityStoreError>;

    async fn find_by_name(&self, name: &str) -> Result<Option<IdentityRole>, IdentityStoreError>;
}
