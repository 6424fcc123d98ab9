//! Service-backed implementations of the identity storage contract.

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{ClaimValue, LoginInfo, RoleId, UserId};
use crate::identity::store::{RoleStore, UserStore};
use crate::identity::{IdentityRole, IdentityStoreError, IdentityUser};
use crate::models::{Role, User};
use crate::services::{RoleService, UserService};

fn to_identity_user(user: User) -> IdentityUser {
    IdentityUser {
        id: user.id.value(),
        username: user.username,
    }
}

fn to_identity_role(role: Role) -> IdentityRole {
    IdentityRole {
        id: role.id.value(),
        name: role.name,
    }
}

/// Maps the framework's user-store operations one-to-one onto the
/// [`UserService`].
pub struct ServiceUserStore {
    users: Arc<dyn UserService>,
}

impl ServiceUserStore {
    #[must_use]
    pub fn new(users: Arc<dyn UserService>) -> Self {
        Self { users }
    }
}

#[async_trait]
impl UserStore for ServiceUserStore {
    async fn create(&self, user: IdentityUser) -> Result<IdentityUser, IdentityStoreError> {
        let created = self
            .users
            .create_user(User::with_id(UserId::new(user.id), user.username))
            .await?;

        Ok(to_identity_user(created))
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<IdentityUser>, IdentityStoreError> {
        let user = self.users.find_by_id(UserId::new(id)).await?;

        Ok(user.map(to_identity_user))
    }

    async fn find_by_name(
        &self,
        username: &str,
    ) -> Result<Option<IdentityUser>, IdentityStoreError> {
        let user = self.users.find_by_name(username).await?;

        Ok(user.map(to_identity_user))
    }

    async fn update(&self, user: &IdentityUser) -> Result<(), IdentityStoreError> {
        let id = UserId::new(user.id);
        let Some(mut current) = self.users.find_by_id(id).await? else {
            return Err(crate::services::UserError::UserNotFound(id).into());
        };

        current.username = user.username.clone();
        self.users.update_user(&current).await?;

        Ok(())
    }

    async fn delete(&self, user: &IdentityUser) -> Result<(), IdentityStoreError> {
        let id = UserId::new(user.id);
        let Some(current) = self.users.find_by_id(id).await? else {
            return Err(crate::services::UserError::UserNotFound(id).into());
        };

        self.users.delete_user(&current).await?;

        Ok(())
    }

    async fn add_claim(
        &self,
        user_id: Uuid,
        claim: ClaimValue,
    ) -> Result<(), IdentityStoreError> {
        self.users.add_claim(UserId::new(user_id), &claim).await?;

        Ok(())
    }

    async fn remove_claim(
        &self,
        user_id: Uuid,
        claim: &ClaimValue,
    ) -> Result<(), IdentityStoreError> {
        self.users.remove_claim(UserId::new(user_id), claim).await?;

        Ok(())
    }

    async fn get_claims(&self, user_id: Uuid) -> Result<Vec<ClaimValue>, IdentityStoreError> {
        Ok(self.users.get_claims(UserId::new(user_id)).await?)
    }

    async fn add_login(&self, user_id: Uuid, login: LoginInfo) -> Result<(), IdentityStoreError> {
        self.users.add_login(UserId::new(user_id), login).await?;

        Ok(())
    }

    async fn remove_login(
        &self,
        user_id: Uuid,
        login: &LoginInfo,
    ) -> Result<(), IdentityStoreError> {
        self.users.remove_login(UserId::new(user_id), login).await?;

        Ok(())
    }

    async fn get_logins(&self, user_id: Uuid) -> Result<Vec<LoginInfo>, IdentityStoreError> {
        Ok(self.users.get_logins(UserId::new(user_id)).await?)
    }

    async fn find_by_login(
        &self,
        login: &LoginInfo,
    ) -> Result<Option<IdentityUser>, IdentityStoreError> {
        // The login record carries the denormalized owner id; resolve it to
        // the user the framework actually wants back.
        let Some(found) = self.users.find_login(login).await? else {
            return Ok(None);
        };

        let user = self.users.find_by_id(found.user_id).await?;

        Ok(user.map(to_identity_user))
    }

    async fn add_to_role(
        &self,
        user_id: Uuid,
        role_name: &str,
    ) -> Result<(), IdentityStoreError> {
        self.users
            .add_to_role(UserId::new(user_id), role_name)
            .await?;

        Ok(())
    }

    async fn remove_from_role(
        &self,
        user_id: Uuid,
        role_name: &str,
    ) -> Result<(), IdentityStoreError> {
        self.users
            .remove_from_role(UserId::new(user_id), role_name)
            .await?;

        Ok(())
    }

    async fn get_roles(&self, user_id: Uuid) -> Result<Vec<String>, IdentityStoreError> {
        Ok(self.users.get_roles(UserId::new(user_id)).await?)
    }

    async fn is_in_role(
        &self,
        user_id: Uuid,
        role_name: &str,
    ) -> Result<bool, IdentityStoreError> {
        Ok(self
            .users
            .is_in_role(UserId::new(user_id), role_name)
            .await?)
    }
}

/// Maps the framework's role-store operations onto the [`RoleService`].
pub struct ServiceRoleStore {
    roles: Arc<dyn RoleService>,
}

impl ServiceRoleStore {
    #[must_use]
    pub fn new(roles: Arc<dyn RoleService>) -> Self {
        Self { roles }
    }
}

#[async_trait]
impl RoleStore for ServiceRoleStore {
    async fn create(&self, role_name: &str) -> Result<IdentityRole, IdentityStoreError> {
        let role = self.roles.create_role(role_name).await?;

        Ok(to_identity_role(role))
    }

    async fn update(&self, role: &IdentityRole) -> Result<(), IdentityStoreError> {
        let renamed = Role {
            id: RoleId::new(role.id),
            name: role.name.clone(),
        };
        self.roles.update_role(&renamed).await?;

        Ok(())
    }

    async fn delete(&self, role: &IdentityRole) -> Result<(), IdentityStoreError> {
        let target = Role {
            id: RoleId::new(role.id),
            name: role.name.clone(),
        };
        self.roles.delete_role(&target).await?;

        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<IdentityRole>, IdentityStoreError> {
        let role = self.roles.find_by_id(RoleId::new(id)).await?;

        Ok(role.map(to_identity_role))
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<IdentityRole>, IdentityStoreError> {
        let role = self.roles.find_by_name(name).await?;

        Ok(role.map(to_identity_role))
    }
}
