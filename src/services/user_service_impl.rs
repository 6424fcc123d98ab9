//! `SeaORM` implementation of the `UserService` trait.

use async_trait::async_trait;
use tracing::debug;

use crate::db::Store;
use crate::domain::{ClaimValue, LoginInfo, UserId};
use crate::models::{ExternalLogin, User};
use crate::services::user_service::{UserError, UserService};

pub struct SeaOrmUserService {
    store: Store,
}

impl SeaOrmUserService {
    #[must_use]
    pub const fn new(store: Store) -> Self {
        Self { store }
    }

    /// Loads the user or fails; mutations never proceed against an id that
    /// does not resolve.
    async fn require_user(&self, user_id: UserId) -> Result<User, UserError> {
        self.store
            .find_user_by_id(user_id)
            .await?
            .ok_or(UserError::UserNotFound(user_id))
    }
}

fn require_non_blank(value: &str, what: &'static str) -> Result<(), UserError> {
    if value.trim().is_empty() {
        return Err(UserError::InvalidArgument(what));
    }
    Ok(())
}

#[async_trait]
impl UserService for SeaOrmUserService {
    async fn create_user(&self, user: User) -> Result<User, UserError> {
        require_non_blank(&user.username, "username must not be blank")?;

        self.store.add_user(&user).await?;
        debug!(user_id = %user.id, username = %user.username, "user created");

        Ok(user)
    }

    async fn delete_user(&self, user: &User) -> Result<(), UserError> {
        let removed = self.store.remove_user(user.id).await?;
        if !removed {
            return Err(UserError::UserNotFound(user.id));
        }
        debug!(user_id = %user.id, "user deleted");

        Ok(())
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserError> {
        Ok(self.store.find_user_by_id(id).await?)
    }

    async fn find_by_name(&self, username: &str) -> Result<Option<User>, UserError> {
        Ok(self.store.find_user_by_username(username).await?)
    }

    async fn update_user(&self, user: &User) -> Result<(), UserError> {
        require_non_blank(&user.username, "username must not be blank")?;

        let updated = self.store.update_user(user).await?;
        if !updated {
            return Err(UserError::UserNotFound(user.id));
        }

        Ok(())
    }

    async fn add_claim(&self, user_id: UserId, claim: &ClaimValue) -> Result<(), UserError> {
        require_non_blank(&claim.claim_type, "claim type must not be blank")?;

        let user = self.require_user(user_id).await?;
        self.store.add_claim(user.id, claim).await?;

        Ok(())
    }

    async fn get_claims(&self, user_id: UserId) -> Result<Vec<ClaimValue>, UserError> {
        let user = self.require_user(user_id).await?;

        Ok(self.store.claims_for_user(user.id).await?)
    }

    async fn remove_claim(&self, user_id: UserId, claim: &ClaimValue) -> Result<(), UserError> {
        let user = self.require_user(user_id).await?;

        // Idempotent by contract: an absent claim leaves the collection
        // untouched and the call still succeeds.
        let removed = self.store.remove_claim(user.id, claim).await?;
        if !removed {
            debug!(user_id = %user.id, %claim, "remove_claim matched nothing");
        }

        Ok(())
    }

    async fn add_login(&self, user_id: UserId, login: LoginInfo) -> Result<(), UserError> {
        require_non_blank(&login.provider, "login provider must not be blank")?;
        require_non_blank(&login.provider_key, "provider key must not be blank")?;

        let user = self.require_user(user_id).await?;

        // The binding derives the denormalized user id up front, before the
        // store ever sees the record.
        let bound = ExternalLogin::bind(&user, login);
        self.store.add_login(&bound).await?;

        Ok(())
    }

    async fn remove_login(&self, user_id: UserId, login: &LoginInfo) -> Result<(), UserError> {
        let user = self.require_user(user_id).await?;

        let removed = self.store.remove_login(user.id, login).await?;
        if !removed {
            debug!(user_id = %user.id, %login, "remove_login matched nothing");
        }

        Ok(())
    }

    async fn find_login(&self, login: &LoginInfo) -> Result<Option<ExternalLogin>, UserError> {
        Ok(self.store.find_login(login).await?)
    }

    async fn get_logins(&self, user_id: UserId) -> Result<Vec<LoginInfo>, UserError> {
        let user = self.require_user(user_id).await?;

        Ok(self.store.logins_for_user(user.id).await?)
    }

    async fn add_to_role(&self, user_id: UserId, role_name: &str) -> Result<(), UserError> {
        require_non_blank(role_name, "role name must not be blank")?;

        let user = self.require_user(user_id).await?;
        let role = self
            .store
            .find_role_by_name(role_name)
            .await?
            .ok_or_else(|| UserError::RoleNotFound(role_name.to_string()))?;

        self.store.add_role_member(user.id, role.id).await?;

        Ok(())
    }

    async fn remove_from_role(&self, user_id: UserId, role_name: &str) -> Result<(), UserError> {
        require_non_blank(role_name, "role name must not be blank")?;

        let user = self.require_user(user_id).await?;
        let role = self
            .store
            .find_role_by_name(role_name)
            .await?
            .ok_or_else(|| UserError::RoleNotFound(role_name.to_string()))?;

        self.store.remove_role_member(user.id, role.id).await?;

        Ok(())
    }

    async fn get_roles(&self, user_id: UserId) -> Result<Vec<String>, UserError> {
        let user = self.require_user(user_id).await?;
        let roles = self.store.roles_for_user(user.id).await?;

        Ok(roles.into_iter().map(|role| role.name).collect())
    }

    async fn is_in_role(&self, user_id: UserId, role_name: &str) -> Result<bool, UserError> {
        require_non_blank(role_name, "role name must not be blank")?;

        let user = self.require_user(user_id).await?;
        let roles = self.store.roles_for_user(user.id).await?;

        Ok(roles.iter().any(|role| role.name == role_name))
    }
}
