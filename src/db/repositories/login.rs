use anyhow::{Context, Result};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};

use crate::domain::{LoginInfo, UserId};
use crate::entities::{external_logins, prelude::*};
use crate::models::ExternalLogin;

impl From<external_logins::Model> for ExternalLogin {
    fn from(model: external_logins::Model) -> Self {
        Self {
            provider: model.login_provider,
            provider_key: model.provider_key,
            user_id: UserId::new(model.user_id),
        }
    }
}

/// Repository for external-login bindings, keyed by (provider, key).
pub struct LoginRepository {
    conn: DatabaseConnection,
}

impl LoginRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub async fn add(&self, login: &ExternalLogin) -> Result<()> {
        let active = external_logins::ActiveModel {
            login_provider: Set(login.provider.clone()),
            provider_key: Set(login.provider_key.clone()),
            user_id: Set(login.user_id.value()),
        };

        ExternalLogins::insert(active)
            .exec(&self.conn)
            .await
            .context("Failed to insert external login")?;

        Ok(())
    }

    /// Direct lookup by (provider, key), independent of any user context.
    pub async fn get_by_provider_and_key(&self, info: &LoginInfo) -> Result<Option<ExternalLogin>> {
        let login = ExternalLogins::find_by_id((info.provider.clone(), info.provider_key.clone()))
            .one(&self.conn)
            .await
            .context("Failed to query external login by provider and key")?;

        Ok(login.map(ExternalLogin::from))
    }

    /// Snapshot of the (provider, key) pairs bound to a user.
    pub async fn for_user(&self, user_id: UserId) -> Result<Vec<LoginInfo>> {
        let rows = ExternalLogins::find()
            .filter(external_logins::Column::UserId.eq(user_id.value()))
            .all(&self.conn)
            .await
            .context("Failed to query external logins for user")?;

        Ok(rows
            .into_iter()
            .map(|row| LoginInfo::new(row.login_provider, row.provider_key))
            .collect())
    }

    /// Removes the user's login matching (provider, key). Returns false when
    /// no such binding exists for this user.
    pub async fn remove(&self, user_id: UserId, info: &LoginInfo) -> Result<bool> {
        let result = ExternalLogins::delete_many()
            .filter(external_logins::Column::LoginProvider.eq(&info.provider))
            .filter(external_logins::Column::ProviderKey.eq(&info.provider_key))
            .filter(external_logins::Column::UserId.eq(user_id.value()))
            .exec(&self.conn)
            .await
            .context("Failed to delete external login")?;

        Ok(result.rows_affected > 0)
    }
}
