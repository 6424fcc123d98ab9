use anyhow::{Context, Result};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter, Set,
    TransactionTrait,
};

use crate::domain::{ClaimValue, UserId};
use crate::entities::{claims, prelude::*, users};
use crate::models::User;

impl From<users::Model> for User {
    fn from(model: users::Model) -> Self {
        Self {
            id: UserId::new(model.id),
            username: model.username,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Repository for the user aggregate: the user row itself plus its owned
/// claim collection. Logins and role membership have their own repositories.
pub struct UserRepository {
    conn: DatabaseConnection,
}

impl UserRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub async fn add(&self, user: &User) -> Result<()> {
        let active = users::ActiveModel {
            id: Set(user.id.value()),
            username: Set(user.username.clone()),
            created_at: Set(user.created_at.clone()),
            updated_at: Set(user.updated_at.clone()),
        };

        Users::insert(active)
            .exec(&self.conn)
            .await
            .context("Failed to insert user")?;

        Ok(())
    }

    pub async fn find_by_id(&self, id: UserId) -> Result<Option<User>> {
        let user = Users::find_by_id(id.value())
            .one(&self.conn)
            .await
            .context("Failed to query user by id")?;

        Ok(user.map(User::from))
    }

    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>> {
        let user = Users::find()
            .filter(users::Column::Username.eq(username))
            .one(&self.conn)
            .await
            .context("Failed to query user by username")?;

        Ok(user.map(User::from))
    }

    /// Persists a changed username and refreshes `updated_at`. Returns false
    /// if the user row no longer exists.
    pub async fn update(&self, user: &User) -> Result<bool> {
        let Some(existing) = Users::find_by_id(user.id.value())
            .one(&self.conn)
            .await
            .context("Failed to query user for update")?
        else {
            return Ok(false);
        };

        let now = chrono::Utc::now().to_rfc3339();

        let mut active: users::ActiveModel = existing.into();
        active.username = Set(user.username.clone());
        active.updated_at = Set(now);
        active.update(&self.conn).await?;

        Ok(true)
    }

    /// Deletes the user row. Claims, logins and role memberships go with it
    /// through the FK cascades. Returns false if nothing was deleted.
    pub async fn remove(&self, id: UserId) -> Result<bool> {
        let result = Users::delete_by_id(id.value())
            .exec(&self.conn)
            .await
            .context("Failed to delete user")?;

        Ok(result.rows_affected > 0)
    }

    pub async fn add_claim(&self, user_id: UserId, claim: &ClaimValue) -> Result<()> {
        let active = claims::ActiveModel {
            user_id: Set(user_id.value()),
            claim_type: Set(claim.claim_type.clone()),
            claim_value: Set(claim.claim_value.clone()),
            ..Default::default()
        };

        Claims::insert(active)
            .exec(&self.conn)
            .await
            .context("Failed to insert claim")?;

        Ok(())
    }

    /// Snapshot of the user's claims, newest-insert-last.
    pub async fn claims(&self, user_id: UserId) -> Result<Vec<ClaimValue>> {
        let rows = Claims::find()
            .filter(claims::Column::UserId.eq(user_id.value()))
            .all(&self.conn)
            .await
            .context("Failed to query claims for user")?;

        Ok(rows
            .into_iter()
            .map(|row| ClaimValue::new(row.claim_type, row.claim_value))
            .collect())
    }

    /// Removes the first claim matching (type, value). Matching is by pair,
    /// not identity; with duplicate pairs one row goes per call. Returns
    /// false when no row matched.
    pub async fn remove_claim(&self, user_id: UserId, claim: &ClaimValue) -> Result<bool> {
        let txn = self.conn.begin().await?;

        let found = Claims::find()
            .filter(claims::Column::UserId.eq(user_id.value()))
            .filter(claims::Column::ClaimType.eq(&claim.claim_type))
            .filter(claims::Column::ClaimValue.eq(&claim.claim_value))
            .one(&txn)
            .await
            .context("Failed to query claim for removal")?;

        let Some(row) = found else {
            txn.commit().await?;
            return Ok(false);
        };

        row.delete(&txn).await.context("Failed to delete claim")?;

        txn.commit().await?;
        Ok(true)
    }
}
