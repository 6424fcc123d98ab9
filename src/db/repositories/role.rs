use anyhow::{Context, Result};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set,
    TransactionTrait,
};

use crate::domain::{RoleId, UserId};
use crate::entities::{prelude::*, roles, user_roles};
use crate::models::Role;

impl From<roles::Model> for Role {
    fn from(model: roles::Model) -> Self {
        Self {
            id: RoleId::new(model.id),
            name: model.name,
        }
    }
}

/// Repository for roles and user-role membership rows.
pub struct RoleRepository {
    conn: DatabaseConnection,
}

impl RoleRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub async fn add(&self, role: &Role) -> Result<()> {
        let active = roles::ActiveModel {
            id: Set(role.id.value()),
            name: Set(role.name.clone()),
        };

        Roles::insert(active)
            .exec(&self.conn)
            .await
            .context("Failed to insert role")?;

        Ok(())
    }

    pub async fn find_by_id(&self, id: RoleId) -> Result<Option<Role>> {
        let role = Roles::find_by_id(id.value())
            .one(&self.conn)
            .await
            .context("Failed to query role by id")?;

        Ok(role.map(Role::from))
    }

    pub async fn find_by_name(&self, name: &str) -> Result<Option<Role>> {
        let role = Roles::find()
            .filter(roles::Column::Name.eq(name))
            .one(&self.conn)
            .await
            .context("Failed to query role by name")?;

        Ok(role.map(Role::from))
    }

    pub async fn list(&self) -> Result<Vec<Role>> {
        let rows = Roles::find()
            .all(&self.conn)
            .await
            .context("Failed to list roles")?;

        Ok(rows.into_iter().map(Role::from).collect())
    }

    /// Renames a role. Returns false if the role row no longer exists.
    pub async fn update(&self, role: &Role) -> Result<bool> {
        let Some(existing) = Roles::find_by_id(role.id.value())
            .one(&self.conn)
            .await
            .context("Failed to query role for update")?
        else {
            return Ok(false);
        };

        let mut active: roles::ActiveModel = existing.into();
        active.name = Set(role.name.clone());
        active.update(&self.conn).await?;

        Ok(true)
    }

    /// Deletes the role; membership rows cascade. Returns false if nothing
    /// was deleted.
    pub async fn remove(&self, id: RoleId) -> Result<bool> {
        let result = Roles::delete_by_id(id.value())
            .exec(&self.conn)
            .await
            .context("Failed to delete role")?;

        Ok(result.rows_affected > 0)
    }

    /// Adds a membership row. Already-present membership is left alone, so
    /// repeated adds are no-ops.
    pub async fn add_member(&self, user_id: UserId, role_id: RoleId) -> Result<()> {
        let txn = self.conn.begin().await?;

        let existing = UserRoles::find_by_id((user_id.value(), role_id.value()))
            .one(&txn)
            .await
            .context("Failed to query role membership")?;

        if existing.is_none() {
            let active = user_roles::ActiveModel {
                user_id: Set(user_id.value()),
                role_id: Set(role_id.value()),
            };
            UserRoles::insert(active)
                .exec(&txn)
                .await
                .context("Failed to insert role membership")?;
        }

        txn.commit().await?;
        Ok(())
    }

    /// Removes a membership row. Returns false when the user was not a
    /// member.
    pub async fn remove_member(&self, user_id: UserId, role_id: RoleId) -> Result<bool> {
        let result = UserRoles::delete_many()
            .filter(user_roles::Column::UserId.eq(user_id.value()))
            .filter(user_roles::Column::RoleId.eq(role_id.value()))
            .exec(&self.conn)
            .await
            .context("Failed to delete role membership")?;

        Ok(result.rows_affected > 0)
    }

    /// Snapshot of the roles a user belongs to.
    pub async fn for_user(&self, user_id: UserId) -> Result<Vec<Role>> {
        let rows = UserRoles::find()
            .find_also_related(Roles)
            .filter(user_roles::Column::UserId.eq(user_id.value()))
            .all(&self.conn)
            .await
            .context("Failed to query roles for user")?;

        Ok(rows
            .into_iter()
            .filter_map(|(_, role)| role.map(Role::from))
            .collect())
    }
}
