//! `SeaORM` implementation of the `RoleService` trait.

use async_trait::async_trait;
use tracing::debug;

use crate::db::Store;
use crate::domain::RoleId;
use crate::models::Role;
use crate::services::role_service::{RoleError, RoleService};

pub struct SeaOrmRoleService {
    store: Store,
}

impl SeaOrmRoleService {
    #[must_use]
    pub const fn new(store: Store) -> Self {
        Self { store }
    }
}

#[async_trait]
impl RoleService for SeaOrmRoleService {
    async fn create_role(&self, name: &str) -> Result<Role, RoleError> {
        if name.trim().is_empty() {
            return Err(RoleError::InvalidArgument("role name must not be blank"));
        }

        if self.store.find_role_by_name(name).await?.is_some() {
            return Err(RoleError::AlreadyExists(name.to_string()));
        }

        let role = Role::new(name);
        self.store.add_role(&role).await?;
        debug!(role_id = %role.id, name = %role.name, "role created");

        Ok(role)
    }

    async fn update_role(&self, role: &Role) -> Result<(), RoleError> {
        if role.name.trim().is_empty() {
            return Err(RoleError::InvalidArgument("role name must not be blank"));
        }

        if let Some(other) = self.store.find_role_by_name(&role.name).await?
            && other.id != role.id
        {
            return Err(RoleError::AlreadyExists(role.name.clone()));
        }

        let updated = self.store.update_role(role).await?;
        if !updated {
            return Err(RoleError::NotFound(role.name.clone()));
        }

        Ok(())
    }

    async fn delete_role(&self, role: &Role) -> Result<(), RoleError> {
        let removed = self.store.remove_role(role.id).await?;
        if !removed {
            return Err(RoleError::NotFound(role.name.clone()));
        }
        debug!(role_id = %role.id, name = %role.name, "role deleted");

        Ok(())
    }

    async fn find_by_id(&self, id: RoleId) -> Result<Option<Role>, RoleError> {
        Ok(self.store.find_role_by_id(id).await?)
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Role>, RoleError> {
        Ok(self.store.find_role_by_name(name).await?)
    }

    async fn list_roles(&self) -> Result<Vec<Role>, RoleError> {
        Ok(self.store.list_roles().await?)
    }
}
