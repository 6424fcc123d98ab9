//! Identity-store boundary.
//!
//! Authentication frameworks want a storage contract: create/find/update/
//! delete users, plus claims, logins and role membership. The traits in
//! [`store`] spell that contract out in neutral vocabulary; the adapters in
//! [`adapter`] satisfy it by delegating one-to-one onto the domain services.
//! Wiring is explicit constructor composition, no container.

pub mod adapter;
pub mod store;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::services::{RoleError, UserError};

pub use adapter::{ServiceRoleStore, ServiceUserStore};
pub use store::{RoleStore, UserStore};

/// The user record as the identity framework sees it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityUser {
    pub id: Uuid,
    pub username: String,
}

/// The role record as the identity framework sees it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityRole {
    pub id: Uuid,
    pub name: String,
}

/// Errors crossing the identity-store boundary. The domain taxonomy is kept
/// intact underneath so callers can still match on the concrete failure.
#[derive(Debug, Error)]
pub enum IdentityStoreError {
    #[error(transparent)]
    User(#[from] UserError),

    #[error(transparent)]
    Role(#[from] RoleError),
}
