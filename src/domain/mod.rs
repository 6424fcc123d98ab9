//! Domain primitives for the user-management subsystem.
//!
//! Strong-typed identifiers (Newtype pattern, so user and role ids cannot be
//! mixed up) plus the neutral value types for claims and external logins.
//! These value types deliberately carry no framework vocabulary; adapters at
//! the identity boundary translate into and out of them.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a user.
///
/// # Examples
///
/// ```rust
/// use userhub::domain::UserId;
/// use uuid::Uuid;
///
/// let raw = Uuid::new_v4();
/// let id = UserId::new(raw);
/// assert_eq!(id.value(), raw);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(Uuid);

impl UserId {
    /// Wraps an existing UUID.
    #[must_use]
    pub const fn new(id: Uuid) -> Self {
        Self(id)
    }

    /// Generates a fresh random identifier.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the underlying UUID.
    #[must_use]
    pub const fn value(&self) -> Uuid {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for UserId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl From<UserId> for Uuid {
    fn from(id: UserId) -> Self {
        id.0
    }
}

/// Unique identifier for a role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoleId(Uuid);

impl RoleId {
    /// Wraps an existing UUID.
    #[must_use]
    pub const fn new(id: Uuid) -> Self {
        Self(id)
    }

    /// Generates a fresh random identifier.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the underlying UUID.
    #[must_use]
    pub const fn value(&self) -> Uuid {
        self.0
    }
}

impl fmt::Display for RoleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for RoleId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl From<RoleId> for Uuid {
    fn from(id: RoleId) -> Self {
        id.0
    }
}

/// A typed key-value assertion attached to a user.
///
/// Claims are matched by (type, value) pairs, not by identity: two claims
/// with the same type and value are interchangeable for lookup and removal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClaimValue {
    pub claim_type: String,
    pub claim_value: String,
}

impl ClaimValue {
    #[must_use]
    pub fn new(claim_type: impl Into<String>, claim_value: impl Into<String>) -> Self {
        Self {
            claim_type: claim_type.into(),
            claim_value: claim_value.into(),
        }
    }
}

impl fmt::Display for ClaimValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.claim_type, self.claim_value)
    }
}

/// A federated-login binding key: which provider, and the account key the
/// provider uses for the user.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LoginInfo {
    pub provider: String,
    pub provider_key: String,
}

impl LoginInfo {
    #[must_use]
    pub fn new(provider: impl Into<String>, provider_key: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            provider_key: provider_key.into(),
        }
    }
}

impl fmt::Display for LoginInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.provider, self.provider_key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_id_conversions() {
        let raw = Uuid::new_v4();
        let id = UserId::new(raw);
        assert_eq!(id.value(), raw);
        assert_eq!(id.to_string(), raw.to_string());
        assert_eq!(Uuid::from(id), raw);
        assert_eq!(UserId::from(raw), id);
    }

    #[test]
    fn generated_ids_are_distinct() {
        assert_ne!(UserId::generate(), UserId::generate());
        assert_ne!(RoleId::generate(), RoleId::generate());
    }

    #[test]
    fn claim_value_equality_is_by_pair() {
        let a = ClaimValue::new("dept", "engineering");
        let b = ClaimValue::new("dept", "engineering");
        let c = ClaimValue::new("dept", "sales");
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.to_string(), "dept=engineering");
    }

    #[test]
    fn login_info_equality_is_by_pair() {
        let a = LoginInfo::new("github", "octocat-1");
        let b = LoginInfo::new("github", "octocat-1");
        let c = LoginInfo::new("gitlab", "octocat-1");
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.to_string(), "github:octocat-1");
    }

    #[test]
    fn user_id_serialization_is_transparent() {
        let id = UserId::new(Uuid::nil());
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"00000000-0000-0000-0000-000000000000\"");
        let back: UserId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
