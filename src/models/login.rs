use serde::{Deserialize, Serialize};

use crate::domain::{LoginInfo, UserId};
use crate::models::User;

/// A persisted binding between a user and a third-party provider account.
///
/// The `user_id` field is denormalized: it is re-derived from the owning
/// [`User`]'s identifier whenever the owner is assigned, so the foreign key
/// is correct before the record ever reaches the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalLogin {
    pub provider: String,
    pub provider_key: String,
    pub user_id: UserId,
}

impl ExternalLogin {
    /// Builds a login bound to `user`, deriving `user_id` immediately.
    #[must_use]
    pub fn bind(user: &User, info: LoginInfo) -> Self {
        Self {
            provider: info.provider,
            provider_key: info.provider_key,
            user_id: user.id,
        }
    }

    /// Re-assigns the owning user, re-deriving the denormalized `user_id`.
    pub fn set_user(&mut self, user: &User) {
        self.user_id = user.id;
    }

    /// The (provider, provider_key) pair this login is keyed by.
    #[must_use]
    pub fn info(&self) -> LoginInfo {
        LoginInfo::new(self.provider.clone(), self.provider_key.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bind_derives_user_id_before_persistence() {
        let user = User::new("alice");
        let login = ExternalLogin::bind(&user, LoginInfo::new("github", "octocat-1"));
        assert_eq!(login.user_id, user.id);
        assert_eq!(login.provider, "github");
        assert_eq!(login.provider_key, "octocat-1");
    }

    #[test]
    fn set_user_rederives_user_id() {
        let first = User::new("alice");
        let second = User::new("bob");
        let mut login = ExternalLogin::bind(&first, LoginInfo::new("github", "octocat-1"));
        login.set_user(&second);
        assert_eq!(login.user_id, second.id);
    }

    #[test]
    fn info_round_trips_the_key_pair() {
        let user = User::new("alice");
        let info = LoginInfo::new("gitlab", "u-77");
        let login = ExternalLogin::bind(&user, info.clone());
        assert_eq!(login.info(), info);
    }
}
