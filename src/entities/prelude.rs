pub use super::claims::Entity as Claims;
pub use super::external_logins::Entity as ExternalLogins;
pub use super::roles::Entity as Roles;
pub use super::user_roles::Entity as UserRoles;
pub use super::users::Entity as Users;
