pub mod prelude;

pub mod claims;
pub mod external_logins;
pub mod roles;
pub mod user_roles;
pub mod users;
