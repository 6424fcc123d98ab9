pub mod login;
pub mod role;
pub mod user;

pub use login::ExternalLogin;
pub use role::Role;
pub use user::User;
