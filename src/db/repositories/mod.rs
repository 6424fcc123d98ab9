pub mod login;
pub mod role;
pub mod user;
