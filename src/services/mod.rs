pub mod user_service;
pub mod user_service_impl;
pub use user_service::{UserError, UserService};
pub use user_service_impl::SeaOrmUserService;

pub mod role_service;
pub mod role_service_impl;
pub use role_service::{RoleError, RoleService};
pub use role_service_impl::SeaOrmRoleService;
