pub mod claim;
pub mod login;
pub mod role;
pub mod status;
pub mod user;

use anyhow::Result;
use uuid::Uuid;

use crate::config::Config;
use crate::db::Store;
use crate::domain::UserId;
use crate::models::User;
use crate::services::{SeaOrmUserService, UserService};

pub async fn open_store(config: &Config) -> Result<Store> {
    Store::with_pool_options(
        &config.general.database_path,
        config.general.max_db_connections,
        config.general.min_db_connections,
    )
    .await
}

/// Resolves a CLI user argument: a UUID looks the user up by id, anything
/// else by username.
pub async fn resolve_user(service: &SeaOrmUserService, ident: &str) -> Result<User> {
    let found = if let Ok(raw) = Uuid::parse_str(ident) {
        service.find_by_id(UserId::new(raw)).await?
    } else {
        service.find_by_name(ident).await?
    };

    found.ok_or_else(|| anyhow::anyhow!("User '{ident}' not found"))
}

pub fn print_overview() {
    println!("userhub - user, claim, login and role management");
    println!();
    println!("USAGE:");
    println!("  userhub <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("  user add <username>              Create a user");
    println!("  user info <user>                 Show a user with claims, logins, roles");
    println!("  user rename <user> <username>    Change a username");
    println!("  user remove <user>               Delete a user");
    println!("  claim add <user> <type> <value>  Attach a claim");
    println!("  claim list <user>                List claims");
    println!("  claim remove <user> <type> <value>");
    println!("  login add <user> <provider> <key>");
    println!("  login list <user>                List external logins");
    println!("  login remove <user> <provider> <key>");
    println!("  login find <provider> <key>      Look a login up, no user context");
    println!("  role create <name>               Create a role");
    println!("  role list                        List roles");
    println!("  role grant <user> <role>         Add a user to a role");
    println!("  role revoke <user> <role>        Remove a user from a role");
    println!("  role check <user> <role>         Membership test");
    println!("  status                           Check database connectivity");
    println!("  init                             Create default config file");
    println!();
    println!("Users can be addressed by id (UUID) or username.");
}
