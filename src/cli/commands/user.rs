//! User command handlers

use crate::cli::UserCommands;
use crate::config::Config;
use crate::models::User;
use crate::services::{SeaOrmUserService, UserService};

use super::{open_store, resolve_user};

pub async fn dispatch(config: &Config, command: UserCommands) -> anyhow::Result<()> {
    let store = open_store(config).await?;
    let service = SeaOrmUserService::new(store);

    match command {
        UserCommands::Add { username } => cmd_add(&service, &username).await,
        UserCommands::Info { user } => cmd_info(&service, &user).await,
        UserCommands::Rename {
            user,
            new_username,
        } => cmd_rename(&service, &user, new_username).await,
        UserCommands::Remove { user } => cmd_remove(&service, &user).await,
    }
}

async fn cmd_add(service: &SeaOrmUserService, username: &str) -> anyhow::Result<()> {
    if service.find_by_name(username).await?.is_some() {
        println!("User '{username}' already exists.");
        return Ok(());
    }

    let user = service.create_user(User::new(username)).await?;

    println!("✓ Created user: {}", user.username);
    println!("  ID: {}", user.id);

    Ok(())
}

async fn cmd_info(service: &SeaOrmUserService, ident: &str) -> anyhow::Result<()> {
    let user = resolve_user(service, ident).await?;

    println!("User: {}", user.username);
    println!("{:-<60}", "");
    println!("ID:      {}", user.id);
    println!("Created: {}", user.created_at);
    println!("Updated: {}", user.updated_at);

    let claims = service.get_claims(user.id).await?;
    println!();
    if claims.is_empty() {
        println!("No claims.");
    } else {
        println!("Claims ({}):", claims.len());
        for claim in claims {
            println!("  • {} = {}", claim.claim_type, claim.claim_value);
        }
    }

    let logins = service.get_logins(user.id).await?;
    println!();
    if logins.is_empty() {
        println!("No external logins.");
    } else {
        println!("External logins ({}):", logins.len());
        for login in logins {
            println!("  • {} ({})", login.provider, login.provider_key);
        }
    }

    let roles = service.get_roles(user.id).await?;
    println!();
    if roles.is_empty() {
        println!("No roles.");
    } else {
        println!("Roles ({}):", roles.len());
        for role in roles {
            println!("  • {role}");
        }
    }

    Ok(())
}

async fn cmd_rename(
    service: &SeaOrmUserService,
    ident: &str,
    new_username: String,
) -> anyhow::Result<()> {
    let mut user = resolve_user(service, ident).await?;
    let old = user.username.clone();

    user.username = new_username;
    service.update_user(&user).await?;

    println!("✓ Renamed '{}' to '{}'", old, user.username);

    Ok(())
}

async fn cmd_remove(service: &SeaOrmUserService, ident: &str) -> anyhow::Result<()> {
    let user = resolve_user(service, ident).await?;

    service.delete_user(&user).await?;

    println!("✓ Removed user: {}", user.username);
    println!("  Claims, logins and role memberships were removed with it.");

    Ok(())
}
