//! Role command handlers

use crate::cli::RoleCommands;
use crate::config::Config;
use crate::services::{RoleService, SeaOrmRoleService, SeaOrmUserService, UserService};

use super::{open_store, resolve_user};

pub async fn dispatch(config: &Config, command: RoleCommands) -> anyhow::Result<()> {
    let store = open_store(config).await?;
    let users = SeaOrmUserService::new(store.clone());
    let roles = SeaOrmRoleService::new(store);

    match command {
        RoleCommands::Create { name } => {
            let role = roles.create_role(&name).await?;

            println!("✓ Created role: {}", role.name);
            println!("  ID: {}", role.id);
            Ok(())
        }

        RoleCommands::List => {
            let all = roles.list_roles().await?;

            if all.is_empty() {
                println!("No roles defined.");
                println!();
                println!("Create one with: userhub role create <name>");
                return Ok(());
            }

            println!("Roles ({} total)", all.len());
            println!("{:-<60}", "");
            for role in all {
                println!("  {} (ID: {})", role.name, role.id);
            }
            Ok(())
        }

        RoleCommands::Rename { name, new_name } => {
            let mut role = roles
                .find_by_name(&name)
                .await?
                .ok_or_else(|| anyhow::anyhow!("Role '{name}' not found"))?;

            role.name = new_name;
            roles.update_role(&role).await?;

            println!("✓ Renamed role '{}' to '{}'", name, role.name);
            Ok(())
        }

        RoleCommands::Delete { name } => {
            let role = roles
                .find_by_name(&name)
                .await?
                .ok_or_else(|| anyhow::anyhow!("Role '{name}' not found"))?;

            roles.delete_role(&role).await?;

            println!("✓ Deleted role: {}", role.name);
            Ok(())
        }

        RoleCommands::Grant { user, role } => {
            let user = resolve_user(&users, &user).await?;
            users.add_to_role(user.id, &role).await?;

            println!("✓ {} is now in role '{role}'", user.username);
            Ok(())
        }

        RoleCommands::Revoke { user, role } => {
            let user = resolve_user(&users, &user).await?;
            users.remove_from_role(user.id, &role).await?;

            println!("✓ {} is no longer in role '{role}'", user.username);
            Ok(())
        }

        RoleCommands::Check { user, role } => {
            let user = resolve_user(&users, &user).await?;
            let member = users.is_in_role(user.id, &role).await?;

            if member {
                println!("✓ {} is in role '{role}'", user.username);
            } else {
                println!("✗ {} is not in role '{role}'", user.username);
            }
            Ok(())
        }
    }
}
