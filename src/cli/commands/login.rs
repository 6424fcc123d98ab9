//! External-login command handlers

use crate::cli::LoginCommands;
use crate::config::Config;
use crate::domain::LoginInfo;
use crate::services::{SeaOrmUserService, UserService};

use super::{open_store, resolve_user};

pub async fn dispatch(config: &Config, command: LoginCommands) -> anyhow::Result<()> {
    let store = open_store(config).await?;
    let service = SeaOrmUserService::new(store);

    match command {
        LoginCommands::Add {
            user,
            provider,
            provider_key,
        } => {
            let user = resolve_user(&service, &user).await?;
            let info = LoginInfo::new(provider, provider_key);
            service.add_login(user.id, info.clone()).await?;

            println!("✓ Bound login {info} to {}", user.username);
            Ok(())
        }

        LoginCommands::List { user } => {
            let user = resolve_user(&service, &user).await?;
            let logins = service.get_logins(user.id).await?;

            if logins.is_empty() {
                println!("{} has no external logins.", user.username);
                return Ok(());
            }

            println!(
                "External logins for {} ({} total)",
                user.username,
                logins.len()
            );
            println!("{:-<60}", "");
            for login in logins {
                println!("  {} ({})", login.provider, login.provider_key);
            }
            Ok(())
        }

        LoginCommands::Remove {
            user,
            provider,
            provider_key,
        } => {
            let user = resolve_user(&service, &user).await?;
            let info = LoginInfo::new(provider, provider_key);
            service.remove_login(user.id, &info).await?;

            println!("✓ Login {info} is absent from {}", user.username);
            Ok(())
        }

        LoginCommands::Find {
            provider,
            provider_key,
        } => {
            let info = LoginInfo::new(provider, provider_key);

            match service.find_login(&info).await? {
                Some(login) => {
                    println!("Login {info} belongs to user {}", login.user_id);
                    if let Some(user) = service.find_by_id(login.user_id).await? {
                        println!("  Username: {}", user.username);
                    }
                }
                None => println!("No login found for {info}"),
            }
            Ok(())
        }
    }
}
