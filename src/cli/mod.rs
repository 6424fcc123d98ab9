//! CLI module - Command-line interface for userhub
//!
//! This module provides a structured CLI using clap for argument parsing.

mod commands;

use clap::{Parser, Subcommand};

use crate::config::Config;

/// userhub - user, claim, login and role management
#[derive(Parser)]
#[command(name = "userhub")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create default config file
    Init,

    /// Check database connectivity
    Status,

    /// Manage users
    #[command(alias = "u")]
    User {
        #[command(subcommand)]
        command: UserCommands,
    },

    /// Manage user claims
    #[command(alias = "c")]
    Claim {
        #[command(subcommand)]
        command: ClaimCommands,
    },

    /// Manage external logins
    #[command(alias = "l")]
    Login {
        #[command(subcommand)]
        command: LoginCommands,
    },

    /// Manage roles and memberships
    #[command(alias = "r")]
    Role {
        #[command(subcommand)]
        command: RoleCommands,
    },
}

#[derive(Subcommand)]
pub enum UserCommands {
    /// Create a new user
    #[command(alias = "a")]
    Add {
        /// Username (must be unique)
        username: String,
    },

    /// Show a user with its claims, logins and roles
    #[command(alias = "i")]
    Info {
        /// User id or username
        user: String,
    },

    /// Change a user's username
    Rename {
        /// User id or username
        user: String,
        /// New username
        new_username: String,
    },

    /// Delete a user and everything it owns
    #[command(alias = "rm")]
    Remove {
        /// User id or username
        user: String,
    },
}

#[derive(Subcommand)]
pub enum ClaimCommands {
    /// Attach a claim to a user
    #[command(alias = "a")]
    Add {
        /// User id or username
        user: String,
        /// Claim type, e.g. "dept"
        claim_type: String,
        /// Claim value, e.g. "engineering"
        claim_value: String,
    },

    /// List a user's claims
    #[command(alias = "ls")]
    List {
        /// User id or username
        user: String,
    },

    /// Remove the first claim matching type and value
    #[command(alias = "rm")]
    Remove {
        /// User id or username
        user: String,
        claim_type: String,
        claim_value: String,
    },
}

#[derive(Subcommand)]
pub enum LoginCommands {
    /// Bind an external provider login to a user
    #[command(alias = "a")]
    Add {
        /// User id or username
        user: String,
        /// Provider name, e.g. "github"
        provider: String,
        /// Provider's account key for the user
        provider_key: String,
    },

    /// List a user's external logins
    #[command(alias = "ls")]
    List {
        /// User id or username
        user: String,
    },

    /// Remove a user's login by provider and key
    #[command(alias = "rm")]
    Remove {
        /// User id or username
        user: String,
        provider: String,
        provider_key: String,
    },

    /// Look a login up by provider and key, no user context
    Find {
        provider: String,
        provider_key: String,
    },
}

#[derive(Subcommand)]
pub enum RoleCommands {
    /// Create a new role
    Create {
        /// Role name (must be unique)
        name: String,
    },

    /// List all roles
    #[command(alias = "ls")]
    List,

    /// Rename a role
    Rename {
        name: String,
        new_name: String,
    },

    /// Delete a role (memberships go with it, users survive)
    #[command(alias = "rm")]
    Delete {
        name: String,
    },

    /// Add a user to a role
    Grant {
        /// User id or username
        user: String,
        role: String,
    },

    /// Remove a user from a role
    Revoke {
        /// User id or username
        user: String,
        role: String,
    },

    /// Check whether a user is in a role
    Check {
        /// User id or username
        user: String,
        role: String,
    },
}

pub async fn dispatch(cli: Cli, config: &Config) -> anyhow::Result<()> {
    let Some(command) = cli.command else {
        commands::print_overview();
        return Ok(());
    };

    match command {
        Commands::Init => {
            if Config::create_default_if_missing()? {
                println!("✓ Config file created. Edit config.toml and run again.");
            } else {
                println!("Config file already exists.");
            }
            Ok(())
        }
        Commands::Status => commands::status::cmd_status(config).await,
        Commands::User { command } => commands::user::dispatch(config, command).await,
        Commands::Claim { command } => commands::claim::dispatch(config, command).await,
        Commands::Login { command } => commands::login::dispatch(config, command).await,
        Commands::Role { command } => commands::role::dispatch(config, command).await,
    }
}
