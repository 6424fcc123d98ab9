//! Claim command handlers

use crate::cli::ClaimCommands;
use crate::config::Config;
use crate::domain::ClaimValue;
use crate::services::{SeaOrmUserService, UserService};

use super::{open_store, resolve_user};

pub async fn dispatch(config: &Config, command: ClaimCommands) -> anyhow::Result<()> {
    let store = open_store(config).await?;
    let service = SeaOrmUserService::new(store);

    match command {
        ClaimCommands::Add {
            user,
            claim_type,
            claim_value,
        } => {
            let user = resolve_user(&service, &user).await?;
            let claim = ClaimValue::new(claim_type, claim_value);
            service.add_claim(user.id, &claim).await?;

            println!("✓ Added claim {claim} to {}", user.username);
            Ok(())
        }

        ClaimCommands::List { user } => {
            let user = resolve_user(&service, &user).await?;
            let claims = service.get_claims(user.id).await?;

            if claims.is_empty() {
                println!("{} has no claims.", user.username);
                return Ok(());
            }

            println!("Claims for {} ({} total)", user.username, claims.len());
            println!("{:-<60}", "");
            for claim in claims {
                println!("  {} = {}", claim.claim_type, claim.claim_value);
            }
            Ok(())
        }

        ClaimCommands::Remove {
            user,
            claim_type,
            claim_value,
        } => {
            let user = resolve_user(&service, &user).await?;
            let claim = ClaimValue::new(claim_type, claim_value);
            service.remove_claim(user.id, &claim).await?;

            // Removal is idempotent; an absent claim is not an error.
            println!("✓ Claim {claim} is absent from {}", user.username);
            Ok(())
        }
    }
}
