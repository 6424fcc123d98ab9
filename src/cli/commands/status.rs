//! Connectivity check command handler

use crate::config::Config;

use super::open_store;

pub async fn cmd_status(config: &Config) -> anyhow::Result<()> {
    println!("Database: {}", config.general.database_path);

    let store = open_store(config).await?;
    store.ping().await?;

    println!("✓ Database reachable, migrations applied");
    Ok(())
}
