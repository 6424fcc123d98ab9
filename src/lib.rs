pub mod cli;
pub mod config;
pub mod db;
pub mod domain;
pub mod entities;
pub mod identity;
pub mod models;
pub mod services;

pub use config::Config;

use clap::Parser;
use tracing_subscriber::EnvFilter;

pub async fn run() -> anyhow::Result<()> {
    let config = Config::load()?;
    config.validate()?;

    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.general.log_level));

    let fmt_layer = tracing_subscriber::fmt::layer();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    let args = cli::Cli::parse();
    cli::dispatch(args, &config).await
}
