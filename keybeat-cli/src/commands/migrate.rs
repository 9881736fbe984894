//! Create the session table without starting the server

use anyhow::{Context, Result};
use clap::Parser;

use keybeat_server::db::{create_pool, migrations};

use crate::config::KeybeatConfig;

/// Arguments for the migrate command
#[derive(Parser, Debug)]
pub struct MigrateArgs {
    /// Database URL (overrides config file)
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: Option<String>,
}

pub async fn run_migrate(args: MigrateArgs, config: &KeybeatConfig) -> Result<()> {
    let database_url = config
        .database_url(args.database_url)
        .context("DATABASE_URL not set. Set via --database-url, DATABASE_URL env, or ~/.keybeat/config.toml")?;

    let pool = create_pool(&database_url)
        .await
        .context("Failed to create database pool")?;

    migrations::run(&pool)
        .await
        .context("Failed to create session table")?;

    println!("Session table ready");
    Ok(())
}
