//! HTTP server command
//!
//! Runs the session API against PostgreSQL, or against an in-memory store
//! with `--in-memory`.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use keybeat_server::db::{create_pool_with_options, migrations, MemorySessionStore, PgSessionStore, SessionStore};
use keybeat_server::{run_server, AppState, ServerConfig};

use crate::config::{redact_url, KeybeatConfig};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to (default: 127.0.0.1:8000)
    #[arg(long, short = 'b', env = "KEYBEAT_BIND")]
    pub bind: Option<SocketAddr>,

    /// Database URL (overrides config file)
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: Option<String>,

    /// Maximum pooled database connections
    #[arg(long)]
    pub max_connections: Option<u32>,

    /// Keep sessions in memory instead of PostgreSQL (lost on exit)
    #[arg(long)]
    pub in_memory: bool,

    /// Do not create the session table on startup
    #[arg(long)]
    pub skip_migrations: bool,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs, config: &KeybeatConfig) -> Result<()> {
    let server_config = ServerConfig {
        bind_addr: config.bind_addr(args.bind),
    };

    let store: Arc<dyn SessionStore> = if args.in_memory {
        tracing::warn!("Using in-memory session store; sessions are lost on exit");
        Arc::new(MemorySessionStore::new())
    } else {
        let database_url = config.database_url(args.database_url).context(
            "DATABASE_URL not set. Set via --database-url, DATABASE_URL env, \
             ~/.keybeat/.env, or [database] url in ~/.keybeat/config.toml",
        )?;
        let max_connections = config.max_connections(args.max_connections);

        tracing::info!(
            database = %redact_url(&database_url),
            max_connections,
            "Connecting to session database"
        );

        let pool = create_pool_with_options(&database_url, max_connections)
            .await
            .context("Failed to create database pool")?;

        if args.skip_migrations {
            tracing::info!("Skipping migrations");
        } else {
            migrations::run(&pool)
                .await
                .context("Failed to create session table")?;
        }

        Arc::new(PgSessionStore::new(pool))
    };

    tracing::info!("Starting keybeat server on {}", server_config.bind_addr);

    // Blocks until shutdown
    run_server(AppState::new(store), server_config)
        .await
        .context("Server error")?;

    Ok(())
}
