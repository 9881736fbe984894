//! Layered configuration for the keybeat CLI
//!
//! Precedence (highest to lowest):
//! 1. Command-line flags
//! 2. Environment variables (`DATABASE_URL`, `KEYBEAT_BIND`), including
//!    anything loaded from `./.env` or `~/.keybeat/.env`
//! 3. `~/.keybeat/config.toml`
//! 4. Built-in defaults

use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use keybeat_server::db::DEFAULT_MAX_CONNECTIONS;
use keybeat_server::ServerConfig;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Contents of `config.toml`. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct KeybeatConfig {
    pub server: ServerSection,
    pub database: DatabaseSection,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerSection {
    pub bind: Option<SocketAddr>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DatabaseSection {
    pub url: Option<String>,
    pub max_connections: Option<u32>,
}

impl KeybeatConfig {
    /// Load `~/.keybeat/config.toml`, or defaults if it does not exist.
    pub fn load() -> Result<Self> {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load from an explicit path; a missing file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("No config file at {}", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file (invalid TOML): {}", path.display()))?;

        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Bind address: explicit value, then file, then default.
    pub fn bind_addr(&self, explicit: Option<SocketAddr>) -> SocketAddr {
        explicit
            .or(self.server.bind)
            .unwrap_or_else(|| ServerConfig::default().bind_addr)
    }

    /// Database URL: explicit value, then file.
    pub fn database_url(&self, explicit: Option<String>) -> Option<String> {
        explicit.or_else(|| self.database.url.clone())
    }

    pub fn max_connections(&self, explicit: Option<u32>) -> u32 {
        explicit
            .or(self.database.max_connections)
            .unwrap_or(DEFAULT_MAX_CONNECTIONS)
    }
}

/// keybeat config directory (~/.keybeat)
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".keybeat"))
}

/// Config file path: ~/.keybeat/config.toml
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.toml"))
}

/// Load environment variables from .env files.
///
/// `./.env` is read first, then `~/.keybeat/.env`. dotenvy never overwrites
/// a variable that is already set, so real environment variables win and
/// the current directory wins over the home directory.
pub fn load_dotenv() {
    if let Ok(path) = dotenvy::dotenv() {
        debug!("Loaded .env from current directory: {}", path.display());
    }

    if let Some(env_file) = config_dir().map(|dir| dir.join(".env")) {
        if env_file.exists() {
            match dotenvy::from_path(&env_file) {
                Ok(()) => debug!("Loaded .env from {}", env_file.display()),
                Err(e) => debug!("Failed to load {}: {}", env_file.display(), e),
            }
        }
    }
}

/// Hide the password part of a connection URL.
pub fn redact_url(url: &str) -> String {
    let Some((scheme, rest)) = url.split_once("://") else {
        return url.to_owned();
    };
    let Some((userinfo, host)) = rest.rsplit_once('@') else {
        return url.to_owned();
    };

    match userinfo.split_once(':') {
        Some((user, _)) => format!("{}://{}:***@{}", scheme, user, host),
        None => url.to_owned(),
    }
}

#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show config file path
    Path,
    /// Show effective configuration (file merged with environment)
    Show,
}

pub fn run_config(args: ConfigArgs) -> Result<()> {
    match args.command {
        ConfigCommands::Path => run_path(),
        ConfigCommands::Show => run_show(),
    }
}

fn run_path() -> Result<()> {
    let path = config_path().context("Could not determine home directory")?;
    println!("{}", path.display());
    Ok(())
}

fn run_show() -> Result<()> {
    let file = KeybeatConfig::load()?;

    let bind_from_env = std::env::var("KEYBEAT_BIND")
        .ok()
        .map(|v| v.parse::<SocketAddr>())
        .transpose()
        .context("KEYBEAT_BIND is not a valid socket address")?;

    let effective = KeybeatConfig {
        server: ServerSection {
            bind: Some(file.bind_addr(bind_from_env)),
        },
        database: DatabaseSection {
            url: file
                .database_url(std::env::var("DATABASE_URL").ok())
                .map(|url| redact_url(&url)),
            max_connections: Some(file.max_connections(None)),
        },
    };

    let rendered = toml::to_string_pretty(&effective).context("Failed to render config")?;
    print!("{}", rendered);
    Ok(())
}
