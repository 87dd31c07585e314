//! Configuration for the Mercado Fresco server
//!
//! Every setting is a command-line flag with an environment fallback; a
//! `.env` file in the working directory is loaded first by `main`.
//!
//! The data directory is resolved with the following precedence:
//! 1. `--data-dir` / MERCADO_DATA_DIR
//! 2. ~/.config/mercado-fresco/data (production default)
//! 3. ./data (fallback for development)

use clap::{Parser, ValueEnum};
use std::net::SocketAddr;
use std::path::PathBuf;

const DEFAULT_CONFIG_DIR: &str = ".config/mercado-fresco/data";
const DEV_DATA_DIR: &str = "./data";

/// File name of the SQLite database inside the data directory.
pub const DATABASE_FILE: &str = "mercado_fresco.db";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StorageKind {
    /// One SQLite database file.
    Sqlite,
    /// One JSON array file per resource.
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "mercado-fresco-server", version, about = "Mercado Fresco inventory API")]
pub struct Config {
    /// Address to listen on.
    #[arg(long, env = "MERCADO_BIND", default_value = "127.0.0.1:8080")]
    pub bind: SocketAddr,

    /// Storage backend.
    #[arg(long, env = "MERCADO_STORAGE", value_enum, default_value_t = StorageKind::Sqlite)]
    pub storage: StorageKind,

    /// Directory holding the database or the JSON collections.
    #[arg(long, env = "MERCADO_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Shared token required in the `token` header of every API request.
    #[arg(long, env = "MERCADO_API_TOKEN", hide_env_values = true)]
    pub api_token: Option<String>,

    /// Also write logs to a daily rolling file in this directory.
    #[arg(long, env = "MERCADO_LOG_DIR")]
    pub log_dir: Option<PathBuf>,
}

impl Config {
    pub fn data_dir(&self) -> PathBuf {
        self.data_dir.clone().unwrap_or_else(get_data_dir)
    }

    /// Blank tokens count as unset.
    pub fn api_token(&self) -> Option<String> {
        self.api_token
            .as_deref()
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(str::to_string)
    }
}

/// Default data directory when none is configured.
///
/// Priority:
/// 1. $HOME/.config/mercado-fresco/data if HOME is set
/// 2. ./data as fallback
pub fn get_data_dir() -> PathBuf {
    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home).join(DEFAULT_CONFIG_DIR);
    }

    PathBuf::from(DEV_DATA_DIR)
}
