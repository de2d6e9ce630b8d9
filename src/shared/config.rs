//! Application configuration. Listen address, storage backend, paths.
//!
//! Sources, later wins: optional file named by ACCOUNTS_CONFIG, then
//! ACCOUNTS_* environment variables (a `.env` file is loaded first).

use config::builder::DefaultState;
use config::{ConfigBuilder, ConfigError};
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::PathBuf;

pub const DEFAULT_BIND: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_DATA_DIR: &str = "./data";

/// Where users are persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// libsql database file under `data_dir`.
    #[default]
    Sqlite,
    /// Process memory; lost on restart.
    Memory,
}

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    /// Address to bind. Read from ACCOUNTS_BIND.
    #[serde(default)]
    pub bind: Option<String>,

    /// Port to listen on. Read from ACCOUNTS_PORT.
    #[serde(default)]
    pub port: Option<u16>,

    /// Storage backend: "sqlite" or "memory". Read from ACCOUNTS_STORAGE.
    #[serde(default)]
    pub storage: Option<StorageBackend>,

    /// Directory holding accounts.db. Read from ACCOUNTS_DATA_DIR.
    #[serde(default)]
    pub data_dir: Option<String>,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        if let Ok(path) = std::env::var("ACCOUNTS_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        c = c.add_source(config::Environment::with_prefix("ACCOUNTS"));
        Self::from_builder(c)
    }

    pub fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        builder.build()?.try_deserialize()
    }

    pub fn bind_or_default(&self) -> String {
        self.bind.clone().unwrap_or_else(|| DEFAULT_BIND.to_string())
    }

    pub fn port_or_default(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    pub fn storage_or_default(&self) -> StorageBackend {
        self.storage.unwrap_or_default()
    }

    pub fn data_dir_or_default(&self) -> PathBuf {
        PathBuf::from(self.data_dir.as_deref().unwrap_or(DEFAULT_DATA_DIR))
    }

    /// Socket address from bind + port.
    pub fn listen_addr(&self) -> Result<SocketAddr, std::net::AddrParseError> {
        format!("{}:{}", self.bind_or_default(), self.port_or_default()).parse()
    }
}
