//! Server configuration loaded from a TOML file.
//!
//! Every key is optional. A file containing only
//!
//! ```toml
//! port = 9000
//! ```
//!
//! keeps the defaults for everything else, and a missing file means all defaults.

use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at '{path}': {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("Failed to parse TOML from '{path}': {source}")]
    Parse {
        path: String,
        source: toml::de::Error,
    },
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Config {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// sqlx connection URL, e.g. `sqlite://sandwich_shop.db` or `sqlite::memory:`.
    #[serde(default = "default_database_url")]
    pub database_url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Mailbox capacity of each resource actor.
    #[serde(default = "default_channel_buffer")]
    pub channel_buffer: usize,
    /// Fallback filter when `RUST_LOG` is not set.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}
fn default_port() -> u16 {
    8000
}
fn default_database_url() -> String {
    "sqlite://sandwich_shop.db".to_string()
}
fn default_max_connections() -> u32 {
    5
}
fn default_channel_buffer() -> usize {
    32
}
fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            database_url: default_database_url(),
            max_connections: default_max_connections(),
            channel_buffer: default_channel_buffer(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Reads and parses a TOML file. A file that does not exist yields [`Config::default`].
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(contents) => Self::from_toml(&contents).map_err(|source| ConfigError::Parse {
                path: path.to_string(),
                source,
            }),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Self::default()),
            Err(source) => Err(ConfigError::Read {
                path: path.to_string(),
                source,
            }),
        }
    }

    pub fn from_toml(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    /// `host:port`, ready for `TcpListener::bind`.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
