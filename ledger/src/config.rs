//! Configuration management via environment variables
//!
//! Provides helper functions for reading environment variables with
//! defaults, and the server configuration built from them.

use std::path::PathBuf;

/// Environment variable holding the database file path.
pub const DB_PATH_ENV: &str = "LEDGER_DB_PATH";
/// Environment variable holding the bind address.
pub const HOST_ENV: &str = "LEDGER_HOST";
/// Environment variable holding the listen port.
pub const PORT_ENV: &str = "LEDGER_PORT";

/// Database file used when `LEDGER_DB_PATH` is unset.
pub const DEFAULT_DB_PATH: &str = "ledger.db";
/// Bind address used when `LEDGER_HOST` is unset.
pub const DEFAULT_HOST: &str = "0.0.0.0";
/// Listen port used when `LEDGER_PORT` is unset.
pub const DEFAULT_PORT: u16 = 8000;

/// Get an environment variable, treating empty values as unset
pub fn get_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// Get an environment variable or a default value
pub fn get_env_or(name: &str, default: &str) -> String {
    get_env(name).unwrap_or_else(|| default.to_string())
}

/// Get an environment variable parsed to a specific type
///
/// Falls back to `default` (with a warning) when the value does not parse.
pub fn get_env_parse<T: std::str::FromStr>(name: &str, default: T) -> T {
    match get_env(name) {
        Some(raw) => match raw.parse() {
            Ok(value) => value,
            Err(_) => {
                tracing::warn!(
                    "Environment variable '{}' has invalid value '{}', using default",
                    name,
                    raw
                );
                default
            }
        },
        None => default,
    }
}

/// Server configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Bind address
    pub host: String,
    /// Listen port
    pub port: u16,
    /// Backing SQLite file
    pub db_path: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            db_path: PathBuf::from(DEFAULT_DB_PATH),
        }
    }
}

impl ServerConfig {
    /// Load server configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            host: get_env_or(HOST_ENV, DEFAULT_HOST),
            port: get_env_parse(PORT_ENV, DEFAULT_PORT),
            db_path: PathBuf::from(get_env_or(DB_PATH_ENV, DEFAULT_DB_PATH)),
        }
    }

    /// `host:port` string passed to the listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
