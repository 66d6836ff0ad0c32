//! Application configuration
//!
//! Centralized configuration management with environment variable support
//! and sensible defaults.

use std::env;
use std::time::Duration;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Server configuration
    pub server: ServerConfig,
    /// Contact store configuration
    pub store: StoreConfig,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port to bind the server to
    pub port: u16,
    /// Host address to bind to
    pub host: String,
    /// Directory served for paths no API route matches
    pub static_dir: String,
}

/// Contact store configuration
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// SQLite connection string; the in-memory store is used when unset
    pub database_url: Option<String>,
    /// Whether the in-memory store starts with the default entries
    pub seed_contacts: bool,
    /// How long a store query waits for a connection before giving up (in seconds)
    pub timeout_secs: u64,
}

impl Config {
    /// Load configuration from environment variables with defaults
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig {
                port: env::var("PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(3001),
                host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                static_dir: env::var("STATIC_DIR").unwrap_or_else(|_| "dist".to_string()),
            },
            store: StoreConfig {
                database_url: env::var("DATABASE_URL").ok().filter(|url| !url.is_empty()),
                seed_contacts: env::var("SEED_CONTACTS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(true),
                timeout_secs: env::var("STORE_TIMEOUT_SECS")
                    .ok()
                    .and_then(|t| t.parse().ok())
                    .unwrap_or(5),
            },
        }
    }

    /// Get the server address as a string
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Store timeout as a [`Duration`]
    pub fn store_timeout(&self) -> Duration {
        Duration::from_secs(self.store.timeout_secs)
    }
}
