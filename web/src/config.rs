//! Configuration management for the listkeeper server.
//!
//! Loads configuration from environment variables with sensible defaults.

use serde::{Deserialize, Serialize};
use std::env;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Host to bind to (`LISTKEEPER_HOST`, default `127.0.0.1`)
    pub host: String,
    /// Port to bind to (`LISTKEEPER_PORT`, default `8080`)
    pub port: u16,
    /// Default tracing filter when `RUST_LOG` is unset (`LISTKEEPER_LOG`)
    pub log_filter: String,
}

impl Config {
    /// Loads configuration from the environment, falling back to defaults
    /// for anything unset or unparsable.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            host: env_or("LISTKEEPER_HOST", "127.0.0.1"),
            port: env::var("LISTKEEPER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8080),
            log_filter: env_or("LISTKEEPER_LOG", "listkeeper=info,tower_http=info"),
        }
    }

    /// The socket address string to bind the listener to.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}
