//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Maximum number of entries the employees cache can hold, 0 = unbounded
    pub cache_max_entries: usize,
    /// TTL in seconds for cached entries, None = entries never expire
    pub cache_ttl: Option<u64>,
    /// Background cleanup task interval in seconds
    pub cleanup_interval: u64,
    /// Whether to insert the fixed sample employees at startup
    pub seed_on_startup: bool,
    /// SQLite database path; the in-memory store is used when unset
    #[cfg(feature = "sqlite")]
    pub sqlite_path: Option<String>,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 8080)
    /// - `CACHE_MAX_ENTRIES` - Maximum cache entries (default: 1000)
    /// - `CACHE_TTL` - Cache TTL in seconds (default: unset, 0 also disables)
    /// - `CLEANUP_INTERVAL` - Cleanup frequency in seconds (default: 60)
    /// - `SEED_ON_STARTUP` - Insert sample employees (default: true)
    /// - `SQLITE_PATH` - SQLite database file (`sqlite` feature only)
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            server_port: parse_var("SERVER_PORT").unwrap_or(defaults.server_port),
            cache_max_entries: parse_var("CACHE_MAX_ENTRIES")
                .unwrap_or(defaults.cache_max_entries),
            cache_ttl: parse_var("CACHE_TTL").filter(|ttl: &u64| *ttl > 0),
            cleanup_interval: parse_var("CLEANUP_INTERVAL")
                .filter(|secs: &u64| *secs > 0)
                .unwrap_or(defaults.cleanup_interval),
            seed_on_startup: env::var("SEED_ON_STARTUP")
                .ok()
                .and_then(|v| parse_bool(&v))
                .unwrap_or(defaults.seed_on_startup),
            #[cfg(feature = "sqlite")]
            sqlite_path: env::var("SQLITE_PATH").ok().filter(|p| !p.is_empty()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 8080,
            cache_max_entries: 1000,
            cache_ttl: None,
            cleanup_interval: 60,
            seed_on_startup: true,
            #[cfg(feature = "sqlite")]
            sqlite_path: None,
        }
    }
}

fn parse_var<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.trim().parse().ok())
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}
