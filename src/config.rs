//! Configuration Module
//!
//! Handles loading service configuration from environment variables.
//! The library core takes plain values; only the binary reads the env.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

/// Public REST API serving the catalog data.
pub const DEFAULT_API_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Service configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Base URL of the remote data API
    pub api_base_url: String,
    /// `limit` query parameter of the initial listing
    pub listing_limit: u32,
    /// Default TTL in seconds for cached responses
    pub default_ttl: u64,
    /// TTL in seconds for the initial listing
    pub listing_ttl: u64,
    /// Background sweep interval in seconds
    pub cleanup_interval: u64,
    /// Directory holding the image assets
    pub asset_dir: PathBuf,
    /// Public URL prefix under which assets are served
    pub asset_url_prefix: String,
    /// Optional JSON file seeding the favorites document store
    pub favorites_path: Option<PathBuf>,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `API_BASE_URL` - Remote API base (default: https://pokeapi.co/api/v2)
    /// - `LISTING_LIMIT` - Listing size (default: 1000)
    /// - `DEFAULT_TTL` - Default response TTL in seconds (default: 300)
    /// - `LISTING_TTL` - Listing TTL in seconds (default: 1800)
    /// - `CLEANUP_INTERVAL` - Sweep frequency in seconds (default: 600)
    /// - `ASSET_DIR` - Image asset directory (default: assets)
    /// - `ASSET_URL_PREFIX` - Public asset URL prefix (default: /assets)
    /// - `FAVORITES_PATH` - Favorites seed file (default: unset)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            server_port: parse_var("SERVER_PORT").unwrap_or(defaults.server_port),
            api_base_url: env::var("API_BASE_URL")
                .map(|v| v.trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_base_url),
            listing_limit: parse_var("LISTING_LIMIT").unwrap_or(defaults.listing_limit),
            default_ttl: parse_var("DEFAULT_TTL").unwrap_or(defaults.default_ttl),
            listing_ttl: parse_var("LISTING_TTL").unwrap_or(defaults.listing_ttl),
            cleanup_interval: parse_var("CLEANUP_INTERVAL").unwrap_or(defaults.cleanup_interval),
            asset_dir: env::var("ASSET_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.asset_dir),
            asset_url_prefix: env::var("ASSET_URL_PREFIX").unwrap_or(defaults.asset_url_prefix),
            favorites_path: env::var("FAVORITES_PATH").ok().map(PathBuf::from),
        }
    }

    pub fn default_ttl(&self) -> Duration {
        Duration::from_secs(self.default_ttl)
    }

    pub fn listing_ttl(&self) -> Duration {
        Duration::from_secs(self.listing_ttl)
    }

    pub fn cleanup_interval(&self) -> Duration {
        Duration::from_secs(self.cleanup_interval)
    }
}

fn parse_var<T: FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.parse().ok())
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 3000,
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            listing_limit: 1000,
            default_ttl: 300,
            listing_ttl: 1800,
            cleanup_interval: 600,
            asset_dir: PathBuf::from("assets"),
            asset_url_prefix: "/assets".to_string(),
            favorites_path: None,
        }
    }
}
