//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `STOREFRONT_HOST` - Bind address (default: 127.0.0.1)
//! - `STOREFRONT_PORT` - Listen port (default: 3000)
//! - `STOREFRONT_BASE_URL` - Public URL for the storefront (default: `http://localhost:3000`)
//! - `LUXE_DATA_DIR` - Catalog data directory shared with the admin (default: ./data)
//! - `LUXE_CACHE_TTL_SECS` - How long catalog reads are cached; 0 disables expiry (default: 5)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// Default seconds catalog reads stay cached.
const DEFAULT_CACHE_TTL_SECS: u64 = 5;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public base URL for the storefront
    pub base_url: String,
    /// Directory holding the persisted catalog
    pub data_dir: PathBuf,
    /// Cache lifetime for catalog reads (`None` = until restart)
    pub cache_ttl: Option<Duration>,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment (e.g. "production")
    pub sentry_environment: Option<String>,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 3000,
            base_url: "http://localhost:3000".to_string(),
            data_dir: PathBuf::from("data"),
            cache_ttl: Some(Duration::from_secs(DEFAULT_CACHE_TTL_SECS)),
            sentry_dsn: None,
            sentry_environment: None,
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let defaults = Self::default();

        let host = parse_env_or("STOREFRONT_HOST", defaults.host)?;
        let port = parse_env_or("STOREFRONT_PORT", defaults.port)?;
        let base_url = get_env_or_default("STOREFRONT_BASE_URL", &defaults.base_url);
        let data_dir = get_optional_env("LUXE_DATA_DIR").map_or(defaults.data_dir, PathBuf::from);
        let cache_ttl_secs = parse_env_or("LUXE_CACHE_TTL_SECS", DEFAULT_CACHE_TTL_SECS)?;
        let cache_ttl = (cache_ttl_secs > 0).then(|| Duration::from_secs(cache_ttl_secs));

        Ok(Self {
            host,
            port,
            base_url,
            data_dir,
            cache_ttl,
            sentry_dsn: get_optional_env("SENTRY_DSN"),
            sentry_environment: get_optional_env("SENTRY_ENVIRONMENT"),
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional environment variable (empty counts as unset).
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    get_optional_env(key).unwrap_or_else(|| default.to_string())
}

/// Parse an environment variable, falling back to `default` when unset.
fn parse_env_or<T>(key: &str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    get_optional_env(key).map_or(Ok(default), |raw| {
        raw.parse::<T>()
            .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = StorefrontConfig::default();
        assert_eq!(config.socket_addr().port(), 3000);
        assert_eq!(config.cache_ttl, Some(Duration::from_secs(5)));
    }

    #[test]
    fn test_parse_env_or_uses_default_when_unset() {
        let port: u16 = parse_env_or("LUXE_TEST_UNSET_STOREFRONT_PORT", 4000).expect("default");
        assert_eq!(port, 4000);
    }
}
