//! Admin configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `ADMIN_HOST` - Bind address (default: 127.0.0.1)
//! - `ADMIN_PORT` - Listen port (default: 3001)
//! - `ADMIN_BASE_URL` - Public URL for the admin panel (default: `http://localhost:3001`)
//! - `LUXE_DATA_DIR` - Catalog data directory shared with the storefront (default: ./data)
//! - `LUXE_CACHE_TTL_SECS` - How long catalog reads are cached; 0 disables expiry (default: 5)
//! - `ADMIN_LOGIN_EMAIL` - Login email (default: admin@brand.com)
//! - `ADMIN_LOGIN_PASSWORD` - Login password (default: admin123)
//! - `ADMIN_SESSION_TTL_HOURS` - Auth token lifetime (default: 24)
//! - `ADMIN_LOGIN_DELAY_MS` - Pause before each credential check (default: 1200)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

use luxe_core::SessionPolicy;

pub const DEFAULT_LOGIN_EMAIL: &str = "admin@brand.com";
pub const DEFAULT_LOGIN_PASSWORD: &str = "admin123";
const DEFAULT_LOGIN_DELAY_MS: u64 = 1200;
const DEFAULT_CACHE_TTL_SECS: u64 = 5;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Admin application configuration.
#[derive(Debug, Clone)]
pub struct AdminConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public base URL (HTTPS here turns on secure cookies)
    pub base_url: String,
    /// Directory holding the persisted catalog
    pub data_dir: PathBuf,
    /// Cache lifetime for catalog reads, so CLI writes become visible
    pub cache_ttl: Option<Duration>,
    /// Email accepted at login
    pub login_email: String,
    /// Password accepted at login
    pub login_password: SecretString,
    /// Lifetime of issued auth tokens
    pub session_policy: SessionPolicy,
    /// Artificial pause before every credential check
    pub login_delay: Duration,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment (e.g. "production")
    pub sentry_environment: Option<String>,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 3001,
            base_url: "http://localhost:3001".to_string(),
            data_dir: PathBuf::from("data"),
            cache_ttl: Some(Duration::from_secs(DEFAULT_CACHE_TTL_SECS)),
            login_email: DEFAULT_LOGIN_EMAIL.to_string(),
            login_password: SecretString::from(DEFAULT_LOGIN_PASSWORD),
            session_policy: SessionPolicy::default(),
            login_delay: Duration::from_millis(DEFAULT_LOGIN_DELAY_MS),
            sentry_dsn: None,
            sentry_environment: None,
        }
    }
}

impl AdminConfig {
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

        let login_password = get_optional_env("ADMIN_LOGIN_PASSWORD")
            .map_or_else(|| defaults.login_password.clone(), SecretString::from);

        let ttl_hours = parse_env_or(
            "ADMIN_SESSION_TTL_HOURS",
            SessionPolicy::DEFAULT_TTL_HOURS,
        )?;
        if ttl_hours <= 0 {
            return Err(ConfigError::InvalidEnvVar(
                "ADMIN_SESSION_TTL_HOURS".to_string(),
                "must be positive".to_string(),
            ));
        }

        let cache_ttl_secs = parse_env_or("LUXE_CACHE_TTL_SECS", DEFAULT_CACHE_TTL_SECS)?;

        Ok(Self {
            host: parse_env_or("ADMIN_HOST", defaults.host)?,
            port: parse_env_or("ADMIN_PORT", defaults.port)?,
            base_url: get_env_or_default("ADMIN_BASE_URL", &defaults.base_url),
            data_dir: get_optional_env("LUXE_DATA_DIR").map_or(defaults.data_dir, PathBuf::from),
            cache_ttl: (cache_ttl_secs > 0).then(|| Duration::from_secs(cache_ttl_secs)),
            login_email: get_env_or_default("ADMIN_LOGIN_EMAIL", &defaults.login_email),
            login_password,
            session_policy: SessionPolicy::new(chrono::Duration::hours(ttl_hours)),
            login_delay: Duration::from_millis(parse_env_or(
                "ADMIN_LOGIN_DELAY_MS",
                DEFAULT_LOGIN_DELAY_MS,
            )?),
            sentry_dsn: get_optional_env("SENTRY_DSN"),
            sentry_environment: get_optional_env("SENTRY_ENVIRONMENT"),
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Whether the login still accepts the built-in default password.
    #[must_use]
    pub fn uses_default_password(&self) -> bool {
        self.login_password.expose_secret() == DEFAULT_LOGIN_PASSWORD
    }

    /// Whether the panel is served over HTTPS.
    #[must_use]
    pub fn is_secure(&self) -> bool {
        self.base_url.starts_with("https://")
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}

fn get_env_or_default(key: &str, default: &str) -> String {
    get_optional_env(key).unwrap_or_else(|| default.to_string())
}

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
