//! # Store Configuration
//!
//! Connection settings for the hosted data service. Built explicitly or
//! read from the environment:
//!
//! - `MEDCERT_STORE_URL` — base URL of the service's REST surface
//! - `MEDCERT_STORE_API_KEY` — bearer key for read access
//! - `MEDCERT_STORE_TIMEOUT_SECS` — per-request timeout (default 30)
//!
//! The api key is held in a wrapper that zeroizes on drop and redacts
//! itself from `Debug` output, so connection settings can be logged
//! without leaking credentials.

use thiserror::Error;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Environment variable naming the store base URL.
pub const ENV_STORE_URL: &str = "MEDCERT_STORE_URL";
/// Environment variable naming the store api key.
pub const ENV_STORE_API_KEY: &str = "MEDCERT_STORE_API_KEY";
/// Environment variable overriding the request timeout.
pub const ENV_STORE_TIMEOUT_SECS: &str = "MEDCERT_STORE_TIMEOUT_SECS";

/// Default per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Errors building a [`StoreConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required environment variable is missing or empty.
    #[error("missing required environment variable {var}")]
    MissingEnv {
        /// Name of the missing variable.
        var: &'static str,
    },

    /// The timeout override is not a positive integer.
    #[error("invalid {ENV_STORE_TIMEOUT_SECS} value: {value}")]
    InvalidTimeout {
        /// The rejected value.
        value: String,
    },

    /// The api key contains characters that cannot appear in an HTTP header.
    #[error("api key contains characters invalid in an HTTP header")]
    InvalidApiKey,
}

/// A bearer api key, zeroized on drop and redacted in debug output.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct ApiKey(String);

impl ApiKey {
    /// Wrap a raw key string.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Expose the raw key for header construction.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ApiKey(redacted)")
    }
}

/// Connection settings for the hosted data service.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Base URL of the REST surface (e.g. `https://db.novamed.example/rest/v1`).
    pub base_url: String,
    /// Bearer key for read access.
    pub api_key: ApiKey,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl StoreConfig {
    /// Create a configuration with the default timeout.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: ApiKey::new(api_key),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Read the configuration from the environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let base_url = require_env(ENV_STORE_URL)?;
        let api_key = require_env(ENV_STORE_API_KEY)?;

        let timeout_secs = match std::env::var(ENV_STORE_TIMEOUT_SECS) {
            Ok(raw) => raw
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or(ConfigError::InvalidTimeout { value: raw })?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            base_url,
            api_key: ApiKey::new(api_key),
            timeout_secs,
        })
    }
}

fn require_env(var: &'static str) -> Result<String, ConfigError> {
    match std::env::var(var) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::MissingEnv { var }),
    }
}
