//! Client configuration

use std::time::Duration;

use ::config::{Config, ConfigError, Environment};
use serde::Deserialize;

/// Where the catalog API lives and how long to wait for it
#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the API, without the `/api` prefix
    pub url: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl ClientConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout_secs: 10,
        }
    }

    /// Create a new ClientConfig from environment variables
    ///
    /// # Environment Variables
    /// - `CATALOG_API_URL`: Base URL (default: "http://localhost:8000")
    /// - `CATALOG_API_TIMEOUT_SECS`: Request timeout (default: 10)
    pub fn from_env() -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("url", "http://localhost:8000")?
            .set_default("timeout_secs", 10_i64)?
            .add_source(Environment::with_prefix("CATALOG_API").try_parsing(true))
            .build()?
            .try_deserialize()
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
