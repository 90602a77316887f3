//! Runtime configuration for the API service

use ::config::{Config, ConfigError, Environment};
use serde::Deserialize;

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Interface to bind
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Log filter used when `RUST_LOG` is not set
    pub log_level: String,
    /// Comma separated origins allowed by CORS, `*` allows any
    pub allowed_origins: String,
}

impl AppConfig {
    /// Create a new AppConfig from environment variables
    ///
    /// # Environment Variables
    /// - `API_HOST`: Interface to bind (default: "0.0.0.0")
    /// - `API_PORT`: Port to listen on (default: 8000)
    /// - `API_LOG_LEVEL`: Fallback log filter (default: "info")
    /// - `API_ALLOWED_ORIGINS`: CORS origins (default: "http://localhost:4200")
    pub fn from_env() -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("host", "0.0.0.0")?
            .set_default("port", 8000_i64)?
            .set_default("log_level", "info")?
            .set_default("allowed_origins", "http://localhost:4200")?
            .add_source(Environment::with_prefix("API").try_parsing(true))
            .build()?
            .try_deserialize()
    }

    /// Address the listener binds to
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// The configured CORS origins, trimmed and without empty entries
    pub fn allowed_origins(&self) -> Vec<String> {
        self.allowed_origins
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect()
    }
}
