//! Shared configuration loaded from environment variables.

use std::env;

/// Default log filter when neither `RUST_LOG` nor `LOG_LEVEL` is set
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Default service name attached to log output
pub const DEFAULT_SERVICE_NAME: &str = "user-entity";

/// Base configuration shared by all binaries.
#[derive(Debug, Clone)]
pub struct Config {
    /// Service name for logging and tracing
    pub service_name: String,
    /// Log level
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            service_name: DEFAULT_SERVICE_NAME.to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// A `.env` file in the working directory is read first when present.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            service_name: lookup("SERVICE_NAME")
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.service_name),
            log_level: lookup("LOG_LEVEL")
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.log_level),
        }
    }
}
