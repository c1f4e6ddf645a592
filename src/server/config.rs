//! Environment configuration.

use crate::server::error::config::ConfigError;

const DEFAULT_MAX_CONNECTIONS: u32 = 10;
const DEFAULT_LOG_LEVEL: &str = "info";

/// Settings read from environment variables at startup.
pub struct Config {
    /// Connection string of the relational database (`DATABASE_URL`).
    pub database_url: String,
    /// Upper bound of the connection pool (`DATABASE_MAX_CONNECTIONS`).
    pub database_max_connections: u32,
    /// Whether SQL statements are logged (`DATABASE_SQLX_LOGGING`).
    pub database_sqlx_logging: bool,
    /// Minimum level of emitted log lines (`LOG_LEVEL`).
    pub log_level: String,
}

impl Config {
    /// Read configuration from the process environment.
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and optional ones valid
    /// - `Err(ConfigError::MissingEnvVar)` - `DATABASE_URL` is not set
    /// - `Err(ConfigError::InvalidEnvValue)` - An optional variable could not be parsed
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|url| !url.is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let database_max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(value) => match value.parse::<u32>() {
                Ok(0) | Err(_) => {
                    return Err(ConfigError::InvalidEnvValue {
                        var: "DATABASE_MAX_CONNECTIONS".to_string(),
                        reason: format!("expected a positive integer, got {:?}", value),
                    })
                }
                Ok(max) => max,
            },
            None => DEFAULT_MAX_CONNECTIONS,
        };

        let database_sqlx_logging = match lookup("DATABASE_SQLX_LOGGING") {
            Some(value) => value.parse::<bool>().map_err(|_| ConfigError::InvalidEnvValue {
                var: "DATABASE_SQLX_LOGGING".to_string(),
                reason: format!("expected true or false, got {:?}", value),
            })?,
            None => false,
        };

        let log_level = lookup("LOG_LEVEL").unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

        Ok(Self {
            database_url,
            database_max_connections,
            database_sqlx_logging,
            log_level,
        })
    }
}
