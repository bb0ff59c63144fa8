use std::time::Duration;

use crate::server::{
    error::{config::ConfigError, AppError},
    worldbank::DEFAULT_BASE_URL,
};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 30;

/// Runtime configuration read from the environment.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// SeaORM connection string, e.g. `sqlite://dashboard.db?mode=rwc`.
    pub database_url: String,
    /// Address the HTTP server listens on.
    pub bind_address: String,
    /// Root of the World Bank API.
    pub worldbank_base_url: String,
    /// Timeout applied to every upstream request.
    pub upstream_timeout: Duration,
    /// Whether the session cookie is marked `Secure`.
    pub session_secure_cookie: bool,
}

impl Config {
    /// Loads configuration from process environment variables.
    ///
    /// # Returns
    /// - `Ok(Config)` - All variables present and valid
    /// - `Err(AppError::ConfigErr)` - `DATABASE_URL` missing or a value failed to parse
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_source(|name| std::env::var(name).ok())
    }

    /// Loads configuration from an arbitrary variable lookup.
    ///
    /// # Arguments
    /// - `var` - Returns the value of a variable, or `None` when unset
    pub fn from_source(var: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let database_url = var("DATABASE_URL")
            .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let upstream_timeout = match var("UPSTREAM_TIMEOUT_SECS") {
            Some(value) => Duration::from_secs(parse_var("UPSTREAM_TIMEOUT_SECS", value)?),
            None => Duration::from_secs(DEFAULT_UPSTREAM_TIMEOUT_SECS),
        };

        let session_secure_cookie = match var("SESSION_SECURE_COOKIE") {
            Some(value) => parse_var("SESSION_SECURE_COOKIE", value)?,
            None => true,
        };

        Ok(Self {
            database_url,
            bind_address: var("BIND_ADDRESS").unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
            worldbank_base_url: var("WORLDBANK_BASE_URL")
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            upstream_timeout,
            session_secure_cookie,
        })
    }
}

fn parse_var<T: std::str::FromStr>(name: &str, value: String) -> Result<T, ConfigError> {
    value
        .trim()
        .parse::<T>()
        .map_err(|_| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value,
        })
}
