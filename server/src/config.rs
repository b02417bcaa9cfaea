//! Server configuration from environment variables.
//!
//! DESIGN
//! ======
//! Values are read through a lookup closure so tests never touch the process
//! environment. Blank values count as unset.

use std::num::ParseIntError;

use dashboard_client::config::ApiConfig;

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_PORT: u16 = 3000;
pub const PORT_VAR: &str = "PORT";
pub const API_BASE_URL_VAR: &str = "DASHBOARD_API_BASE_URL";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT value {value:?}: {source}")]
    InvalidPort { value: String, source: ParseIntError },
}

/// Runtime settings for the UI host.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Backend base URL handed to the client through the SSR shell.
    pub api: ApiConfig,
}

impl ServerConfig {
    /// Read configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if `PORT` is set but not a valid port number.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns an error if `PORT` is set but not a valid port number.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port = match read(PORT_VAR) {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|source| ConfigError::InvalidPort { value: raw.clone(), source })?,
            None => DEFAULT_PORT,
        };
        let api = read(API_BASE_URL_VAR).map_or_else(ApiConfig::default, ApiConfig::new);

        Ok(Self { port, api })
    }
}
