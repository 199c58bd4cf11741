//! Application configuration resolved from environment variables.

use std::env;

use hello_server_data::database::DatabaseConfig;
use thiserror::Error;

/// Port used when `PORT` is not set
pub const DEFAULT_PORT: u16 = 3000;

/// Configuration error
#[derive(Error, Debug)]
pub enum ConfigError {
    /// `PORT` was set but is not a valid port number
    #[error("Invalid PORT value: {0}")]
    InvalidPort(String),
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Port the HTTP listener binds on
    pub port: u16,
    /// MongoDB connection string
    pub mongodb_uri: String,
}

impl Config {
    /// Read the configuration from the environment.
    ///
    /// Unset variables fall back to their defaults (`PORT` 3000, the
    /// local `hellodb` connection string). A `PORT` that is set but
    /// does not parse as a port number is an error; there is no
    /// sensible way to continue with it.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = match env::var("PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            Err(_) => DEFAULT_PORT,
        };

        let mongodb_uri = DatabaseConfig::from_env().uri;

        Ok(Self { port, mongodb_uri })
    }

    /// Database view of this configuration
    pub fn database(&self) -> DatabaseConfig {
        DatabaseConfig {
            uri: self.mongodb_uri.clone(),
        }
    }
}
