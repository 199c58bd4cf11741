//! Database connection module for the HelloServer application
//!
//! This module wraps the MongoDB driver: configuration read from the
//! environment, a connect operation that verifies the server answers,
//! and a fire-and-forget variant whose outcome is only observable
//! through the log.

use std::env;

use mongodb::bson::doc;
use mongodb::options::ClientOptions;
use mongodb::Client;
use thiserror::Error;
use tracing::{error, info};

/// Connection string used when `MONGODB_URI` is not set
pub const DEFAULT_MONGODB_URI: &str = "mongodb://localhost/hellodb";

/// Database error
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// The connection string could not be parsed
    #[error("Invalid MongoDB connection string: {0}")]
    InvalidUri(mongodb::error::Error),

    /// The server did not answer the connection handshake
    #[error("MongoDB connection failed: {0}")]
    ConnectionFailed(mongodb::error::Error),
}

/// Database configuration
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Connection string for the MongoDB instance
    pub uri: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            uri: DEFAULT_MONGODB_URI.to_string(),
        }
    }
}

impl DatabaseConfig {
    /// Create a new database configuration from environment variables
    pub fn from_env() -> Self {
        let uri = env::var("MONGODB_URI").unwrap_or_else(|_| DEFAULT_MONGODB_URI.to_string());
        Self { uri }
    }
}

/// Open a client for the configured instance and verify it with a ping.
///
/// The driver connects lazily, so a round-trip against the server is
/// required before the connection can be reported as established. The
/// ping targets the default database named in the URI, or `admin` when
/// the URI names none.
pub async fn connect(config: &DatabaseConfig) -> Result<Client, DatabaseError> {
    let options = ClientOptions::parse(&config.uri)
        .await
        .map_err(DatabaseError::InvalidUri)?;

    let client = Client::with_options(options).map_err(DatabaseError::InvalidUri)?;

    let database = client
        .default_database()
        .unwrap_or_else(|| client.database("admin"));

    database
        .run_command(doc! { "ping": 1 })
        .await
        .map_err(DatabaseError::ConnectionFailed)?;

    Ok(client)
}

/// Kick off the connection attempt without gating the caller on it.
///
/// Listener startup must not wait for the database. On success an info
/// line containing the connection string is emitted; on failure an
/// error line with the reason. A failed connection is not fatal and is
/// not retried.
pub fn spawn_connect(config: DatabaseConfig) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        match connect(&config).await {
            Ok(_) => info!("Database connected at {}", config.uri),
            Err(e) => error!("Database connection failed: {}", e),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Environment variables are process-wide, so tests touching them
    // take this lock to keep the parallel test runner honest.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn default_config_uses_local_hellodb() {
        let config = DatabaseConfig::default();
        assert_eq!(config.uri, "mongodb://localhost/hellodb");
    }

    #[test]
    fn from_env_falls_back_to_default_uri() {
        let _guard = ENV_LOCK.lock().unwrap();
        env::remove_var("MONGODB_URI");

        let config = DatabaseConfig::from_env();
        assert_eq!(config.uri, DEFAULT_MONGODB_URI);
    }

    #[test]
    fn from_env_reads_mongodb_uri() {
        let _guard = ENV_LOCK.lock().unwrap();
        env::set_var("MONGODB_URI", "mongodb://db.internal:27017/prod");

        let config = DatabaseConfig::from_env();
        assert_eq!(config.uri, "mongodb://db.internal:27017/prod");

        env::remove_var("MONGODB_URI");
    }

    #[tokio::test]
    async fn connect_rejects_malformed_uri() {
        let config = DatabaseConfig {
            uri: "not-a-mongodb-uri".to_string(),
        };

        let result = connect(&config).await;
        assert!(matches!(result, Err(DatabaseError::InvalidUri(_))));
    }

    #[tokio::test]
    async fn connect_reports_unreachable_server() {
        // Port 9 is the discard port; nothing is listening there. The
        // short server selection timeout keeps the test fast.
        let config = DatabaseConfig {
            uri: "mongodb://127.0.0.1:9/hellodb?serverSelectionTimeoutMS=200".to_string(),
        };

        let result = connect(&config).await;
        assert!(matches!(result, Err(DatabaseError::ConnectionFailed(_))));
    }

    #[tokio::test]
    async fn spawn_connect_survives_failure() {
        let config = DatabaseConfig {
            uri: "mongodb://127.0.0.1:9/hellodb?serverSelectionTimeoutMS=200".to_string(),
        };

        // The task logs the failure and finishes; it must not panic.
        spawn_connect(config).await.unwrap();
    }
}
