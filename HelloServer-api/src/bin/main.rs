use std::net::SocketAddr;

use dotenv::dotenv;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use hello_server_api::api::create_application;
use hello_server_api::config::Config;
use hello_server_data::database;

/// The main entry point for the HelloServer bootstrap
///
/// This function:
/// 1. Loads environment variables from a .env file if one exists
/// 2. Sets up tracing for logging
/// 3. Resolves the configuration (PORT, MONGODB_URI)
/// 4. Fires off the database connection attempt
/// 5. Binds the HTTP listener and serves the (routeless) application
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file if it exists
    dotenv().ok();

    // Initialize tracing for structured logging
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(env_filter)
        .init();

    let config = Config::from_env()?;

    // Fire and forget: the listener comes up whether or not the
    // database does. The task logs its own outcome.
    database::spawn_connect(config.database());

    // Create the application router
    let app = create_application();

    // Start the server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = TcpListener::bind(addr).await?;
    info!("Server listening on port {}", config.port);

    axum::serve(listener, app).await?;

    Ok(())
}
