use axum::Router;
use tracing::debug;

/// Create the application router.
///
/// No routes are registered, so every request receives axum's default
/// not-found response. The router exists so the listener has something
/// to serve and the tests have something to drive.
pub fn create_app() -> Router {
    debug!("Creating application router");

    Router::new()
}
