// HelloServer-api lib.rs
//
// This is the main library file for the HelloServer bootstrap.
// It re-exports the configuration and the (routeless) application router.

// Public modules
pub mod api;
pub mod config;
