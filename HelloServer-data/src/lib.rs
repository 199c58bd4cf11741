// HelloServer data layer
// This crate handles connectivity to the MongoDB instance behind the server

// Database connection management
pub mod database;
