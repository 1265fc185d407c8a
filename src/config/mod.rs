/// Database connection and table creation
pub mod database;

/// HTTP server settings loaded from config.toml and the environment
pub mod server;
