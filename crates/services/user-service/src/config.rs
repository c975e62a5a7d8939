//! User service configuration.

use std::env;

use common::DatabaseConfig;

/// User service configuration.
#[derive(Debug, Clone)]
pub struct UserServiceConfig {
    /// Database connection and pool settings
    pub database: DatabaseConfig,
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
}

impl UserServiceConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let database_url = env::var("USER_SERVICE_DATABASE_URL")
            .or_else(|_| env::var("DATABASE_URL"))
            .unwrap_or_else(|_| DatabaseConfig::default().url);

        Self {
            database: DatabaseConfig::from_env(database_url),
            host: env::var("USER_SERVICE_HOST")
                .unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("USER_SERVICE_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3003),
        }
    }
}
