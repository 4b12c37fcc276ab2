//! Application configuration assembled from environment variables.

use bb_shared::config::{AuthConfig, DatabaseConfig, EmailConfig, Environment, ServerConfig};

/// Complete API configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub environment: Environment,
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub email: EmailConfig,
}

impl Config {
    /// Load every section from the environment
    pub fn from_env() -> Self {
        Self {
            environment: Environment::from_env(),
            server: ServerConfig::from_env(),
            database: DatabaseConfig::from_env(),
            auth: AuthConfig::from_env(),
            email: EmailConfig::from_env(),
        }
    }
}
