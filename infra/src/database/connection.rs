//! Database connection pool management

use sqlx::{mysql::MySqlPoolOptions, MySqlPool};
use std::time::Duration;
use tracing::info;

use bb_shared::config::DatabaseConfig;

use crate::InfrastructureError;

/// Create the MySQL connection pool from configuration
pub async fn create_pool(config: &DatabaseConfig) -> Result<MySqlPool, InfrastructureError> {
    info!(
        "Creating database connection pool with max_connections: {}",
        config.max_connections
    );

    let pool = MySqlPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(1)
        .acquire_timeout(Duration::from_secs(config.connect_timeout))
        .connect(&config.url)
        .await?;

    info!("Database connection pool created successfully");

    Ok(pool)
}
