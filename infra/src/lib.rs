//! # Infrastructure Layer
//!
//! Concrete implementations of the core abstractions:
//! - **Database**: MySQL donor repository using SQLx
//! - **Email**: HTTP mail relay client delivering verification codes

pub mod database;
pub mod email;

use thiserror::Error;

/// Errors raised while setting up or talking to external services
#[derive(Error, Debug)]
pub enum InfrastructureError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Email relay error: {0}")]
    Email(String),
}
