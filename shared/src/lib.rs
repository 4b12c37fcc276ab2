//! Shared utilities and common types for the BloodBridge server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types loaded from the environment
//! - API response structures

pub mod config;
pub mod types;

// Re-export commonly used items at crate root
pub use config::{
    AuthConfig, DatabaseConfig, EmailConfig, Environment, ServerConfig,
};
pub use types::{ErrorResponse, MessageResponse};
