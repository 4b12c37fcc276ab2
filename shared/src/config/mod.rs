//! Configuration module with business-specific sub-modules
//!
//! Each sub-module reads its settings from environment variables with
//! sensible development defaults:
//! - `auth` - JWT signing secret and token lifetime
//! - `database` - Database connection and pool configuration
//! - `email` - Outbound mail relay credentials
//! - `environment` - Environment detection
//! - `server` - HTTP server bind address and CORS origins

pub mod auth;
pub mod database;
pub mod email;
pub mod environment;
pub mod server;

pub use auth::AuthConfig;
pub use database::DatabaseConfig;
pub use email::EmailConfig;
pub use environment::Environment;
pub use server::ServerConfig;
