//! Account lifecycle service: signup, email verification, resend, login.

mod config;
mod service;


pub use config::AccountServiceConfig;
pub use service::{mask_email, AccountService, LoginResult};
