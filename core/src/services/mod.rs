//! Business services for the account lifecycle.

pub mod account;
pub mod mailer;
pub mod password;
pub mod sweeper;
pub mod token;

pub use account::{AccountService, AccountServiceConfig, LoginResult};
pub use mailer::Mailer;
pub use password::PasswordHasher;
pub use sweeper::{ExpirySweeper, SweeperConfig};
pub use token::{Claims, TokenService};
