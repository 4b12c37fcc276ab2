//! Email module - outbound delivery through an HTTP mail relay

pub mod relay;

pub use relay::{HttpRelayMailer, RelayConfig};
