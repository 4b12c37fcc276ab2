//! Outbound mail relay configuration

use serde::{Deserialize, Serialize};

/// Configuration for the HTTP mail relay used to deliver verification codes
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EmailConfig {
    /// Base URL of the relay's message endpoint
    pub relay_url: String,

    /// API key for the relay
    pub api_key: String,

    /// Sender address shown to recipients
    pub from_address: String,

    /// Timeout for relay requests in seconds
    pub request_timeout_secs: u64,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            relay_url: String::from("http://localhost:8025/messages"),
            api_key: String::new(),
            from_address: String::from("BloodBridge <no-reply@bloodbridge.app>"),
            request_timeout_secs: 30,
        }
    }
}

impl EmailConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            relay_url: std::env::var("MAIL_RELAY_URL").unwrap_or(defaults.relay_url),
            api_key: std::env::var("MAIL_RELAY_API_KEY").unwrap_or(defaults.api_key),
            from_address: std::env::var("MAIL_FROM").unwrap_or(defaults.from_address),
            request_timeout_secs: std::env::var("MAIL_REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.request_timeout_secs),
        }
    }
}
