//! HTTP mail relay client.
//!
//! Implements the core `Mailer` trait by POSTing messages to a JSON mail
//! relay endpoint. Delivery failures surface synchronously to the caller;
//! recipient addresses are masked in logs.

use async_trait::async_trait;
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, error, info};

use bb_core::services::account::mask_email;
use bb_core::services::mailer::Mailer;
use bb_shared::config::EmailConfig;

use crate::InfrastructureError;

/// Mail relay configuration
#[derive(Debug, Clone)]
pub struct RelayConfig {
    /// Message endpoint URL
    pub url: String,
    /// Bearer key for the relay
    pub api_key: String,
    /// Sender address shown to recipients
    pub from_address: String,
    /// Timeout for relay requests in seconds
    pub request_timeout_secs: u64,
}

impl From<EmailConfig> for RelayConfig {
    fn from(config: EmailConfig) -> Self {
        Self {
            url: config.relay_url,
            api_key: config.api_key,
            from_address: config.from_address,
            request_timeout_secs: config.request_timeout_secs,
        }
    }
}

#[derive(Serialize)]
struct RelayMessage<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    html: &'a str,
}

/// Mailer implementation backed by an HTTP relay
pub struct HttpRelayMailer {
    client: reqwest::Client,
    config: RelayConfig,
}

impl HttpRelayMailer {
    /// Create a new relay mailer
    pub fn new(config: RelayConfig) -> Result<Self, InfrastructureError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| InfrastructureError::Email(format!("Failed to build client: {}", e)))?;

        info!("Mail relay client initialized for {}", config.url);

        Ok(Self { client, config })
    }

    /// Create from environment variables
    pub fn from_env() -> Result<Self, InfrastructureError> {
        Self::new(EmailConfig::from_env().into())
    }
}

#[async_trait]
impl Mailer for HttpRelayMailer {
    async fn send(&self, to: &str, subject: &str, html_body: &str) -> Result<(), String> {
        let message = RelayMessage {
            from: &self.config.from_address,
            to,
            subject,
            html: html_body,
        };

        debug!("Dispatching email to {}", mask_email(to));

        let response = self
            .client
            .post(&self.config.url)
            .bearer_auth(&self.config.api_key)
            .json(&message)
            .send()
            .await
            .map_err(|e| {
                error!("Mail relay request failed: {}", e);
                format!("relay request failed: {}", e)
            })?;

        if !response.status().is_success() {
            let status = response.status();
            error!(
                "Mail relay rejected message to {}: {}",
                mask_email(to),
                status
            );
            return Err(format!("relay returned {}", status));
        }

        info!("Email dispatched to {}", mask_email(to));
        Ok(())
    }
}
