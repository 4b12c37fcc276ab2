//! Outbound notification transport.

use async_trait::async_trait;

/// Trait for email dispatch integration.
///
/// Delivery is best-effort; failures surface synchronously to the caller as
/// an opaque message.
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Send an HTML email to a single recipient
    async fn send(&self, to: &str, subject: &str, html_body: &str) -> Result<(), String>;
}

/// Mailer that records outgoing messages instead of delivering them.
///
/// Used by the core test suites and the lifecycle integration test.
pub struct RecordingMailer {
    sent: tokio::sync::Mutex<Vec<RecordedEmail>>,
    fail: std::sync::atomic::AtomicBool,
}

/// A message captured by [`RecordingMailer`]
#[derive(Debug, Clone)]
pub struct RecordedEmail {
    pub to: String,
    pub subject: String,
    pub html_body: String,
}

impl RecordingMailer {
    pub fn new() -> Self {
        Self {
            sent: tokio::sync::Mutex::new(Vec::new()),
            fail: std::sync::atomic::AtomicBool::new(false),
        }
    }

    /// Make subsequent sends fail, to exercise delivery-failure paths
    pub fn fail_next_sends(&self, fail: bool) {
        self.fail.store(fail, std::sync::atomic::Ordering::SeqCst);
    }

    pub async fn sent_messages(&self) -> Vec<RecordedEmail> {
        self.sent.lock().await.clone()
    }
}

impl Default for RecordingMailer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, to: &str, subject: &str, html_body: &str) -> Result<(), String> {
        if self.fail.load(std::sync::atomic::Ordering::SeqCst) {
            return Err("simulated delivery failure".to_string());
        }
        self.sent.lock().await.push(RecordedEmail {
            to: to.to_string(),
            subject: subject.to_string(),
            html_body: html_body.to_string(),
        });
        Ok(())
    }
}
