//! Verification code value object for email-based account verification.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;

/// Length of the verification code
pub const CODE_LENGTH: usize = 6;

/// Default expiration time for verification codes (15 minutes)
pub const DEFAULT_EXPIRATION_MINUTES: i64 = 15;

/// A short-lived 6-digit code proving email ownership.
///
/// The code is not cryptographically bound to the account; a resend simply
/// replaces it with a fresh one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationCode {
    /// The 6-digit code, leading-zero-free (100000..=999999)
    pub code: String,

    /// Timestamp when the code expires
    pub expires_at: DateTime<Utc>,
}

impl VerificationCode {
    /// Generates a new random code expiring after `expiration_minutes`
    pub fn generate(expiration_minutes: i64) -> Self {
        Self {
            code: Self::generate_code(),
            expires_at: Utc::now() + Duration::minutes(expiration_minutes),
        }
    }

    /// Generates a uniformly random 6-digit code in 100000..=999999
    fn generate_code() -> String {
        let mut rng = rand::thread_rng();
        let code: u32 = rng.gen_range(100_000..=999_999);
        code.to_string()
    }

    /// Checks if the verification code has expired
    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }

    /// Checks if the provided code matches
    pub fn matches(&self, input: &str) -> bool {
        self.code == input
    }
}

impl Default for VerificationCode {
    fn default() -> Self {
        Self::generate(DEFAULT_EXPIRATION_MINUTES)
    }
}
