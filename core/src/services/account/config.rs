//! Account service configuration

/// Configuration for the account lifecycle service
#[derive(Debug, Clone)]
pub struct AccountServiceConfig {
    /// Minutes before a freshly generated verification code expires
    pub code_expiry_minutes: i64,
}

impl Default for AccountServiceConfig {
    fn default() -> Self {
        Self {
            code_expiry_minutes: 15,
        }
    }
}
