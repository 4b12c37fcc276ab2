//! Error type definitions for the account lifecycle and related operations
//!
//! Client-facing messages live on the variants; the presentation layer maps
//! each variant to an HTTP status code.

use thiserror::Error;

/// Account lifecycle errors
///
/// Unknown-email and wrong-password both map to `InvalidCredentials`, and
/// code mismatch and code expiry both map to `InvalidOrExpiredCode`, so a
/// caller cannot probe which half failed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AccountError {
    #[error("Passwords do not match.")]
    PasswordMismatch,

    #[error("Email already registered.")]
    EmailAlreadyRegistered,

    #[error("User not found.")]
    AccountNotFound,

    #[error("Email already verified.")]
    AlreadyVerified,

    #[error("Invalid or expired code.")]
    InvalidOrExpiredCode,

    #[error("Invalid email or password.")]
    InvalidCredentials,

    #[error("Please verify your email before login.")]
    EmailNotVerified,

    #[error("Failed to send verification email.")]
    EmailDeliveryFailure,
}

/// Token-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Token generation failed")]
    TokenGenerationFailed,
}

/// Input validation failures, rejected before any persistence attempt
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required field: {field}")]
    RequiredField { field: String },

    #[error("Invalid value: {field}")]
    InvalidValue { field: String },

    #[error("Duplicate value: {field}")]
    DuplicateValue { field: String },

    #[error("{rule}")]
    BusinessRule { rule: String },
}
