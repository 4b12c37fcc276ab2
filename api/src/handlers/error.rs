//! Mapping from domain errors to HTTP responses.
//!
//! Client mistakes map to 400, an unverified login attempt to 401, and
//! everything infrastructural to 500. Internal detail never leaks: 500
//! bodies carry a fixed message and the cause goes to the log instead.

use actix_web::HttpResponse;

use bb_core::errors::{AccountError, DomainError};
use bb_shared::types::response::ErrorResponse;

/// Convert a domain error into the HTTP response for it
pub fn domain_error_response(error: &DomainError) -> HttpResponse {
    match error {
        DomainError::Account(account_error) => account_error_response(account_error),
        DomainError::Validation(validation_error) => {
            log::warn!("Request rejected: {}", validation_error);
            HttpResponse::BadRequest().json(ErrorResponse::new(validation_error.to_string()))
        }
        DomainError::Token(token_error) => {
            log::error!("Token handling failed: {}", token_error);
            internal_error_response()
        }
        DomainError::Database { message } => {
            log::error!("Database error: {}", message);
            internal_error_response()
        }
        DomainError::Internal { message } => {
            log::error!("Internal error: {}", message);
            internal_error_response()
        }
    }
}

fn account_error_response(error: &AccountError) -> HttpResponse {
    match error {
        AccountError::EmailNotVerified => {
            log::warn!("Login attempt on unverified account");
            HttpResponse::Unauthorized().json(ErrorResponse::new(error.to_string()))
        }
        AccountError::EmailDeliveryFailure => {
            log::error!("Verification email delivery failed");
            internal_error_response()
        }
        _ => {
            log::warn!("Request rejected: {}", error);
            HttpResponse::BadRequest().json(ErrorResponse::new(error.to_string()))
        }
    }
}

fn internal_error_response() -> HttpResponse {
    HttpResponse::InternalServerError().json(ErrorResponse::new("Internal server error."))
}

/// Build the 400 response for a body that failed request validation,
/// reporting the first field message
pub fn validation_failure_response(errors: &validator::ValidationErrors) -> HttpResponse {
    let message = errors
        .field_errors()
        .into_iter()
        .flat_map(|(_, field_errors)| field_errors.iter())
        .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
        .unwrap_or_else(|| "Invalid request data.".to_string());

    HttpResponse::BadRequest().json(ErrorResponse::new(message))
}
