//! Handler for POST /api/auth/signup

use actix_web::{web, HttpResponse};
use validator::Validate;

use bb_core::repositories::DonorRepository;
use bb_core::services::account::mask_email;
use bb_core::services::mailer::Mailer;
use bb_shared::types::response::MessageResponse;

use crate::dto::auth::SignupRequest;
use crate::handlers::error::{domain_error_response, validation_failure_response};

use super::AppState;

/// Register a new donor account.
///
/// Persists the donor unverified and emails a six-digit verification code.
/// Responds 201 on success; the account cannot log in until verified.
pub async fn signup<D, M>(
    state: web::Data<AppState<D, M>>,
    request: web::Json<SignupRequest>,
) -> HttpResponse
where
    D: DonorRepository + 'static,
    M: Mailer + 'static,
{
    if let Err(errors) = request.0.validate() {
        log::warn!(
            "Signup request for {} failed validation",
            mask_email(&request.email)
        );
        return validation_failure_response(&errors);
    }

    let (profile, password, confirm_password) = request.into_inner().into_parts();
    let email = profile.email.clone();

    match state
        .account_service
        .signup(profile, &password, &confirm_password)
        .await
    {
        Ok(()) => {
            log::info!("Signup accepted for {}", mask_email(&email));
            HttpResponse::Created().json(MessageResponse::new(
                "Signup successful. Please verify your email.",
            ))
        }
        Err(error) => domain_error_response(&error),
    }
}
