//! Handler for POST /api/auth/verify-email

use actix_web::{web, HttpResponse};
use validator::Validate;

use bb_core::repositories::DonorRepository;
use bb_core::services::account::mask_email;
use bb_core::services::mailer::Mailer;
use bb_shared::types::response::MessageResponse;

use crate::dto::auth::VerifyEmailRequest;
use crate::handlers::error::{domain_error_response, validation_failure_response};

use super::AppState;

/// Confirm a donor's email address with the code they received.
pub async fn verify_email<D, M>(
    state: web::Data<AppState<D, M>>,
    request: web::Json<VerifyEmailRequest>,
) -> HttpResponse
where
    D: DonorRepository + 'static,
    M: Mailer + 'static,
{
    if let Err(errors) = request.0.validate() {
        return validation_failure_response(&errors);
    }

    match state
        .account_service
        .verify_email(&request.email, &request.code)
        .await
    {
        Ok(()) => {
            log::info!("Email verified for {}", mask_email(&request.email));
            HttpResponse::Ok().json(MessageResponse::new("Email verified successfully."))
        }
        Err(error) => domain_error_response(&error),
    }
}
