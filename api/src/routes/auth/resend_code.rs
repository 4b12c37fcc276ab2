//! Handler for POST /api/auth/resend-code

use actix_web::{web, HttpResponse};
use validator::Validate;

use bb_core::repositories::DonorRepository;
use bb_core::services::account::mask_email;
use bb_core::services::mailer::Mailer;
use bb_shared::types::response::MessageResponse;

use crate::dto::auth::ResendCodeRequest;
use crate::handlers::error::{domain_error_response, validation_failure_response};

use super::AppState;

/// Issue a fresh verification code to a pending account. The previous
/// code stops working once this succeeds.
pub async fn resend_code<D, M>(
    state: web::Data<AppState<D, M>>,
    request: web::Json<ResendCodeRequest>,
) -> HttpResponse
where
    D: DonorRepository + 'static,
    M: Mailer + 'static,
{
    if let Err(errors) = request.0.validate() {
        return validation_failure_response(&errors);
    }

    match state.account_service.resend_code(&request.email).await {
        Ok(()) => {
            log::info!("Verification code reissued for {}", mask_email(&request.email));
            HttpResponse::Ok().json(MessageResponse::new("New verification code sent."))
        }
        Err(error) => domain_error_response(&error),
    }
}
