//! Handler for POST /api/auth/login

use actix_web::{web, HttpResponse};
use validator::Validate;

use bb_core::repositories::DonorRepository;
use bb_core::services::account::mask_email;
use bb_core::services::mailer::Mailer;

use crate::dto::auth::{DonorResponse, LoginRequest, LoginResponse};
use crate::handlers::error::{domain_error_response, validation_failure_response};

use super::AppState;

/// Authenticate a verified donor and return a bearer token.
pub async fn login<D, M>(
    state: web::Data<AppState<D, M>>,
    request: web::Json<LoginRequest>,
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
        .login(&request.email, &request.password)
        .await
    {
        Ok(result) => {
            log::info!("Login succeeded for {}", mask_email(&request.email));
            HttpResponse::Ok().json(LoginResponse {
                message: "Login successful".to_string(),
                token: result.token,
                user: DonorResponse::from(result.donor),
            })
        }
        Err(error) => domain_error_response(&error),
    }
}
