//! Account lifecycle endpoints under /api/auth.

mod login;
mod resend_code;
mod signup;
mod verify_email;

pub use login::login;
pub use resend_code::resend_code;
pub use signup::signup;
pub use verify_email::verify_email;

use std::sync::Arc;

use actix_web::web;

use bb_core::repositories::DonorRepository;
use bb_core::services::account::AccountService;
use bb_core::services::mailer::Mailer;

/// Application state shared across the account handlers
pub struct AppState<D, M>
where
    D: DonorRepository,
    M: Mailer,
{
    pub account_service: Arc<AccountService<D, M>>,
}

/// Register the account routes on a service config.
///
/// Generic over the repository and mailer so tests can mount the same
/// routes over in-memory implementations.
pub fn configure<D, M>(cfg: &mut web::ServiceConfig)
where
    D: DonorRepository + 'static,
    M: Mailer + 'static,
{
    cfg.service(
        web::scope("/api/auth")
            .route("/signup", web::post().to(signup::<D, M>))
            .route("/verify-email", web::post().to(verify_email::<D, M>))
            .route("/resend-code", web::post().to(resend_code::<D, M>))
            .route("/login", web::post().to(login::<D, M>)),
    );
}
