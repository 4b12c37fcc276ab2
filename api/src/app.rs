//! Application route composition.
//!
//! Route registration is split from server startup so integration tests
//! can mount the same routing table over in-memory services.

use actix_web::{web, HttpResponse};

use bb_core::repositories::DonorRepository;
use bb_core::services::mailer::Mailer;
use bb_shared::types::response::ErrorResponse;

use crate::routes;

/// Register all application routes: health check, the /api/auth scope,
/// and the JSON 404 fallback
pub fn configure_app<D, M>(cfg: &mut web::ServiceConfig)
where
    D: DonorRepository + 'static,
    M: Mailer + 'static,
{
    cfg.route("/health", web::get().to(health_check));
    routes::auth::configure::<D, M>(cfg);
    cfg.default_service(web::route().to(not_found));
}

async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "bloodbridge-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new("The requested resource was not found."))
}
