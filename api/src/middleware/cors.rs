//! CORS middleware configuration.
//!
//! Development allows any origin so a local frontend can talk to the API
//! without ceremony. Production restricts origins to the configured
//! ALLOWED_ORIGINS list.

use actix_cors::Cors;
use actix_web::http::{header, Method};

use bb_shared::config::Environment;

/// Build the CORS middleware for the current environment
pub fn create_cors(environment: Environment, allowed_origins: &[String]) -> Cors {
    if environment.is_production() {
        create_production_cors(allowed_origins)
    } else {
        create_development_cors()
    }
}

fn create_development_cors() -> Cors {
    log::info!("Configuring CORS for development");

    Cors::default()
        .allow_any_origin()
        .allowed_methods(vec![Method::GET, Method::POST, Method::OPTIONS])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::ORIGIN,
        ])
        .max_age(3600)
}

fn create_production_cors(allowed_origins: &[String]) -> Cors {
    log::info!("Configuring CORS for production");

    let mut cors = Cors::default()
        .allowed_methods(vec![Method::GET, Method::POST, Method::OPTIONS])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .supports_credentials()
        .max_age(3600);

    for origin in allowed_origins {
        log::info!("Allowing origin: {}", origin);
        cors = cors.allowed_origin(origin);
    }

    cors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_development_cors_builds() {
        let _cors = create_cors(Environment::Development, &[]);
    }

    #[test]
    fn test_production_cors_builds_with_origins() {
        let origins = vec!["https://app.bloodbridge.app".to_string()];
        let _cors = create_cors(Environment::Production, &origins);
    }
}
