//! Endpoint integration tests for the account lifecycle.
//!
//! Mounts the real routing table over the in-memory repository and the
//! recording mailer, then drives the API the way a client would.

use std::sync::Arc;

use actix_web::{http::StatusCode, test, web, App};
use serde_json::json;

use bb_api::app::configure_app;
use bb_api::routes::auth::AppState;
use bb_core::repositories::MockDonorRepository;
use bb_core::services::account::{AccountService, AccountServiceConfig};
use bb_core::services::mailer::RecordingMailer;
use bb_core::services::password::PasswordHasher;
use bb_core::services::token::TokenService;

struct Fixture {
    state: web::Data<AppState<MockDonorRepository, RecordingMailer>>,
    mailer: Arc<RecordingMailer>,
}

fn fixture() -> Fixture {
    let repository = Arc::new(MockDonorRepository::new());
    let mailer = Arc::new(RecordingMailer::new());
    let tokens = Arc::new(TokenService::new("endpoint-test-secret", 7));

    let service = AccountService::new(
        repository,
        mailer.clone(),
        tokens,
        AccountServiceConfig::default(),
    )
    .with_password_hasher(PasswordHasher::with_cost(4));

    Fixture {
        state: web::Data::new(AppState {
            account_service: Arc::new(service),
        }),
        mailer,
    }
}

macro_rules! test_app {
    ($fixture:expr) => {
        test::init_service(
            App::new()
                .app_data($fixture.state.clone())
                .configure(configure_app::<MockDonorRepository, RecordingMailer>),
        )
        .await
    };
}

fn signup_body(email: &str) -> serde_json::Value {
    json!({
        "name": "Amina Yusuf",
        "dateOfBirth": "1995-04-12",
        "phoneNumber": "+2348012345678",
        "email": email,
        "gender": "Female",
        "password": "s3cretpass",
        "confirmPassword": "s3cretpass",
        "bloodGroup": "O-",
        "genotype": "AA",
        "lastDonationDate": "First Time Donor",
        "currentLocation": "Lagos",
        "preferredDonationRadius": "10km",
        "preferredDonationCenters": ["Lagos Central Blood Bank"],
        "agreeToDonate": true
    })
}

/// Pull the six-digit code out of a recorded verification email
fn extract_code(html: &str) -> String {
    let start = html.find("<b>").expect("code marker") + 3;
    let end = html.find("</b>").expect("code marker");
    html[start..end].to_string()
}

async fn latest_code(mailer: &RecordingMailer) -> String {
    let sent = mailer.sent_messages().await;
    extract_code(&sent.last().expect("verification email").html_body)
}

#[actix_web::test]
async fn test_signup_returns_created_and_sends_code() {
    let fx = fixture();
    let app = test_app!(fx);

    let request = test::TestRequest::post()
        .uri("/api/auth/signup")
        .set_json(signup_body("amina@example.com"))
        .to_request();
    let response = test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let body: serde_json::Value = test::read_body_json(response).await;
    assert_eq!(body["message"], "Signup successful. Please verify your email.");

    let sent = fx.mailer.sent_messages().await;
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to, "amina@example.com");
    let code = extract_code(&sent[0].html_body);
    assert_eq!(code.len(), 6);
    assert!(code.chars().all(|c| c.is_ascii_digit()));
}

#[actix_web::test]
async fn test_signup_duplicate_email_rejected() {
    let fx = fixture();
    let app = test_app!(fx);

    let request = test::TestRequest::post()
        .uri("/api/auth/signup")
        .set_json(signup_body("amina@example.com"))
        .to_request();
    assert_eq!(
        test::call_service(&app, request).await.status(),
        StatusCode::CREATED
    );

    let request = test::TestRequest::post()
        .uri("/api/auth/signup")
        .set_json(signup_body("Amina@Example.com"))
        .to_request();
    let response = test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = test::read_body_json(response).await;
    assert_eq!(body["error"], "Email already registered.");
}

#[actix_web::test]
async fn test_signup_password_mismatch_rejected() {
    let fx = fixture();
    let app = test_app!(fx);

    let mut body = signup_body("amina@example.com");
    body["confirmPassword"] = json!("different");

    let request = test::TestRequest::post()
        .uri("/api/auth/signup")
        .set_json(body)
        .to_request();
    let response = test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = test::read_body_json(response).await;
    assert_eq!(body["error"], "Passwords do not match.");
}

#[actix_web::test]
async fn test_signup_invalid_email_fails_validation() {
    let fx = fixture();
    let app = test_app!(fx);

    let mut body = signup_body("amina@example.com");
    body["email"] = json!("not-an-email");

    let request = test::TestRequest::post()
        .uri("/api/auth/signup")
        .set_json(body)
        .to_request();
    let response = test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(fx.mailer.sent_messages().await.is_empty());
}

#[actix_web::test]
async fn test_verify_then_login_issues_token() {
    let fx = fixture();
    let app = test_app!(fx);

    let request = test::TestRequest::post()
        .uri("/api/auth/signup")
        .set_json(signup_body("amina@example.com"))
        .to_request();
    assert_eq!(
        test::call_service(&app, request).await.status(),
        StatusCode::CREATED
    );
    let code = latest_code(&fx.mailer).await;

    let request = test::TestRequest::post()
        .uri("/api/auth/verify-email")
        .set_json(json!({ "email": "amina@example.com", "code": code }))
        .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(response).await;
    assert_eq!(body["message"], "Email verified successfully.");

    let request = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(json!({ "email": "amina@example.com", "password": "s3cretpass" }))
        .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(response).await;
    assert_eq!(body["message"], "Login successful");
    assert!(!body["token"].as_str().unwrap().is_empty());

    let user = body["user"].as_object().unwrap();
    assert_eq!(user["email"], "amina@example.com");
    assert_eq!(user["isVerified"], true);
    assert!(!user.contains_key("passwordHash"));
    assert!(!user.contains_key("verificationCode"));
}

#[actix_web::test]
async fn test_login_before_verification_unauthorized() {
    let fx = fixture();
    let app = test_app!(fx);

    let request = test::TestRequest::post()
        .uri("/api/auth/signup")
        .set_json(signup_body("amina@example.com"))
        .to_request();
    assert_eq!(
        test::call_service(&app, request).await.status(),
        StatusCode::CREATED
    );

    let request = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(json!({ "email": "amina@example.com", "password": "s3cretpass" }))
        .to_request();
    let response = test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body: serde_json::Value = test::read_body_json(response).await;
    assert_eq!(body["error"], "Please verify your email before login.");
}

#[actix_web::test]
async fn test_login_wrong_password_and_unknown_email_same_error() {
    let fx = fixture();
    let app = test_app!(fx);

    let request = test::TestRequest::post()
        .uri("/api/auth/signup")
        .set_json(signup_body("amina@example.com"))
        .to_request();
    assert_eq!(
        test::call_service(&app, request).await.status(),
        StatusCode::CREATED
    );
    let code = latest_code(&fx.mailer).await;

    let request = test::TestRequest::post()
        .uri("/api/auth/verify-email")
        .set_json(json!({ "email": "amina@example.com", "code": code }))
        .to_request();
    assert_eq!(
        test::call_service(&app, request).await.status(),
        StatusCode::OK
    );

    let request = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(json!({ "email": "amina@example.com", "password": "wrongpass1" }))
        .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let wrong_password: serde_json::Value = test::read_body_json(response).await;

    let request = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(json!({ "email": "nobody@example.com", "password": "s3cretpass" }))
        .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let unknown_email: serde_json::Value = test::read_body_json(response).await;

    assert_eq!(wrong_password["error"], "Invalid email or password.");
    assert_eq!(wrong_password, unknown_email);
}

#[actix_web::test]
async fn test_verify_with_wrong_code_rejected() {
    let fx = fixture();
    let app = test_app!(fx);

    let request = test::TestRequest::post()
        .uri("/api/auth/signup")
        .set_json(signup_body("amina@example.com"))
        .to_request();
    assert_eq!(
        test::call_service(&app, request).await.status(),
        StatusCode::CREATED
    );

    let code = latest_code(&fx.mailer).await;
    let wrong = if code == "000000" { "000001" } else { "000000" };

    let request = test::TestRequest::post()
        .uri("/api/auth/verify-email")
        .set_json(json!({ "email": "amina@example.com", "code": wrong }))
        .to_request();
    let response = test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = test::read_body_json(response).await;
    assert_eq!(body["error"], "Invalid or expired code.");
}

#[actix_web::test]
async fn test_resend_code_sends_fresh_email() {
    let fx = fixture();
    let app = test_app!(fx);

    let request = test::TestRequest::post()
        .uri("/api/auth/signup")
        .set_json(signup_body("amina@example.com"))
        .to_request();
    assert_eq!(
        test::call_service(&app, request).await.status(),
        StatusCode::CREATED
    );

    let request = test::TestRequest::post()
        .uri("/api/auth/resend-code")
        .set_json(json!({ "email": "amina@example.com" }))
        .to_request();
    let response = test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(response).await;
    assert_eq!(body["message"], "New verification code sent.");

    let sent = fx.mailer.sent_messages().await;
    assert_eq!(sent.len(), 2);

    // The reissued code is the one that verifies
    let code = extract_code(&sent[1].html_body);
    let request = test::TestRequest::post()
        .uri("/api/auth/verify-email")
        .set_json(json!({ "email": "amina@example.com", "code": code }))
        .to_request();
    assert_eq!(
        test::call_service(&app, request).await.status(),
        StatusCode::OK
    );
}

#[actix_web::test]
async fn test_resend_code_for_verified_account_rejected() {
    let fx = fixture();
    let app = test_app!(fx);

    let request = test::TestRequest::post()
        .uri("/api/auth/signup")
        .set_json(signup_body("amina@example.com"))
        .to_request();
    assert_eq!(
        test::call_service(&app, request).await.status(),
        StatusCode::CREATED
    );
    let code = latest_code(&fx.mailer).await;

    let request = test::TestRequest::post()
        .uri("/api/auth/verify-email")
        .set_json(json!({ "email": "amina@example.com", "code": code }))
        .to_request();
    assert_eq!(
        test::call_service(&app, request).await.status(),
        StatusCode::OK
    );

    let request = test::TestRequest::post()
        .uri("/api/auth/resend-code")
        .set_json(json!({ "email": "amina@example.com" }))
        .to_request();
    let response = test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = test::read_body_json(response).await;
    assert_eq!(body["error"], "Email already verified.");
}

#[actix_web::test]
async fn test_unknown_route_returns_json_404() {
    let fx = fixture();
    let app = test_app!(fx);

    let request = test::TestRequest::get().uri("/api/unknown").to_request();
    let response = test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = test::read_body_json(response).await;
    assert_eq!(body["error"], "The requested resource was not found.");
}
