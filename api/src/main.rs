use std::sync::Arc;

use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenvy::dotenv;
use log::{info, warn};

use bb_api::config::Config;
use bb_api::routes::auth::AppState;
use bb_api::{app, middleware};
use bb_core::services::account::{AccountService, AccountServiceConfig};
use bb_core::services::sweeper::{ExpirySweeper, SweeperConfig};
use bb_core::services::token::TokenService;
use bb_infra::database::{create_pool, MySqlDonorRepository};
use bb_infra::email::HttpRelayMailer;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = Config::from_env();
    info!("Starting BloodBridge API ({})", config.environment);

    if config.environment.is_production() && config.auth.is_using_default_secret() {
        warn!("JWT_SECRET is not set; tokens are signed with the development default");
    }

    let pool = create_pool(&config.database).await?;
    info!("Database pool ready");

    let donor_repository = Arc::new(MySqlDonorRepository::new(pool));
    let mailer = Arc::new(HttpRelayMailer::new(config.email.clone().into())?);
    let token_service = Arc::new(TokenService::new(
        &config.auth.jwt_secret,
        config.auth.token_expiry_days,
    ));

    let account_service = Arc::new(AccountService::new(
        donor_repository.clone(),
        mailer,
        token_service,
        AccountServiceConfig::default(),
    ));

    // Daily purge of unverified accounts whose codes have expired
    let sweeper = Arc::new(ExpirySweeper::new(
        donor_repository.clone(),
        SweeperConfig::default(),
    ));
    sweeper.start_background_task();

    let state = web::Data::new(AppState { account_service });
    let bind_address = config.server.bind_address();
    let environment = config.environment;
    let allowed_origins = config.server.allowed_origins.clone();

    info!("Listening on {}", bind_address);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(middleware::cors::create_cors(environment, &allowed_origins))
            .app_data(state.clone())
            .configure(app::configure_app::<MySqlDonorRepository, HttpRelayMailer>)
    })
    .bind(&bind_address)?
    .run()
    .await?;

    Ok(())
}
