use std::net::SocketAddr;

use axum::http::{header, HeaderValue, Method};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use partyboard::server::{
    config::Config,
    error::{config::ConfigError, AppError},
    router,
    service::{auth::token::TokenConfig, moderation::ModerationFilter},
    startup,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "partyboard=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    startup::seed_reference_data(&db).await?;
    startup::purge_stale_sessions(&db).await?;

    let tokens = TokenConfig::new(
        config.jwt_secret.clone(),
        config.access_expiry_mins,
        config.refresh_expiry_days,
    );
    let moderation = ModerationFilter::new(&config.profanity_extra_words);

    let mut app = router::router()
        .with_state(AppState::new(db, tokens, moderation))
        .layer(TraceLayer::new_for_http());

    if let Some(origin) = &config.cors_origin {
        let origin = origin.parse::<HeaderValue>().map_err(|_| {
            ConfigError::InvalidEnvVar {
                name: "CORS_ORIGIN".to_string(),
                reason: format!("'{origin}' is not a valid header value"),
            }
        })?;
        app = app.layer(
            CorsLayer::new()
                .allow_origin(origin)
                .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
                .allow_headers([header::CONTENT_TYPE])
                .allow_credentials(true),
        );
    }

    let host = config.host.parse().map_err(|_| ConfigError::InvalidEnvVar {
        name: "HOST".to_string(),
        reason: format!("'{}' is not a valid IP address", config.host),
    })?;
    let addr = SocketAddr::new(host, config.port);
    tracing::info!("Starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::InternalError(e.to_string()))?;
    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::InternalError(e.to_string()))?;

    Ok(())
}
