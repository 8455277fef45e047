//! API Server Entry Point
//!
//! Application entry point and server initialization.

use api::bootstrap::{ServerConfig, connect_database, init_tracing};
use auth::{AuthAppState, AuthConfig, PgUserRepository, auth_router, users_router};
use axum::{
    Router,
    http::{HeaderValue, Method, header},
};
use billing::billing_router;
use kernel::error::app_error::AppError;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    init_tracing();

    // Configuration is read once; nothing below touches the environment
    let server_config = ServerConfig::from_env()?;
    let auth_config = AuthConfig::from_env()?;
    tracing::info!(
        token_ttl_secs = auth_config.token_ttl.as_secs(),
        admin_count = auth_config.admin_emails.len(),
        "Auth configuration loaded"
    );

    let pool = connect_database(&server_config.database_url).await?;

    let auth_state = AuthAppState::new(PgUserRepository::new(pool), auth_config)?;

    // CORS configuration
    let origin: HeaderValue = server_config.web_origin.parse()?;
    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ]))
        .allow_credentials(true);

    // Build router
    let api = Router::new()
        .merge(auth_router(auth_state.clone()))
        .merge(users_router(auth_state.clone()))
        .merge(billing_router(auth_state));

    let app = Router::new()
        .nest("/api", api)
        .fallback(|| async { AppError::not_found("Resource not found") })
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], server_config.port));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
