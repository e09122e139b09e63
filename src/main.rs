//! QueShield API Server
//!
//! Stateless risk-scoring API: URL phishing detection and phone spam
//! detection behind a rate-limited HTTP shell.
//!
//! # Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │                      QUESHIELD API                        │
//! ├───────────────────────────────────────────────────────────┤
//! │  ┌──────────┐  ┌─────────────┐  ┌──────────────────────┐  │
//! │  │  HTTP    │  │  Rate       │  │  Static Dashboard    │  │
//! │  │  Shell   │  │  Limiter    │  │  (ServeDir)          │  │
//! │  │  (Axum)  │  │  (per IP)   │  │                      │  │
//! │  └────┬─────┘  └──────┬──────┘  └──────────────────────┘  │
//! │       └───────────────┤                                   │
//! │                       ▼                                   │
//! │        ┌─────────────────────────────┐                    │
//! │        │  Rule Evaluators (pure fns) │                    │
//! │        │  url_scan │ phone_check     │                    │
//! │        └─────────────────────────────┘                    │
//! └───────────────────────────────────────────────────────────┘
//! ```

mod config;
mod error;
mod handlers;
mod logic;
mod middleware;

use axum::{
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use middleware::rate_limit::RateLimiter;

pub use error::{AppError, AppResult};

#[tokio::main]
async fn main() {
    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::from_env();

    // Initialize logging
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "queshield_api=debug,tower_http=debug".into());
    if config.is_production() {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    tracing::info!("QueShield API server starting...");
    tracing::info!(
        "Rate limit: {} requests / {}s per client",
        config.rate_limit_max_requests,
        config.rate_limit_window_secs
    );

    // Build application state
    let state = AppState {
        limiter: RateLimiter::new(config.rate_limit_window_secs, config.rate_limit_max_requests),
        config: config.clone(),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("🛡️  Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .unwrap();
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: config::Config,
    pub limiter: RateLimiter,
}

/// Create the main router with all routes
fn create_router(state: AppState) -> Router {
    // Public routes (no rate limit)
    let public_routes = Router::new().route("/health", get(handlers::health::check));

    // Scoring API (per-client rate limit)
    let api_routes = Router::new()
        .route("/api/v1/scan/url", post(handlers::scan::url))
        .route("/api/v1/check/phone", post(handlers::phone::check))
        .route("/api/v1/threats", get(handlers::threats::summary))
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::rate_limit::enforce,
        ));

    // Combine all routes; anything unmatched falls through to the dashboard
    Router::new()
        .merge(public_routes)
        .merge(api_routes)
        .fallback_service(ServeDir::new(&state.config.static_dir))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
