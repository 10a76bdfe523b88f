//! Application state and router assembly.
//!
//! [`build_app_state`] and [`build_app_router`] are shared by the production
//! binary (`main.rs`) and the integration tests (`tests/common/mod.rs`), so
//! both run the same roller setup and middleware stack.

use std::sync::Arc;
use std::time::Duration;

use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderName, Method, StatusCode};
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::config::ServerConfig;
use crate::roller::Roller;
use crate::routes;
use crate::state::AppState;

/// Header carrying the per-request id, set when absent and echoed back.
pub const REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

/// Assemble [`AppState`], seeding the home world roller from `ROLL_SEED`
/// when configured.
pub fn build_app_state(pool: acolyte_db::DbPool, config: ServerConfig) -> AppState {
    match config.roll_seed {
        Some(seed) => tracing::info!(seed, "Home world rolls are seeded"),
        None => tracing::info!("Home world rolls are seeded from OS entropy"),
    }

    AppState {
        pool,
        roller: Arc::new(Roller::new(config.roll_seed)),
        config: Arc::new(config),
    }
}

/// Build the full application [`Router`]: health check, `/api/v1`, and the
/// middleware stack configured from `state.config`.
pub fn build_app_router(state: AppState) -> Router {
    let config = Arc::clone(&state.config);

    let routes = Router::new()
        // Health check at root level (not under /api/v1).
        .merge(routes::health::router())
        .nest("/api/v1", routes::api_routes());

    with_middleware(routes, &config).with_state(state)
}

/// Wrap `router` in the middleware stack. Layers run outermost first:
///
/// 1. CORS
/// 2. Set request ID on incoming requests
/// 3. Structured request/response tracing
/// 4. Propagate request ID to response
/// 5. Request timeout
/// 6. Panic recovery (catch panics, return 500)
fn with_middleware(router: Router<AppState>, config: &ServerConfig) -> Router<AppState> {
    router
        // Panic recovery.
        .layer(CatchPanicLayer::new())
        // A stuck roll or query gives up with 408.
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(config.request_timeout_secs),
        ))
        .layer(PropagateRequestIdLayer::new(REQUEST_ID_HEADER))
        // Structured request/response tracing.
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(REQUEST_ID_HEADER, MakeRequestUuid))
        .layer(build_cors_layer(config))
}

/// Build the CORS layer from server configuration.
///
/// The sheet editor only sends JSON, so `Content-Type` is the one allowed
/// request header; the request id is exposed so clients can quote it.
/// Panics at startup if any configured origin is invalid.
pub fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    let origins: Vec<_> = config
        .cors_origins
        .iter()
        .map(|o| {
            o.parse()
                .unwrap_or_else(|e| panic!("Invalid CORS origin '{o}': {e}"))
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([CONTENT_TYPE])
        .expose_headers([REQUEST_ID_HEADER])
        .max_age(Duration::from_secs(3600))
}
