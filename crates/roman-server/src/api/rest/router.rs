//! Router creation and configuration
//!
//! Creates Axum routers for REST API endpoints.

use super::handlers::*;
use super::middleware::{cors_layer, security_headers, track_metrics};
use super::openapi::swagger_ui;
use super::types::AppState;
use crate::config::ServerConfig;
use crate::metrics::init_metrics;
use axum::{middleware, routing::get, Router};
use tower_http::trace::TraceLayer;

/// Prefix of the versioned API
pub const API_V1_PREFIX: &str = "/api/v1";

/// Create REST API router
pub fn create_router(config: ServerConfig) -> Router {
    create_router_with_state(AppState::new(config))
}

/// Create REST API router around existing state
///
/// Conversion and health routes are served both at the root and under
/// `/api/v1`. Enabling metrics installs the process-wide Prometheus recorder.
pub fn create_router_with_state(state: AppState) -> Router {
    let api_routes: Router<AppState> = Router::new()
        .route("/health", get(health))
        .route("/convert", get(convert_numbers).post(convert_ranges));

    let mut router = Router::new()
        .route("/", get(index))
        .merge(api_routes.clone())
        .nest(API_V1_PREFIX, api_routes)
        .merge(swagger_ui());

    if state.config.enable_metrics {
        init_metrics();
        router = router
            .route("/metrics", get(serve_metrics))
            .route_layer(middleware::from_fn_with_state(state.clone(), track_metrics));
    }

    let mut router = router.with_state(state.clone());

    if state.config.enable_security_headers {
        router = router.layer(middleware::from_fn(security_headers));
    }

    router
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
}
