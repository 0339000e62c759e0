//! Request middleware
//!
//! - CORS that mirrors the caller's origin and allows credentials
//! - Static security headers on every response
//! - Per-request counters and latency histograms

use super::types::AppState;
use crate::metrics::{HTTP_REQUESTS_TOTAL, HTTP_REQUEST_DURATION_SECONDS, HTTP_SLOW_REQUESTS_TOTAL};
use axum::{
    extract::{MatchedPath, Request, State},
    http::{
        header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, ORIGIN},
        HeaderName, HeaderValue, Method,
    },
    middleware::Next,
    response::Response,
};
use metrics::{counter, histogram};
use std::time::{Duration, Instant};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::warn;

/// Headers added to every response when security headers are enabled
pub const SECURITY_HEADERS: [(&str, &str); 7] = [
    ("strict-transport-security", "max-age=315360000; includeSubdomains"),
    ("x-frame-options", "DENY"),
    ("x-content-type-options", "nosniff"),
    ("x-xss-protection", "1; mode=block"),
    ("content-security-policy", "default-src 'self'"),
    ("x-download-options", "noopen"),
    ("referrer-policy", "strict-origin-when-cross-origin"),
];

/// CORS policy
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION, ACCEPT, ORIGIN])
        .max_age(Duration::from_secs(12 * 60 * 60))
}

/// Add the security headers to the response
pub async fn security_headers(req: Request, next: Next) -> Response {
    let mut response = next.run(req).await;
    let headers = response.headers_mut();
    for (name, value) in SECURITY_HEADERS {
        headers.insert(HeaderName::from_static(name), HeaderValue::from_static(value));
    }
    response
}

/// Record request count, latency and slow requests
pub async fn track_metrics(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().to_string();
    let path = req
        .extensions()
        .get::<MatchedPath>()
        .map(|matched| matched.as_str().to_owned())
        .unwrap_or_else(|| req.uri().path().to_owned());

    let response = next.run(req).await;

    let elapsed = start.elapsed().as_secs_f64();
    let status = response.status().as_u16().to_string();

    if elapsed > state.config.slow_request_secs {
        warn!(%method, %path, elapsed_secs = elapsed, "Slow request");
        counter!(HTTP_SLOW_REQUESTS_TOTAL, "method" => method.clone(), "path" => path.clone())
            .increment(1);
    }

    histogram!(HTTP_REQUEST_DURATION_SECONDS, "method" => method.clone(), "path" => path.clone())
        .record(elapsed);
    counter!(HTTP_REQUESTS_TOTAL, "method" => method, "path" => path, "status" => status)
        .increment(1);

    response
}
