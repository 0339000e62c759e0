//! API endpoint handlers
//!
//! HTTP request handlers for all REST API endpoints.

use super::extractors::{QueryPairs, RawBody};
use super::openapi::SWAGGER_UI_PATH;
use super::router::API_V1_PREFIX;
use super::types::*;
use crate::error::{ErrorBody, ServerError};
use crate::metrics::{prometheus_handle, CONVERSIONS_TOTAL, CONVERSION_ERRORS_TOTAL};
use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use metrics::counter;
use roman_core::{assemble, validate_query, validate_ranges_body, NumeralEntry};
use tracing::{info, warn};

const SERVICE_NAME: &str = "Decimal to Roman Numerals Converter";

/// Root endpoint pointing clients at the versioned API
#[utoipa::path(
    get,
    path = "/",
    tag = "Service",
    responses((status = 200, description = "Where to find the API", body = IndexResponse))
)]
pub(super) async fn index(State(state): State<AppState>) -> Json<IndexResponse> {
    Json(IndexResponse {
        message: format!(
            "Please use the {} endpoint for API access. Health check: http://localhost:{}/health. API docs: http://localhost:{}{}/",
            API_V1_PREFIX, state.config.port, state.config.port, SWAGGER_UI_PATH
        ),
    })
}

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/api/v1/health",
    tag = "Service",
    responses((status = 200, description = "Service is up", body = HealthResponse))
)]
pub(super) async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "success".to_string(),
        message: SERVICE_NAME.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Convert individual numbers given as `?numbers=1,2&numbers=3`
#[utoipa::path(
    get,
    path = "/api/v1/convert",
    tag = "Conversion",
    params(
        ("numbers" = String, Query, description = "Comma-separated integers in 1-3999; may be repeated")
    ),
    responses(
        (status = 200, description = "Distinct numbers ascending with their numerals", body = ConvertResponse),
        (status = 400, description = "Unknown or missing parameter, or invalid numbers", body = ErrorBody),
    )
)]
pub(super) async fn convert_numbers(
    State(state): State<AppState>,
    QueryPairs(params): QueryPairs,
) -> Result<Json<ConvertResponse>, ServerError> {
    let result = validate_query(&params).and_then(assemble);
    finish(&state, "numbers", result)
}

/// Convert ranges given as `{"ranges": [{"min": 1, "max": 3}]}`
#[utoipa::path(
    post,
    path = "/api/v1/convert",
    tag = "Conversion",
    request_body = RangesPayload,
    responses(
        (status = 200, description = "Distinct numbers ascending with their numerals", body = ConvertResponse),
        (status = 400, description = "Malformed payload, invalid range or query parameters present", body = ErrorBody),
        (status = 500, description = "Request body could not be read", body = ErrorBody),
    )
)]
pub(super) async fn convert_ranges(
    State(state): State<AppState>,
    QueryPairs(params): QueryPairs,
    RawBody(body): RawBody,
) -> Result<Json<ConvertResponse>, ServerError> {
    let result = validate_ranges_body(&body, !params.is_empty()).and_then(assemble);
    finish(&state, "ranges", result)
}

/// Log and count the outcome of a conversion request
fn finish(
    state: &AppState,
    mode: &'static str,
    result: roman_core::Result<Vec<NumeralEntry>>,
) -> Result<Json<ConvertResponse>, ServerError> {
    match result {
        Ok(results) => {
            info!(mode, count = results.len(), "Converted numbers to Roman numerals");
            if state.config.enable_metrics {
                counter!(CONVERSIONS_TOTAL, "mode" => mode).increment(results.len() as u64);
            }
            Ok(Json(ConvertResponse { results }))
        }
        Err(err) => {
            warn!(
                mode,
                code = %err.code(),
                invalid = ?err.invalid_numbers(),
                "Rejected conversion request"
            );
            if state.config.enable_metrics {
                counter!(CONVERSION_ERRORS_TOTAL, "code" => err.code().as_str()).increment(1);
            }
            Err(err.into())
        }
    }
}

/// Metrics endpoint - returns Prometheus format metrics
pub(super) async fn serve_metrics() -> Response {
    match prometheus_handle() {
        Some(handle) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
            handle.render(),
        )
            .into_response(),
        None => (
            StatusCode::SERVICE_UNAVAILABLE,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            "Metrics not initialized",
        )
            .into_response(),
    }
}
