//! REST API type definitions
//!
//! Request and response types for the REST API endpoints.

use crate::config::ServerConfig;
use roman_core::{NumberRange, NumeralEntry};
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}

/// Health check response
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
    pub version: String,
}

/// Root endpoint response
#[derive(Debug, Serialize, ToSchema)]
pub struct IndexResponse {
    pub message: String,
}

/// Successful conversion response, sorted ascending by `number`
#[derive(Debug, Serialize, ToSchema)]
pub struct ConvertResponse {
    pub results: Vec<NumeralEntry>,
}

/// Body accepted by `POST /convert`
///
/// Only documents the payload; bodies are decoded strictly by
/// [`roman_core::validate_ranges_body`].
#[derive(Debug, ToSchema)]
pub struct RangesPayload {
    /// Non-empty list of inclusive ranges within 1-3999
    pub ranges: Vec<NumberRange>,
}
