//! Server error types

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use roman_core::{ErrorCode, RomanError};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

/// Server error type
#[derive(Error, Debug)]
pub enum ServerError {
    /// Request rejected by validation or conversion
    #[error(transparent)]
    Conversion(#[from] RomanError),
}

/// JSON error body
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    /// `[CODE] message`
    #[schema(example = "[ERR1001] 'numbers' query parameter is required")]
    pub error: String,

    /// Offending tokens, present only for invalid input
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub invalid_numbers: Vec<String>,
}

impl ServerError {
    /// HTTP status for this error
    pub fn status(&self) -> StatusCode {
        match self {
            ServerError::Conversion(err) => status_for(err.code()),
        }
    }
}

/// Client mistakes are 400; transport faults and broken invariants are 500
pub fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::FailedReadBody | ErrorCode::OutOfBounds => StatusCode::INTERNAL_SERVER_ERROR,
        _ => StatusCode::BAD_REQUEST,
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            ServerError::Conversion(err) => ErrorBody {
                error: err.to_string(),
                invalid_numbers: err.into_invalid_numbers(),
            },
        };

        (status, Json(body)).into_response()
    }
}

impl From<ErrorCode> for ServerError {
    fn from(code: ErrorCode) -> Self {
        ServerError::Conversion(RomanError::new(code))
    }
}
