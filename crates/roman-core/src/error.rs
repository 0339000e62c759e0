//! Error types for the Roman numeral core
//!
//! Every rejection carries a stable machine-readable code (`ERR1000`..)
//! alongside a human-readable message. The code to message mapping is a fixed
//! table; codes that are not part of it resolve to a generic fallback.

use std::fmt;
use thiserror::Error;

/// Message returned for codes that are not part of the catalog
pub const UNKNOWN_ERROR_MESSAGE: &str = "unknown error";

/// Stable error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// A query parameter other than `numbers` was supplied
    InvalidParam,
    /// The `numbers` query parameter is absent
    MissingNumbersParam,
    /// One or more tokens failed to parse or were out of bounds
    InvalidInput,
    /// Conversion requested outside the supported domain
    OutOfBounds,
    /// The request body could not be read
    FailedReadBody,
    /// The ranges payload is malformed or holds an invalid range
    InvalidRange,
    /// The `ranges` key appears more than once in the raw body
    InvalidJsonDuplicateKeys,
    /// Query parameters were sent along with a POST body
    QueryParamInPostRequest,
}

impl ErrorCode {
    /// All catalogued codes, in code order
    pub const ALL: [ErrorCode; 8] = [
        ErrorCode::InvalidParam,
        ErrorCode::MissingNumbersParam,
        ErrorCode::InvalidInput,
        ErrorCode::OutOfBounds,
        ErrorCode::FailedReadBody,
        ErrorCode::InvalidRange,
        ErrorCode::InvalidJsonDuplicateKeys,
        ErrorCode::QueryParamInPostRequest,
    ];

    /// Machine-readable code
    pub const fn as_str(self) -> &'static str {
        match self {
            ErrorCode::InvalidParam => "ERR1000",
            ErrorCode::MissingNumbersParam => "ERR1001",
            ErrorCode::InvalidInput => "ERR1002",
            ErrorCode::OutOfBounds => "ERR1003",
            ErrorCode::FailedReadBody => "ERR1004",
            ErrorCode::InvalidRange => "ERR1005",
            ErrorCode::InvalidJsonDuplicateKeys => "ERR1006",
            ErrorCode::QueryParamInPostRequest => "ERR1007",
        }
    }

    /// Human-readable description
    pub const fn message(self) -> &'static str {
        match self {
            ErrorCode::InvalidParam => "only 'numbers' query parameter is allowed",
            ErrorCode::MissingNumbersParam => "'numbers' query parameter is required",
            ErrorCode::InvalidInput => {
                "invalid input: please provide valid integers within the supported range (1-3999)"
            }
            ErrorCode::OutOfBounds => "input out of bounds, must be between 1 and 3999",
            ErrorCode::FailedReadBody => "failed to read request body",
            ErrorCode::InvalidRange => {
                "invalid JSON: JSON must contain only the 'ranges' key, which should be an array \
                 of one or more objects with 'min' and 'max' values. 'min' and 'max' values must \
                 be within 1 to 3999, and 'min' should not be greater than 'max'. No other keys \
                 are allowed."
            }
            ErrorCode::InvalidJsonDuplicateKeys => "invalid JSON payload: duplicate `ranges` keys",
            ErrorCode::QueryParamInPostRequest => {
                "invalid request: query parameters not allowed in POST requests"
            }
        }
    }

    /// Resolve a machine-readable code back to its variant
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == code)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Look up the message for an arbitrary code string.
///
/// Codes outside the catalog resolve to [`UNKNOWN_ERROR_MESSAGE`].
pub fn lookup_message(code: &str) -> &'static str {
    ErrorCode::from_code(code)
        .map(ErrorCode::message)
        .unwrap_or(UNKNOWN_ERROR_MESSAGE)
}

/// Core error type
///
/// Displays as `[<code>] <message>`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("[{}] {}", .code, .code.message())]
pub struct RomanError {
    code: ErrorCode,
    invalid_numbers: Vec<String>,
}

impl RomanError {
    /// Create an error for the given code
    pub fn new(code: ErrorCode) -> Self {
        Self {
            code,
            invalid_numbers: Vec::new(),
        }
    }

    /// Create an `InvalidInput` error echoing every rejected token
    pub fn invalid_input(invalid_numbers: Vec<String>) -> Self {
        Self {
            code: ErrorCode::InvalidInput,
            invalid_numbers,
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Rejected tokens in encounter order (empty for structural errors)
    pub fn invalid_numbers(&self) -> &[String] {
        &self.invalid_numbers
    }

    pub fn into_invalid_numbers(self) -> Vec<String> {
        self.invalid_numbers
    }
}

impl From<ErrorCode> for RomanError {
    fn from(code: ErrorCode) -> Self {
        Self::new(code)
    }
}

pub type Result<T> = std::result::Result<T, RomanError>;
