//! Roman Core - validation and conversion pipeline for the Roman numeral API
//!
//! This crate holds the request-independent logic of the service:
//! - Decimal to Roman numeral conversion
//! - Parsing of comma-separated number lists
//! - Range validation and expansion
//! - Result assembly (dedup, sort, convert)
//! - Structural validation of query and JSON request shapes
//! - The error code catalog
//!
//! Everything here is pure and stateless; it is safe to call from any number
//! of concurrent request handlers.

pub mod assembler;
pub mod error;
pub mod numeral;
pub mod parser;
pub mod range;
pub mod request;

// Re-export commonly used types
pub use assembler::assemble;
pub use error::{ErrorCode, Result, RomanError};
pub use numeral::{to_roman, NumeralEntry, LOWER_LIMIT, UPPER_LIMIT};
pub use parser::{parse_numbers, parse_token, ParsedNumbers, TokenOutcome};
pub use range::{expand_ranges, NumberRange};
pub use request::{validate_query, validate_ranges_body};
