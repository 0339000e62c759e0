//! Structural validation of the two request shapes
//!
//! # Query-parameter shape
//!
//! Only the `numbers` parameter is allowed; it may repeat and each value may
//! itself be a comma-separated list.
//!
//! # JSON-body shape
//!
//! The body must be `{"ranges": [{"min": <int>, "max": <int>}, ...]}` with no
//! other keys and no query parameters. Checks run in a fixed order and stop
//! at the first failure:
//!
//! 1. duplicate `ranges` key (textual)
//! 2. query parameters present
//! 3. JSON syntax
//! 4. exactly one `ranges` key holding an array
//! 5. non-empty array
//! 6. every element decodes as a range
//! 7. every range within bounds (fail fast)
//!
//! Reading the body is the transport's job and happens before step 1.

use crate::error::{ErrorCode, Result, RomanError};
use crate::parser::parse_numbers;
use crate::range::{expand_ranges, NumberRange};
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeSet;

/// The only accepted query parameter
pub const NUMBERS_PARAM: &str = "numbers";

/// The only accepted body key
pub const RANGES_KEY: &str = "ranges";

/// Validate query pairs and parse every `numbers` occurrence.
///
/// Returns the accepted values in encounter order, duplicates included.
pub fn validate_query<K, V>(params: &[(K, V)]) -> Result<Vec<u32>>
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    if params.iter().any(|(name, _)| name.as_ref() != NUMBERS_PARAM) {
        return Err(RomanError::new(ErrorCode::InvalidParam));
    }
    if params.is_empty() {
        return Err(RomanError::new(ErrorCode::MissingNumbersParam));
    }

    parse_numbers(params.iter().map(|(_, value)| value.as_ref())).into_result()
}

/// Whether the raw text mentions the ranges key more than once.
///
/// JSON decoding silently keeps the last of several duplicate keys, so the
/// check runs on the text before any decoding.
pub fn has_duplicate_ranges_key(raw: &str) -> bool {
    raw.matches(RANGES_KEY).nth(1).is_some()
}

/// Decode the ranges array out of a raw body.
pub fn decode_ranges(body: &[u8]) -> Result<Vec<NumberRange>> {
    let invalid = || RomanError::new(ErrorCode::InvalidRange);

    let payload: Value = serde_json::from_slice(body).map_err(|_| invalid())?;
    let object = payload.as_object().ok_or_else(invalid)?;
    if object.len() != 1 {
        return Err(invalid());
    }
    let ranges = object
        .get(RANGES_KEY)
        .and_then(Value::as_array)
        .ok_or_else(invalid)?;
    if ranges.is_empty() {
        return Err(invalid());
    }

    ranges
        .iter()
        .map(|item| NumberRange::deserialize(item).map_err(|_| invalid()))
        .collect()
}

/// Validate a JSON ranges body and expand it into the covered values.
pub fn validate_ranges_body(body: &[u8], has_query_params: bool) -> Result<BTreeSet<u32>> {
    if has_duplicate_ranges_key(&String::from_utf8_lossy(body)) {
        return Err(RomanError::new(ErrorCode::InvalidJsonDuplicateKeys));
    }
    if has_query_params {
        return Err(RomanError::new(ErrorCode::QueryParamInPostRequest));
    }

    let ranges = decode_ranges(body)?;
    expand_ranges(&ranges)
}
