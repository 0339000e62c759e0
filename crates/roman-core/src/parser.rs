//! Parsing of textual number lists
//!
//! Query values arrive as one or more comma-separated strings. Every token is
//! trimmed and parsed strictly: an optional single leading `+`, then ASCII
//! digits only (leading zeros allowed). Tokens that fail to parse or fall
//! outside `1..=3999` are collected, in encounter order, as invalid.

use crate::error::{Result, RomanError};
use crate::numeral::in_bounds;

/// Token separator inside a single parameter value
pub const TOKEN_SEPARATOR: char = ',';

/// Outcome of parsing a single token
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenOutcome {
    /// A value inside the supported domain
    Valid(u32),
    /// The raw, untrimmed token as received
    Invalid(String),
}

/// Result of parsing a list of parameter values
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedNumbers {
    /// Accepted values in encounter order (duplicates kept)
    pub valid: Vec<u32>,
    /// Rejected tokens in encounter order
    pub invalid: Vec<String>,
}

impl ParsedNumbers {
    /// All-or-nothing view: any invalid token rejects the whole list,
    /// reporting every invalid token together.
    pub fn into_result(self) -> Result<Vec<u32>> {
        if self.invalid.is_empty() {
            Ok(self.valid)
        } else {
            Err(RomanError::invalid_input(self.invalid))
        }
    }
}

/// Strict unsigned parse: optional `+`, then at least one ASCII digit
fn parse_strict(token: &str) -> Option<u32> {
    let digits = token.strip_prefix('+').unwrap_or(token);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    // Overflowing digit strings are simply invalid
    digits.parse::<u32>().ok()
}

/// Parse one token
pub fn parse_token(raw: &str) -> TokenOutcome {
    match parse_strict(raw.trim()) {
        Some(n) if in_bounds(n) => TokenOutcome::Valid(n),
        _ => TokenOutcome::Invalid(raw.to_string()),
    }
}

/// Flatten and parse every parameter value.
///
/// Each value is split on `,` before parsing, so `["1,2", "3"]` yields the
/// same tokens as `["1,2,3"]`.
pub fn parse_numbers<I, S>(params: I) -> ParsedNumbers
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut parsed = ParsedNumbers::default();
    for param in params {
        for token in param.as_ref().split(TOKEN_SEPARATOR) {
            match parse_token(token) {
                TokenOutcome::Valid(n) => parsed.valid.push(n),
                TokenOutcome::Invalid(raw) => parsed.invalid.push(raw),
            }
        }
    }
    parsed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use proptest::prelude::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_simple_list() {
        let parsed = parse_numbers(["1,2,3"]);
        assert_eq!(parsed.valid, vec![1, 2, 3]);
        assert!(parsed.invalid.is_empty());
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let parsed = parse_numbers(["1, 2, 3", " 3999 "]);
        assert_eq!(parsed.valid, vec![1, 2, 3, 3999]);
        assert!(parsed.invalid.is_empty());
    }

    #[test]
    fn test_parse_out_of_bounds() {
        let parsed = parse_numbers(["0,4000"]);
        assert!(parsed.valid.is_empty());
        assert_eq!(parsed.invalid, strings(&["0", "4000"]));
    }

    #[test]
    fn test_parse_non_numeric_keeps_order() {
        let parsed = parse_numbers(["10,20,abc,30,x1,40"]);
        assert_eq!(parsed.valid, vec![10, 20, 30, 40]);
        assert_eq!(parsed.invalid, strings(&["abc", "x1"]));
    }

    #[test]
    fn test_parse_empty_tokens() {
        assert_eq!(parse_numbers([""]).invalid, strings(&[""]));
        assert_eq!(parse_numbers(["1,,2"]).invalid, strings(&[""]));
        assert_eq!(parse_numbers(["  "]).invalid, strings(&["  "]));
    }

    #[test]
    fn test_invalid_token_keeps_raw_form() {
        let parsed = parse_numbers(["1, abc ,10"]);
        assert_eq!(parsed.invalid, strings(&[" abc "]));
    }

    #[test]
    fn test_parse_leading_zeros_and_plus() {
        assert_eq!(parse_token("0005"), TokenOutcome::Valid(5));
        assert_eq!(parse_token("+9"), TokenOutcome::Valid(9));
        assert_eq!(parse_token("+0010"), TokenOutcome::Valid(10));
    }

    #[test]
    fn test_parse_rejects_malformed_integers() {
        for token in ["-5", "++5", "+", "1.5", "1e3", "12a", "0x10", "1 2", "٣"] {
            assert_eq!(
                parse_token(token),
                TokenOutcome::Invalid(token.to_string()),
                "{token:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_parse_rejects_overflow() {
        let huge = "99999999999999999999";
        assert_eq!(parse_token(huge), TokenOutcome::Invalid(huge.to_string()));
    }

    #[test]
    fn test_repeated_params_are_flattened() {
        let parsed = parse_numbers(["1,5", "10", "5"]);
        assert_eq!(parsed.valid, vec![1, 5, 10, 5]);
    }

    #[test]
    fn test_into_result_reports_every_invalid_token() {
        let err = parse_numbers(["1,abc,10", "5000"]).into_result().unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidInput);
        assert_eq!(err.invalid_numbers(), strings(&["abc", "5000"]).as_slice());
    }

    #[test]
    fn test_into_result_ok() {
        assert_eq!(parse_numbers(["3,1"]).into_result().unwrap(), vec![3, 1]);
    }

    #[test]
    fn test_equivalent_representations() {
        let a = parse_numbers(["01"]);
        let b = parse_numbers(["1"]);
        let c = parse_numbers(["+1"]);
        assert_eq!(a, b);
        assert_eq!(b, c);
        assert_eq!(a.valid, vec![1]);
    }

    proptest! {
        #[test]
        fn prop_padded_and_signed_forms_agree(n in 1u32..=3999, zeros in 0usize..5, plus in any::<bool>()) {
            let text = format!("{}{}{}", if plus { "+" } else { "" }, "0".repeat(zeros), n);
            prop_assert_eq!(parse_token(&text), TokenOutcome::Valid(n));
        }

        #[test]
        fn prop_out_of_domain_is_invalid(n in 4000u32..1_000_000) {
            let text = n.to_string();
            prop_assert_eq!(parse_token(&text), TokenOutcome::Invalid(text.clone()));
        }
    }
}
