//! Tests for REST API components

#![cfg(test)]

use super::middleware::SECURITY_HEADERS;
use super::types::*;
use crate::config::ServerConfig;
use axum::http::{HeaderName, HeaderValue};
use roman_core::NumeralEntry;

#[test]
fn test_health_response_fields() {
    let response = HealthResponse {
        status: "success".to_string(),
        message: "Decimal to Roman Numerals Converter".to_string(),
        version: "1.0.0".to_string(),
    };

    assert_eq!(response.status, "success");
    assert_eq!(response.version, "1.0.0");
}

#[test]
fn test_convert_response_serialization() {
    let response = ConvertResponse {
        results: vec![
            NumeralEntry {
                number: 1,
                roman: "I".to_string(),
            },
            NumeralEntry {
                number: 5,
                roman: "V".to_string(),
            },
        ],
    };

    let json = serde_json::to_value(&response).unwrap();
    assert_eq!(
        json,
        serde_json::json!({"results": [{"number": 1, "roman": "I"}, {"number": 5, "roman": "V"}]})
    );
}

#[test]
fn test_empty_convert_response_serialization() {
    let response = ConvertResponse { results: vec![] };
    let json = serde_json::to_string(&response).unwrap();
    assert_eq!(json, r#"{"results":[]}"#);
}

#[test]
fn test_app_state_shares_config() {
    let state = AppState::new(ServerConfig::default());
    let cloned = state.clone();
    assert_eq!(cloned.config.port, state.config.port);
    assert!(std::sync::Arc::ptr_eq(&state.config, &cloned.config));
}

#[test]
fn test_security_headers_are_valid() {
    for (name, value) in SECURITY_HEADERS {
        assert!(HeaderName::from_bytes(name.as_bytes()).is_ok(), "{name}");
        assert!(HeaderValue::from_str(value).is_ok(), "{value}");
        assert_eq!(name, name.to_ascii_lowercase());
    }
}
