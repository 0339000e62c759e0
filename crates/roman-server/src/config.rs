//! Server configuration

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Port used when nothing else is configured
pub const DEFAULT_PORT: u16 = 8001;

/// Plain environment variable that overrides the port last
pub const PORT_ENV_VAR: &str = "PORT";

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Server host
    pub host: String,

    /// Server port (HTTP)
    pub port: u16,

    /// Record request metrics and expose `/metrics`
    pub enable_metrics: bool,

    /// Add security headers to every response
    pub enable_security_headers: bool,

    /// Requests slower than this many seconds count as slow
    pub slow_request_secs: f64,

    /// Log level
    pub log_level: String,

    /// Emit logs as JSON lines instead of human-readable text
    pub log_json: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            enable_metrics: true,
            enable_security_headers: true,
            slow_request_secs: 10.0,
            log_level: "info".to_string(),
            log_json: false,
        }
    }
}

impl ServerConfig {
    /// Load configuration from config file and environment variables
    ///
    /// Sources, lowest precedence first: built-in defaults, the optional
    /// `config/server` file, `ROMAN_*` variables, then `PORT`.
    pub fn load() -> anyhow::Result<Self> {
        // Load .env file if exists
        dotenvy::dotenv().ok();

        let mut config: Self = config::Config::builder()
            .add_source(config::File::with_name("config/server").required(false))
            .add_source(config::Environment::with_prefix("ROMAN"))
            .build()
            .and_then(|cfg| cfg.try_deserialize())
            .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

        if let Ok(raw) = std::env::var(PORT_ENV_VAR) {
            config.port = resolve_port(Some(&raw), config.port);
        }

        Ok(config)
    }

    /// Socket address string to bind
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Resolve a port from a raw environment value.
///
/// Missing, non-numeric or out-of-range values fall back to `default`.
pub fn resolve_port(raw: Option<&str>, default: u16) -> u16 {
    match raw.map(str::trim) {
        None | Some("") => default,
        Some(value) => value.parse::<u16>().unwrap_or_else(|_| {
            warn!("Ignoring invalid port {:?}, using {}", value, default);
            default
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_config_default() {
        let config = ServerConfig::default();

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8001);
        assert!(config.enable_metrics);
        assert!(config.enable_security_headers);
        assert_eq!(config.slow_request_secs, 10.0);
        assert_eq!(config.log_level, "info");
        assert!(!config.log_json);
    }

    #[test]
    fn test_bind_addr() {
        let config = ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
            ..ServerConfig::default()
        };
        assert_eq!(config.bind_addr(), "127.0.0.1:3000");
    }

    #[test]
    fn test_resolve_port_missing() {
        assert_eq!(resolve_port(None, DEFAULT_PORT), 8001);
        assert_eq!(resolve_port(Some(""), DEFAULT_PORT), 8001);
    }

    #[test]
    fn test_resolve_port_valid() {
        assert_eq!(resolve_port(Some("9090"), DEFAULT_PORT), 9090);
        assert_eq!(resolve_port(Some(" 8080 "), DEFAULT_PORT), 8080);
    }

    #[test]
    fn test_resolve_port_invalid_falls_back() {
        assert_eq!(resolve_port(Some("abc"), DEFAULT_PORT), 8001);
        assert_eq!(resolve_port(Some("70000"), DEFAULT_PORT), 8001);
        assert_eq!(resolve_port(Some("-1"), 3000), 3000);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: ServerConfig = serde_json::from_str(r#"{"port": 9000}"#).unwrap();
        assert_eq!(config.port, 9000);
        assert_eq!(config.host, "0.0.0.0");
        assert!(config.enable_metrics);
    }

    #[test]
    fn test_server_config_debug_format() {
        let config = ServerConfig::default();
        let debug_str = format!("{:?}", config);

        assert!(debug_str.contains("ServerConfig"));
        assert!(debug_str.contains("8001"));
    }
}
