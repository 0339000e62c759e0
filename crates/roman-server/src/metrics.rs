//! Prometheus metrics recorder
//!
//! Metrics are recorded through the `metrics` facade and rendered by the
//! Prometheus exporter installed here.

use std::sync::OnceLock;

use metrics::{describe_counter, describe_histogram};
use metrics_exporter_prometheus::{BuildError, Matcher, PrometheusBuilder, PrometheusHandle};
use tracing::{error, info};

/// Total HTTP requests by method, path and status
pub const HTTP_REQUESTS_TOTAL: &str = "http_requests_total";

/// HTTP request latency histogram
pub const HTTP_REQUEST_DURATION_SECONDS: &str = "http_request_duration_seconds";

/// Requests slower than the configured threshold
pub const HTTP_SLOW_REQUESTS_TOTAL: &str = "http_slow_requests_total";

/// Roman numerals produced, by request mode
pub const CONVERSIONS_TOTAL: &str = "roman_numerals_converted_total";

/// Rejected conversion requests, by error code
pub const CONVERSION_ERRORS_TOTAL: &str = "roman_conversion_errors_total";

/// Request duration buckets, in seconds
pub const DURATION_BUCKETS: [f64; 5] = [0.1, 0.3, 1.2, 5.0, 10.0];

static PROMETHEUS_HANDLE: OnceLock<Option<PrometheusHandle>> = OnceLock::new();

/// Installs the global Prometheus recorder.
///
/// Safe to call multiple times; only the first call installs a recorder.
/// Returns `None` if the recorder could not be installed, in which case
/// metric macros are no-ops.
pub fn init_metrics() -> Option<PrometheusHandle> {
    PROMETHEUS_HANDLE
        .get_or_init(|| match install_recorder() {
            Ok(handle) => {
                info!("Prometheus metrics recorder initialized");
                Some(handle)
            }
            Err(e) => {
                error!(error = %e, "Failed to install Prometheus recorder");
                None
            }
        })
        .clone()
}

/// Returns the global Prometheus handle, if initialized
pub fn prometheus_handle() -> Option<PrometheusHandle> {
    PROMETHEUS_HANDLE.get().cloned().flatten()
}

fn install_recorder() -> Result<PrometheusHandle, BuildError> {
    let handle = PrometheusBuilder::new()
        .set_buckets_for_metric(
            Matcher::Full(HTTP_REQUEST_DURATION_SECONDS.to_string()),
            &DURATION_BUCKETS,
        )?
        .install_recorder()?;

    describe_counter!(HTTP_REQUESTS_TOTAL, "Total number of HTTP requests");
    describe_histogram!(
        HTTP_REQUEST_DURATION_SECONDS,
        "HTTP request latency in seconds"
    );
    describe_counter!(
        HTTP_SLOW_REQUESTS_TOTAL,
        "Requests slower than the configured threshold"
    );
    describe_counter!(CONVERSIONS_TOTAL, "Roman numerals produced");
    describe_counter!(CONVERSION_ERRORS_TOTAL, "Rejected conversion requests");

    Ok(handle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use metrics::{counter, histogram};

    fn metric_lines<'a>(metrics: &'a str, name: &str) -> Vec<&'a str> {
        metrics
            .lines()
            .filter(|line| line.starts_with(name))
            .collect()
    }

    #[test]
    fn test_init_metrics_is_idempotent() {
        let first = init_metrics();
        let second = init_metrics();
        assert!(first.is_some());
        assert!(second.is_some());
        assert!(prometheus_handle().is_some());
    }

    #[test]
    fn test_duration_histogram_uses_configured_buckets() {
        let handle = init_metrics().unwrap();
        histogram!(HTTP_REQUEST_DURATION_SECONDS, "method" => "GET", "path" => "/buckets")
            .record(0.2);

        let text = handle.render();
        assert!(text.contains("# TYPE http_request_duration_seconds histogram"));
        let lines: Vec<&str> = metric_lines(&text, "http_request_duration_seconds_bucket")
            .into_iter()
            .filter(|line| line.contains("/buckets"))
            .collect();
        assert!(lines.iter().any(|line| line.contains("le=\"0.1\"")));
        assert!(lines.iter().any(|line| line.contains("le=\"1.2\"")));
        assert!(lines.iter().any(|line| line.contains("le=\"+Inf\"")));
    }

    #[test]
    fn test_counter_is_rendered_with_labels() {
        let handle = init_metrics().unwrap();
        counter!(CONVERSION_ERRORS_TOTAL, "code" => "ERR9999").increment(2);

        let text = handle.render();
        let lines = metric_lines(&text, CONVERSION_ERRORS_TOTAL);
        assert!(lines
            .iter()
            .any(|line| line.contains("code=\"ERR9999\"") && line.ends_with(" 2")));
    }
}
