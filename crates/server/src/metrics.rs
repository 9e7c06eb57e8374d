//! Prometheus metrics for observability.
//!
//! This module provides metrics for monitoring the titlelink server:
//! - HTTP request metrics (latency, counts)
//! - Resolution outcomes by catalog mode and the test that matched

use once_cell::sync::Lazy;
use prometheus::{
    self, Encoder, HistogramOpts, HistogramVec, IntCounterVec, IntGaugeVec, Opts, Registry,
    TextEncoder,
};
use regex_lite::Regex;

/// Global metrics registry.
pub static REGISTRY: Lazy<Registry> = Lazy::new(|| {
    let registry = Registry::new();
    register_metrics(&registry);
    registry
});

// =============================================================================
// HTTP Request Metrics
// =============================================================================

/// HTTP request duration in seconds.
pub static HTTP_REQUEST_DURATION: Lazy<HistogramVec> = Lazy::new(|| {
    HistogramVec::new(
        HistogramOpts::new(
            "titlelink_http_request_duration_seconds",
            "HTTP request duration in seconds",
        )
        .buckets(vec![
            0.0005, 0.001, 0.0025, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0,
        ]),
        &["method", "path", "status"],
    )
    .unwrap()
});

/// HTTP requests total count.
pub static HTTP_REQUESTS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("titlelink_http_requests_total", "Total HTTP requests"),
        &["method", "path", "status"],
    )
    .unwrap()
});

/// HTTP requests currently in flight, by route family (see [`route_family`]).
pub static HTTP_REQUESTS_IN_FLIGHT: Lazy<IntGaugeVec> = Lazy::new(|| {
    IntGaugeVec::new(
        Opts::new(
            "titlelink_http_requests_in_flight",
            "Number of HTTP requests currently being processed",
        ),
        &["family"],
    )
    .unwrap()
});

// =============================================================================
// Resolution Metrics
// =============================================================================

/// Resolutions by catalog mode, outcome and matching test.
pub static RESOLUTIONS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("titlelink_resolutions_total", "Total title resolutions"),
        &["mode", "outcome", "test"], // outcome: "strict", "relaxed", "not_found"
    )
    .unwrap()
});

/// Candidates per resolution request.
pub static RESOLUTION_CANDIDATES: Lazy<HistogramVec> = Lazy::new(|| {
    HistogramVec::new(
        HistogramOpts::new(
            "titlelink_resolution_candidates",
            "Number of candidates supplied per resolution",
        )
        .buckets(vec![0.0, 1.0, 5.0, 10.0, 25.0, 50.0, 100.0, 250.0]),
        &["mode"],
    )
    .unwrap()
});

fn register_metrics(registry: &Registry) {
    // HTTP
    registry
        .register(Box::new(HTTP_REQUEST_DURATION.clone()))
        .unwrap();
    registry
        .register(Box::new(HTTP_REQUESTS_TOTAL.clone()))
        .unwrap();
    registry
        .register(Box::new(HTTP_REQUESTS_IN_FLIGHT.clone()))
        .unwrap();

    // Resolution
    registry
        .register(Box::new(RESOLUTIONS_TOTAL.clone()))
        .unwrap();
    registry
        .register(Box::new(RESOLUTION_CANDIDATES.clone()))
        .unwrap();
}

/// Encode all registered metrics in the Prometheus text format.
pub fn encode_metrics() -> String {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();
    let mut buffer = Vec::new();
    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        tracing::error!("Failed to encode metrics: {}", e);
        return String::new();
    }
    String::from_utf8(buffer).unwrap_or_default()
}

static NUMERAL_VALUE_SEGMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"/numerals/(roman|integer)/[^/]+").unwrap());
static NUMERIC_SEGMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"/\d+(/|$)").unwrap());

/// Coarse grouping of request paths: `resolve`, `mentions`, `numerals`,
/// `metrics` or `service` for everything else.
pub fn route_family(path: &str) -> &'static str {
    let api_path = path.strip_prefix("/api/v1").unwrap_or(path);
    match api_path.split('/').nth(1) {
        Some("resolve") => "resolve",
        Some("mentions") => "mentions",
        Some("numerals") => "numerals",
        Some("metrics") if api_path.len() == path.len() => "metrics",
        _ => "service",
    }
}

/// Collapse path parameters so metric labels stay low-cardinality.
pub fn normalize_path(path: &str) -> String {
    let result = NUMERAL_VALUE_SEGMENT.replace_all(path, "/numerals/$1/{value}");
    let result = NUMERIC_SEGMENT.replace_all(&result, "/{id}$1");
    result.to_string()
}
