//! Request metrics for every route.

use axum::{body::Body, http::Request, middleware::Next, response::Response};
use prometheus::IntGauge;
use std::time::Instant;

use crate::metrics::{
    normalize_path, route_family, HTTP_REQUESTS_IN_FLIGHT, HTTP_REQUESTS_TOTAL,
    HTTP_REQUEST_DURATION,
};

/// Holds one in-flight slot for a route family until dropped, so requests
/// cancelled mid-handler are released too.
struct InFlight(IntGauge);

impl InFlight {
    fn enter(family: &str) -> Self {
        let gauge = HTTP_REQUESTS_IN_FLIGHT.with_label_values(&[family]);
        gauge.inc();
        Self(gauge)
    }
}

impl Drop for InFlight {
    fn drop(&mut self) {
        self.0.dec();
    }
}

/// Record duration, count and in-flight requests.
///
/// Durations and counts are labelled by normalized path; the in-flight gauge
/// by route family, so a burst of resolve calls shows apart from scrapes.
pub async fn metrics_middleware(request: Request<Body>, next: Next) -> Response {
    let method = request.method().to_string();
    let raw_path = request.uri().path();
    let path = normalize_path(raw_path);
    let in_flight = InFlight::enter(route_family(raw_path));

    let start = Instant::now();
    let response = next.run(request).await;
    let elapsed = start.elapsed().as_secs_f64();
    drop(in_flight);

    let status = response.status().as_u16().to_string();
    let labels = [method.as_str(), path.as_str(), status.as_str()];
    HTTP_REQUEST_DURATION
        .with_label_values(&labels)
        .observe(elapsed);
    HTTP_REQUESTS_TOTAL.with_label_values(&labels).inc();

    response
}
