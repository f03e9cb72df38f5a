//! Metrics collection and exposition.
//!
//! # Metrics
//! - `tracker_http_requests_total` (counter): requests by method, route, status
//! - `tracker_http_request_duration_seconds` (histogram): latency by method, route
//! - `tracker_registrations_total` (counter): registration attempts by outcome
//! - `tracker_enrichments_total` (counter): detail lookups by outcome
//! - `tracker_tracked_wallets` (gauge): size of the tracked set, seeded at startup,
//!   reset on every listing and bumped on every registration
//!
//! Recording is a no-op until [`init_metrics`] installs the exporter.

use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;
use std::time::Instant;

/// Install the Prometheus exporter with an HTTP scrape endpoint on `addr`.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics endpoint listening"),
        Err(e) => tracing::error!(address = %addr, error = %e, "Failed to install metrics exporter"),
    }
}

/// Record a completed HTTP request. `route` is the matched route template.
pub fn record_request(method: &str, route: &str, status: u16, start: Instant) {
    let labels = [
        ("method", method.to_string()),
        ("path", route.to_string()),
        ("status", status.to_string()),
    ];
    metrics::counter!("tracker_http_requests_total", &labels).increment(1);

    let labels = [("method", method.to_string()), ("path", route.to_string())];
    metrics::histogram!("tracker_http_request_duration_seconds", &labels)
        .record(start.elapsed().as_secs_f64());
}

pub fn record_registration(outcome: &'static str) {
    metrics::counter!("tracker_registrations_total", "outcome" => outcome).increment(1);
}

pub fn record_enrichment(outcome: &'static str) {
    metrics::counter!("tracker_enrichments_total", "outcome" => outcome).increment(1);
}

pub fn record_tracked_wallets(count: usize) {
    metrics::gauge!("tracker_tracked_wallets").set(count as f64);
}

/// A new address entered the tracked set.
pub fn record_wallet_tracked() {
    metrics::gauge!("tracker_tracked_wallets").increment(1.0);
}
