//! Prometheus metrics for the feed service.
//!
//! The feed is read-only and serves pre-rendered bytes, so the surface is
//! small: a request counter, the dataset row count, and the one-time CSV
//! render latency at startup.

use std::time::Instant;

use metrics::{counter, describe_counter, describe_gauge, describe_histogram, gauge, histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use tracing::debug;

// === Metric Name Constants ===

/// Feed requests counter metric name.
pub const METRIC_FEED_REQUESTS: &str = "feed_requests_total";
/// Dataset row count gauge metric name.
pub const METRIC_DATASET_ROWS: &str = "dataset_rows";
/// Dataset render latency metric name.
pub const METRIC_DATASET_RENDER_LATENCY: &str = "dataset_render_latency_ms";

/// Install the Prometheus recorder and register metric descriptions.
/// Call this once at startup; the returned handle backs the /metrics route.
pub fn init_metrics() -> crate::Result<PrometheusHandle> {
    let handle = PrometheusBuilder::new().install_recorder()?;

    describe_counter!(
        METRIC_FEED_REQUESTS,
        "Total number of feed requests served"
    );
    describe_gauge!(
        METRIC_DATASET_ROWS,
        "Number of rows in the in-memory dataset"
    );
    describe_histogram!(
        METRIC_DATASET_RENDER_LATENCY,
        "Startup CSV render latency in milliseconds"
    );

    debug!("Metrics initialized");

    Ok(handle)
}

/// Increment the feed requests counter.
pub fn inc_feed_requests() {
    counter!(METRIC_FEED_REQUESTS).increment(1);
}

/// Record the dataset row count.
pub fn set_dataset_rows(rows: usize) {
    gauge!(METRIC_DATASET_ROWS).set(rows as f64);
}

/// Record the startup CSV render latency.
pub fn record_render_latency(start: Instant) {
    let latency_ms = start.elapsed().as_secs_f64() * 1000.0;
    histogram!(METRIC_DATASET_RENDER_LATENCY).record(latency_ms);
}
