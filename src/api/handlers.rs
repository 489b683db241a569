//! HTTP API handlers.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use metrics_exporter_prometheus::PrometheusHandle;
use serde::Serialize;

use crate::metrics;

/// Application state shared with handlers.
///
/// The CSV body is rendered once at startup and never mutated, so handlers
/// share it as `Bytes` and per-request clones are reference-counted.
#[derive(Clone)]
pub struct AppState {
    /// Pre-rendered CSV body served by the feed endpoint.
    pub csv_body: Bytes,
    /// Prometheus handle, present once the recorder is installed.
    pub prometheus: Option<PrometheusHandle>,
}

impl AppState {
    /// Create app state around a rendered CSV body.
    pub fn new(csv_body: Bytes) -> Self {
        Self {
            csv_body,
            prometheus: None,
        }
    }

    /// Attach the Prometheus handle backing the metrics endpoint.
    pub fn with_prometheus(mut self, handle: PrometheusHandle) -> Self {
        self.prometheus = Some(handle);
        self
    }
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Status: "ok".
    pub status: &'static str,
}

/// Health check handler - always returns 200.
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse { status: "ok" })
}

/// Feed handler - serves the full dataset as CSV.
///
/// Stateless beyond the shared immutable body; every call returns the same
/// bytes with status 200.
pub async fn threat_data(State(state): State<AppState>) -> impl IntoResponse {
    metrics::inc_feed_requests();

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/csv")],
        state.csv_body.clone(),
    )
}

/// Metrics handler - Prometheus exposition text, 404 without a recorder.
pub async fn prometheus_metrics(State(state): State<AppState>) -> impl IntoResponse {
    match state.prometheus {
        Some(handle) => (StatusCode::OK, handle.render()).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_state_keeps_body_untouched() {
        let state = AppState::new(Bytes::from_static(b"ThreatID,ThreatScore\n1,0.1\n"));

        assert_eq!(&state.csv_body[..], b"ThreatID,ThreatScore\n1,0.1\n");
        assert!(state.prometheus.is_none());
    }

    #[test]
    fn app_state_clones_share_body() {
        let state = AppState::new(Bytes::from_static(b"ThreatID,ThreatScore\n"));
        let clone = state.clone();

        assert_eq!(state.csv_body, clone.csv_body);
    }
}
