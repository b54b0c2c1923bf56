//! Prometheus metrics for the gaze stream service.

use std::net::SocketAddr;

use metrics::{counter, gauge, histogram};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

/// Install the Prometheus recorder with its own HTTP listener.
///
/// Must run inside the Tokio runtime; the exporter is spawned onto it.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()
}

/// Metric names as constants for consistency.
pub mod names {
    // Session metrics
    pub const SESSIONS_TOTAL: &str = "theremin_sessions_total";
    pub const SESSIONS_ACTIVE: &str = "theremin_sessions_active";
    pub const SESSIONS_CLOSED_TOTAL: &str = "theremin_sessions_closed_total";

    // Pipeline metrics
    pub const POINTS_PROCESSED_TOTAL: &str = "theremin_points_processed_total";
    pub const GAZE_LATENCY_MS: &str = "theremin_gaze_latency_ms";
    pub const DISPATCH_FAILURES_TOTAL: &str = "theremin_dispatch_failures_total";
    pub const POINTS_SKIPPED_TOTAL: &str = "theremin_points_skipped_total";
}

/// Record a new session and bump the active gauge.
pub fn record_session_started() {
    counter!(names::SESSIONS_TOTAL).increment(1);
    gauge!(names::SESSIONS_ACTIVE).increment(1.0);
}

/// Drop the active gauge. Paired with [`record_session_started`].
pub fn record_session_ended() {
    gauge!(names::SESSIONS_ACTIVE).decrement(1.0);
}

/// Record how a session closed (`success`, `transport`, `dispatch`).
pub fn record_session_closed(outcome: &str) {
    let labels = [("outcome", outcome.to_string())];
    counter!(names::SESSIONS_CLOSED_TOTAL, &labels).increment(1);
}

/// Record one dispatched point and its sensor-to-service latency.
pub fn record_point(latency_ms: i64) {
    counter!(names::POINTS_PROCESSED_TOTAL).increment(1);
    histogram!(names::GAZE_LATENCY_MS).record(latency_ms as f64);
}

/// Record a sample that was observed but not dispatched.
pub fn record_point_skipped(reason: &str) {
    let labels = [("reason", reason.to_string())];
    counter!(names::POINTS_SKIPPED_TOTAL, &labels).increment(1);
}

/// Record a driver failure.
pub fn record_dispatch_failure(kind: &str) {
    let labels = [("kind", kind.to_string())];
    counter!(names::DISPATCH_FAILURES_TOTAL, &labels).increment(1);
}
