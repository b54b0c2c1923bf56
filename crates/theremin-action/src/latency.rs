//! Sensor-to-action latency observation.
//!
//! Latency is observability only: it never blocks or drops a point,
//! including negative values from clock skew between sensor and service.

use theremin_models::GazePoint;

/// Age of a point at arrival, in milliseconds (`arrival - point.timestamp`).
///
/// Saturates instead of overflowing on garbage timestamps.
pub fn observe(point: &GazePoint, arrival_ms: i64) -> i64 {
    arrival_ms.saturating_sub(point.timestamp_ms)
}

/// Running latency summary for one session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LatencyStats {
    pub count: u64,
    pub min_ms: Option<i64>,
    pub max_ms: Option<i64>,
    /// Samples with arrival before the sensor timestamp
    pub negative_count: u64,
    sum_ms: i128,
}

impl LatencyStats {
    /// Fold one latency sample into the totals.
    pub fn record(&mut self, latency_ms: i64) {
        self.count += 1;
        self.sum_ms += i128::from(latency_ms);
        self.min_ms = Some(self.min_ms.map_or(latency_ms, |m| m.min(latency_ms)));
        self.max_ms = Some(self.max_ms.map_or(latency_ms, |m| m.max(latency_ms)));
        if latency_ms < 0 {
            self.negative_count += 1;
        }
    }

    /// Arithmetic mean, or `None` before the first sample.
    pub fn mean_ms(&self) -> Option<f64> {
        if self.count == 0 {
            return None;
        }
        Some(self.sum_ms as f64 / self.count as f64)
    }
}

/// Per-session latency monitor.
#[derive(Debug, Default)]
pub struct LatencyMonitor {
    stats: LatencyStats,
}

impl LatencyMonitor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compute the point's latency and fold it into the session summary.
    pub fn observe(&mut self, point: &GazePoint, arrival_ms: i64) -> i64 {
        let latency = observe(point, arrival_ms);
        self.stats.record(latency);
        latency
    }

    /// Snapshot of everything observed so far.
    pub fn stats(&self) -> LatencyStats {
        self.stats
    }
}
