//! Gaze samples and normalized coordinates.

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Current wall-clock time in epoch milliseconds.
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// A point in unit screen space (0.0 = left/top, 1.0 = right/bottom).
///
/// Values outside `[0, 1]` are representable; degraded sensors can emit them.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct NormalizedPoint {
    pub x: f64,
    pub y: f64,
}

impl NormalizedPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Check if the point lies inside the unit square.
    pub fn is_in_bounds(&self) -> bool {
        (0.0..=1.0).contains(&self.x) && (0.0..=1.0).contains(&self.y)
    }

    /// Both coordinates are neither NaN nor infinite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// One timestamped sample from the remote vision sensor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GazePoint {
    /// Horizontal position, normalized
    pub x: f64,
    /// Vertical position, normalized
    pub y: f64,
    /// Sensor confidence (0.0 to 1.0)
    pub confidence: f64,
    /// Sensor-side capture time, epoch milliseconds
    pub timestamp_ms: i64,
}

impl GazePoint {
    pub fn new(x: f64, y: f64, confidence: f64, timestamp_ms: i64) -> Self {
        Self {
            x,
            y,
            confidence,
            timestamp_ms,
        }
    }

    /// The raw position of this sample.
    pub fn position(&self) -> NormalizedPoint {
        NormalizedPoint::new(self.x, self.y)
    }
}
