//! Smoothing configuration and filter state.

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, ModelResult};
use crate::gaze::NormalizedPoint;

/// Default EMA coefficient.
pub const DEFAULT_SMOOTHING_ALPHA: f64 = 0.30;

/// Exponential moving average coefficient.
///
/// Lower values smooth more (more lag); `1.0` passes raw samples through.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SmoothingConfig {
    alpha: f64,
}

impl SmoothingConfig {
    /// Validate an alpha in `(0, 1]`.
    pub fn new(alpha: f64) -> ModelResult<Self> {
        // Rejects NaN as well: NaN fails both comparisons.
        if alpha > 0.0 && alpha <= 1.0 {
            Ok(Self { alpha })
        } else {
            Err(ModelError::InvalidAlpha(alpha))
        }
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }
}

impl Default for SmoothingConfig {
    fn default() -> Self {
        Self {
            alpha: DEFAULT_SMOOTHING_ALPHA,
        }
    }
}

/// Last smoothed output of one session's filter.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SmoothingState {
    pub last_x: f64,
    pub last_y: f64,
}

impl SmoothingState {
    pub fn new(last_x: f64, last_y: f64) -> Self {
        Self { last_x, last_y }
    }

    /// Seed the state with a raw sample.
    pub fn from_point(point: NormalizedPoint) -> Self {
        Self::new(point.x, point.y)
    }

    pub fn as_point(&self) -> NormalizedPoint {
        NormalizedPoint::new(self.last_x, self.last_y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alpha_bounds() {
        assert!(SmoothingConfig::new(1.0).is_ok());
        assert!(SmoothingConfig::new(0.01).is_ok());
        assert_eq!(SmoothingConfig::new(0.0), Err(ModelError::InvalidAlpha(0.0)));
        assert!(SmoothingConfig::new(1.5).is_err());
        assert!(SmoothingConfig::new(-0.3).is_err());
        assert!(SmoothingConfig::new(f64::NAN).is_err());
    }

    #[test]
    fn test_default_alpha() {
        assert_eq!(SmoothingConfig::default().alpha(), 0.30);
    }

    #[test]
    fn test_state_round_trips_point() {
        let state = SmoothingState::from_point(NormalizedPoint::new(0.2, 0.4));
        assert_eq!(state.as_point(), NormalizedPoint::new(0.2, 0.4));
    }
}
