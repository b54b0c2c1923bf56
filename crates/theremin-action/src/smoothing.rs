//! Exponential moving average smoothing for gaze samples.
//!
//! `smoothed = last + (raw - last) * alpha`, per axis. The filter turns
//! noisy discrete samples into continuous pointer motion instead of
//! jumping straight to every raw position.

use theremin_models::{NormalizedPoint, SmoothingConfig, SmoothingState};

/// One EMA step over an explicit state.
///
/// Returns the smoothed point and the state to carry into the next call.
/// `alpha >= 1.0` returns `point` exactly.
pub fn smooth(
    state: SmoothingState,
    point: NormalizedPoint,
    alpha: f64,
) -> (NormalizedPoint, SmoothingState) {
    if alpha >= 1.0 {
        return (point, SmoothingState::from_point(point));
    }
    let x = state.last_x + (point.x - state.last_x) * alpha;
    let y = state.last_y + (point.y - state.last_y) * alpha;
    (NormalizedPoint::new(x, y), SmoothingState::new(x, y))
}

/// Stateful smoothing filter owned by exactly one stream session.
///
/// Deliberately not `Clone`: a filter is never shared between sessions.
#[derive(Debug)]
pub struct SmoothingFilter {
    config: SmoothingConfig,
    state: Option<SmoothingState>,
}

impl SmoothingFilter {
    /// Create a filter that seeds itself from the first sample it sees.
    pub fn new(config: SmoothingConfig) -> Self {
        Self {
            config,
            state: None,
        }
    }

    /// Create a filter starting from an explicit state.
    pub fn with_state(config: SmoothingConfig, state: SmoothingState) -> Self {
        Self {
            config,
            state: Some(state),
        }
    }

    /// Smooth one raw sample and advance the state.
    ///
    /// An unseeded filter passes the first sample through unchanged.
    pub fn apply(&mut self, raw: NormalizedPoint) -> NormalizedPoint {
        let (smoothed, next) = match self.state {
            Some(state) => smooth(state, raw, self.config.alpha()),
            None => (raw, SmoothingState::from_point(raw)),
        };
        self.state = Some(next);
        smoothed
    }

    /// Current state, `None` until the first sample.
    pub fn state(&self) -> Option<SmoothingState> {
        self.state
    }

    pub fn config(&self) -> SmoothingConfig {
        self.config
    }
}
