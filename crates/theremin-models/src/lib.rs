//! Shared data models for the Theremin gaze pipeline.
//!
//! This crate provides Serde-serializable types for:
//! - Gaze samples and normalized/pixel coordinates
//! - Display geometry
//! - Smoothing configuration and per-session filter state
//! - Stream session identity, lifecycle and results
//! - Pointer buttons

pub mod error;
pub mod gaze;
pub mod geometry;
pub mod input;
pub mod session;
pub mod smoothing;

// Re-export common types
pub use error::{ModelError, ModelResult};
pub use gaze::{now_millis, GazePoint, NormalizedPoint};
pub use geometry::{PixelPoint, ScreenGeometry};
pub use input::MouseButton;
pub use session::{SessionId, SessionResult, SessionState};
pub use smoothing::{SmoothingConfig, SmoothingState, DEFAULT_SMOOTHING_ALPHA};
