//! Model validation errors.

use thiserror::Error;

pub type ModelResult<T> = Result<T, ModelError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    #[error("Invalid screen geometry: {width_px}x{height_px} (both dimensions must be > 0)")]
    InvalidGeometry { width_px: u32, height_px: u32 },

    #[error("Invalid smoothing alpha: {0} (must be in (0, 1])")]
    InvalidAlpha(f64),
}
