//! Display geometry.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, ModelResult};

/// Pixel dimensions of the active display.
///
/// Both dimensions are always > 0; construct through [`ScreenGeometry::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScreenGeometry {
    width_px: u32,
    height_px: u32,
}

impl ScreenGeometry {
    /// Fallback used when the display cannot be queried and no override is set.
    pub const FALLBACK: ScreenGeometry = ScreenGeometry {
        width_px: 1920,
        height_px: 1080,
    };

    /// Create a geometry; both dimensions must be non-zero.
    pub fn new(width_px: u32, height_px: u32) -> ModelResult<Self> {
        if width_px == 0 || height_px == 0 {
            return Err(ModelError::InvalidGeometry {
                width_px,
                height_px,
            });
        }
        Ok(Self {
            width_px,
            height_px,
        })
    }

    /// Screen width in pixels.
    pub fn width_px(&self) -> u32 {
        self.width_px
    }

    /// Screen height in pixels.
    pub fn height_px(&self) -> u32 {
        self.height_px
    }
}

impl fmt::Display for ScreenGeometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width_px, self.height_px)
    }
}

/// Absolute pixel coordinate. May fall outside the display for out-of-range input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct PixelPoint {
    pub x: i32,
    pub y: i32,
}

impl PixelPoint {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_zero_dimensions() {
        assert!(ScreenGeometry::new(0, 1080).is_err());
        assert!(ScreenGeometry::new(1920, 0).is_err());
        assert_eq!(
            ScreenGeometry::new(0, 0),
            Err(ModelError::InvalidGeometry {
                width_px: 0,
                height_px: 0
            })
        );
    }

    #[test]
    fn test_display() {
        let geometry = ScreenGeometry::new(2560, 1440).unwrap();
        assert_eq!(geometry.to_string(), "2560x1440");
        assert_eq!(ScreenGeometry::FALLBACK.to_string(), "1920x1080");
    }
}
