//! Normalized-to-pixel display mapping.

use theremin_models::{NormalizedPoint, PixelPoint, ScreenGeometry};

/// Map a normalized point onto the display, rounding to the nearest pixel.
///
/// No clamping: out-of-range input yields off-screen pixels.
pub fn to_pixels(point: NormalizedPoint, geometry: &ScreenGeometry) -> PixelPoint {
    let x = (point.x * f64::from(geometry.width_px())).round();
    let y = (point.y * f64::from(geometry.height_px())).round();
    PixelPoint::new(x as i32, y as i32)
}

/// Display mapper bound to one resolved geometry.
#[derive(Debug, Clone, Copy)]
pub struct DisplayMapper {
    geometry: ScreenGeometry,
}

impl DisplayMapper {
    pub fn new(geometry: ScreenGeometry) -> Self {
        Self { geometry }
    }

    /// Map a normalized point onto this mapper's screen.
    pub fn to_pixels(&self, point: NormalizedPoint) -> PixelPoint {
        to_pixels(point, &self.geometry)
    }

    pub fn geometry(&self) -> ScreenGeometry {
        self.geometry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hd() -> ScreenGeometry {
        ScreenGeometry::new(1920, 1080).unwrap()
    }

    #[test]
    fn test_corners() {
        assert_eq!(to_pixels(NormalizedPoint::new(0.0, 0.0), &hd()), PixelPoint::new(0, 0));
        assert_eq!(
            to_pixels(NormalizedPoint::new(1.0, 1.0), &hd()),
            PixelPoint::new(1920, 1080)
        );
    }

    #[test]
    fn test_center_quarter() {
        let mapper = DisplayMapper::new(hd());
        assert_eq!(mapper.to_pixels(NormalizedPoint::new(0.5, 0.25)), PixelPoint::new(960, 270));
    }

    #[test]
    fn test_rounds_to_nearest() {
        let geometry = ScreenGeometry::new(100, 100).unwrap();
        assert_eq!(
            to_pixels(NormalizedPoint::new(0.104, 0.106), &geometry),
            PixelPoint::new(10, 11)
        );
    }

    #[test]
    fn test_out_of_range_is_not_clamped() {
        assert_eq!(
            to_pixels(NormalizedPoint::new(-0.1, 1.5), &hd()),
            PixelPoint::new(-192, 1620)
        );
    }
}
