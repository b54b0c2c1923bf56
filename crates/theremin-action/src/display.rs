//! Screen geometry resolution.
//!
//! Resolved once at startup: the driver's display query, then per-axis
//! overrides on top, then a fixed fallback when nothing is known.

use std::num::NonZeroU32;

use theremin_models::ScreenGeometry;
use tracing::{info, warn};

use crate::driver::CursorDriver;

/// Resolve the screen size: overrides win per axis, then the driver's
/// display query, then [`ScreenGeometry::FALLBACK`].
pub fn resolve_geometry(
    driver: &dyn CursorDriver,
    width_override: Option<NonZeroU32>,
    height_override: Option<NonZeroU32>,
) -> ScreenGeometry {
    let detected = match driver.screen_size() {
        Ok(Some(geometry)) => {
            info!(driver = driver.name(), "OS reported screen dimensions: {}", geometry);
            geometry
        }
        Ok(None) => {
            if width_override.is_none() || height_override.is_none() {
                warn!(
                    driver = driver.name(),
                    "Display size not available, falling back to {}",
                    ScreenGeometry::FALLBACK
                );
            }
            ScreenGeometry::FALLBACK
        }
        Err(e) => {
            warn!(
                driver = driver.name(),
                error = %e,
                "Display query failed, falling back to {}",
                ScreenGeometry::FALLBACK
            );
            ScreenGeometry::FALLBACK
        }
    };

    let width = width_override.map_or(detected.width_px(), NonZeroU32::get);
    let height = height_override.map_or(detected.height_px(), NonZeroU32::get);

    // Both inputs are non-zero, so this cannot fail.
    ScreenGeometry::new(width, height).unwrap_or(detected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::MockCursorDriver;
    use crate::error::ActionError;

    fn driver_reporting(size: Option<(u32, u32)>) -> MockCursorDriver {
        let mut driver = MockCursorDriver::new();
        driver.expect_name().return_const("mock");
        driver
            .expect_screen_size()
            .returning(move || Ok(size.map(|(w, h)| ScreenGeometry::new(w, h).unwrap())));
        driver
    }

    #[test]
    fn test_uses_detected_size() {
        let driver = driver_reporting(Some((2560, 1440)));
        let geometry = resolve_geometry(&driver, None, None);
        assert_eq!(geometry, ScreenGeometry::new(2560, 1440).unwrap());
    }

    #[test]
    fn test_override_per_axis() {
        let driver = driver_reporting(Some((2560, 1440)));
        let geometry = resolve_geometry(&driver, NonZeroU32::new(1280), None);
        assert_eq!(geometry, ScreenGeometry::new(1280, 1440).unwrap());
    }

    #[test]
    fn test_fallback_when_undetectable() {
        let driver = driver_reporting(None);
        assert_eq!(resolve_geometry(&driver, None, None), ScreenGeometry::FALLBACK);

        let geometry = resolve_geometry(&driver, NonZeroU32::new(800), NonZeroU32::new(600));
        assert_eq!(geometry, ScreenGeometry::new(800, 600).unwrap());
    }

    #[test]
    fn test_fallback_when_query_fails() {
        let mut driver = MockCursorDriver::new();
        driver.expect_name().return_const("mock");
        driver
            .expect_screen_size()
            .returning(|| Err(ActionError::display_unavailable("no $DISPLAY")));
        assert_eq!(resolve_geometry(&driver, None, None), ScreenGeometry::FALLBACK);
    }
}
