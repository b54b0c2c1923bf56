//! Cursor driver capability.
//!
//! The OS pointer primitive sits behind [`CursorDriver`] so the pipeline
//! can run against a fake in tests and against a real backend in the
//! binary. Drivers are shared by every session, hence `&self` + `Sync`.

use theremin_models::{MouseButton, ScreenGeometry};
use tracing::{debug, info};

use crate::error::ActionResult;

#[cfg_attr(test, mockall::automock)]
pub trait CursorDriver: Send + Sync {
    /// Short backend name for logs.
    fn name(&self) -> &'static str;

    /// Move the pointer to an absolute pixel position.
    fn move_absolute(&self, x: i32, y: i32) -> ActionResult<()>;

    /// Click a button at the current pointer position.
    fn click(&self, button: MouseButton) -> ActionResult<()>;

    /// Pixel size of the main display, if the backend can query it.
    fn screen_size(&self) -> ActionResult<Option<ScreenGeometry>> {
        Ok(None)
    }
}

/// Driver that only logs pointer actions.
///
/// Used when no OS backend is compiled in or the OS refuses a connection.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingDriver;

impl CursorDriver for TracingDriver {
    fn name(&self) -> &'static str {
        "tracing"
    }

    fn move_absolute(&self, x: i32, y: i32) -> ActionResult<()> {
        debug!(x, y, "cursor move");
        Ok(())
    }

    fn click(&self, button: MouseButton) -> ActionResult<()> {
        info!(button = %button, "cursor click");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracing_driver_accepts_everything() {
        let driver = TracingDriver;
        assert!(driver.move_absolute(-10, 5000).is_ok());
        assert!(driver.click(MouseButton::Right).is_ok());
        assert_eq!(driver.screen_size(), Ok(None));
    }
}
