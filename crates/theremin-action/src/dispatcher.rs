//! Cursor action dispatch.

use std::sync::Arc;

use theremin_models::{MouseButton, PixelPoint};
use tracing::warn;

use crate::driver::CursorDriver;
use crate::error::ActionResult;

/// Single point of contact between the pipeline and the OS pointer.
///
/// Calls forward synchronously; a driver error is returned to the caller
/// untouched so the owning session can fail.
#[derive(Clone)]
pub struct CursorActionDispatcher {
    driver: Arc<dyn CursorDriver>,
}

impl CursorActionDispatcher {
    /// Wrap a driver shared by every session.
    pub fn new(driver: Arc<dyn CursorDriver>) -> Self {
        Self { driver }
    }

    /// Move the pointer to absolute pixel coordinates.
    ///
    /// Driver errors are logged and returned unchanged.
    pub fn move_to(&self, x: i32, y: i32) -> ActionResult<()> {
        self.driver.move_absolute(x, y).inspect_err(|e| {
            warn!(x, y, driver = self.driver.name(), error = %e, "cursor move failed");
        })
    }

    /// Move the pointer to a mapped pixel target.
    pub fn move_to_point(&self, target: PixelPoint) -> ActionResult<()> {
        self.move_to(target.x, target.y)
    }

    /// Click a mouse button at the current pointer position.
    pub fn click(&self, button: MouseButton) -> ActionResult<()> {
        self.driver.click(button).inspect_err(|e| {
            warn!(button = %button, driver = self.driver.name(), error = %e, "cursor click failed");
        })
    }

    /// Name of the underlying driver, for logs.
    pub fn driver_name(&self) -> &'static str {
        self.driver.name()
    }
}

impl std::fmt::Debug for CursorActionDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CursorActionDispatcher")
            .field("driver", &self.driver.name())
            .finish()
    }
}
