//! OS pointer driver backed by enigo.

use std::sync::{Mutex, MutexGuard};

use enigo::{Button, Coordinate, Direction, Enigo, Mouse, Settings};
use theremin_models::{MouseButton, ScreenGeometry};

use crate::driver::CursorDriver;
use crate::error::{ActionError, ActionResult};

/// Real pointer control. One connection per process, shared by all sessions.
pub struct EnigoDriver {
    enigo: Mutex<Enigo>,
}

impl EnigoDriver {
    /// Connect to the OS input facility.
    pub fn new() -> ActionResult<Self> {
        let enigo = Enigo::new(&Settings::default())
            .map_err(|e| ActionError::display_unavailable(e.to_string()))?;
        Ok(Self {
            enigo: Mutex::new(enigo),
        })
    }

    fn lock(&self) -> ActionResult<MutexGuard<'_, Enigo>> {
        self.enigo
            .lock()
            .map_err(|_| ActionError::driver("enigo connection lock poisoned"))
    }
}

fn to_enigo_button(button: MouseButton) -> Button {
    match button {
        MouseButton::Left => Button::Left,
        MouseButton::Right => Button::Right,
        MouseButton::Middle => Button::Middle,
    }
}

impl CursorDriver for EnigoDriver {
    fn name(&self) -> &'static str {
        "enigo"
    }

    fn move_absolute(&self, x: i32, y: i32) -> ActionResult<()> {
        self.lock()?
            .move_mouse(x, y, Coordinate::Abs)
            .map_err(|e| ActionError::driver(e.to_string()))
    }

    fn click(&self, button: MouseButton) -> ActionResult<()> {
        self.lock()?
            .button(to_enigo_button(button), Direction::Click)
            .map_err(|e| ActionError::driver(e.to_string()))
    }

    fn screen_size(&self) -> ActionResult<Option<ScreenGeometry>> {
        let (width, height) = self
            .lock()?
            .main_display()
            .map_err(|e| ActionError::display_unavailable(e.to_string()))?;

        let geometry = u32::try_from(width)
            .ok()
            .zip(u32::try_from(height).ok())
            .and_then(|(w, h)| ScreenGeometry::new(w, h).ok());
        Ok(geometry)
    }
}
