//! Native input injection through enigo.
//!
//! Works on X11, Windows and macOS. Wayland sessions need XWayland or
//! libei support in enigo.

use enigo::{Coordinate, Enigo, Keyboard, Mouse, Settings};
use tracing::{debug, info};

use super::{InputDevice, InputError};

/// Device that injects real cursor and keyboard events.
pub struct EnigoDevice {
    enigo: Enigo,
}

impl EnigoDevice {
    /// Connect to the platform input backend.
    pub fn connect() -> Result<Self, InputError> {
        let enigo = Enigo::new(&Settings::default())
            .map_err(|e| InputError::Connection(e.to_string()))?;
        info!("Connected to native input backend");
        Ok(Self { enigo })
    }
}

impl InputDevice for EnigoDevice {
    fn cursor_position(&self) -> Result<(i32, i32), InputError> {
        self.enigo
            .location()
            .map_err(|e| InputError::CursorQuery(e.to_string()))
    }

    fn move_cursor_to(&mut self, x: i32, y: i32) -> Result<(), InputError> {
        self.enigo
            .move_mouse(x, y, Coordinate::Abs)
            .map_err(|e| InputError::CursorMove {
                x,
                y,
                reason: e.to_string(),
            })
    }

    fn type_char(&mut self, c: char) -> Result<(), InputError> {
        debug!("Injecting keystroke: {}", c);
        let mut buf = [0u8; 4];
        self.enigo
            .text(c.encode_utf8(&mut buf))
            .map_err(|e| InputError::Keystroke {
                character: c,
                reason: e.to_string(),
            })
    }
}
