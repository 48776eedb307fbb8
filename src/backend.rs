//! Input injection backends.
//!
//! This module provides the capability object the simulator drives: cursor
//! queries, cursor moves and single keystrokes. Real input goes through
//! enigo; dry-run mode only logs.

mod native;

pub use native::EnigoDevice;
use thiserror::Error;
use tracing::{debug, info};

/// Trait for input injection devices.
pub trait InputDevice {
    /// Current cursor position in absolute screen coordinates.
    fn cursor_position(&self) -> Result<(i32, i32), InputError>;

    /// Move the cursor to an absolute position.
    fn move_cursor_to(&mut self, x: i32, y: i32) -> Result<(), InputError>;

    /// Inject a single printable character.
    fn type_char(&mut self, c: char) -> Result<(), InputError>;
}

impl<D: InputDevice + ?Sized> InputDevice for Box<D> {
    fn cursor_position(&self) -> Result<(i32, i32), InputError> {
        (**self).cursor_position()
    }

    fn move_cursor_to(&mut self, x: i32, y: i32) -> Result<(), InputError> {
        (**self).move_cursor_to(x, y)
    }

    fn type_char(&mut self, c: char) -> Result<(), InputError> {
        (**self).type_char(c)
    }
}

/// Errors that can occur while injecting input.
#[derive(Error, Debug)]
pub enum InputError {
    #[error("Failed to connect to input backend: {0}")]
    Connection(String),

    #[error("Failed to query cursor position: {0}")]
    CursorQuery(String),

    #[error("Failed to move cursor to ({x}, {y}): {reason}")]
    CursorMove { x: i32, y: i32, reason: String },

    #[error("Failed to type '{character}': {reason}")]
    Keystroke { character: char, reason: String },
}

/// Device that logs requested input instead of injecting it.
///
/// Keeps a virtual cursor so glides and offsets stay meaningful.
#[derive(Debug, Clone)]
pub struct DryRunDevice {
    position: (i32, i32),
}

impl DryRunDevice {
    /// Create a dry-run device with the virtual cursor at `origin`.
    pub fn new(origin: (i32, i32)) -> Self {
        Self { position: origin }
    }
}

impl Default for DryRunDevice {
    fn default() -> Self {
        Self::new((0, 0))
    }
}

impl InputDevice for DryRunDevice {
    fn cursor_position(&self) -> Result<(i32, i32), InputError> {
        Ok(self.position)
    }

    fn move_cursor_to(&mut self, x: i32, y: i32) -> Result<(), InputError> {
        debug!("[DRY RUN] Would move cursor to ({}, {})", x, y);
        self.position = (x, y);
        Ok(())
    }

    fn type_char(&mut self, c: char) -> Result<(), InputError> {
        info!("[DRY RUN] Would type: {}", c);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dry_run_tracks_cursor() {
        let mut device = DryRunDevice::new((640, 480));
        assert_eq!(device.cursor_position().unwrap(), (640, 480));

        device.move_cursor_to(600, 500).unwrap();
        assert_eq!(device.cursor_position().unwrap(), (600, 500));
    }

    #[test]
    fn test_dry_run_typing_is_noop() {
        let mut device = DryRunDevice::default();
        device.type_char('Q').unwrap();
        assert_eq!(device.cursor_position().unwrap(), (0, 0));
    }

    #[test]
    fn test_boxed_device_delegates() {
        let mut device: Box<dyn InputDevice> = Box::new(DryRunDevice::default());
        device.move_cursor_to(3, 4).unwrap();
        assert_eq!(device.cursor_position().unwrap(), (3, 4));
    }

    #[test]
    fn test_error_messages() {
        let err = InputError::CursorMove {
            x: 1,
            y: 2,
            reason: "denied".to_string(),
        };
        assert_eq!(err.to_string(), "Failed to move cursor to (1, 2): denied");

        let err = InputError::Keystroke {
            character: '+',
            reason: "no display".to_string(),
        };
        assert_eq!(err.to_string(), "Failed to type '+': no display");
    }
}
