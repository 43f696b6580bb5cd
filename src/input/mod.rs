//! Key event sources.
//!
//! An `InputDevice` is a blocking, pull-style source of raw keys. The
//! processor pairs `deactivate`/`activate` 1:1 around command execution so
//! a command that reads stdin itself never races the key loop.

mod keyboard;

pub use keyboard::CrosstermInput;

use crate::terminal::Key;

/// Errors raised by an input device.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("failed to read key event: {0}")]
    Read(#[source] std::io::Error),

    #[error("failed to switch terminal mode: {0}")]
    Mode(#[source] std::io::Error),
}

/// A blocking source of raw key events.
pub trait InputDevice {
    /// Block until the next key arrives.
    ///
    /// `None` means the source is closed for good and is treated as
    /// end-of-input by the run loop.
    fn next_key(&mut self) -> Result<Option<Key>, InputError>;

    /// Pause key delivery while a command executes.
    fn deactivate(&mut self);

    /// Resume key delivery.
    fn activate(&mut self);
}
