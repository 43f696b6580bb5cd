//! Crossterm-backed keyboard input.
//!
//! Owns the raw-mode lifecycle: raw mode is on while the device is active
//! and dropped during `deactivate`, so commands that prompt for their own
//! input see a cooked terminal.

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use tracing::debug;

use super::{InputDevice, InputError};
use crate::terminal::Key;

/// Keyboard input device over crossterm events.
pub struct CrosstermInput {
    raw: bool,
}

impl CrosstermInput {
    /// Switch the terminal to raw mode and start delivering keys.
    pub fn new() -> Result<Self, InputError> {
        enable_raw_mode().map_err(InputError::Mode)?;
        Ok(Self { raw: true })
    }
}

impl InputDevice for CrosstermInput {
    fn next_key(&mut self) -> Result<Option<Key>, InputError> {
        loop {
            match event::read().map_err(InputError::Read)? {
                Event::Key(ev) if ev.kind != KeyEventKind::Release => {
                    if ev.modifiers.contains(KeyModifiers::CONTROL) {
                        match ev.code {
                            KeyCode::Char('d') => return Ok(Some(Key::Eof)),
                            KeyCode::Char('l') => return Ok(Some(Key::ClearScreen)),
                            KeyCode::Char('a') => return Ok(Some(Key::Home)),
                            KeyCode::Char('e') => return Ok(Some(Key::End)),
                            _ => continue,
                        }
                    }
                    match ev.code {
                        KeyCode::Char(c) => return Ok(Some(Key::Char(c))),
                        KeyCode::Enter => return Ok(Some(Key::Enter)),
                        KeyCode::Tab => return Ok(Some(Key::Tab)),
                        KeyCode::Up => return Ok(Some(Key::Up)),
                        KeyCode::Down => return Ok(Some(Key::Down)),
                        KeyCode::Left => return Ok(Some(Key::Left)),
                        KeyCode::Right => return Ok(Some(Key::Right)),
                        KeyCode::Backspace => return Ok(Some(Key::Backspace)),
                        KeyCode::Delete => return Ok(Some(Key::Delete)),
                        KeyCode::Home => return Ok(Some(Key::Home)),
                        KeyCode::End => return Ok(Some(Key::End)),
                        _ => continue,
                    }
                }
                // Resize, focus, paste and key-release events carry nothing
                // the line editor cares about.
                _ => continue,
            }
        }
    }

    fn deactivate(&mut self) {
        if self.raw {
            if let Err(err) = disable_raw_mode() {
                debug!("failed to leave raw mode: {err}");
            }
            self.raw = false;
        }
    }

    fn activate(&mut self) {
        if !self.raw {
            if let Err(err) = enable_raw_mode() {
                debug!("failed to re-enter raw mode: {err}");
            }
            self.raw = true;
        }
    }
}

impl Drop for CrosstermInput {
    fn drop(&mut self) {
        self.deactivate();
    }
}
