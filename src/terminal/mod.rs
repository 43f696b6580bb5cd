//! Line translator: turns raw keys into symbols and owns the edit buffer.
//!
//! The `Terminal` holds the in-progress line and its on-screen echo. Each
//! key event produces exactly one `(Symbol, String)` pair; editing keys are
//! consumed into the buffer (yielding `Symbol::Nothing`) while the rest are
//! classified for the command processor to dispatch on.
//!
//! Rendering is queued through crossterm commands into a generic writer, so
//! tests can capture the emitted bytes without a real terminal.

mod types;

pub use types::{Key, Symbol};

use crossterm::cursor::{MoveLeft, MoveRight, MoveTo};
use crossterm::queue;
use crossterm::style::Print;
use crossterm::terminal::{Clear, ClearType};
use std::io::{self, Write};

/// Owns the edit-line buffer and renders its echo.
///
/// The cursor is tracked as a character offset into the buffer; movement is
/// emitted as relative cursor commands so the prompt column never needs to
/// be known here.
pub struct Terminal<W: Write> {
    out: W,
    line: String,
    cursor: usize,
}

impl<W: Write> Terminal<W> {
    /// Create a translator echoing to `out`.
    pub fn new(out: W) -> Self {
        Self {
            out,
            line: String::new(),
            cursor: 0,
        }
    }

    /// Interpret one key event.
    ///
    /// Editing keys mutate the buffer and echo, then yield
    /// `Symbol::Nothing`. `Enter` drains the buffer and yields it with
    /// `Symbol::Command`; the remaining keys map 1:1 to their symbols.
    pub fn key_pressed(&mut self, key: Key) -> io::Result<(Symbol, String)> {
        match key {
            Key::Char(c) => {
                self.insert(c)?;
                Ok((Symbol::Nothing, String::new()))
            }
            Key::Backspace => {
                self.backspace()?;
                Ok((Symbol::Nothing, String::new()))
            }
            Key::Delete => {
                self.delete()?;
                Ok((Symbol::Nothing, String::new()))
            }
            Key::Left => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                    queue!(self.out, MoveLeft(1))?;
                    self.out.flush()?;
                }
                Ok((Symbol::Nothing, String::new()))
            }
            Key::Right => {
                if self.cursor < self.char_count() {
                    self.cursor += 1;
                    queue!(self.out, MoveRight(1))?;
                    self.out.flush()?;
                }
                Ok((Symbol::Nothing, String::new()))
            }
            Key::Home => {
                if self.cursor > 0 {
                    queue!(self.out, MoveLeft(self.cursor as u16))?;
                    self.cursor = 0;
                    self.out.flush()?;
                }
                Ok((Symbol::Nothing, String::new()))
            }
            Key::End => {
                let count = self.char_count();
                if self.cursor < count {
                    queue!(self.out, MoveRight((count - self.cursor) as u16))?;
                    self.cursor = count;
                    self.out.flush()?;
                }
                Ok((Symbol::Nothing, String::new()))
            }
            Key::Enter => {
                queue!(self.out, Print("\r\n"))?;
                self.out.flush()?;
                self.cursor = 0;
                Ok((Symbol::Command, std::mem::take(&mut self.line)))
            }
            Key::Tab => Ok((Symbol::Tab, String::new())),
            Key::Up => Ok((Symbol::Up, String::new())),
            Key::Down => Ok((Symbol::Down, String::new())),
            Key::Eof => Ok((Symbol::Eof, String::new())),
            Key::ClearScreen => Ok((Symbol::Clear, String::new())),
        }
    }

    /// The current edit buffer.
    pub fn line(&self) -> &str {
        &self.line
    }

    /// Replace the buffer wholesale, redrawing the editable region and
    /// leaving the cursor at end of buffer.
    pub fn set_line(&mut self, text: String) -> io::Result<()> {
        if self.cursor > 0 {
            queue!(self.out, MoveLeft(self.cursor as u16))?;
        }
        queue!(self.out, Clear(ClearType::UntilNewLine), Print(&text))?;
        self.out.flush()?;
        self.cursor = text.chars().count();
        self.line = text;
        Ok(())
    }

    /// Clear the whole screen and home the cursor.
    ///
    /// The buffer is left untouched; callers re-prompt, `reset_cursor`, and
    /// `set_line` to restore the editable region.
    pub fn clear_screen(&mut self) -> io::Result<()> {
        queue!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
        self.out.flush()
    }

    /// Restart the editable region just past the prompt.
    ///
    /// Called after the prompt has been redrawn at a fresh position; only
    /// the internal cursor tracking resets, nothing is emitted.
    pub fn reset_cursor(&mut self) {
        self.cursor = 0;
    }

    fn insert(&mut self, c: char) -> io::Result<()> {
        let at = self.byte_index(self.cursor);
        self.line.insert(at, c);
        self.cursor += 1;
        if self.cursor == self.char_count() {
            queue!(self.out, Print(c))?;
        } else {
            // Mid-line insert: repaint the tail and step back over it.
            let tail = self.line[at..].chars().count() - 1;
            queue!(self.out, Print(&self.line[at..]), MoveLeft(tail as u16))?;
        }
        self.out.flush()
    }

    fn backspace(&mut self) -> io::Result<()> {
        if self.cursor == 0 {
            return Ok(());
        }
        self.cursor -= 1;
        let at = self.byte_index(self.cursor);
        self.line.remove(at);
        queue!(self.out, MoveLeft(1), Clear(ClearType::UntilNewLine))?;
        self.repaint_tail(at)?;
        self.out.flush()
    }

    fn delete(&mut self) -> io::Result<()> {
        if self.cursor >= self.char_count() {
            return Ok(());
        }
        let at = self.byte_index(self.cursor);
        self.line.remove(at);
        queue!(self.out, Clear(ClearType::UntilNewLine))?;
        self.repaint_tail(at)?;
        self.out.flush()
    }

    /// Repaint everything from byte offset `at` and move back over it.
    fn repaint_tail(&mut self, at: usize) -> io::Result<()> {
        if at < self.line.len() {
            let tail = self.line[at..].chars().count();
            queue!(self.out, Print(&self.line[at..]), MoveLeft(tail as u16))?;
        }
        Ok(())
    }

    fn char_count(&self) -> usize {
        self.line.chars().count()
    }

    fn byte_index(&self, char_idx: usize) -> usize {
        self.line
            .char_indices()
            .nth(char_idx)
            .map_or(self.line.len(), |(i, _)| i)
    }
}
