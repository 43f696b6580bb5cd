//! Command processor: the symbol dispatch state machine.
//!
//! Pulls raw keys from an input device, feeds them through the translator,
//! and drives the session from the resulting symbols: submit, history
//! recall, completion, screen clear, end-of-input. One key event is handled
//! fully before the next is accepted.

mod prefix;

pub use prefix::common_prefix;

use std::io::{self, Write};
use tracing::{debug, trace};

use crate::input::{InputDevice, InputError};
use crate::session::Session;
use crate::terminal::{Key, Symbol, Terminal};

/// Errors surfaced by the run loop.
#[derive(Debug, thiserror::Error)]
pub enum ProcessorError {
    #[error("terminal write failed: {0}")]
    Write(#[from] io::Error),

    #[error(transparent)]
    Input(#[from] InputError),
}

/// Control flow signal returned by the per-key handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Releases the input device even if command execution unwinds.
struct InputGuard<'a, I: InputDevice> {
    input: &'a mut I,
}

impl<'a, I: InputDevice> InputGuard<'a, I> {
    fn hold(input: &'a mut I) -> Self {
        input.deactivate();
        Self { input }
    }
}

impl<I: InputDevice> Drop for InputGuard<'_, I> {
    fn drop(&mut self) {
        self.input.activate();
    }
}

/// Binds one session, one input device, and one translator into a command
/// loop.
pub struct CommandProcessor<S: Session, I: InputDevice, W: Write> {
    session: S,
    input: I,
    terminal: Terminal<W>,
}

impl<S: Session, I: InputDevice, W: Write> CommandProcessor<S, I, W> {
    pub fn new(session: S, input: I, terminal: Terminal<W>) -> Self {
        Self {
            session,
            input,
            terminal,
        }
    }

    /// Display the prompt and handle keys until end-of-input or until the
    /// session reports itself exited.
    pub fn run(&mut self) -> Result<(), ProcessorError> {
        self.session.prompt();
        loop {
            match self.input.next_key()? {
                Some(key) => {
                    if self.handle_key(key)? == Flow::Exit {
                        break;
                    }
                }
                None => {
                    debug!("input source closed");
                    self.session.exit();
                    break;
                }
            }
        }
        Ok(())
    }

    /// Take back the bound collaborators, e.g. to inspect session state
    /// after the loop ends.
    pub fn into_parts(self) -> (S, I, Terminal<W>) {
        (self.session, self.input, self.terminal)
    }

    fn handle_key(&mut self, key: Key) -> Result<Flow, ProcessorError> {
        let (symbol, text) = self.terminal.key_pressed(key)?;
        trace!(?symbol, "dispatch");
        match symbol {
            Symbol::Nothing => Ok(Flow::Continue),
            Symbol::Eof => {
                self.session.exit();
                Ok(Flow::Exit)
            }
            Symbol::Command => {
                {
                    // No key event may be delivered while the command runs;
                    // the guard reactivates the device on every path out.
                    let _guard = InputGuard::hold(&mut self.input);
                    self.session.feed(&text);
                    self.session.prompt();
                }
                if self.session.exited() {
                    Ok(Flow::Exit)
                } else {
                    Ok(Flow::Continue)
                }
            }
            Symbol::Down => {
                let entry = self.session.next_cmd();
                self.terminal.set_line(entry)?;
                Ok(Flow::Continue)
            }
            Symbol::Up => {
                let line = self.terminal.line().to_string();
                let entry = self.session.previous_cmd(&line);
                self.terminal.set_line(entry)?;
                Ok(Flow::Continue)
            }
            Symbol::Tab => self.complete(),
            Symbol::Clear => {
                let line = self.terminal.line().to_string();
                self.terminal.clear_screen()?;
                self.session.prompt();
                self.terminal.reset_cursor();
                self.terminal.set_line(line)?;
                Ok(Flow::Continue)
            }
        }
    }

    fn complete(&mut self) -> Result<Flow, ProcessorError> {
        let line = self.terminal.line().to_string();
        let completions = self.session.completions(&line);
        if completions.is_empty() {
            return Ok(Flow::Continue);
        }
        if completions.len() == 1 {
            self.terminal.set_line(format!("{} ", completions[0]))?;
            return Ok(Flow::Continue);
        }

        let prefix = common_prefix(&completions);
        if prefix.len() > line.len() {
            // Unambiguous partial extension; no listing needed yet.
            self.terminal.set_line(prefix)?;
            return Ok(Flow::Continue);
        }

        let out = self.session.out();
        write!(out, "\r\n")?;
        for candidate in &completions {
            write!(out, "\t{candidate}")?;
        }
        write!(out, "\r\n")?;
        out.flush()?;
        self.session.prompt();
        self.terminal.reset_cursor();
        self.terminal.set_line(line)?;
        Ok(Flow::Continue)
    }
}
