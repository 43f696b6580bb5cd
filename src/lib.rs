//! Interactive line editing and command dispatch for terminal shells.
//!
//! `keyline` turns raw keystrokes into semantic editing actions and drives
//! a session's command loop from them:
//!
//! - [`terminal::Terminal`]: owns the edit-line buffer and its echo,
//!   translating each key into a `(Symbol, text)` pair
//! - [`processor::CommandProcessor`]: dispatches symbols to the session
//!   (submit, history recall, completion, clear, end-of-input)
//! - [`session::Session`]: the boundary behind which command execution,
//!   history policy, and completion sourcing live
//! - [`input::InputDevice`]: a blocking source of raw keys; the crossterm
//!   implementation manages the raw-mode lifecycle
//!
//! The bundled [`session::ShellSession`] wires a registered-command table
//! and an in-memory history ring behind the trait, which the `keyline`
//! binary uses as a demo shell.

pub mod input;
pub mod processor;
pub mod session;
pub mod terminal;

pub use input::{CrosstermInput, InputDevice, InputError};
pub use processor::{common_prefix, CommandProcessor, ProcessorError};
pub use session::{History, Session, ShellSession};
pub use terminal::{Key, Symbol, Terminal};
