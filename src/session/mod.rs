//! Session boundary and the bundled shell session.
//!
//! The command processor only recognizes intent from keystrokes; everything
//! a shell actually *does* with a line lives behind the `Session` trait:
//! execution, prompting, history recall policy, and completion candidates.

mod history;
mod shell;

pub use history::History;
pub use shell::ShellSession;

use std::io::Write;

/// The command loop's view of a shell session.
///
/// Implementations own the command grammar, the prompt, history storage,
/// and completion sourcing. The processor calls these in a strict sequence
/// within one key-event handling; no method is re-entered.
pub trait Session {
    /// Terminate the session. Called once on end-of-input.
    fn exit(&mut self);

    /// Whether the session has terminated; checked after each fed command
    /// so a command may end the loop.
    fn exited(&self) -> bool;

    /// Execute one submitted command line.
    fn feed(&mut self, line: &str);

    /// (Re)display the prompt on the output stream.
    fn prompt(&mut self);

    /// Forward history navigation. Past the newest entry this typically
    /// yields the line in progress before navigation began, or empty.
    fn next_cmd(&mut self) -> String;

    /// Backward history navigation. `current` is the in-progress line; the
    /// recall policy may use or ignore it.
    fn previous_cmd(&mut self, current: &str) -> String;

    /// Completion candidates for a partial line, in presentation order.
    /// Empty means none.
    fn completions(&self, partial: &str) -> Vec<String>;

    /// Sink for free-form output such as candidate listings.
    fn out(&mut self) -> &mut dyn Write;
}
