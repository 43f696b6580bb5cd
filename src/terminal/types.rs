//! Key and symbol types for keystroke interpretation.

/// A raw key event delivered by an input device.
///
/// Printable keys carry their character; everything else is an editing or
/// control key the translator knows how to interpret.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// A printable character
    Char(char),
    /// Submit the current line
    Enter,
    /// Request completion
    Tab,
    /// History backward
    Up,
    /// History forward
    Down,
    /// Cursor left
    Left,
    /// Cursor right
    Right,
    /// Delete the character before the cursor
    Backspace,
    /// Delete the character under the cursor
    Delete,
    /// Cursor to start of line
    Home,
    /// Cursor to end of line
    End,
    /// End of input (Ctrl-D)
    Eof,
    /// Clear the screen (Ctrl-L)
    ClearScreen,
}

/// The semantic interpretation of one completed keystroke.
///
/// Exactly one symbol is produced per key event; it is the sole dispatch
/// key for the command processor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol {
    /// Key was consumed into the edit buffer; nothing to dispatch
    Nothing,
    /// End of input; the session should terminate
    Eof,
    /// A full line is ready for execution
    Command,
    /// History forward navigation
    Down,
    /// History backward navigation
    Up,
    /// Completion request
    Tab,
    /// Screen clear request
    Clear,
}
