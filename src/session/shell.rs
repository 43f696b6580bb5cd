//! A concrete session with registered commands and history.

use std::io::{self, Write};
use tracing::debug;

use super::{History, Session};

type Action<W> = Box<dyn FnMut(&mut W, &[&str]) -> io::Result<()>>;

struct Command<W> {
    name: String,
    help: String,
    action: Action<W>,
}

/// Session backed by a registered-command table and an in-memory history.
///
/// Lines are split on whitespace; the first token selects a command and the
/// rest become its arguments. `exit`, `help` and `history` are built in.
/// Completion offers every command name starting with the partial line, in
/// registration order with builtins last.
pub struct ShellSession<W: Write> {
    prompt: String,
    out: W,
    history: History,
    commands: Vec<Command<W>>,
    exited: bool,
}

const BUILTINS: [(&str, &str); 3] = [
    ("exit", "end the session"),
    ("help", "list available commands"),
    ("history", "show submitted commands"),
];

impl<W: Write> ShellSession<W> {
    pub fn new(prompt: impl Into<String>, out: W, history_limit: usize) -> Self {
        Self {
            prompt: prompt.into(),
            out,
            history: History::new(history_limit),
            commands: Vec::new(),
            exited: false,
        }
    }

    /// Register a command. The earliest registration of a name wins at
    /// dispatch time; builtin names cannot be shadowed.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        help: impl Into<String>,
        action: impl FnMut(&mut W, &[&str]) -> io::Result<()> + 'static,
    ) {
        self.commands.push(Command {
            name: name.into(),
            help: help.into(),
            action: Box::new(action),
        });
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    fn dispatch(&mut self, name: &str, args: &[&str]) -> io::Result<()> {
        match name {
            "exit" => {
                self.exited = true;
                Ok(())
            }
            "help" => {
                for cmd in &self.commands {
                    writeln!(self.out, "  {:<12} {}", cmd.name, cmd.help)?;
                }
                for (name, help) in BUILTINS {
                    writeln!(self.out, "  {name:<12} {help}")?;
                }
                Ok(())
            }
            "history" => {
                for line in self.history.entries() {
                    writeln!(self.out, "  {line}")?;
                }
                Ok(())
            }
            _ => {
                if let Some(cmd) = self.commands.iter_mut().find(|c| c.name == name) {
                    (cmd.action)(&mut self.out, args)
                } else {
                    writeln!(self.out, "unknown command: {name}")
                }
            }
        }
    }
}

impl<W: Write> Session for ShellSession<W> {
    fn exit(&mut self) {
        self.exited = true;
    }

    fn exited(&self) -> bool {
        self.exited
    }

    fn feed(&mut self, line: &str) {
        let line = line.trim();
        if line.is_empty() {
            return;
        }
        self.history.push(line);

        let mut parts = line.split_whitespace();
        let Some(name) = parts.next() else {
            return;
        };
        let args: Vec<&str> = parts.collect();
        let name = name.to_string();
        if let Err(err) = self.dispatch(&name, &args) {
            debug!("command '{name}' output failed: {err}");
        }
        let _ = self.out.flush();
    }

    fn prompt(&mut self) {
        let _ = write!(self.out, "{}", self.prompt);
        let _ = self.out.flush();
    }

    fn next_cmd(&mut self) -> String {
        self.history.next()
    }

    fn previous_cmd(&mut self, current: &str) -> String {
        self.history.previous(current)
    }

    fn completions(&self, partial: &str) -> Vec<String> {
        self.commands
            .iter()
            .map(|c| c.name.as_str())
            .chain(BUILTINS.iter().map(|(name, _)| *name))
            .filter(|name| name.starts_with(partial))
            .map(str::to_string)
            .collect()
    }

    fn out(&mut self) -> &mut dyn Write {
        &mut self.out
    }
}
