//! Demo shell built on the keyline command loop.

use anyhow::Result;
use clap::Parser;
use std::io::{self, Write};
use tracing_subscriber::EnvFilter;

use keyline::{CommandProcessor, CrosstermInput, ShellSession, Terminal};

#[derive(Parser)]
#[command(version, about = "Interactive demo shell for the keyline command loop")]
struct Args {
    /// Prompt displayed before each command
    #[arg(long, default_value = "keyline> ")]
    prompt: String,

    /// Number of history entries kept in memory
    #[arg(long, default_value_t = 500)]
    history_limit: usize,

    /// Skip the startup banner
    #[arg(long)]
    quiet: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    if !args.quiet {
        println!(
            "keyline {} - Tab completes, Up/Down recall, Ctrl-L clears, Ctrl-D exits",
            env!("CARGO_PKG_VERSION")
        );
    }

    let mut session = ShellSession::new(args.prompt, io::stdout(), args.history_limit);
    session.register("echo", "print the arguments back", |out, cmd_args| {
        writeln!(out, "{}", cmd_args.join(" "))
    });
    session.register("version", "print the shell version", |out, _| {
        writeln!(out, "keyline {}", env!("CARGO_PKG_VERSION"))
    });

    let terminal = Terminal::new(io::stdout());
    let input = CrosstermInput::new()?;
    let mut processor = CommandProcessor::new(session, input, terminal);
    processor.run()?;

    // Raw mode is gone once the device drops; end the prompt line cleanly.
    drop(processor);
    println!();
    Ok(())
}
