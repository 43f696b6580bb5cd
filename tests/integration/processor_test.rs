//! Processor dispatch tests against a scripted input device and a
//! recording session double.

use keyline::{CommandProcessor, Key, Terminal};

use super::helpers::{keys, Call, ProbeSession, ScriptedInput};

fn run(session: ProbeSession, script: Vec<Key>) -> (ProbeSession, Terminal<Vec<u8>>) {
    let input = ScriptedInput::new(script);
    let mut processor = CommandProcessor::new(session, input, Terminal::new(Vec::new()));
    processor.run().expect("run loop failed");
    let (session, _, terminal) = processor.into_parts();
    (session, terminal)
}

#[test]
fn single_completion_appends_trailing_space() {
    let mut script = keys("stat");
    script.push(Key::Tab);
    let session = ProbeSession::new().with_completions(&["status"]);

    let (_, terminal) = run(session, script);
    assert_eq!(terminal.line(), "status ");
}

#[test]
fn common_prefix_extension_replaces_line() {
    // "stock"/"stop" share "sto", strictly longer than the typed "st".
    let mut script = keys("st");
    script.push(Key::Tab);
    let session = ProbeSession::new().with_completions(&["stock", "stop"]);

    let (_, terminal) = run(session, script);
    assert_eq!(terminal.line(), "sto");
}

#[test]
fn listing_prints_candidates_and_preserves_line() {
    let mut script = keys("st");
    script.push(Key::Tab);
    let session = ProbeSession::new().with_completions(&["status", "stop", "start"]);

    let (session, terminal) = run(session, script);
    assert_eq!(terminal.line(), "st");
    assert!(session.out.contents().contains("\tstatus\tstop\tstart"));
    // A fresh prompt follows the listing.
    let calls = session.calls();
    assert!(calls.contains(&Call::Prompt));
}

#[test]
fn prefix_no_longer_than_line_falls_to_listing() {
    // Common prefix "st" equals the line, so no extension happens.
    let mut script = keys("st");
    script.push(Key::Tab);
    let session = ProbeSession::new().with_completions(&["stop", "stat"]);

    let (session, terminal) = run(session, script);
    assert_eq!(terminal.line(), "st");
    assert!(session.out.contents().contains("\tstop\tstat"));
}

#[test]
fn no_candidates_is_a_noop() {
    let mut script = keys("st");
    script.push(Key::Tab);
    let session = ProbeSession::new();

    let (session, terminal) = run(session, script);
    assert_eq!(terminal.line(), "st");
    assert_eq!(session.out.contents(), "");
}

#[test]
fn command_runs_with_input_deactivated() {
    let script = keys("run\r");
    let input = ScriptedInput::new(script);
    let flag = input.active_flag();
    let session = ProbeSession::tracking(flag.clone());

    let mut processor = CommandProcessor::new(session, input, Terminal::new(Vec::new()));
    processor.run().expect("run loop failed");
    let (session, _, _) = processor.into_parts();

    let calls = session.calls();
    assert!(calls.contains(&Call::Feed {
        line: "run".to_string(),
        input_active: false,
    }));
    // The guard reactivated the device once the prompt returned.
    assert!(flag.get());
}

#[test]
fn command_dispatch_feeds_then_reprompts() {
    let script = keys("run\r");
    let input = ScriptedInput::new(script);
    let session = ProbeSession::tracking(input.active_flag());

    let mut processor = CommandProcessor::new(session, input, Terminal::new(Vec::new()));
    processor.run().expect("run loop failed");
    let (session, _, terminal) = processor.into_parts();

    let names: Vec<_> = session
        .calls()
        .iter()
        .map(|c| match c {
            Call::Prompt => "prompt",
            Call::Feed { .. } => "feed",
            Call::Exit => "exit",
            _ => "other",
        })
        .collect();
    // Initial prompt, then feed/re-prompt, then exit when the script ends.
    assert_eq!(names, ["prompt", "feed", "prompt", "exit"]);
    assert_eq!(terminal.line(), "");
}

#[test]
fn eof_exits_exactly_once_with_no_other_interaction() {
    let script = vec![Key::Eof];
    let session = ProbeSession::new();

    let (session, _) = run(session, script);
    let calls = session.calls();
    // Only the initial prompt precedes the single exit call.
    assert_eq!(calls, [Call::Prompt, Call::Exit]);
}

#[test]
fn keys_after_eof_are_never_processed() {
    let script = vec![Key::Eof, Key::Char('x'), Key::Enter];
    let session = ProbeSession::new();

    let (session, terminal) = run(session, script);
    assert_eq!(session.calls(), [Call::Prompt, Call::Exit]);
    assert_eq!(terminal.line(), "");
}

#[test]
fn closed_source_counts_as_end_of_input() {
    let session = ProbeSession::new();
    let (session, _) = run(session, Vec::new());
    assert_eq!(session.calls(), [Call::Prompt, Call::Exit]);
}

#[test]
fn clear_preserves_the_edit_buffer() {
    let mut script = keys("abc");
    script.push(Key::ClearScreen);
    let session = ProbeSession::new();

    let (session, terminal) = run(session, script);
    assert_eq!(terminal.line(), "abc");
    // Initial prompt plus the re-prompt after the clear, then exit.
    let prompts = session
        .calls()
        .iter()
        .filter(|c| matches!(c, Call::Prompt))
        .count();
    assert_eq!(prompts, 2);
}

#[test]
fn up_replaces_buffer_with_previous_entry() {
    let script = vec![Key::Up];
    let session = ProbeSession::new().with_previous("last-command");

    let (session, terminal) = run(session, script);
    assert_eq!(terminal.line(), "last-command");
    assert!(session.calls().contains(&Call::PreviousCmd(String::new())));
}

#[test]
fn up_passes_the_in_progress_line() {
    let mut script = keys("dr");
    script.push(Key::Up);
    let session = ProbeSession::new().with_previous("drain");

    let (session, terminal) = run(session, script);
    assert_eq!(terminal.line(), "drain");
    assert!(session
        .calls()
        .contains(&Call::PreviousCmd("dr".to_string())));
}

#[test]
fn down_replaces_buffer_with_next_entry() {
    let script = vec![Key::Down];
    let session = ProbeSession::new().with_next("newer");

    let (session, terminal) = run(session, script);
    assert_eq!(terminal.line(), "newer");
    assert!(session.calls().contains(&Call::NextCmd));
}

#[test]
fn completion_queries_use_the_current_line() {
    let mut script = keys("sta");
    script.push(Key::Tab);
    let session = ProbeSession::new().with_completions(&["status", "start"]);

    let (session, _) = run(session, script);
    assert!(session
        .calls()
        .contains(&Call::Completions("sta".to_string())));
}
