//! Scripted session tests over in-memory buffers.

use std::io::Cursor;

use tally::Bindings;
use tally_cli::session::Session;

fn interactive(script: &str) -> String {
    let mut output = Vec::new();
    Session::new(Cursor::new(script.to_string()), &mut output)
        .run_interactive()
        .expect("session failed");
    String::from_utf8(output).expect("session output was not UTF-8")
}

fn pipe(script: &str, bindings: Bindings) -> String {
    let mut output = Vec::new();
    Session::new(Cursor::new(script.to_string()), &mut output)
        .with_bindings(bindings)
        .run_pipe()
        .expect("session failed");
    String::from_utf8(output).expect("session output was not UTF-8")
}

// ============================================================================
// Interactive mode
// ============================================================================

#[test]
fn evaluates_the_worked_example() {
    let out = interactive("a+b-c\n5\n3\n2\n");
    assert!(out.contains("a = "), "{out}");
    assert!(out.contains("b = "), "{out}");
    assert!(out.contains("c = "), "{out}");
    assert!(out.contains("a+b-c = 6"), "{out}");
}

#[test]
fn prompts_for_each_variable_in_order() {
    let out = interactive("b+a\n1\n2\n");
    let a = out.find("a = ").expect("no prompt for a");
    let b = out.find("b = ").expect("no prompt for b");
    assert!(a < b, "prompts out of order: {out}");
    assert!(out.contains("b+a = 3"), "{out}");
}

#[test]
fn reprompts_on_non_integer_input() {
    let out = interactive("x\nforty-two\n42\n");
    assert!(out.contains("not an integer: forty-two"), "{out}");
    assert!(out.contains("x = 42"), "{out}");
}

#[test]
fn parse_errors_do_not_end_the_session() {
    let out = interactive("a+\nx\n7\n");
    assert!(out.contains("no right operand"), "{out}");
    assert!(out.contains("x = 7"), "{out}");
}

#[test]
fn preseeded_bindings_are_not_prompted() {
    let mut output = Vec::new();
    Session::new(Cursor::new("a+b\n4\n".to_string()), &mut output)
        .with_bindings(Bindings::from([('b', 10)]))
        .run_interactive()
        .expect("session failed");
    let out = String::from_utf8(output).unwrap();
    assert!(out.contains("a = "), "{out}");
    assert!(out.contains("a+b = 14"), "{out}");
    // The only "b = " is inside the result line, never a prompt.
    assert_eq!(out.matches("b = ").count(), 1, "{out}");
}

// ============================================================================
// Pipe mode
// ============================================================================

#[test]
fn pipe_mode_uses_the_bound_table() {
    let out = pipe("a+b\na-b\n", Bindings::from([('a', 10), ('b', 4)]));
    assert_eq!(out, "a+b = 14\na-b = 6\n");
}

#[test]
fn pipe_mode_reports_unbound_variables() {
    let out = pipe("a+z\n", Bindings::from([('a', 1)]));
    assert!(out.contains("not bound"), "{out}");
}

#[test]
fn empty_lines_are_skipped() {
    let out = pipe("\na\n\n", Bindings::from([('a', 5)]));
    assert_eq!(out, "a = 5\n");
}
