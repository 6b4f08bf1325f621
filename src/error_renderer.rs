//! Error rendering using ariadne
//!
//! This module provides utilities for rendering tally errors with source
//! snippets and labeled spans.

use std::io::Write;

use ariadne::{ColorGenerator, Label, Report, ReportKind, Source};

use crate::Error;

/// Render an error with rich formatting to stderr
///
/// # Example
/// ```no_run
/// use tally::{Expression, render_error};
///
/// if let Err(e) = Expression::parse("a+") {
///     render_error(&e);
/// }
/// ```
pub fn render_error(error: &Error) {
    render_error_to_writer(error, &mut std::io::stderr(), true).ok();
}

/// Render an error to a specific writer
///
/// This is useful when you want to control where the error is written,
/// such as to a file, a buffer, or a custom output stream.
pub fn render_error_to(error: &Error, writer: &mut dyn Write) -> std::io::Result<()> {
    render_error_to_writer(error, writer, true)
}

/// Render an error to a String (useful for tests, web UIs, etc.)
pub fn render_error_to_string(error: &Error) -> String {
    let mut buf = Vec::new();
    render_error_to_writer(error, &mut buf, true).ok();
    String::from_utf8_lossy(&buf).to_string()
}

/// Render an error to a String without color codes (useful for tests)
///
/// This is the same as `render_error_to_string` but without ANSI color
/// codes, making the output easier to compare in tests.
pub fn render_error_to_string_no_color(error: &Error) -> String {
    let mut buf = Vec::new();
    render_error_to_writer(error, &mut buf, false).ok();
    String::from_utf8_lossy(&buf).to_string()
}

fn render_error_to_writer(
    error: &Error,
    writer: &mut dyn Write,
    use_color: bool,
) -> std::io::Result<()> {
    match error {
        Error::Parse(e) => {
            let mut colors = ColorGenerator::new();
            colors.next(); // Skip the first color.

            let message = e.kind.to_string();
            let report = Report::build(ReportKind::Error, ("<input>", e.span.0.clone()))
                .with_message(&message)
                .with_config(ariadne::Config::default().with_color(use_color))
                .with_label(
                    Label::new(("<input>", e.span.0.clone()))
                        .with_message(&message)
                        .with_color(colors.next()),
                );

            report
                .finish()
                .write(("<input>", Source::from(e.src.as_str())), writer)
        }
        Error::Eval(e) => writeln!(writer, "Evaluation error: {}", e),
    }
}
