//! Interactive and pipe-mode session loops.
//!
//! Generic over reader and writer so tests can run scripted sessions over
//! in-memory buffers.

use std::io::{self, BufRead, Write};

use tally::{
    Bindings, Error, Expression, render_error_to_string, render_error_to_string_no_color,
};

/// One interpreter session over a line-oriented reader/writer pair.
pub struct Session<R, W> {
    input: R,
    output: W,
    bindings: Bindings,
    debug_parse: bool,
    color: bool,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            bindings: Bindings::new(),
            debug_parse: false,
            color: false,
        }
    }

    /// Pre-seed the binding table; interactive mode only prompts for
    /// variables it does not cover.
    pub fn with_bindings(mut self, bindings: Bindings) -> Self {
        self.bindings = bindings;
        self
    }

    pub fn with_debug_parse(mut self, debug_parse: bool) -> Self {
        self.debug_parse = debug_parse;
        self
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Prompt for expressions and their variable values until EOF.
    pub fn run_interactive(&mut self) -> io::Result<()> {
        writeln!(
            self.output,
            "Tally - enter an expression over single-character variables (Ctrl+D to exit)"
        )?;
        loop {
            write!(self.output, "> ")?;
            self.output.flush()?;
            let Some(line) = self.read_line()? else {
                return Ok(());
            };
            if line.is_empty() {
                continue;
            }
            self.interpret(&line, true)?;
        }
    }

    /// Evaluate each input line against the pre-seeded binding table.
    pub fn run_pipe(&mut self) -> io::Result<()> {
        while let Some(line) = self.read_line()? {
            if line.is_empty() {
                continue;
            }
            self.interpret(&line, false)?;
        }
        Ok(())
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        while buf.ends_with('\n') || buf.ends_with('\r') {
            buf.pop();
        }
        Ok(Some(buf))
    }

    fn interpret(&mut self, line: &str, prompt_missing: bool) -> io::Result<()> {
        let expr = match Expression::parse(line) {
            Ok(expr) => expr,
            Err(e) => return self.report(&e),
        };

        if self.debug_parse {
            writeln!(self.output, "=== Parsed AST ===")?;
            writeln!(self.output, "{:#?}", expr.ast())?;
            writeln!(self.output)?;
        }

        let mut bindings = self.bindings.clone();
        if prompt_missing {
            for name in expr.variables() {
                if bindings.contains(name) {
                    continue;
                }
                let Some(value) = self.prompt_value(name)? else {
                    // EOF mid-prompt ends the session quietly.
                    return Ok(());
                };
                bindings.insert(name, value);
            }
        }

        match expr.eval(&bindings) {
            Ok(value) => writeln!(self.output, "{expr} = {value}"),
            Err(e) => self.report(&e),
        }
    }

    /// Prompt for one variable's value, re-prompting until an integer or
    /// EOF.
    fn prompt_value(&mut self, name: char) -> io::Result<Option<i64>> {
        loop {
            write!(self.output, "{name} = ")?;
            self.output.flush()?;
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            match line.trim().parse::<i64>() {
                Ok(value) => return Ok(Some(value)),
                Err(_) => writeln!(self.output, "not an integer: {line}")?,
            }
        }
    }

    fn report(&mut self, error: &Error) -> io::Result<()> {
        let rendered = if self.color {
            render_error_to_string(error)
        } else {
            render_error_to_string_no_color(error)
        };
        write!(self.output, "{rendered}")
    }
}
