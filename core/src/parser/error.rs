//! Parse errors.

use std::ops::Range;

use thiserror::Error;

/// Byte range into the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span(pub Range<usize>);

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self(start..end)
    }

    pub fn str_of<'a>(&self, source: &'a str) -> &'a str {
        &source[self.0.start..self.0.end]
    }
}

/// Parser error: the input cannot be reduced to exactly one expression.
///
/// The kind pins down which malformation was seen; the span locates the
/// offending character in the retained source text.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{kind}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub src: String,
    pub span: Span,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, source: &str, span: Span) -> Self {
        Self {
            kind,
            src: source.to_string(),
            span,
        }
    }
}

/// Specific kinds of parse errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// The input is empty.
    #[error("empty expression")]
    Empty,
    /// An operator with no operand to its left.
    #[error("operator '{op}' has no left operand")]
    LeadingOperator { op: char },
    /// An operator as the final character of the input.
    #[error("operator '{op}' has no right operand")]
    TrailingOperator { op: char },
    /// An operator immediately followed by another operator.
    #[error("operator '{first}' is immediately followed by operator '{second}'")]
    ConsecutiveOperators { first: char, second: char },
    /// The scan ended with more than one operand on the stack.
    #[error("{operands} operands with no operator between them")]
    MissingOperator { operands: usize },
}
