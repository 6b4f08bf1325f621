//! Shift/reduce parser for chain expressions.

mod error;
mod expr;
pub mod parser;

pub use error::{ParseError, ParseErrorKind, Span};
pub use expr::{BinaryOp, Expr};
pub use parser::parse;
