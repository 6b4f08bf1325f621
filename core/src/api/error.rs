//! Public error type for the tally API.
//!
//! The two internal error types map one-to-one onto the two recoverable
//! failure modes: malformed input and an unbound variable.

use thiserror::Error;

use crate::evaluator::EvalError;
use crate::parser::ParseError;

/// Public error type for all tally operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The expression string could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// Evaluation failed against the supplied binding table.
    #[error(transparent)]
    Eval(#[from] EvalError),
}
