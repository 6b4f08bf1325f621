//! Public API for embedding the interpreter.
//!
//! Internal parser and evaluator errors are converted to the public
//! [`Error`] type at this boundary.

mod bindings;
mod error;
mod expression;

pub use bindings::Bindings;
pub use error::Error;
pub use expression::Expression;
