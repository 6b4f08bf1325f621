//! Runtime evaluation errors.

use thiserror::Error;

/// Runtime evaluation error.
///
/// An unresolved variable is the only way evaluation can fail: the tree is
/// immutable and the arithmetic itself is total.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum EvalError {
    /// A referenced identifier has no entry in the binding table.
    #[error("variable '{name}' is not bound to a value")]
    UnboundVariable { name: char },
}
