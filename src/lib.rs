//! Tally - an embeddable chain-expression interpreter
//!
//! # Overview
//!
//! Tally evaluates left-to-right arithmetic over single-character variables
//! and the operators `+` and `-`. An expression such as `a+b-c` is parsed
//! once into an immutable tree and folded strictly left to right —
//! `(a+b)-c` — against a caller-supplied binding table.
//!
//! # Quick Start
//!
//! ```
//! use tally::{Bindings, Expression};
//!
//! let expr = Expression::parse("a+b-c")?;
//! let bindings = Bindings::from([('a', 5), ('b', 3), ('c', 2)]);
//! assert_eq!(expr.eval(&bindings)?, 6);
//!
//! // The tree is reusable; only the table changes between calls.
//! let bindings = Bindings::from([('a', 1), ('b', 1), ('c', 1)]);
//! assert_eq!(expr.eval(&bindings)?, 1);
//! # Ok::<(), tally::Error>(())
//! ```
//!
//! # Errors
//!
//! Both operations are pure and deterministic; the two failure modes —
//! malformed input and an unbound variable — surface as [`Error`] variants
//! rather than faults. [`render_error`] produces labeled source reports
//! for either.

// Re-export public API from tally_core
pub use tally_core::api::{Bindings, Error, Expression};

// Re-export the underlying tree and error detail types
pub use tally_core::evaluator::{self, EvalError};
pub use tally_core::parser::{self, BinaryOp, Expr, ParseError, ParseErrorKind, Span};

mod error_renderer;
pub use error_renderer::{
    render_error, render_error_to, render_error_to_string, render_error_to_string_no_color,
};
