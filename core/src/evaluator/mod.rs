//! Tree-walking evaluator for expression trees.
//!
//! ## Design Principles
//!
//! - **Never panic**: an unresolved variable surfaces as [`EvalError`]
//! - **Stack-safe**: parsed trees are left spines of arbitrary length, so
//!   the left chain is walked iteratively rather than recursed
//!
//! ## Example
//!
//! ```
//! use tally_core::{api::Bindings, evaluator, parser};
//!
//! let expr = parser::parse("a+b").unwrap();
//! let bindings = Bindings::from([('a', 1), ('b', 2)]);
//! assert_eq!(evaluator::eval(&expr, &bindings), Ok(3));
//! ```

mod error;
mod eval;


pub use error::EvalError;
pub use eval::eval;
