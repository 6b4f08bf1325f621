//! tally-core — chain-expression parsing and evaluation.
//!
//! The pipeline is two pure functions: [`parser::parse`] builds an immutable
//! expression tree from a source string, and [`evaluator::eval`] folds that
//! tree over a caller-supplied [`api::Bindings`] table. The [`api`] module
//! wraps both behind an owning [`api::Expression`] handle for parse-once,
//! evaluate-many use.

pub mod api;
pub mod evaluator;
pub mod parser;
