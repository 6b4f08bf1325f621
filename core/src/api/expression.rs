//! Parsed expressions ready for evaluation.

use std::collections::BTreeSet;
use std::fmt;

use super::{Bindings, Error};
use crate::evaluator;
use crate::parser::{self, Expr};

/// A parsed expression ready for evaluation.
///
/// Expressions own their syntax tree and the source text they were parsed
/// from, and can be evaluated any number of times against different binding
/// tables.
///
/// # Example
///
/// ```
/// use tally_core::api::{Bindings, Expression};
///
/// let expr = Expression::parse("a+b-c")?;
/// let bindings = Bindings::from([('a', 5), ('b', 3), ('c', 2)]);
/// assert_eq!(expr.eval(&bindings)?, 6);
/// # Ok::<(), tally_core::api::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expression {
    source: String,
    root: Expr,
}

impl Expression {
    /// Parse a source string into an owned expression.
    pub fn parse(source: &str) -> Result<Self, Error> {
        let root = parser::parse(source)?;
        Ok(Self {
            source: source.to_string(),
            root,
        })
    }

    /// Evaluate against a binding table.
    ///
    /// The tree is read-only during the call; evaluating the same
    /// expression against different tables yields independent results.
    pub fn eval(&self, bindings: &Bindings) -> Result<i64, Error> {
        Ok(evaluator::eval(&self.root, bindings)?)
    }

    /// The variable names the expression references, deduplicated and
    /// ordered. Front ends use this to assemble the binding table.
    pub fn variables(&self) -> BTreeSet<char> {
        self.root.variables()
    }

    /// The underlying syntax tree.
    pub fn ast(&self) -> &Expr {
        &self.root
    }

    /// The source text the expression was parsed from.
    pub fn source(&self) -> &str {
        &self.source
    }
}

/// Canonical source form of the tree, e.g. `a+b-c`.
impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.root.fmt(f)
    }
}
