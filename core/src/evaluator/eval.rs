//! Core evaluation logic.

use tracing::trace;

use super::error::EvalError;
use crate::api::Bindings;
use crate::parser::{BinaryOp, Expr};

/// Evaluate an expression against a binding table.
///
/// Operands combine strictly left to right, left child before right child,
/// each evaluated exactly once. Arithmetic is native `i64` arithmetic.
///
/// Trees produced by [`parse`](crate::parser::parse) are left spines of
/// arbitrary length, so the left chain is walked iteratively; recursion
/// happens only into right subtrees, which the grammar keeps flat.
pub fn eval(expr: &Expr, bindings: &Bindings) -> Result<i64, EvalError> {
    let mut pending: Vec<(BinaryOp, &Expr)> = Vec::new();
    let mut node = expr;
    let mut acc = loop {
        match node {
            Expr::Binary { op, left, right } => {
                pending.push((*op, right.as_ref()));
                node = left.as_ref();
            }
            Expr::Variable(name) => break lookup(*name, bindings)?,
        }
    };
    for (op, right) in pending.into_iter().rev() {
        let rhs = eval(right, bindings)?;
        acc = match op {
            BinaryOp::Add => acc + rhs,
            BinaryOp::Sub => acc - rhs,
        };
    }
    Ok(acc)
}

fn lookup(name: char, bindings: &Bindings) -> Result<i64, EvalError> {
    let value = bindings
        .get(name)
        .ok_or(EvalError::UnboundVariable { name })?;
    trace!(%name, value, "resolved variable");
    Ok(value)
}
