//! Expression trees.

use std::collections::BTreeSet;
use std::fmt;

/// An arithmetic expression over single-character variables.
///
/// Trees are immutable once constructed; children are exclusively owned, so
/// there is no sharing and no cycles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// A single-character variable reference.
    Variable(char),
    /// A binary operation over two subexpressions.
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
}

impl BinaryOp {
    /// The operator's source character.
    pub fn symbol(self) -> char {
        match self {
            BinaryOp::Add => '+',
            BinaryOp::Sub => '-',
        }
    }
}

impl Expr {
    /// The set of variable names the expression references, deduplicated
    /// and ordered.
    pub fn variables(&self) -> BTreeSet<char> {
        let mut vars = BTreeSet::new();
        let mut work = vec![self];
        while let Some(node) = work.pop() {
            match node {
                Expr::Variable(name) => {
                    vars.insert(*name);
                }
                Expr::Binary { left, right, .. } => {
                    work.push(right.as_ref());
                    work.push(left.as_ref());
                }
            }
        }
        vars
    }
}

/// Canonical source form: `a+b-c`, no whitespace, no parentheses.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Left spines can be arbitrarily long; walk them iteratively and
        // recurse only into right subtrees.
        let mut pending: Vec<(BinaryOp, &Expr)> = Vec::new();
        let mut node = self;
        loop {
            match node {
                Expr::Binary { op, left, right } => {
                    pending.push((*op, right.as_ref()));
                    node = left.as_ref();
                }
                Expr::Variable(name) => {
                    write!(f, "{name}")?;
                    break;
                }
            }
        }
        for (op, right) in pending.into_iter().rev() {
            write!(f, "{}{}", op.symbol(), right)?;
        }
        Ok(())
    }
}
