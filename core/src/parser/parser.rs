//! Shift/reduce construction of expression trees.

use tracing::trace;

use super::error::{ParseError, ParseErrorKind, Span};
use super::expr::{BinaryOp, Expr};

/// Parse a chain expression into a single tree.
///
/// The input is scanned once, left to right, over a local operand stack:
/// `+` and `-` pop the running expression, consume the next character as
/// the right operand, and push the combined node; every other character is
/// a variable in its own right. Whitespace is not skipped — `"a b"` is
/// three operands and fails with [`ParseErrorKind::MissingOperator`].
///
/// The grammar is strictly left-associative: `a+b-c` parses as `(a+b)-c`.
///
/// # Example
/// ```
/// use tally_core::parser::{BinaryOp, Expr, parse};
///
/// let expr = parse("a+b").unwrap();
/// assert_eq!(
///     expr,
///     Expr::Binary {
///         op: BinaryOp::Add,
///         left: Box::new(Expr::Variable('a')),
///         right: Box::new(Expr::Variable('b')),
///     }
/// );
/// ```
pub fn parse(input: &str) -> Result<Expr, ParseError> {
    trace!(input, "parsing expression");

    // Operand stack, each entry paired with the byte offset where the
    // operand starts in the input.
    let mut stack: Vec<(Expr, usize)> = Vec::new();
    let mut chars = input.char_indices();

    while let Some((at, c)) = chars.next() {
        let op = match c {
            '+' => BinaryOp::Add,
            '-' => BinaryOp::Sub,
            _ => {
                stack.push((Expr::Variable(c), at));
                continue;
            }
        };

        let Some((left, left_at)) = stack.pop() else {
            return Err(ParseError::new(
                ParseErrorKind::LeadingOperator { op: c },
                input,
                Span::new(at, at + c.len_utf8()),
            ));
        };
        // The right operand is always exactly the next character.
        let Some((right_at, right)) = chars.next() else {
            return Err(ParseError::new(
                ParseErrorKind::TrailingOperator { op: c },
                input,
                Span::new(at, at + c.len_utf8()),
            ));
        };
        if right == '+' || right == '-' {
            return Err(ParseError::new(
                ParseErrorKind::ConsecutiveOperators {
                    first: c,
                    second: right,
                },
                input,
                Span::new(right_at, right_at + right.len_utf8()),
            ));
        }

        stack.push((
            Expr::Binary {
                op,
                left: Box::new(left),
                right: Box::new(Expr::Variable(right)),
            },
            left_at,
        ));
    }

    if stack.len() > 1 {
        let second_at = stack[1].1;
        return Err(ParseError::new(
            ParseErrorKind::MissingOperator {
                operands: stack.len(),
            },
            input,
            Span::new(second_at, input.len()),
        ));
    }
    match stack.pop() {
        Some((root, _)) => Ok(root),
        None => Err(ParseError::new(
            ParseErrorKind::Empty,
            input,
            Span::new(0, 0),
        )),
    }
}
