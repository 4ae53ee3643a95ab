use crate::ast::{BinaryOperator, Expr};

/// Computes the numeric value of an expression tree.
///
/// A pure recursive fold: literals yield their value, negation flips the
/// sign, binary nodes combine their children with the corresponding IEEE
/// operation, and parenthesized groups pass their inner value through
/// unchanged. Division by zero follows floating-point semantics and yields
/// an infinity or NaN; the evaluator performs no range checking.
///
/// # Parameters
/// - `expr`: The root of the tree to evaluate.
///
/// # Returns
/// The computed `f64` result.
#[must_use]
pub fn evaluate(expr: &Expr) -> f64 {
    match expr {
        Expr::Number(value) => *value,
        Expr::Negate(inner) => -evaluate(inner),
        Expr::BinaryOp { left, op, right } => {
            let left = evaluate(left);
            let right = evaluate(right);
            match op {
                BinaryOperator::Add => left + right,
                BinaryOperator::Sub => left - right,
                BinaryOperator::Mul => left * right,
                BinaryOperator::Div => left / right,
            }
        },
        Expr::Parenthesized(inner) => evaluate(inner),
    }
}
