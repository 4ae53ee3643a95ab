/// A binary arithmetic operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
}

/// An expression tree node representing a parsed formula.
///
/// `Expr` covers every construct the grammar can produce: numeric literals,
/// unary negation, the four binary operations, and parenthesized groups.
/// Each node exclusively owns its children, so the tree is strictly
/// single-owner with no sharing and no cycles.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal.
    Number(f64),
    /// Unary negation of the inner expression.
    Negate(Box<Self>),
    /// A binary operation combining two subexpressions.
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
    },
    /// A parenthesized group, evaluating to its inner value unchanged.
    Parenthesized(Box<Self>),
}

impl Expr {
    /// Returns how many tokens this subexpression consumed from the token
    /// sequence.
    ///
    /// The parser uses this count to locate the next unconsumed token while
    /// climbing precedence levels, so it must be exact: a literal occupies one
    /// token, a negation adds the minus sign, a binary operation adds the
    /// operator between its operands, and a parenthesized group adds both
    /// parentheses.
    #[must_use]
    pub fn token_span(&self) -> usize {
        match self {
            Self::Number(_) => 1,
            Self::Negate(inner) => inner.token_span() + 1,
            Self::BinaryOp { left, right, .. } => left.token_span() + right.token_span() + 1,
            Self::Parenthesized(inner) => inner.token_span() + 2,
        }
    }
}
