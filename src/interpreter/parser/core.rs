use crate::{
    ast::{BinaryOperator, Expr},
    error::ParseError,
    interpreter::{lexer::Token, parser::operand::parse_operand},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Binding strength of an expression level.
///
/// `Lowest` is the expression root; additive operators bind at `First` and
/// multiplicative operators at `Second`. The derived ordering is what the
/// precedence-climbing loop compares against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(in crate::interpreter::parser) enum Priority {
    /// Expression root.
    Lowest,
    /// `+`, `-`
    First,
    /// `*`, `/`
    Second,
}

/// Parses a complete token sequence into an expression tree.
///
/// This is the entry point for parsing. The whole range of tokens is parsed
/// at the lowest precedence level; anything left unconsumed inside the range
/// is a grammar violation and surfaces as an error from the climbing loop.
///
/// # Parameters
/// - `tokens`: The position-tagged token sequence from the lexer.
///
/// # Returns
/// The root of the parsed expression tree.
///
/// # Errors
/// - `EmptyInput` if the sequence contains no tokens.
/// - Propagates any error from operand or operator parsing.
pub fn parse(tokens: &[(Token, usize)]) -> ParseResult<Expr> {
    if tokens.is_empty() {
        return Err(ParseError::EmptyInput);
    }
    parse_range(tokens, 0, tokens.len() - 1, Priority::Lowest, 0)
}

/// Parses the inclusive token range `[start, end]` by precedence climbing.
///
/// One operand is parsed at `start`, then operators are consumed in a loop:
/// an operator binding no tighter than `parent_priority` belongs to an
/// enclosing call, so the expression built so far is returned (this is what
/// makes same-level chains fold left-associatively); a tighter-binding
/// operator recurses for its right operand at its own priority before
/// folding into a binary node. Progress through the range is tracked with
/// [`Expr::token_span`], which is why consumption counts must be exact.
///
/// # Parameters
/// - `tokens`: The full token sequence.
/// - `start`, `end`: Inclusive bounds of the range to parse.
/// - `parent_priority`: Binding strength of the enclosing level.
/// - `depth`: Current operand nesting depth, for the recursion guard.
///
/// # Returns
/// The expression covering a prefix of the range.
///
/// # Errors
/// - `OperatorNeeded` if a non-operator token follows a complete operand.
/// - Propagates any error from operand parsing.
pub(in crate::interpreter::parser) fn parse_range(tokens: &[(Token, usize)],
                                                  start: usize,
                                                  end: usize,
                                                  parent_priority: Priority,
                                                  depth: usize)
                                                  -> ParseResult<Expr> {
    let available_tokens = end - start + 1;

    let mut result = parse_operand(tokens, start, end, depth)?;
    let mut consumed_tokens = result.token_span();

    while available_tokens > consumed_tokens {
        let operator_index = start + result.token_span();
        let (operator, priority) = parse_operator(&tokens[operator_index])?;
        consumed_tokens += 1;

        if priority <= parent_priority {
            return Ok(result);
        }

        let right = parse_range(tokens, start + consumed_tokens, end, priority, depth)?;
        result = Expr::BinaryOp { left:  Box::new(result),
                                  op:    operator,
                                  right: Box::new(right), };
        consumed_tokens = result.token_span();
    }

    Ok(result)
}

/// Classifies a token as a binary operator and returns its priority.
///
/// # Errors
/// `OperatorNeeded` at the token's offset if it is not one of `+ - * /`.
fn parse_operator(token: &(Token, usize)) -> ParseResult<(BinaryOperator, Priority)> {
    let (token, position) = *token;
    match token {
        Token::Plus => Ok((BinaryOperator::Add, Priority::First)),
        Token::Minus => Ok((BinaryOperator::Sub, Priority::First)),
        Token::Multiply => Ok((BinaryOperator::Mul, Priority::Second)),
        Token::Divide => Ok((BinaryOperator::Div, Priority::Second)),
        _ => Err(ParseError::OperatorNeeded { position }),
    }
}
