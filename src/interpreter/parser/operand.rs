use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Priority, parse_range},
    },
};

/// Upper bound on operand nesting (parentheses and unary-minus chains).
///
/// Recursion depth grows with nesting, not with chained same-level operators,
/// so legitimate formulas stay far below this. The guard turns pathological
/// input into an error instead of stack exhaustion.
const MAX_NESTING: usize = 256;

/// Parses a single operand starting at `start`.
///
/// An operand is either a numeric literal, a parenthesized subexpression, or
/// a unary minus applied to another operand. The minus rule recurses, so
/// chains like `--5` are legal and mean `-(-(5))`.
///
/// # Parameters
/// - `tokens`: The full token sequence.
/// - `start`, `end`: Inclusive bounds of the range the operand may occupy.
/// - `depth`: Current nesting depth, incremented per minus or parenthesis.
///
/// # Returns
/// The parsed operand expression.
///
/// # Errors
/// - `OrphanMinus` if a minus sign is the last token in range.
/// - `UnexpectedToken` if the token cannot start an operand.
/// - `NestedTooDeep` if nesting exceeds the recursion guard.
/// - Propagates any error from the parenthesis rule.
pub(in crate::interpreter::parser) fn parse_operand(tokens: &[(Token, usize)],
                                                    start: usize,
                                                    end: usize,
                                                    depth: usize)
                                                    -> ParseResult<Expr> {
    let (first_token, position) = tokens[start];

    if depth > MAX_NESTING {
        return Err(ParseError::NestedTooDeep { position });
    }

    match first_token {
        Token::OpenParen => parse_parentheses(tokens, start, end, depth),

        Token::Minus => {
            if start == end {
                return Err(ParseError::OrphanMinus { position });
            }
            let inner = parse_operand(tokens, start + 1, end, depth + 1)?;
            Ok(Expr::Negate(Box::new(inner)))
        },

        Token::Number(value) => Ok(Expr::Number(value)),

        _ => Err(ParseError::UnexpectedToken { position }),
    }
}

/// Parses a parenthesized subexpression whose opener is at `start`.
///
/// The matching closer is located by depth counting; the enclosed range is
/// then parsed as a fresh expression at the lowest priority.
///
/// # Errors
/// - `UnclosedParenthesis` at the opener's offset if no closer matches.
/// - `EmptyParentheses` at the opener's offset if the pair encloses nothing.
/// - Propagates any error from the enclosed expression.
fn parse_parentheses(tokens: &[(Token, usize)],
                     start: usize,
                     end: usize,
                     depth: usize)
                     -> ParseResult<Expr> {
    let position = tokens[start].1;

    let Some(closing_index) = find_closing_parenthesis(tokens, start + 1, end) else {
        return Err(ParseError::UnclosedParenthesis { position });
    };
    if closing_index == start + 1 {
        return Err(ParseError::EmptyParentheses { position });
    }

    let content = parse_range(tokens, start + 1, closing_index - 1, Priority::Lowest, depth + 1)?;
    Ok(Expr::Parenthesized(Box::new(content)))
}

/// Finds the index of the closing parenthesis matching an opener just before
/// `start`, scanning the inclusive range `[start, end]`.
///
/// Nested pairs are skipped by depth counting. Returns `None` if the range
/// ends before the matching closer appears.
fn find_closing_parenthesis(tokens: &[(Token, usize)], start: usize, end: usize) -> Option<usize> {
    let mut nesting = 0usize;
    for (index, (token, _)) in tokens.iter().enumerate().take(end + 1).skip(start) {
        match token {
            Token::CloseParen if nesting == 0 => return Some(index),
            Token::CloseParen => nesting -= 1,
            Token::OpenParen => nesting += 1,
            _ => {},
        }
    }
    None
}
