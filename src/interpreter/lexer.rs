use logos::Logos;

use crate::error::ParseError;

/// Represents a lexical token in the formula.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the grammar.
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
#[logos(error = LexError)]
pub enum Token {
    /// Numeric literal tokens, such as `42`, `3.14` or `.5`.
    ///
    /// A literal is the maximal run of digits and dots; the callback rejects
    /// runs that do not parse to a finite value, so `3.3.3` and literals too
    /// long to represent fail here rather than producing a mangled number.
    #[regex(r"[0-9.]+", parse_number)]
    Number(f64),
    /// `(`
    #[token("(")]
    OpenParen,
    /// `)`
    #[token(")")]
    CloseParen,
    /// `*`
    #[token("*")]
    Multiply,
    /// `/`
    #[token("/")]
    Divide,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,

    /// Spaces between tokens. Only the plain space character is skipped; any
    /// other whitespace is an unexpected symbol.
    #[regex(r" +", logos::skip)]
    Whitespace,
}

/// Distinguishes the two ways lexing can fail: a character outside the
/// grammar, or a numeric literal that does not represent a finite value.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum LexError {
    /// A character that is not a digit, dot, operator, parenthesis or space.
    #[default]
    UnexpectedSymbol,
    /// A run of digits and dots that is not a valid finite number.
    InvalidNumber,
}

/// Converts a formula string into a sequence of position-tagged tokens.
///
/// Tokens appear in input order, each paired with the zero-based character
/// offset where it starts. An empty input yields an empty sequence, not an
/// error; the parser is responsible for reporting it.
///
/// # Errors
/// Returns a [`ParseError`] at the offending offset if the input contains a
/// character outside the grammar or an invalid numeric literal.
pub fn tokenize(input: &str) -> Result<Vec<(Token, usize)>, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(input);

    while let Some(token) = lexer.next() {
        let position = lexer.span().start;
        match token {
            Ok(tok) => tokens.push((tok, position)),
            Err(LexError::InvalidNumber) => {
                return Err(ParseError::InvalidNumber { position });
            },
            Err(LexError::UnexpectedSymbol) => {
                return Err(ParseError::UnexpectedSymbol { position });
            },
        }
    }

    Ok(tokens)
}

/// Parses a numeric literal from the current token slice.
///
/// The whole slice must parse and the resulting value must be finite. A
/// literal long enough to overflow to infinity is rejected just like one
/// with a stray extra dot.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Ok(f64)`: The parsed value if it is finite.
/// - `Err(LexError::InvalidNumber)`: Otherwise.
fn parse_number(lex: &logos::Lexer<Token>) -> Result<f64, LexError> {
    match lex.slice().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(LexError::InvalidNumber),
    }
}
