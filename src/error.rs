/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of a
/// formula. Parse errors include syntax mistakes, unexpected tokens, invalid
/// numeric literals, and mismatched parentheses.
pub mod parse_error;

pub use parse_error::ParseError;
