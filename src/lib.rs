//! # reckon
//!
//! reckon is an arithmetic expression evaluator written in Rust.
//! It tokenizes, parses, and evaluates plain arithmetic formulas with the four
//! basic operators, parentheses, and unary minus, reporting every parse
//! failure with the exact character offset where it occurred.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::ParseError,
    interpreter::{evaluator::evaluate, lexer::tokenize, parser::core::parse},
};

/// Defines the structure of parsed formulas.
///
/// This module declares the `Expr` enum and related types that represent the
/// syntactic structure of a formula as a tree. The tree is built by the
/// parser and folded by the evaluator.
///
/// # Responsibilities
/// - Defines expression node types for all grammar constructs.
/// - Tracks how many tokens each subexpression consumed, which drives the
///   parser's progress through the token sequence.
pub mod ast;
/// Provides the unified error type for lexing and parsing.
///
/// This module defines all errors that can be raised while turning a formula
/// string into an expression tree. Every error carries the zero-based
/// character offset into the original input where it originates, so callers
/// can render a caret pointer under the offending character.
///
/// # Responsibilities
/// - Defines error variants for all failure modes (lexer and parser).
/// - Attaches character offsets and human-readable messages.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of formula evaluation.
///
/// This module ties together lexing, parsing, and evaluation to provide a
/// complete pipeline from raw text to a numeric result.
///
/// # Responsibilities
/// - Coordinates the core components: lexer, parser, and evaluator.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// Evaluates an arithmetic formula and returns its numeric result.
///
/// The formula is tokenized, parsed into an expression tree, and folded into
/// an `f64`. Arithmetic follows IEEE semantics: division by zero yields an
/// infinity or NaN rather than an error. No state survives the call.
///
/// # Errors
/// Returns a [`ParseError`] carrying the character offset of the first
/// violation if the formula cannot be tokenized or parsed.
///
/// # Examples
/// ```
/// use reckon::calculate;
///
/// let result = calculate("2 + 3 * 4");
/// assert_eq!(result.unwrap(), 14.0);
///
/// // The error knows exactly where the problem is.
/// let error = calculate("3 + + 2").unwrap_err();
/// assert_eq!(error.position(), 4);
/// ```
pub fn calculate(formula: &str) -> Result<f64, ParseError> {
    let tokens = tokenize(formula)?;
    let expression = parse(&tokens)?;
    Ok(evaluate(&expression))
}
