/// The evaluator module computes results from expression trees.
///
/// The evaluator folds the tree produced by the parser into a single `f64`,
/// applying each node's arithmetic operation to the results of its children.
/// Arithmetic follows IEEE floating-point semantics throughout.
///
/// # Responsibilities
/// - Folds expression trees into numeric results.
/// - Applies unary negation and the four binary operations.
pub mod evaluator;
/// The lexer module tokenizes a formula for further parsing.
///
/// The lexer reads the raw formula text and produces a sequence of tokens,
/// each paired with the character offset where it starts. This is the first
/// stage of the pipeline.
///
/// # Responsibilities
/// - Converts the input character stream into position-tagged tokens.
/// - Validates numeric literals as it produces them.
/// - Reports lexical errors for invalid or malformed input.
pub mod lexer;
/// The parser module builds the expression tree from tokens.
///
/// The parser processes the token sequence produced by the lexer and
/// constructs a tree that represents the structure of the formula, honoring
/// operator precedence and left-associativity.
///
/// # Responsibilities
/// - Converts tokens into structured expression nodes.
/// - Validates the grammar, reporting errors with exact character offsets.
pub mod parser;
