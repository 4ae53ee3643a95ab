/// Core parsing logic: the entry point and precedence climbing.
///
/// Contains the parser entry point, the precedence-climbing loop over binary
/// operators, and operator classification.
pub mod core;

/// Operand parsing.
///
/// Handles everything that can appear where an operand is expected: numeric
/// literals, unary minus chains, and parenthesized subexpressions.
pub mod operand;
