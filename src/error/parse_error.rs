#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Represents all errors that can occur during lexing or parsing.
///
/// Every variant carries the zero-based character offset into the original
/// formula where the error starts, so callers can point at the exact
/// offending character. Exactly one error propagates per failed parse;
/// parsing stops at the first violation.
pub enum ParseError {
    /// The formula contained no tokens at all.
    EmptyInput,
    /// Encountered a character that is not part of the grammar.
    UnexpectedSymbol {
        /// Offset of the unrecognized character.
        position: usize,
    },
    /// A numeric literal did not parse to a finite value.
    InvalidNumber {
        /// Offset where the literal starts.
        position: usize,
    },
    /// Found a token where an operand was expected.
    UnexpectedToken {
        /// Offset of the unexpected token.
        position: usize,
    },
    /// Found a token where a binary operator was expected.
    OperatorNeeded {
        /// Offset of the offending token.
        position: usize,
    },
    /// A unary minus with nothing after it to negate.
    OrphanMinus {
        /// Offset of the minus sign.
        position: usize,
    },
    /// An opening parenthesis with no matching closer.
    UnclosedParenthesis {
        /// Offset of the opening parenthesis.
        position: usize,
    },
    /// A parenthesis pair enclosing nothing.
    EmptyParentheses {
        /// Offset of the opening parenthesis.
        position: usize,
    },
    /// Operand nesting exceeded the recursion guard.
    NestedTooDeep {
        /// Offset of the token that crossed the limit.
        position: usize,
    },
}

impl ParseError {
    /// Returns the zero-based character offset where the error starts.
    ///
    /// An empty input has no characters to point at, so its position is `0`.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::EmptyInput => 0,
            Self::UnexpectedSymbol { position }
            | Self::InvalidNumber { position }
            | Self::UnexpectedToken { position }
            | Self::OperatorNeeded { position }
            | Self::OrphanMinus { position }
            | Self::UnclosedParenthesis { position }
            | Self::EmptyParentheses { position }
            | Self::NestedTooDeep { position } => *position,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "Empty input"),
            Self::UnexpectedSymbol { .. } => write!(f, "Unexpected symbol"),
            Self::InvalidNumber { .. } => write!(f, "Invalid number"),
            Self::UnexpectedToken { .. } => write!(f, "Unexpected token"),
            Self::OperatorNeeded { .. } => write!(f, "Unexpected token: operator needed"),
            Self::OrphanMinus { .. } => write!(f, "Orphan minus"),
            Self::UnclosedParenthesis { .. } => write!(f, "Unclosed parenthesis"),
            Self::EmptyParentheses { .. } => write!(f, "Empty parentheses"),
            Self::NestedTooDeep { .. } => write!(f, "Expression too deeply nested"),
        }
    }
}

impl std::error::Error for ParseError {}
