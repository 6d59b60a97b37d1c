#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during parsing.
pub enum ParseError {
    /// Found a token other than the one the grammar requires.
    UnexpectedToken {
        /// Description of what was expected, e.g. `';'`.
        expected: String,
        /// The lexeme encountered.
        found:    String,
        /// Byte offset of the encountered token.
        offset:   usize,
    },
    /// No expression starts at this token.
    ExpressionExpected {
        /// The lexeme encountered.
        found:  String,
        /// Byte offset of the encountered token.
        offset: usize,
    },
    /// A numeric literal does not fit: an integer beyond 64 bits, or a float
    /// that overflows to infinity.
    LiteralTooLarge {
        /// The literal as written.
        literal: String,
        /// Byte offset of the literal.
        offset:  usize,
    },
    /// The token sequence ended without its end marker.
    UnexpectedEndOfInput {
        /// Description of what was expected.
        expected: String,
    },
}

impl ParseError {
    /// Byte offset the error points at, when it has one.
    #[must_use]
    pub const fn offset(&self) -> Option<usize> {
        match self {
            Self::UnexpectedToken { offset, .. }
            | Self::ExpressionExpected { offset, .. }
            | Self::LiteralTooLarge { offset, .. } => Some(*offset),
            Self::UnexpectedEndOfInput { .. } => None,
        }
    }
}

/// Renders a lexeme for messages; the end marker has an empty lexeme.
fn describe(found: &str) -> String {
    if found.is_empty() {
        "end of input".to_string()
    } else {
        format!("\"{found}\"")
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { expected,
                                    found,
                                    offset, } => write!(f,
                                                        "Parse error: Unexpected token {} at position {offset}. {expected} expected.",
                                                        describe(found)),
            Self::ExpressionExpected { found, offset } => write!(f,
                                                                 "Parse error: Expression expected at position {offset}, found {}.",
                                                                 describe(found)),
            Self::LiteralTooLarge { literal, offset } => {
                write!(f, "Parse error: Literal {literal} at position {offset} is too large.")
            },
            Self::UnexpectedEndOfInput { expected } => {
                write!(f, "Parse error: Unexpected end of input. {expected} expected.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
