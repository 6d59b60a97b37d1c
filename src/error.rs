/// Parsing errors.
///
/// Defines all error types that can occur while parsing a token sequence.
/// Lexing itself never fails, so every syntax problem surfaces here, carrying
/// the offending lexeme and its byte offset.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation, such as
/// undefined names, type mismatches or division by zero.
pub mod runtime_error;

use std::fmt;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any error a request can fail with.
///
/// Both stages fail fast, so a request produces exactly one of these.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// The source did not parse.
    Parse(ParseError),
    /// The program parsed but failed while running.
    Runtime(RuntimeError),
}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<RuntimeError> for Error {
    fn from(e: RuntimeError) -> Self {
        Self::Runtime(e)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}
