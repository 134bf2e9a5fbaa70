//! Crate-level error type

use std::fmt;

use crate::lexer::LexError;

/// Errors surfaced by the conversion entry points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    /// The trimmed input is not wrapped in a matching `{...}` or `[...]`
    /// pair.
    UnexpectedFormat,
    /// Tokenization failed partway into the input.
    Lex(LexError),
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::UnexpectedFormat => write!(f, "unexpected input format"),
            ConvertError::Lex(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for ConvertError {}

impl From<LexError> for ConvertError {
    fn from(err: LexError) -> Self {
        ConvertError::Lex(err)
    }
}
