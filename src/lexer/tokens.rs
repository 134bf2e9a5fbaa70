//! Token types for the loose-JSON lexer
//!
//! Every character of a successfully lexed input belongs to exactly one
//! token of one of the eight classes below. The declaration order of the
//! classes is also the grammar's priority order: when two rules match the
//! same length at the same position, the class declared first wins.

/// The token classes of the loose-JSON grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum TokenType {
    /// Horizontal whitespace: tab, vertical tab, form feed, the zero-width
    /// no-break space, and Unicode space separators
    WhiteSpace,
    /// One line terminator: CRLF as a pair, or a lone CR, LF, U+2028, U+2029
    Lines,
    /// An identifier-shaped object key (optionally bracketed, optionally
    /// `#`-prefixed) sitting immediately before a colon
    ObjectKey,
    /// An operator or delimiter from the JavaScript punctuator inventory
    Punctuator,
    /// `true` or `false`
    BooleanLiteral,
    /// A JavaScript numeric literal, including hex/octal/binary forms,
    /// digit separators, legacy octals, and BigInt suffixes
    NumericLiteral,
    /// A single- or double-quoted string run
    StringLiteral,
    /// A bare identifier with no colon after it
    Identifier,
}

/// One lexed token: its class and the text it covers.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Token {
    /// Class of the token
    pub token_type: TokenType,
    /// Matched text. String literals are the exception: their value is
    /// quote-normalized at match time (outer quotes replaced with `"`),
    /// which preserves the matched length.
    pub value: String,
}

impl Token {
    /// Create a token from its class and text.
    pub fn new(token_type: TokenType, value: impl Into<String>) -> Self {
        Self {
            token_type,
            value: value.into(),
        }
    }
}
