//! Cursor loop for the loose-JSON lexer
//!
//! [`tokenize`] walks the input from the start, trying every grammar rule at
//! the current position and taking the longest match (ties go to the rule
//! declared first). The cursor advances by the matched length, so the token
//! stream covers every character exactly once, whitespace and line tokens
//! included. Dropping those is the rewriter's call, not the lexer's.
//!
//! A position where no rule matches is a hard error carrying the byte
//! offset and its line/column.

use std::fmt;

use super::grammar::{self, LexRule};
use super::tokens::Token;

/// Error returned when no grammar rule matches the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexError {
    /// Byte offset of the first unmatched character
    pub offset: usize,
    /// 1-based line of the offending position
    pub line: usize,
    /// 1-based column of the offending position
    pub column: usize,
}

impl LexError {
    fn at(source: &str, offset: usize) -> Self {
        let (line, column) = line_column(source, offset);
        Self {
            offset,
            line,
            column,
        }
    }
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unexpected character at line {}, column {} (byte {})",
            self.line, self.column, self.offset
        )
    }
}

impl std::error::Error for LexError {}

/// Tokenize loose-JSON text into its full token stream.
///
/// The stream covers the whole input: every character lands in exactly one
/// token, layout tokens included. Returns a [`LexError`] at the first
/// position no grammar rule matches.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    let mut tokens = Vec::new();
    let mut position = 0;

    while position < source.len() {
        let rest = &source[position..];
        let mut best: Option<(usize, &LexRule)> = None;

        for rule in grammar::rules() {
            if let Some(length) = rule.match_len(rest) {
                if best.map_or(true, |(best_length, _)| length > best_length) {
                    best = Some((length, rule));
                }
            }
        }

        match best {
            Some((length, rule)) => {
                let value = rule.token_value(&rest[..length]);
                tokens.push(Token::new(rule.token_type, value));
                position += length;
            }
            None => return Err(LexError::at(source, position)),
        }
    }

    Ok(tokens)
}

/// Map a byte offset to 1-based line and column. Line terminators are the
/// Lines rule's set, with a CRLF pair advancing a single line. Columns count
/// characters, not bytes.
fn line_column(source: &str, offset: usize) -> (usize, usize) {
    let mut line = 1;
    let mut column = 1;
    let mut chars = source[..offset].chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                line += 1;
                column = 1;
            }
            '\n' | '\u{2028}' | '\u{2029}' => {
                line += 1;
                column = 1;
            }
            _ => column += 1,
        }
    }

    (line, column)
}
