//! Loose-JSON lexer
//!
//! Tokenization is a longest-match scan over a declarative grammar table:
//! eight token classes, tried in priority order at every cursor position,
//! with length ties won by the rule declared first. The stream it produces
//! covers the input exactly (nothing skipped, nothing overlapping), and
//! classification is final: the rewriter decides what each class turns
//! into, the lexer only decides what each character is.

mod grammar;
mod lexer_impl;
mod tokens;

pub use lexer_impl::{tokenize, LexError};
pub use tokens::{Token, TokenType};
