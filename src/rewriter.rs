//! Token-stream rewriter
//!
//! The rewriter folds a lexed token stream into the output text in a single
//! pass. Each token class has a fixed policy: layout vanishes, punctuation
//! and literals pass through (strings were already quote-normalized by the
//! lexer), identifiers are substituted from the context and double-quoted,
//! and object keys are double-quoted, after bracket unwrapping and
//! substitution when the key is computed.
//!
//! A final cleanup removes commas left dangling before `}` or `]` once the
//! text is assembled. The cleanup is textual, not structural: it runs over
//! the finished string exactly once, string interiors included.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::context::Context;
use crate::lexer::{Token, TokenType};

/// Lazy-compiled regex for a comma sitting directly before a closer
static DANGLING_COMMA_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r",([}\]])").unwrap());

/// Fold a token stream into output text, substituting identifiers and
/// computed keys from `context`, then strip dangling commas.
pub fn rewrite(tokens: Vec<Token>, context: &Context) -> String {
    let mut output = String::new();

    for token in tokens {
        match token.token_type {
            TokenType::WhiteSpace | TokenType::Lines => {}
            TokenType::Identifier => {
                output.push('"');
                output.push_str(&context.resolve(&token.value));
                output.push('"');
            }
            TokenType::ObjectKey => {
                output.push('"');
                output.push_str(&rewrite_key(&token.value, context));
                output.push('"');
            }
            TokenType::Punctuator
            | TokenType::BooleanLiteral
            | TokenType::NumericLiteral
            | TokenType::StringLiteral => output.push_str(&token.value),
        }
    }

    remove_dangling_commas(&output)
}

/// Rewrite one object key. A value wrapped in `[...]` is a computed key:
/// the brackets come off and the inner text goes through the context like
/// any identifier. Everything else is kept verbatim, partial bracket
/// forms like `[key` or `key]` included.
fn rewrite_key(value: &str, context: &Context) -> String {
    if value.starts_with('[') && value.ends_with(']') {
        context.resolve(&value[1..value.len() - 1])
    } else {
        value.to_string()
    }
}

/// Remove every comma that sits directly before a closing `}` or `]`.
///
/// One textual pass, left to right, over the whole string: adjacencies the
/// removal itself creates are left alone, and commas inside string literals
/// are not exempt.
pub fn remove_dangling_commas(text: &str) -> String {
    DANGLING_COMMA_REGEX.replace_all(text, "$1").into_owned()
}
