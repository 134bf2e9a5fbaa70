//! Declarative grammar for the loose-JSON lexer
//!
//! The grammar is data, not control flow: an ordered table of rules, each a
//! regex anchored at the cursor position, optionally paired with a
//! constraint on the character that follows the match and a transform for
//! the matched text. The lexer tries every rule at the current position and
//! keeps the longest match; a tie in length is won by the rule declared
//! first, so table order is the grammar's priority order.
//!
//! A few rules depend on the character immediately after the match without
//! consuming it, which a plain pattern cannot say:
//!
//! - an identifier is only an object key when a colon follows it directly
//! - `.` and `?.` are punctuators only when no digit follows (`.5` is a
//!   numeric literal)
//! - `/` followed by `/` or `*` opens a comment, for which no rule exists,
//!   so lexing fails there
//!
//! Each of these is carried as a [`NextChar`] constraint on its rule and
//! checked against the text after the candidate match.
//!
//! Classes that overlap (`07` is a legacy octal, `078` a legacy decimal,
//! `0` a plain zero) are split into several rules of the same token type
//! and disambiguated by the longest-match contract alone.

use once_cell::sync::Lazy;
use regex::Regex;

use super::tokens::TokenType;

/// Identifier body: a start unit (`$`, `_`, any `ID_Start` character, or a
/// `\uXXXX` / `\u{...}` escape) followed by continue units (`$`, `_`,
/// zero-width joiners, any `ID_Continue` character, or an escape).
const IDENT_BODY: &str = r"(?:[$_\p{ID_Start}]|\\u[0-9a-fA-F]{4}|\\u\{[0-9a-fA-F]+\})(?:[$_\u{200C}\u{200D}\p{ID_Continue}]|\\u[0-9a-fA-F]{4}|\\u\{[0-9a-fA-F]+\})*";

/// The grammar, in priority order.
/// Order matters: a tie in match length is won by the earlier rule.
static GRAMMAR: Lazy<Vec<LexRule>> = Lazy::new(|| {
    vec![
        // Horizontal whitespace. Line terminators are not in the class; they
        // belong to the Lines rule below.
        LexRule::new(TokenType::WhiteSpace, r"[\t\v\f\u{FEFF}\p{Zs}]+"),
        // One line terminator per token, with CRLF kept as a pair.
        LexRule::new(TokenType::Lines, r"\r?\n|[\r\u{2028}\u{2029}]"),
        // Identifier-shaped key. The brackets and the `#` prefix are each
        // optional on their own, so `[key`, `key]`, and `#key` all match.
        // The colon that makes this a key is inspected, never consumed.
        LexRule::new(TokenType::ObjectKey, &format!(r"\[?#?{}\]?", IDENT_BODY))
            .followed_by(NextChar::MustBe(':')),
        // Punctuators with no shorter prefix form.
        LexRule::new(TokenType::Punctuator, r"--|\+\+|=>|\.{3}"),
        // Member access and optional chaining. A digit after the dot means
        // the dot starts a numeric literal instead.
        LexRule::new(TokenType::Punctuator, r"\??\.").followed_by(NextChar::NotDigit),
        // Compound operator family, each with an optional `=` suffix.
        LexRule::new(
            TokenType::Punctuator,
            r"(?:&&|\|\||\?\?|[+\-%&|^]|\*{1,2}|<{1,2}|>{1,3}|!=?|={1,2})=?",
        ),
        // Division: `/=` always, bare `/` only when it does not open a
        // comment.
        LexRule::new(TokenType::Punctuator, r"/="),
        LexRule::new(TokenType::Punctuator, r"/").followed_by(NextChar::NotIn(&['/', '*'])),
        // Single-character delimiters.
        LexRule::new(TokenType::Punctuator, r"[?~,:;\[\](){}]"),
        LexRule::new(TokenType::BooleanLiteral, r"true|false"),
        // Numeric literals, split by form. Hex/octal/binary with separators
        // and an optional BigInt suffix.
        LexRule::new(
            TokenType::NumericLiteral,
            r"(?:0[xX][0-9a-fA-F](?:_?[0-9a-fA-F])*|0[oO][0-7](?:_?[0-7])*|0[bB][01](?:_?[01])*)n?",
        ),
        // BigInt zero and decimal BigInts.
        LexRule::new(TokenType::NumericLiteral, r"0n"),
        LexRule::new(TokenType::NumericLiteral, r"[1-9](?:_?[0-9])*n"),
        // Decimal and float forms: integer part (legacy non-octal like `08`,
        // non-zero decimal, or a plain `0`), optional fraction, optional
        // exponent; or a leading-dot fraction like `.5`.
        LexRule::new(
            TokenType::NumericLiteral,
            r"(?:(?:0[0-9]*[89][0-9]*|[1-9](?:_?[0-9])*|0)(?:\.(?:[0-9](?:_?[0-9])*)?)?|\.[0-9](?:_?[0-9])*)(?:[eE][+-]?[0-9](?:_?[0-9])*)?",
        ),
        // Legacy octal. Loses to the decimal rule on longer matches such as
        // `078`, wins on all-octal runs such as `07`.
        LexRule::new(TokenType::NumericLiteral, r"0[0-7]+"),
        // String runs. Interior characters are anything but the delimiter,
        // a backslash, or a raw CR/LF; a backslash escapes a CRLF pair or
        // any single character. Quotes are normalized at match time.
        LexRule::new(
            TokenType::StringLiteral,
            r#"'(?:[^'\\\r\n]|\\(?:\r\n|(?s:.)))*'|"(?:[^"\\\r\n]|\\(?:\r\n|(?s:.)))*""#,
        )
        .normalizing(normalize_string_quotes),
        // Bare identifier, `#` prefix allowed.
        LexRule::new(TokenType::Identifier, &format!(r"#?{}", IDENT_BODY)),
    ]
});

/// Constraint on the first character after a candidate match. The character
/// is inspected only, never consumed.
#[derive(Debug, Clone, Copy)]
pub(crate) enum NextChar {
    /// No constraint
    Any,
    /// The next character must be exactly this one
    MustBe(char),
    /// The next character must not be an ASCII digit; end of input is fine
    NotDigit,
    /// The next character must not be one of these; end of input is fine
    NotIn(&'static [char]),
}

impl NextChar {
    /// Whether `next` (the character right after the match, if any)
    /// satisfies the constraint.
    pub(crate) fn permits(self, next: Option<char>) -> bool {
        match self {
            NextChar::Any => true,
            NextChar::MustBe(required) => next == Some(required),
            NextChar::NotDigit => !next.map_or(false, |c| c.is_ascii_digit()),
            NextChar::NotIn(excluded) => !next.map_or(false, |c| excluded.contains(&c)),
        }
    }
}

/// One grammar rule: the token class it produces, its pattern, the
/// constraint on the following character, and an optional transform applied
/// to the matched text.
pub(crate) struct LexRule {
    pub(crate) token_type: TokenType,
    pattern: Regex,
    next: NextChar,
    normalize: Option<fn(&str) -> String>,
}

impl LexRule {
    fn new(token_type: TokenType, pattern: &str) -> Self {
        Self {
            token_type,
            pattern: Regex::new(&format!("^(?:{})", pattern)).unwrap(),
            next: NextChar::Any,
            normalize: None,
        }
    }

    fn followed_by(mut self, next: NextChar) -> Self {
        self.next = next;
        self
    }

    fn normalizing(mut self, normalize: fn(&str) -> String) -> Self {
        self.normalize = Some(normalize);
        self
    }

    /// Length of this rule's match at the start of `rest`, if any. All
    /// rules consume at least one character.
    pub(crate) fn match_len(&self, rest: &str) -> Option<usize> {
        let end = self.pattern.find(rest)?.end();
        if end > 0 && self.next.permits(rest[end..].chars().next()) {
            Some(end)
        } else {
            None
        }
    }

    /// Token text for a match, applying the rule's transform if it has one.
    pub(crate) fn token_value(&self, matched: &str) -> String {
        match self.normalize {
            Some(normalize) => normalize(matched),
            None => matched.to_string(),
        }
    }
}

/// The grammar rules in priority order.
pub(crate) fn rules() -> &'static [LexRule] {
    &GRAMMAR
}

/// Replace the outer quotes of a matched string run with double quotes.
/// Interior characters pass through untouched, escapes included, so the
/// result has the same length as the match.
fn normalize_string_quotes(matched: &str) -> String {
    format!("\"{}\"", &matched[1..matched.len() - 1])
}
