//! Conversion pipeline
//!
//! The entry points validate the raw input, run the lexer, and hand the
//! token stream to the rewriter. Validation is deliberately shallow: trim,
//! strip top-level trailing commas, shortcut empty input to `{}`, and check
//! that the outer delimiters form a matching object or array pair. Whether
//! the *output* is valid JSON is not checked anywhere: the converter's
//! contract is lexical, and constructs like shorthand properties pass
//! through as they are.

use crate::context::Context;
use crate::error::ConvertError;
use crate::lexer;
use crate::rewriter;

/// Convert loose-JSON text into strict-JSON text with an empty context.
///
/// Bare identifiers are double-quoted as they are; use [`convert_with`] to
/// substitute them from a [`Context`].
///
/// # Examples
///
/// ```
/// let out = json_loose::convert("{ key: 'value', list: [1, 2, 3,], }")?;
/// assert_eq!(out, r#"{"key":"value","list":[1,2,3]}"#);
/// # Ok::<(), json_loose::ConvertError>(())
/// ```
///
/// # Errors
///
/// [`ConvertError::UnexpectedFormat`] when the trimmed input is not wrapped
/// in a matching `{...}` or `[...]` pair, [`ConvertError::Lex`] when some
/// character sequence matches no grammar rule.
pub fn convert(input: &str) -> Result<String, ConvertError> {
    convert_with(input, &Context::new())
}

/// Convert loose-JSON text, substituting identifier tokens and computed
/// keys from `context`.
///
/// # Examples
///
/// ```
/// use json_loose::Context;
///
/// let mut context = Context::new();
/// context.insert("name", "Ada");
/// context.insert("port", 8080);
///
/// let out = json_loose::convert_with("{ user: name, port: port }", &context)?;
/// assert_eq!(out, r#"{"user":"Ada","port":"8080"}"#);
/// # Ok::<(), json_loose::ConvertError>(())
/// ```
pub fn convert_with(input: &str, context: &Context) -> Result<String, ConvertError> {
    let entry = trim_entry(input);
    if entry.is_empty() {
        return Ok(String::from("{}"));
    }
    if !is_container_delimited(entry) {
        return Err(ConvertError::UnexpectedFormat);
    }
    let tokens = lexer::tokenize(entry)?;
    Ok(rewriter::rewrite(tokens, context))
}

/// Trim the raw input for entry validation: surrounding whitespace first
/// (the zero-width no-break space counts), then any run of trailing commas.
/// Whitespace exposed by the comma strip stays put.
fn trim_entry(input: &str) -> &str {
    input
        .trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
        .trim_end_matches(',')
}

/// Whether the input is delimited by a matching object or array pair.
fn is_container_delimited(entry: &str) -> bool {
    (entry.starts_with('{') && entry.ends_with('}'))
        || (entry.starts_with('[') && entry.ends_with(']'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim_entry_strips_whitespace_then_commas() {
        assert_eq!(trim_entry("  {a: 1} \n"), "{a: 1}");
        assert_eq!(trim_entry("[1, 2],,,"), "[1, 2]");
        assert_eq!(trim_entry("\u{FEFF}{a: 1}"), "{a: 1}");
        // Commas only: whitespace bared by the comma strip stays.
        assert_eq!(trim_entry("[1, 2] ,"), "[1, 2] ");
    }

    #[test]
    fn test_empty_inputs_shortcut_to_an_empty_object() {
        assert_eq!(convert("").unwrap(), "{}");
        assert_eq!(convert("   \n\t").unwrap(), "{}");
        assert_eq!(convert(",,,").unwrap(), "{}");
    }

    #[test]
    fn test_container_delimiters_must_pair_up() {
        assert!(is_container_delimited("{}"));
        assert!(is_container_delimited("[1]"));
        assert!(!is_container_delimited("{"));
        assert!(!is_container_delimited("{]"));
        assert!(!is_container_delimited("x"));
        assert_eq!(
            convert("{ key: \"value\" ").unwrap_err(),
            ConvertError::UnexpectedFormat
        );
        // The comma strip does not re-trim, so this stays unbalanced.
        assert_eq!(
            convert("[1, 2] ,").unwrap_err(),
            ConvertError::UnexpectedFormat
        );
    }

    #[test]
    fn test_lex_failures_surface_with_their_position() {
        let err = convert("{ a: /* no comments */ 1 }").unwrap_err();
        match err {
            ConvertError::Lex(lex) => assert_eq!(lex.offset, 5),
            other => panic!("expected a lex error, got {:?}", other),
        }
    }

    #[test]
    fn test_top_level_trailing_commas_are_stripped_before_validation() {
        assert_eq!(convert("[1, 2],").unwrap(), "[1,2]");
        assert_eq!(convert("{a: 1},,").unwrap(), r#"{"a":1}"#);
    }
}
