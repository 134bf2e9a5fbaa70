//! Substitution context for identifier rewriting
//!
//! Identifier tokens (and the inner text of computed object keys) are
//! looked up in a [`Context`] while the token stream is rewritten. The
//! lookup is total: a present key substitutes the string coercion of its
//! value (whatever that value is, empty strings and zeros included), and
//! an absent key falls back to the identifier text itself.

use std::collections::HashMap;

use serde_json::{Map, Value};

/// Placeholder substituted for array- and object-valued entries.
const OBJECT_PLACEHOLDER: &str = "[object Object]";

/// Substitution table mapping identifier text to replacement values.
#[derive(Debug, Clone, Default)]
pub struct Context {
    entries: HashMap<String, Value>,
}

impl Context {
    /// Create an empty context.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Insert a substitution value for an identifier.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Number of entries in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total lookup: the coerced value of a present key, the key text
    /// itself otherwise.
    pub fn resolve(&self, key: &str) -> String {
        match self.entries.get(key) {
            Some(value) => substitution_text(value),
            None => key.to_string(),
        }
    }
}

impl From<Map<String, Value>> for Context {
    fn from(entries: Map<String, Value>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }
}

/// The string form a context value takes in the output.
///
/// Strings substitute their text unchanged; booleans, numbers, and null
/// substitute their canonical text; arrays and objects collapse to the
/// `[object Object]` placeholder.
pub fn substitution_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Bool(boolean) => boolean.to_string(),
        Value::Number(number) => number.to_string(),
        Value::Null => "null".to_string(),
        Value::Array(_) | Value::Object(_) => OBJECT_PLACEHOLDER.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_resolve_present_key() {
        let mut context = Context::new();
        context.insert("name", "Ada");
        assert_eq!(context.resolve("name"), "Ada");
    }

    #[test]
    fn test_resolve_absent_key_falls_back_to_the_key() {
        let context = Context::new();
        assert_eq!(context.resolve("name"), "name");
    }

    #[test]
    fn test_len_and_emptiness() {
        let mut context = Context::new();
        assert!(context.is_empty());
        context.insert("a", 1);
        context.insert("b", 2);
        assert_eq!(context.len(), 2);
        assert!(!context.is_empty());
    }

    #[test]
    fn test_resolve_is_presence_based_not_truthiness_based() {
        let mut context = Context::new();
        context.insert("empty", "");
        context.insert("zero", 0);
        context.insert("no", false);
        assert_eq!(context.resolve("empty"), "");
        assert_eq!(context.resolve("zero"), "0");
        assert_eq!(context.resolve("no"), "false");
    }

    #[test]
    fn test_substitution_text_by_value_kind() {
        assert_eq!(substitution_text(&json!("text")), "text");
        assert_eq!(substitution_text(&json!(42)), "42");
        assert_eq!(substitution_text(&json!(4.5)), "4.5");
        assert_eq!(substitution_text(&json!(true)), "true");
        assert_eq!(substitution_text(&json!(null)), "null");
        assert_eq!(substitution_text(&json!([1, 2])), "[object Object]");
        assert_eq!(substitution_text(&json!({"a": 1})), "[object Object]");
    }

    #[test]
    fn test_context_from_json_object() {
        let parsed: Value = serde_json::from_str(r#"{"city": "Nishada", "age": 30}"#).unwrap();
        let context = Context::from(parsed.as_object().unwrap().clone());
        assert_eq!(context.resolve("city"), "Nishada");
        assert_eq!(context.resolve("age"), "30");
    }
}
