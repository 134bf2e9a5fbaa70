//! Rewrite loose, JavaScript-flavored object and array literals into
//! strict-JSON text.
//!
//! The input grammar accepts what a JavaScript programmer would type:
//! unquoted and computed object keys, single-quoted strings, bare
//! identifiers, trailing commas, and the full numeric literal inventory.
//! Conversion is purely lexical: the input is tokenized and rewritten
//! token by token, never parsed into a tree, and the output is not
//! validated. Only the enumerated loosenesses are corrected; anything else
//! the grammar can tokenize passes through untouched, valid JSON or not.
//!
//! Identifier tokens double as substitution points: a [`Context`] maps
//! identifier text to JSON values, spliced into the output as quoted
//! strings. Computed keys (`[key]:`) substitute the same way.
//!
//! # Examples
//!
//! Normalizing a loose fragment:
//!
//! ```
//! let out = json_loose::convert("{ retries: 3, hosts: ['a', 'b',], }")?;
//! assert_eq!(out, r#"{"retries":3,"hosts":["a","b"]}"#);
//! # Ok::<(), json_loose::ConvertError>(())
//! ```
//!
//! Substituting identifiers and computed keys:
//!
//! ```
//! use json_loose::Context;
//!
//! let mut context = Context::new();
//! context.insert("city", "Nishada");
//!
//! let out = json_loose::convert_with("{ [city]: true }", &context)?;
//! assert_eq!(out, r#"{"Nishada":true}"#);
//! # Ok::<(), json_loose::ConvertError>(())
//! ```

pub mod context;
pub mod convert;
pub mod error;
pub mod lexer;
pub mod rewriter;

pub use context::Context;
pub use convert::{convert, convert_with};
pub use error::ConvertError;
