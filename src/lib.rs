//! # yajson
//!
//! An RFC 8259 JSON library built around an explicit document model: parse
//! JSON text into a [`Value`] tree, inspect or build the tree directly, and
//! serialize it back to JSON text.
//!
//! ## Key Features
//!
//! - **Strict RFC 8259 parsing**: the full number grammar, string escapes,
//!   and UTF-16 surrogate pairs are validated exactly; every rejection maps
//!   to a precise [`Error`] variant.
//! - **Faithful document model**: object member order is preserved and
//!   duplicate keys are retained, so what you parse is what you serialize.
//! - **Round-trip numbers**: floats are emitted with the shortest decimal
//!   form that reproduces the same bit pattern on re-parse.
//! - **No Unsafe Code**: written entirely in safe Rust.
//!
//! ## Quick Start
//!
//! ```rust
//! use yajson::{parse, stringify, Value};
//!
//! let doc = parse("{\"name\":\"Alice\",\"scores\":[9.5,8.0]}").unwrap();
//!
//! assert_eq!(doc.get_object_key(0), "name");
//! assert_eq!(doc.get_object_value(0).get_string(), "Alice");
//! assert_eq!(doc.get_object_value(1).get_array_size(), 2);
//!
//! let text = stringify(&doc).unwrap();
//! assert_eq!(parse(&text).unwrap(), doc);
//! ```
//!
//! ## Building Documents
//!
//! ```rust
//! use yajson::{json, stringify};
//!
//! let doc = json!({
//!     "id": 7,
//!     "active": true,
//!     "tags": ["a", "b"]
//! });
//! assert_eq!(
//!     stringify(&doc).unwrap(),
//!     "{\"id\":7.0,\"active\":true,\"tags\":[\"a\",\"b\"]}"
//! );
//! ```
//!
//! ## Error Reporting
//!
//! Parsing stops at the first grammar violation and reports exactly one
//! [`Error`] variant; the caller never observes a partially-populated
//! document:
//!
//! ```rust
//! use yajson::{parse, Error};
//!
//! assert_eq!(parse("{\"a\":1"), Err(Error::MissCommaOrCurlyBracket));
//! assert_eq!(parse("1.5x"), Err(Error::RootNotSingular));
//! ```
//!
//! ## Performance Characteristics
//!
//! - **Parsing**: O(n) single pass; decoded strings share one reusable
//!   scratch buffer across the document.
//! - **Serialization**: O(n) in output size.
//! - **Nesting**: recursion depth follows document depth; parse and
//!   stringify are synchronous and single-threaded per engine instance.

pub mod error;
pub mod macros;
pub mod object;
pub mod options;
pub mod parse;
pub mod stringify;
pub mod value;

pub use error::{Error, Result};
pub use object::Object;
pub use options::StringifyOptions;
pub use parse::Parser;
pub use stringify::Writer;
pub use value::{Kind, Value};

use std::io;

/// Parses a JSON text into a [`Value`].
///
/// The input must contain exactly one JSON value, optionally surrounded by
/// whitespace (space, tab, LF, CR).
///
/// # Examples
///
/// ```rust
/// use yajson::{parse, Value};
///
/// assert_eq!(parse(" null "), Ok(Value::Null));
/// assert_eq!(parse("1.5"), Ok(Value::Number(1.5)));
/// ```
///
/// # Errors
///
/// Returns the first grammar violation encountered; see [`Error`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse(text: &str) -> Result<Value> {
    Parser::new(text).parse()
}

/// Reads an I/O stream to completion and parses it as a JSON document.
///
/// # Examples
///
/// ```rust
/// use std::io::Cursor;
/// use yajson::{parse_reader, Value};
///
/// let doc = parse_reader(Cursor::new(b"[true]")).unwrap();
/// assert_eq!(doc.get_array_size(), 1);
/// ```
///
/// # Errors
///
/// Returns [`Error::Io`] if reading fails or the stream is not valid UTF-8,
/// otherwise any parse error.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_reader<R>(mut reader: R) -> Result<Value>
where
    R: io::Read,
{
    let mut text = String::new();
    reader.read_to_string(&mut text).map_err(Error::io)?;
    parse(&text)
}

/// Serializes a [`Value`] to compact JSON text.
///
/// Element and member order is preserved exactly; duplicate keys are
/// written as-is.
///
/// # Examples
///
/// ```rust
/// use yajson::{json, stringify};
///
/// let doc = json!([null, false, "x"]);
/// assert_eq!(stringify(&doc).unwrap(), "[null,false,\"x\"]");
/// ```
///
/// # Errors
///
/// Returns [`Error::NonFiniteNumber`] if the tree contains a NaN or
/// infinite number; any value produced by [`parse`] serializes without
/// error.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn stringify(value: &Value) -> Result<String> {
    stringify_with_options(value, &StringifyOptions::new())
}

/// Serializes a [`Value`] to indented, human-readable JSON text.
///
/// # Errors
///
/// Same as [`stringify`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn stringify_pretty(value: &Value) -> Result<String> {
    stringify_with_options(value, &StringifyOptions::pretty())
}

/// Serializes a [`Value`] with custom [`StringifyOptions`].
///
/// # Examples
///
/// ```rust
/// use yajson::{json, stringify_with_options, StringifyOptions};
///
/// let doc = json!({"снег": true});
/// let options = StringifyOptions::new().with_escape_non_ascii(true);
/// let text = stringify_with_options(&doc, &options).unwrap();
/// assert!(text.is_ascii());
/// ```
///
/// # Errors
///
/// Same as [`stringify`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn stringify_with_options(value: &Value, options: &StringifyOptions) -> Result<String> {
    let mut writer = Writer::new(options);
    writer.write_value(value)?;
    Ok(writer.into_inner())
}

/// Serializes a [`Value`] as compact JSON to an I/O writer.
///
/// # Errors
///
/// Returns [`Error::Io`] if writing fails, otherwise the same as
/// [`stringify`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W>(writer: W, value: &Value) -> Result<()>
where
    W: io::Write,
{
    to_writer_with_options(writer, value, &StringifyOptions::new())
}

/// Serializes a [`Value`] to an I/O writer with custom options.
///
/// # Errors
///
/// Returns [`Error::Io`] if writing fails, otherwise the same as
/// [`stringify`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer_with_options<W>(
    mut writer: W,
    value: &Value,
    options: &StringifyOptions,
) -> Result<()>
where
    W: io::Write,
{
    let text = stringify_with_options(value, options)?;
    writer.write_all(text.as_bytes()).map_err(Error::io)?;
    Ok(())
}
