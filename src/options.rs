//! Configuration options for JSON output.
//!
//! [`StringifyOptions`] customizes how a [`Value`](crate::Value) tree is
//! emitted. The default is the canonical compact form: no insignificant
//! whitespace, raw UTF-8 for everything above the control range.
//!
//! ## Examples
//!
//! ```rust
//! use yajson::{parse, stringify_with_options, StringifyOptions};
//!
//! let doc = parse("{\"a\":[1,2]}").unwrap();
//!
//! // Indented output
//! let options = StringifyOptions::pretty();
//! let text = stringify_with_options(&doc, &options).unwrap();
//! assert!(text.contains('\n'));
//!
//! // ASCII-only output
//! let options = StringifyOptions::new().with_escape_non_ascii(true);
//! let doc = parse("\"caf\u{e9}\"").unwrap();
//! let text = stringify_with_options(&doc, &options).unwrap();
//! assert_eq!(text, "\"caf\\u00E9\"");
//! ```

/// Options controlling stringification.
///
/// Built with chained `with_*` methods:
///
/// ```rust
/// use yajson::StringifyOptions;
///
/// let options = StringifyOptions::pretty()
///     .with_indent_width(4)
///     .with_escape_non_ascii(true);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StringifyOptions {
    /// Emit newlines and indentation inside arrays and objects.
    pub pretty: bool,
    /// Spaces per nesting level when `pretty` is set.
    pub indent_width: usize,
    /// Escape every character above U+007F as `\uXXXX`, emitting a UTF-16
    /// surrogate pair for code points beyond the BMP. The output is then
    /// pure ASCII.
    pub escape_non_ascii: bool,
}

impl StringifyOptions {
    /// Compact output: no insignificant whitespace, raw UTF-8 strings.
    #[must_use]
    pub fn new() -> Self {
        StringifyOptions {
            pretty: false,
            indent_width: 2,
            escape_non_ascii: false,
        }
    }

    /// Indented output with the default two-space indent.
    #[must_use]
    pub fn pretty() -> Self {
        StringifyOptions {
            pretty: true,
            ..StringifyOptions::new()
        }
    }

    /// Sets the number of spaces per nesting level (only meaningful with
    /// `pretty`).
    #[must_use]
    pub fn with_indent_width(mut self, width: usize) -> Self {
        self.indent_width = width;
        self
    }

    /// Enables or disables `\uXXXX` escaping of non-ASCII characters.
    #[must_use]
    pub fn with_escape_non_ascii(mut self, escape: bool) -> Self {
        self.escape_non_ascii = escape;
        self
    }
}

impl Default for StringifyOptions {
    fn default() -> Self {
        Self::new()
    }
}
