//! JSON text emission.
//!
//! This module provides the [`Writer`] that serializes a
//! [`Value`](crate::Value) tree back to JSON text, mirroring the parser
//! production by production.
//!
//! ## Guarantees
//!
//! - **Round-trip**: numbers are emitted with the shortest decimal form
//!   that reproduces the exact double on re-parse (via `ryu`), so
//!   `parse(stringify(x))` equals `x` for every document `parse` accepts.
//! - **Order preservation**: array elements and object members are written
//!   in model order; keys are never sorted or deduplicated.
//! - **Rejection over corruption**: a NaN or infinite number fails with
//!   [`Error::NonFiniteNumber`](crate::Error::NonFiniteNumber) instead of
//!   emitting text JSON cannot express.
//!
//! Most users should use the crate-level functions:
//!
//! ```rust
//! use yajson::{parse, stringify};
//!
//! let doc = parse(" { \"a\" : [ 1 , 2 ] } ").unwrap();
//! assert_eq!(stringify(&doc).unwrap(), "{\"a\":[1.0,2.0]}");
//! ```

use crate::{Error, Object, Result, StringifyOptions, Value};

/// The JSON writer.
///
/// Accumulates output in an owned `String`; retrieve it with
/// [`into_inner`](Writer::into_inner) after a successful
/// [`write_value`](Writer::write_value).
pub struct Writer<'o> {
    out: String,
    options: &'o StringifyOptions,
    depth: usize,
}

impl<'o> Writer<'o> {
    pub fn new(options: &'o StringifyOptions) -> Self {
        Writer {
            out: String::with_capacity(256),
            options,
            depth: 0,
        }
    }

    /// Consumes the writer, returning the accumulated text.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.out
    }

    /// Serializes one value, appending to the output buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NonFiniteNumber`](crate::Error::NonFiniteNumber) if
    /// the tree contains a NaN or infinite number.
    pub fn write_value(&mut self, value: &Value) -> Result<()> {
        match value {
            Value::Null => self.out.push_str("null"),
            Value::Bool(true) => self.out.push_str("true"),
            Value::Bool(false) => self.out.push_str("false"),
            Value::Number(n) => self.write_number(*n)?,
            Value::String(s) => self.write_string(s),
            Value::Array(arr) => self.write_array(arr)?,
            Value::Object(obj) => self.write_object(obj)?,
        }
        Ok(())
    }

    fn write_number(&mut self, n: f64) -> Result<()> {
        if !n.is_finite() {
            return Err(Error::NonFiniteNumber);
        }
        let mut buffer = ryu::Buffer::new();
        self.out.push_str(buffer.format_finite(n));
        Ok(())
    }

    fn write_string(&mut self, s: &str) {
        self.out.push('"');
        for ch in s.chars() {
            match ch {
                '"' => self.out.push_str("\\\""),
                '\\' => self.out.push_str("\\\\"),
                '\u{0008}' => self.out.push_str("\\b"),
                '\u{000C}' => self.out.push_str("\\f"),
                '\n' => self.out.push_str("\\n"),
                '\r' => self.out.push_str("\\r"),
                '\t' => self.out.push_str("\\t"),
                ch if (ch as u32) < 0x20 => self.write_unicode_escape(ch as u16),
                ch if self.options.escape_non_ascii && !ch.is_ascii() => {
                    // Non-BMP code points become a UTF-16 surrogate pair.
                    let mut units = [0u16; 2];
                    for unit in ch.encode_utf16(&mut units) {
                        self.write_unicode_escape(*unit);
                    }
                }
                ch => self.out.push(ch),
            }
        }
        self.out.push('"');
    }

    fn write_unicode_escape(&mut self, unit: u16) {
        const HEX: &[u8; 16] = b"0123456789ABCDEF";
        self.out.push_str("\\u");
        for shift in [12u16, 8, 4, 0] {
            self.out.push(HEX[((unit >> shift) & 0xF) as usize] as char);
        }
    }

    fn write_array(&mut self, elements: &[Value]) -> Result<()> {
        self.out.push('[');
        if elements.is_empty() {
            self.out.push(']');
            return Ok(());
        }
        self.depth += 1;
        for (i, element) in elements.iter().enumerate() {
            if i > 0 {
                self.out.push(',');
            }
            self.newline_indent();
            self.write_value(element)?;
        }
        self.depth -= 1;
        self.newline_indent();
        self.out.push(']');
        Ok(())
    }

    fn write_object(&mut self, object: &Object) -> Result<()> {
        self.out.push('{');
        if object.is_empty() {
            self.out.push('}');
            return Ok(());
        }
        self.depth += 1;
        for (i, (key, value)) in object.iter().enumerate() {
            if i > 0 {
                self.out.push(',');
            }
            self.newline_indent();
            self.write_string(key);
            self.out.push(':');
            if self.options.pretty {
                self.out.push(' ');
            }
            self.write_value(value)?;
        }
        self.depth -= 1;
        self.newline_indent();
        self.out.push('}');
        Ok(())
    }

    fn newline_indent(&mut self) {
        if self.options.pretty {
            self.out.push('\n');
            for _ in 0..self.depth * self.options.indent_width {
                self.out.push(' ');
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(value: &Value, options: &StringifyOptions) -> Result<String> {
        let mut writer = Writer::new(options);
        writer.write_value(value)?;
        Ok(writer.into_inner())
    }

    #[test]
    fn control_characters_escape_as_hex() {
        let options = StringifyOptions::new();
        let value = Value::String("\u{0001}\u{001F}".to_string());
        assert_eq!(render(&value, &options).unwrap(), "\"\\u0001\\u001F\"");
    }

    #[test]
    fn named_escapes_take_precedence() {
        let options = StringifyOptions::new();
        let value = Value::String("\" \\ \u{8} \u{c} \n \r \t".to_string());
        assert_eq!(
            render(&value, &options).unwrap(),
            "\"\\\" \\\\ \\b \\f \\n \\r \\t\""
        );
    }

    #[test]
    fn non_ascii_passes_through_by_default() {
        let options = StringifyOptions::new();
        let value = Value::String("caf\u{e9} \u{1d11e}".to_string());
        assert_eq!(render(&value, &options).unwrap(), "\"caf\u{e9} \u{1d11e}\"");
    }

    #[test]
    fn escape_non_ascii_emits_surrogate_pairs() {
        let options = StringifyOptions::new().with_escape_non_ascii(true);
        let value = Value::String("\u{1d11e}".to_string());
        assert_eq!(render(&value, &options).unwrap(), "\"\\uD834\\uDD1E\"");

        let value = Value::String("\u{20ac}".to_string());
        assert_eq!(render(&value, &options).unwrap(), "\"\\u20AC\"");
    }

    #[test]
    fn non_finite_numbers_are_rejected() {
        let options = StringifyOptions::new();
        assert_eq!(
            render(&Value::Number(f64::NAN), &options),
            Err(Error::NonFiniteNumber)
        );
        assert_eq!(
            render(&Value::Array(vec![Value::Number(f64::INFINITY)]), &options),
            Err(Error::NonFiniteNumber)
        );
    }

    #[test]
    fn pretty_output_is_indented() {
        let options = StringifyOptions::pretty();
        let mut object = Object::new();
        object.push("a".to_string(), Value::Array(vec![Value::Null]));
        let text = render(&Value::Object(object), &options).unwrap();
        assert_eq!(text, "{\n  \"a\": [\n    null\n  ]\n}");
    }
}
