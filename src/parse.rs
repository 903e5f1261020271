//! Recursive-descent JSON parsing.
//!
//! This module provides the [`Parser`] that turns JSON text into a
//! [`Value`] tree. The grammar of RFC 8259 maps directly onto one method
//! per production: literals, numbers, strings, arrays, and objects.
//!
//! ## Overview
//!
//! - **Single-pass**: a forward-only byte cursor, no backtracking.
//! - **Strict**: the number grammar is validated before conversion, string
//!   escapes and surrogate pairs are checked exactly, and a document must
//!   contain exactly one top-level value.
//! - **Scratch buffer**: decoded string content is assembled in one
//!   reusable buffer with mark/rollback discipline, so nested strings and
//!   object keys share a single allocation across the parse.
//!
//! Most users should use the crate-level [`parse`](crate::parse) function:
//!
//! ```rust
//! use yajson::{parse, Value};
//!
//! let doc = parse("[1, 2, 3]").unwrap();
//! assert_eq!(doc.get_array_size(), 3);
//! assert_eq!(doc.get_array_element(0), &Value::Number(1.0));
//! ```
//!
//! Recursion depth mirrors document nesting depth, so parse cost is linear
//! in input size but pathologically nested input can exhaust the call
//! stack; callers needing a hard bound should pre-limit input size.

use crate::{Error, Object, Result, Value};

/// The JSON parser.
///
/// Holds the input text, a byte cursor, and the scratch buffer used to
/// assemble decoded strings. A `Parser` may be reused: every call to
/// [`parse`](Parser::parse) rewinds the cursor and starts from a clean
/// scratch buffer.
pub struct Parser<'a> {
    input: &'a str,
    position: usize,
    scratch: String,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str) -> Self {
        Parser {
            input,
            position: 0,
            scratch: String::new(),
        }
    }

    /// Parses the input as a single JSON document.
    ///
    /// # Errors
    ///
    /// Returns the first grammar violation encountered; see
    /// [`Error`](crate::Error) for the taxonomy. On error no partial
    /// document escapes and the scratch buffer is left empty.
    pub fn parse(&mut self) -> Result<Value> {
        self.position = 0;
        self.scratch.clear();

        let result = self.parse_value();
        if result.is_err() {
            self.scratch.clear();
            return result;
        }
        debug_assert!(self.scratch.is_empty());

        self.skip_whitespace();
        if !self.at_end() {
            return Err(Error::RootNotSingular);
        }
        result
    }

    #[inline]
    fn peek(&self) -> Option<u8> {
        self.input.as_bytes().get(self.position).copied()
    }

    #[inline]
    fn at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    /// ws = *(%x20 / %x09 / %x0A / %x0D)
    fn skip_whitespace(&mut self) {
        while let Some(b' ' | b'\t' | b'\n' | b'\r') = self.peek() {
            self.position += 1;
        }
    }

    fn parse_value(&mut self) -> Result<Value> {
        self.skip_whitespace();
        match self.peek() {
            None => Err(Error::ExpectValue),
            Some(b'n') => self.parse_literal("null", Value::Null),
            Some(b't') => self.parse_literal("true", Value::Bool(true)),
            Some(b'f') => self.parse_literal("false", Value::Bool(false)),
            Some(b'"') => self.parse_string().map(Value::String),
            Some(b'[') => self.parse_array(),
            Some(b'{') => self.parse_object(),
            Some(_) => self.parse_number(),
        }
    }

    fn parse_literal(&mut self, literal: &str, value: Value) -> Result<Value> {
        for expected in literal.bytes() {
            if self.peek() != Some(expected) {
                return Err(Error::InvalidValue);
            }
            self.position += 1;
        }
        Ok(value)
    }

    #[inline]
    fn eat_digits(&mut self) -> usize {
        let start = self.position;
        while let Some(b'0'..=b'9') = self.peek() {
            self.position += 1;
        }
        self.position - start
    }

    /// number = [ "-" ] int [ frac ] [ exp ]
    ///
    /// The shape is validated in full before any conversion is attempted, so
    /// inputs like `+1`, `.5`, `1.` and `01` are rejected as `InvalidValue`
    /// without ever touching the float parser.
    fn parse_number(&mut self) -> Result<Value> {
        let start = self.position;

        if self.peek() == Some(b'-') {
            self.position += 1;
        }
        match self.peek() {
            Some(b'0') => {
                self.position += 1;
            }
            Some(b'1'..=b'9') => {
                self.eat_digits();
            }
            _ => return Err(Error::InvalidValue),
        }
        if self.peek() == Some(b'.') {
            self.position += 1;
            if self.eat_digits() == 0 {
                return Err(Error::InvalidValue);
            }
        }
        if let Some(b'e' | b'E') = self.peek() {
            self.position += 1;
            if let Some(b'+' | b'-') = self.peek() {
                self.position += 1;
            }
            if self.eat_digits() == 0 {
                return Err(Error::InvalidValue);
            }
        }

        let number: f64 = self.input[start..self.position]
            .parse()
            .map_err(|_| Error::InvalidValue)?;
        // Overflow saturates to infinity; underflow to zero is plain IEEE-754
        // behavior and stays accepted.
        if number.is_infinite() {
            return Err(Error::NumberTooBig);
        }
        Ok(Value::Number(number))
    }

    /// Decodes a quoted string into an owned `String` via the scratch
    /// buffer. The buffer is rolled back to its pre-call mark on both
    /// success and failure, so nested strings never see each other's bytes.
    fn parse_string(&mut self) -> Result<String> {
        let mark = self.scratch.len();
        match self.scan_string() {
            Ok(()) => Ok(self.scratch.split_off(mark)),
            Err(e) => {
                self.scratch.truncate(mark);
                Err(e)
            }
        }
    }

    fn scan_string(&mut self) -> Result<()> {
        debug_assert_eq!(self.peek(), Some(b'"'));
        self.position += 1;
        loop {
            match self.peek() {
                None => return Err(Error::MissQuotationMark),
                Some(b'"') => {
                    self.position += 1;
                    return Ok(());
                }
                Some(b'\\') => {
                    self.position += 1;
                    self.scan_escape()?;
                }
                Some(byte) if byte < 0x20 => return Err(Error::InvalidStringChar),
                Some(_) => {
                    // Copy a maximal run of plain characters as one slice.
                    // Only ASCII bytes terminate the run, so the slice always
                    // falls on char boundaries.
                    let run = self.position;
                    while let Some(byte) = self.peek() {
                        if byte == b'"' || byte == b'\\' || byte < 0x20 {
                            break;
                        }
                        self.position += 1;
                    }
                    self.scratch.push_str(&self.input[run..self.position]);
                }
            }
        }
    }

    fn scan_escape(&mut self) -> Result<()> {
        let Some(byte) = self.peek() else {
            return Err(Error::MissQuotationMark);
        };
        self.position += 1;
        match byte {
            b'"' => self.scratch.push('"'),
            b'\\' => self.scratch.push('\\'),
            b'/' => self.scratch.push('/'),
            b'b' => self.scratch.push('\u{0008}'),
            b'f' => self.scratch.push('\u{000C}'),
            b'n' => self.scratch.push('\n'),
            b'r' => self.scratch.push('\r'),
            b't' => self.scratch.push('\t'),
            b'u' => {
                let decoded = self.scan_unicode_escape()?;
                self.scratch.push(decoded);
            }
            _ => return Err(Error::InvalidStringEscape),
        }
        Ok(())
    }

    /// Decodes `\uXXXX` (the leading `\u` already consumed), pairing
    /// surrogates per the UTF-16 convention: a high surrogate must be
    /// followed by a literal `\u` and a low surrogate in `[DC00, E000)`.
    fn scan_unicode_escape(&mut self) -> Result<char> {
        let code = self.scan_hex4().ok_or(Error::InvalidUnicodeHex)?;
        let code = if (0xD800..0xDC00).contains(&code) {
            if self.peek() != Some(b'\\') {
                return Err(Error::InvalidUnicodeSurrogate);
            }
            self.position += 1;
            if self.peek() != Some(b'u') {
                return Err(Error::InvalidUnicodeSurrogate);
            }
            self.position += 1;
            let low = self.scan_hex4().ok_or(Error::InvalidUnicodeSurrogate)?;
            if !(0xDC00..0xE000).contains(&low) {
                return Err(Error::InvalidUnicodeSurrogate);
            }
            0x10000 + (code - 0xD800) * 0x400 + (low - 0xDC00)
        } else {
            code
        };
        // A lone low surrogate reaches here and is rejected by from_u32.
        char::from_u32(code).ok_or(Error::InvalidUnicodeSurrogate)
    }

    fn scan_hex4(&mut self) -> Option<u32> {
        let mut code = 0u32;
        for _ in 0..4 {
            let digit = (self.peek()? as char).to_digit(16)?;
            self.position += 1;
            code = (code << 4) | digit;
        }
        Some(code)
    }

    fn parse_array(&mut self) -> Result<Value> {
        debug_assert_eq!(self.peek(), Some(b'['));
        self.position += 1;
        self.skip_whitespace();
        match self.peek() {
            None => return Err(Error::MissCommaOrSquareBracket),
            Some(b']') => {
                self.position += 1;
                return Ok(Value::Array(Vec::new()));
            }
            Some(_) => {}
        }

        let mut elements = Vec::new();
        loop {
            elements.push(self.parse_value()?);
            self.skip_whitespace();
            match self.peek() {
                Some(b']') => {
                    self.position += 1;
                    break;
                }
                Some(b',') => {
                    self.position += 1;
                }
                _ => return Err(Error::MissCommaOrSquareBracket),
            }
        }
        Ok(Value::Array(elements))
    }

    fn parse_object(&mut self) -> Result<Value> {
        debug_assert_eq!(self.peek(), Some(b'{'));
        self.position += 1;
        self.skip_whitespace();
        match self.peek() {
            None => return Err(Error::MissCommaOrCurlyBracket),
            Some(b'}') => {
                self.position += 1;
                return Ok(Value::Object(Object::new()));
            }
            Some(_) => {}
        }

        let mut object = Object::new();
        loop {
            if self.peek() != Some(b'"') {
                return Err(Error::MissKey);
            }
            let key = self.parse_string()?;
            self.skip_whitespace();
            if self.peek() != Some(b':') {
                return Err(Error::MissColon);
            }
            self.position += 1;

            let value = self.parse_value()?;
            // Duplicate keys are appended as-is, never merged or rejected.
            object.push(key, value);

            self.skip_whitespace();
            match self.peek() {
                Some(b'}') => {
                    self.position += 1;
                    break;
                }
                Some(b',') => {
                    self.position += 1;
                    self.skip_whitespace();
                }
                _ => return Err(Error::MissCommaOrCurlyBracket),
            }
        }
        Ok(Value::Object(object))
    }
}
