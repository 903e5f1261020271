//! Error types for JSON parsing and stringification.
//!
//! Parsing follows a first-detected-wins policy: the first violation of the
//! JSON grammar aborts the whole `parse` call, and exactly one variant below
//! describes what went wrong. There is no recovery, retry, or multi-error
//! aggregation.
//!
//! Accessor misuse (asking a [`Value`](crate::Value) for the wrong kind of
//! payload) is a programmer error, not a parse error; those accessors panic
//! instead of returning a variant from this module.
//!
//! ## Examples
//!
//! ```rust
//! use yajson::{parse, Error};
//!
//! assert_eq!(parse(""), Err(Error::ExpectValue));
//! assert_eq!(parse("[1"), Err(Error::MissCommaOrSquareBracket));
//! assert_eq!(parse("1e309"), Err(Error::NumberTooBig));
//! ```

use thiserror::Error;

/// All errors that can occur while parsing JSON text or emitting it.
///
/// The parse variants are mutually exclusive per call: a failed `parse`
/// reports the first grammar violation it encountered and nothing else.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The input was empty or contained only whitespace.
    #[error("expected a value, found end of input")]
    ExpectValue,

    /// A literal or number did not match the JSON grammar.
    #[error("invalid value")]
    InvalidValue,

    /// A complete value was parsed but input remained after it.
    #[error("extra content after the top-level value")]
    RootNotSingular,

    /// A syntactically valid number overflowed the range of an f64.
    #[error("number out of range of a double")]
    NumberTooBig,

    /// A string ran to end of input before its closing quote.
    #[error("missing closing quotation mark")]
    MissQuotationMark,

    /// A backslash was followed by an unrecognized escape character.
    #[error("invalid escape sequence in string")]
    InvalidStringEscape,

    /// An unescaped control character (byte < 0x20) appeared in a string.
    #[error("unescaped control character in string")]
    InvalidStringChar,

    /// A `\u` escape was not followed by four hex digits.
    #[error("invalid hex digits in unicode escape")]
    InvalidUnicodeHex,

    /// A surrogate escape had no valid partner.
    #[error("invalid unicode surrogate pair")]
    InvalidUnicodeSurrogate,

    /// An array element was not followed by `,` or `]`.
    #[error("missing comma or closing square bracket in array")]
    MissCommaOrSquareBracket,

    /// An object member did not start with a quoted string key.
    #[error("missing object key")]
    MissKey,

    /// An object key was not followed by `:`.
    #[error("missing colon after object key")]
    MissColon,

    /// An object member was not followed by `,` or `}`.
    #[error("missing comma or closing curly bracket in object")]
    MissCommaOrCurlyBracket,

    /// Stringify was handed a NaN or infinite number, which JSON cannot
    /// represent.
    #[error("non-finite number cannot be represented in JSON")]
    NonFiniteNumber,

    /// IO error while reading input or writing output.
    #[error("IO error: {0}")]
    Io(String),
}

impl Error {
    /// Creates an I/O error from a display message.
    pub fn io<T: std::fmt::Display>(msg: T) -> Self {
        Error::Io(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
