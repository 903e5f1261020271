//! The JSON document model.
//!
//! This module provides the [`Value`] enum representing any JSON value, the
//! [`Kind`] tag describing which variant is live, and the accessor surface
//! for reading payloads back out.
//!
//! ## Core Types
//!
//! - [`Value`]: a tagged, recursively-structured JSON value (null, bool,
//!   number, string, array, object)
//! - [`Kind`]: the discriminant of a `Value`, useful for dispatch and for
//!   diagnostics
//!
//! ## Ownership
//!
//! A `Value` exclusively owns its payload. `Clone` performs a full deep
//! copy; [`take`](Value::take) transfers ownership and leaves `Null` behind,
//! so aliasing is structurally impossible. JSON text cannot express cycles,
//! so the tree is always finite and acyclic.
//!
//! ## Accessors
//!
//! Two styles are provided:
//!
//! - `as_*` methods return `Option` and never panic — use these when the
//!   kind is not known in advance.
//! - `get_*` methods assert the kind and panic on mismatch — use these when
//!   the kind is already established (e.g. right after checking
//!   [`kind`](Value::kind)). A mismatch is a programmer error, never a
//!   silent coercion.
//!
//! ```rust
//! use yajson::{parse, Kind, Value};
//!
//! let doc = parse("{\"name\":\"Alice\",\"age\":30}").unwrap();
//! assert_eq!(doc.kind(), Kind::Object);
//! assert_eq!(doc.get_object_key(0), "name");
//! assert_eq!(doc.get_object_value(1).get_number(), 30.0);
//! ```

use crate::Object;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// The discriminant of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Kind::Null => "null",
            Kind::Bool => "bool",
            Kind::Number => "number",
            Kind::String => "string",
            Kind::Array => "array",
            Kind::Object => "object",
        };
        f.write_str(name)
    }
}

/// A dynamically-typed representation of any JSON value.
///
/// Exactly one payload is live at a time, selected by the enum variant.
/// Numbers are always IEEE-754 doubles; strings are owned UTF-8 and may
/// contain embedded NUL characters decoded from `\u0000` escapes.
///
/// # Examples
///
/// ```rust
/// use yajson::Value;
///
/// let null = Value::Null;
/// let num = Value::Number(42.0);
/// let text = Value::String("hello".to_string());
///
/// assert!(null.is_null());
/// assert!(num.is_number());
/// assert!(text.is_string());
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Array(Vec<Value>),
    Object(Object),
}

impl Value {
    /// Returns the [`Kind`] of this value.
    #[inline]
    #[must_use]
    pub const fn kind(&self) -> Kind {
        match self {
            Value::Null => Kind::Null,
            Value::Bool(_) => Kind::Bool,
            Value::Number(_) => Kind::Number,
            Value::String(_) => Kind::String,
            Value::Array(_) => Kind::Array,
            Value::Object(_) => Kind::Object,
        }
    }

    /// Returns `true` if the value is null.
    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns `true` if the value is a number.
    #[inline]
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    /// Returns `true` if the value is a string.
    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    /// Returns `true` if the value is an array.
    #[inline]
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    /// Returns `true` if the value is an object.
    #[inline]
    #[must_use]
    pub const fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    /// Returns `true` if the value is the boolean `expected`.
    ///
    /// # Panics
    ///
    /// Panics if the value is not a boolean at all; a non-boolean queried
    /// this way indicates a bug in the caller, not a `false` answer.
    #[must_use]
    pub fn is_bool(&self, expected: bool) -> bool {
        match self {
            Value::Bool(b) => *b == expected,
            other => panic!("json value is {}, not bool", other.kind()),
        }
    }

    /// If the value is a boolean, returns it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// If the value is a number, returns it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// If the value is a string, returns a reference to it. Otherwise
    /// returns `None`.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// If the value is an array, returns a reference to it. Otherwise
    /// returns `None`.
    #[inline]
    #[must_use]
    pub fn as_array(&self) -> Option<&Vec<Value>> {
        match self {
            Value::Array(arr) => Some(arr),
            _ => None,
        }
    }

    /// If the value is an object, returns a reference to it. Otherwise
    /// returns `None`.
    #[inline]
    #[must_use]
    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Value::Object(obj) => Some(obj),
            _ => None,
        }
    }

    /// Returns the number payload.
    ///
    /// # Panics
    ///
    /// Panics if the value is not a number.
    #[must_use]
    pub fn get_number(&self) -> f64 {
        match self {
            Value::Number(n) => *n,
            other => panic!("json value is {}, not number", other.kind()),
        }
    }

    /// Returns the string payload.
    ///
    /// # Panics
    ///
    /// Panics if the value is not a string.
    #[must_use]
    pub fn get_string(&self) -> &str {
        match self {
            Value::String(s) => s,
            other => panic!("json value is {}, not string", other.kind()),
        }
    }

    /// Returns the number of elements in the array payload.
    ///
    /// # Panics
    ///
    /// Panics if the value is not an array.
    #[must_use]
    pub fn get_array_size(&self) -> usize {
        match self {
            Value::Array(arr) => arr.len(),
            other => panic!("json value is {}, not array", other.kind()),
        }
    }

    /// Returns the array element at `idx`.
    ///
    /// # Panics
    ///
    /// Panics if the value is not an array or `idx` is out of range.
    #[must_use]
    pub fn get_array_element(&self, idx: usize) -> &Value {
        match self {
            Value::Array(arr) => &arr[idx],
            other => panic!("json value is {}, not array", other.kind()),
        }
    }

    /// Returns the number of members in the object payload, duplicate keys
    /// included.
    ///
    /// # Panics
    ///
    /// Panics if the value is not an object.
    #[must_use]
    pub fn get_object_size(&self) -> usize {
        match self {
            Value::Object(obj) => obj.len(),
            other => panic!("json value is {}, not object", other.kind()),
        }
    }

    /// Returns the key of the object member at `idx`.
    ///
    /// # Panics
    ///
    /// Panics if the value is not an object or `idx` is out of range.
    #[must_use]
    pub fn get_object_key(&self, idx: usize) -> &str {
        match self {
            Value::Object(obj) => obj.key(idx),
            other => panic!("json value is {}, not object", other.kind()),
        }
    }

    /// Returns the value of the object member at `idx`.
    ///
    /// # Panics
    ///
    /// Panics if the value is not an object or `idx` is out of range.
    #[must_use]
    pub fn get_object_value(&self, idx: usize) -> &Value {
        match self {
            Value::Object(obj) => obj.value(idx),
            other => panic!("json value is {}, not object", other.kind()),
        }
    }

    /// Releases any payload and resets the value to `Null`.
    ///
    /// Idempotent: clearing an already-null value is a no-op.
    pub fn clear(&mut self) {
        *self = Value::Null;
    }

    /// Takes the value out, leaving `Null` in its place.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use yajson::Value;
    ///
    /// let mut v = Value::String("owned".to_string());
    /// let moved = v.take();
    /// assert!(v.is_null());
    /// assert_eq!(moved.get_string(), "owned");
    /// ```
    pub fn take(&mut self) -> Value {
        std::mem::take(self)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i8> for Value {
    fn from(value: i8) -> Self {
        Value::Number(value as f64)
    }
}

impl From<i16> for Value {
    fn from(value: i16) -> Self {
        Value::Number(value as f64)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Number(value as f64)
    }
}

impl From<u8> for Value {
    fn from(value: u8) -> Self {
        Value::Number(value as f64)
    }
}

impl From<u16> for Value {
    fn from(value: u16) -> Self {
        Value::Number(value as f64)
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Number(value as f64)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Number(value as f64)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::Array(value)
    }
}

impl From<Object> for Value {
    fn from(value: Object) -> Self {
        Value::Object(value)
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(n) => serializer.serialize_f64(*n),
            Value::String(s) => serializer.serialize_str(s),
            Value::Array(arr) => {
                use serde::ser::SerializeSeq;
                let mut seq = serializer.serialize_seq(Some(arr.len()))?;
                for element in arr {
                    seq.serialize_element(element)?;
                }
                seq.end()
            }
            Value::Object(obj) => {
                use serde::ser::SerializeMap;
                let mut map = serializer.serialize_map(Some(obj.len()))?;
                for (k, v) in obj.iter() {
                    map.serialize_entry(k, v)?;
                }
                map.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct ValueVisitor;

        impl<'de> Visitor<'de> for ValueVisitor {
            type Value = Value;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("any valid JSON value")
            }

            fn visit_bool<E>(self, value: bool) -> Result<Self::Value, E> {
                Ok(Value::Bool(value))
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E> {
                Ok(Value::Number(value as f64))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E> {
                Ok(Value::Number(value as f64))
            }

            fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E> {
                Ok(Value::Number(value))
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E> {
                Ok(Value::String(value.to_string()))
            }

            fn visit_string<E>(self, value: String) -> Result<Self::Value, E> {
                Ok(Value::String(value))
            }

            fn visit_unit<E>(self) -> Result<Self::Value, E> {
                Ok(Value::Null)
            }

            fn visit_none<E>(self) -> Result<Self::Value, E> {
                Ok(Value::Null)
            }

            fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
            where
                D: Deserializer<'de>,
            {
                Deserialize::deserialize(deserializer)
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: de::SeqAccess<'de>,
            {
                let mut vec = Vec::new();
                while let Some(elem) = seq.next_element()? {
                    vec.push(elem);
                }
                Ok(Value::Array(vec))
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: de::MapAccess<'de>,
            {
                let mut object = Object::new();
                while let Some((key, value)) = map.next_entry()? {
                    object.push(key, value);
                }
                Ok(Value::Object(object))
            }
        }

        deserializer.deserialize_any(ValueVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_null() {
        assert!(Value::default().is_null());
        assert_eq!(Value::default().kind(), Kind::Null);
    }

    #[test]
    fn clear_is_idempotent() {
        let mut v = Value::Array(vec![Value::Number(1.0)]);
        v.clear();
        assert!(v.is_null());
        v.clear();
        assert!(v.is_null());
    }

    #[test]
    fn take_leaves_null_behind() {
        let mut v = Value::Object(Object::new());
        let taken = v.take();
        assert!(v.is_null());
        assert!(taken.is_object());
    }

    #[test]
    fn from_primitives() {
        assert_eq!(Value::from(true), Value::Bool(true));
        assert_eq!(Value::from(42i32), Value::Number(42.0));
        assert_eq!(Value::from(3.5f64), Value::Number(3.5));
        assert_eq!(Value::from("test"), Value::String("test".to_string()));
    }

    #[test]
    fn is_bool_matches_payload() {
        assert!(Value::Bool(true).is_bool(true));
        assert!(!Value::Bool(true).is_bool(false));
        assert!(Value::Bool(false).is_bool(false));
    }

    #[test]
    #[should_panic(expected = "not bool")]
    fn is_bool_on_number_panics() {
        Value::Number(1.0).is_bool(true);
    }

    #[test]
    #[should_panic(expected = "not number")]
    fn get_number_on_string_panics() {
        Value::String("1".to_string()).get_number();
    }

    #[test]
    #[should_panic(expected = "not object")]
    fn get_object_size_on_array_panics() {
        Value::Array(vec![]).get_object_size();
    }

    #[test]
    fn serde_roundtrip_through_json() {
        let mut obj = Object::new();
        obj.push("a".to_string(), Value::Number(1.0));
        obj.push("b".to_string(), Value::Array(vec![Value::Null, Value::Bool(true)]));
        let value = Value::Object(obj);

        let text = serde_json::to_string(&value).unwrap();
        let back: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value, back);
    }
}
