//! Ordered member list for JSON objects.
//!
//! This module provides [`Object`], the payload behind
//! [`Value::Object`](crate::Value::Object). It keeps members as an ordered
//! list of `(key, value)` pairs rather than a map:
//!
//! - **Insertion order is preserved**: members serialize back in the order
//!   they appeared in the source text.
//! - **Duplicate keys are permitted**: RFC 8259 does not require unique
//!   names, so `{"a":1,"a":2}` parses to an object of two members. Nothing
//!   is merged or rejected; lookups are primarily by index.
//!
//! ## Examples
//!
//! ```rust
//! use yajson::{Object, Value};
//!
//! let mut obj = Object::new();
//! obj.push("b".to_string(), Value::Number(1.0));
//! obj.push("a".to_string(), Value::Number(2.0));
//! obj.push("b".to_string(), Value::Number(3.0));
//!
//! assert_eq!(obj.len(), 3);
//! assert_eq!(obj.key(0), "b");
//! assert_eq!(obj.key(2), "b");
//! // get() finds the first member with a matching key
//! assert_eq!(obj.get("b"), Some(&Value::Number(1.0)));
//! ```

use crate::Value;

/// An ordered sequence of `(key, value)` members of a JSON object.
///
/// Unlike a map, an `Object` never deduplicates keys. Index-based access
/// ([`key`](Object::key), [`value`](Object::value)) is the primary lookup
/// path; [`get`](Object::get) is a linear-scan convenience returning the
/// first match.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Object {
    members: Vec<(String, Value)>,
}

impl Object {
    /// Creates an empty `Object`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use yajson::Object;
    ///
    /// let obj = Object::new();
    /// assert!(obj.is_empty());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Object {
            members: Vec::new(),
        }
    }

    /// Creates an empty `Object` with the specified member capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Object {
            members: Vec::with_capacity(capacity),
        }
    }

    /// Appends a member to the end of the object.
    ///
    /// Existing members with the same key are left untouched; the new member
    /// is always appended.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use yajson::{Object, Value};
    ///
    /// let mut obj = Object::new();
    /// obj.push("a".to_string(), Value::Null);
    /// obj.push("a".to_string(), Value::Bool(true));
    /// assert_eq!(obj.len(), 2);
    /// ```
    pub fn push(&mut self, key: String, value: Value) {
        self.members.push((key, value));
    }

    /// Returns the number of members, duplicates included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns `true` if the object has no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Returns the key of the member at `idx`.
    ///
    /// # Panics
    ///
    /// Panics if `idx >= self.len()`.
    #[must_use]
    pub fn key(&self, idx: usize) -> &str {
        &self.members[idx].0
    }

    /// Returns the value of the member at `idx`.
    ///
    /// # Panics
    ///
    /// Panics if `idx >= self.len()`.
    #[must_use]
    pub fn value(&self, idx: usize) -> &Value {
        &self.members[idx].1
    }

    /// Returns a mutable reference to the value of the member at `idx`.
    ///
    /// # Panics
    ///
    /// Panics if `idx >= self.len()`.
    pub fn value_mut(&mut self, idx: usize) -> &mut Value {
        &mut self.members[idx].1
    }

    /// Returns the value of the first member whose key equals `key`, if any.
    ///
    /// Later duplicates are not consulted; iterate or index for those.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.members.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Returns an iterator over the keys, in member order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.members.iter().map(|(k, _)| k.as_str())
    }

    /// Returns an iterator over the values, in member order.
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.members.iter().map(|(_, v)| v)
    }

    /// Returns an iterator over `(key, value)` members, in order.
    pub fn iter(&self) -> std::slice::Iter<'_, (String, Value)> {
        self.members.iter()
    }
}

impl From<Vec<(String, Value)>> for Object {
    fn from(members: Vec<(String, Value)>) -> Self {
        Object { members }
    }
}

impl IntoIterator for Object {
    type Item = (String, Value);
    type IntoIter = std::vec::IntoIter<(String, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.into_iter()
    }
}

impl<'a> IntoIterator for &'a Object {
    type Item = &'a (String, Value);
    type IntoIter = std::slice::Iter<'a, (String, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}

impl FromIterator<(String, Value)> for Object {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        Object {
            members: Vec::from_iter(iter),
        }
    }
}
