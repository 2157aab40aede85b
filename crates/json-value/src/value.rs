//! The dynamically-typed JSON tree.
//!
//! A [`Value`] owns its children outright: cloning deep-copies the subtree and
//! [`Value::take`] moves it out, leaving `null` behind.
//!
//! Two key lookups with different contracts are exposed:
//! - [`Value::entry`] never fails. It turns the node into an object when it is
//!   not one already and inserts a `null` entry for a missing key.
//! - [`Value::at`] never mutates. It reports [`ValueError::TypeMismatch`] for a
//!   non-object and [`ValueError::KeyNotFound`] for a missing key.

use std::collections::HashMap;

use crate::error::{ValueError, ValueResult};

/// Ordered sequence of child values.
pub type Array = Vec<Value>;

/// Unordered mapping from byte-string keys to child values.
///
/// Iteration order is unspecified and does not follow insertion order.
pub type Object = HashMap<Vec<u8>, Value>;

/// Marker type selecting the `null` payload in typed queries such as
/// `value.is::<Null>()`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Null;

/// One node of a JSON document.
///
/// Strings are raw byte sequences: nothing checks their encoding until the
/// value is printed.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Value {
    #[default]
    Null,
    Boolean(bool),
    Number(f64),
    String(Vec<u8>),
    Array(Array),
    Object(Object),
}

impl Value {
    /// Creates an empty object.
    pub fn object() -> Self {
        Value::Object(Object::new())
    }

    /// Creates an empty array.
    pub fn array() -> Self {
        Value::Array(Array::new())
    }

    /// Name of the payload variant, for diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Boolean(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn is_boolean(&self) -> bool {
        matches!(self, Value::Boolean(_))
    }

    pub fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    /// `true` for every payload except `null`.
    ///
    /// Empty strings, arrays and objects are truthy.
    pub fn is_truthy(&self) -> bool {
        !self.is_null()
    }

    /// Returns the entry for `key`, creating it as `null` when absent.
    ///
    /// A non-object node is first replaced with an empty object and its
    /// previous payload is dropped.
    pub fn entry<K: AsRef<[u8]>>(&mut self, key: K) -> &mut Value {
        if !self.is_object() {
            log::trace!("replacing {} payload with an object", self.type_name());
            *self = Value::object();
        }
        match self {
            Value::Object(map) => map.entry(key.as_ref().to_vec()).or_default(),
            _ => unreachable!("payload was replaced with an object above"),
        }
    }

    /// Looks up `key` without modifying the tree.
    pub fn at<K: AsRef<[u8]>>(&self, key: K) -> ValueResult<&Value> {
        let key = key.as_ref();
        match self {
            Value::Object(map) => map
                .get(key)
                .ok_or_else(|| ValueError::KeyNotFound(String::from_utf8_lossy(key).into_owned())),
            other => Err(ValueError::TypeMismatch {
                found: other.type_name(),
            }),
        }
    }

    /// Copy of the entry for `key`, or `null` when this is not an object or
    /// the key is absent.
    pub fn get<K: AsRef<[u8]>>(&self, key: K) -> Value {
        match self {
            Value::Object(map) => map.get(key.as_ref()).cloned().unwrap_or_default(),
            _ => Value::Null,
        }
    }

    /// Copy of the element at `index`, or `null` when this is not an array or
    /// the index is out of range.
    pub fn get_index(&self, index: usize) -> Value {
        match self {
            Value::Array(items) => items.get(index).cloned().unwrap_or_default(),
            _ => Value::Null,
        }
    }

    pub fn has<K: AsRef<[u8]>>(&self, key: K) -> bool {
        match self {
            Value::Object(map) => map.contains_key(key.as_ref()),
            _ => false,
        }
    }

    /// Number of children of an array or object; `0` for scalars.
    pub fn size(&self) -> usize {
        match self {
            Value::Array(items) => items.len(),
            Value::Object(map) => map.len(),
            _ => 0,
        }
    }

    /// Replaces the whole payload. Nothing of the old payload is kept.
    pub fn set<T: Into<Value>>(&mut self, value: T) -> &mut Value {
        *self = value.into();
        self
    }

    /// Moves the payload out and leaves `null` in its place.
    pub fn take(&mut self) -> Value {
        std::mem::take(self)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Raw bytes of a string payload.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// String payload, if it is valid UTF-8.
    pub fn as_str(&self) -> Option<&str> {
        self.as_bytes().and_then(|s| std::str::from_utf8(s).ok())
    }

    pub fn as_array(&self) -> Option<&Array> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_array_mut(&mut self) -> Option<&mut Array> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_object_mut(&mut self) -> Option<&mut Object> {
        match self {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }
}

impl From<&Value> for bool {
    fn from(value: &Value) -> Self {
        value.is_truthy()
    }
}
