//! Conversions between host types and [`Value`].
//!
//! Assignment goes through `From<T> for Value`, so anything convertible can be
//! passed to [`Value::set`] or `Value::from`. Extraction goes through
//! [`FromValue`], implemented once for each supported host type:
//!
//! | host type                     | payload                      |
//! |-------------------------------|------------------------------|
//! | [`Null`]                      | `null`                       |
//! | `bool`                        | boolean                      |
//! | `f64`, `f32`, every integer   | number                       |
//! | `Vec<u8>`                     | string (raw bytes)           |
//! | `String`                      | string holding valid UTF-8   |
//! | [`Array`]                     | array                        |
//! | [`Object`]                    | object                       |
//! | `Option<T>`                   | `null` or `T`'s payload      |
//!
//! Integers are stored as `f64`. Values outside the exact-integer range of a
//! double lose precision, and extraction casts with `as`, so out-of-range
//! numbers saturate in the target type.

use std::collections::HashMap;

use crate::value::{Array, Null, Object, Value};

/// Typed view of a [`Value`] payload.
///
/// `Default::default()` is the zero value returned by [`Value::to`] when the
/// payload does not match.
pub trait FromValue: Default {
    /// Whether the payload's variant belongs to this type.
    fn matches(value: &Value) -> bool;

    /// The converted payload, or `None` when [`matches`](Self::matches) is false.
    fn from_value(value: &Value) -> Option<Self>;
}

impl Value {
    /// `true` when the payload is of `T`'s variant.
    pub fn is<T: FromValue>(&self) -> bool {
        T::matches(self)
    }

    /// The payload as `T`, or `T`'s zero value on mismatch.
    pub fn to<T: FromValue>(&self) -> T {
        T::from_value(self).unwrap_or_default()
    }

    /// The payload as `T`, or `fallback` on mismatch.
    pub fn to_or<T: FromValue>(&self, fallback: T) -> T {
        T::from_value(self).unwrap_or(fallback)
    }
}

impl FromValue for Null {
    fn matches(value: &Value) -> bool {
        value.is_null()
    }

    fn from_value(value: &Value) -> Option<Self> {
        value.is_null().then_some(Null)
    }
}

impl FromValue for bool {
    fn matches(value: &Value) -> bool {
        value.is_boolean()
    }

    fn from_value(value: &Value) -> Option<Self> {
        value.as_bool()
    }
}

impl FromValue for f64 {
    fn matches(value: &Value) -> bool {
        value.is_number()
    }

    fn from_value(value: &Value) -> Option<Self> {
        value.as_f64()
    }
}

impl FromValue for f32 {
    fn matches(value: &Value) -> bool {
        value.is_number()
    }

    fn from_value(value: &Value) -> Option<Self> {
        value.as_f64().map(|n| n as f32)
    }
}

impl FromValue for Vec<u8> {
    fn matches(value: &Value) -> bool {
        value.is_string()
    }

    fn from_value(value: &Value) -> Option<Self> {
        value.as_bytes().map(<[u8]>::to_vec)
    }
}

/// Only string payloads that decode as UTF-8 match `String`; use `Vec<u8>`
/// to read arbitrary bytes.
impl FromValue for String {
    fn matches(value: &Value) -> bool {
        value.as_str().is_some()
    }

    fn from_value(value: &Value) -> Option<Self> {
        value.as_str().map(str::to_owned)
    }
}

impl FromValue for Array {
    fn matches(value: &Value) -> bool {
        value.is_array()
    }

    fn from_value(value: &Value) -> Option<Self> {
        value.as_array().cloned()
    }
}

impl FromValue for Object {
    fn matches(value: &Value) -> bool {
        value.is_object()
    }

    fn from_value(value: &Value) -> Option<Self> {
        value.as_object().cloned()
    }
}

/// `null` and `T`'s payload both match. Either a `null` or a mismatching
/// payload extracts as `None`.
impl<T: FromValue> FromValue for Option<T> {
    fn matches(value: &Value) -> bool {
        value.is_null() || T::matches(value)
    }

    fn from_value(value: &Value) -> Option<Self> {
        Self::matches(value).then(|| T::from_value(value))
    }
}

macro_rules! impl_integral {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(n: $ty) -> Self {
                    Value::Number(n as f64)
                }
            }

            impl FromValue for $ty {
                fn matches(value: &Value) -> bool {
                    value.is_number()
                }

                fn from_value(value: &Value) -> Option<Self> {
                    value.as_f64().map(|n| n as $ty)
                }
            }
        )*
    };
}

impl_integral!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl From<Null> for Value {
    fn from(_: Null) -> Self {
        Value::Null
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<f32> for Value {
    fn from(n: f32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.as_bytes().to_vec())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s.into_bytes())
    }
}

impl From<&[u8]> for Value {
    fn from(bytes: &[u8]) -> Self {
        Value::String(bytes.to_vec())
    }
}

impl From<Vec<u8>> for Value {
    fn from(bytes: Vec<u8>) -> Self {
        Value::String(bytes)
    }
}

impl From<Array> for Value {
    fn from(items: Array) -> Self {
        Value::Array(items)
    }
}

impl From<Object> for Value {
    fn from(map: Object) -> Self {
        Value::Object(map)
    }
}

impl From<HashMap<String, Value>> for Value {
    fn from(map: HashMap<String, Value>) -> Self {
        map.into_iter().map(|(k, v)| (k.into_bytes(), v)).collect()
    }
}

/// `None` stores `null`; `Some(x)` stores `x`.
impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Value::Null, Into::into)
    }
}

impl FromIterator<Value> for Value {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Value::Array(iter.into_iter().collect())
    }
}

impl<K: Into<Vec<u8>>> FromIterator<(K, Value)> for Value {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Value::Object(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}
