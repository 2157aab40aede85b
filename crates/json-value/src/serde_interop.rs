//! Conversions to and from [`serde_json::Value`].
//!
//! `serde_json` strings are always UTF-8 and its numbers are always finite, so
//! the conversion out of [`Value`] is lossy in two places:
//! - string payloads and keys that are not valid UTF-8 are decoded with
//!   U+FFFD replacement characters;
//! - NaN and infinities become `null`.
//!
//! Integral doubles within the exact-integer range convert to integer
//! `serde_json` numbers, so `json!(1)` and `Value::from(1)` map onto each
//! other.

use crate::value::{Object, Value};

/// Largest magnitude below which every integer is exactly representable.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Boolean(b),
            serde_json::Value::Number(n) => n.as_f64().map_or(Value::Null, Value::Number),
            serde_json::Value::String(s) => Value::String(s.into_bytes()),
            serde_json::Value::Array(items) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => Value::Object(
                map.into_iter()
                    .map(|(k, v)| (k.into_bytes(), Value::from(v)))
                    .collect::<Object>(),
            ),
        }
    }
}

impl From<&Value> for serde_json::Value {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => serde_json::Value::Null,
            Value::Boolean(b) => serde_json::Value::Bool(*b),
            Value::Number(n) => number_to_json(*n),
            Value::String(s) => serde_json::Value::String(String::from_utf8_lossy(s).into_owned()),
            Value::Array(items) => {
                serde_json::Value::Array(items.iter().map(serde_json::Value::from).collect())
            }
            Value::Object(map) => serde_json::Value::Object(
                map.iter()
                    .map(|(k, v)| {
                        (
                            String::from_utf8_lossy(k).into_owned(),
                            serde_json::Value::from(v),
                        )
                    })
                    .collect(),
            ),
        }
    }
}

impl From<Value> for serde_json::Value {
    fn from(value: Value) -> Self {
        serde_json::Value::from(&value)
    }
}

fn number_to_json(n: f64) -> serde_json::Value {
    if n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER {
        return serde_json::Value::from(n as i64);
    }
    serde_json::Number::from_f64(n).map_or(serde_json::Value::Null, serde_json::Value::Number)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn from_serde_json() {
        let v = Value::from(json!({"a": [1, 2.5, "x", null, true], "b": {}}));
        assert!(v.is_object());
        assert_eq!(v.get("a").size(), 5);
        assert_eq!(v.get("a").get_index(0).to::<i32>(), 1);
        assert_eq!(v.get("a").get_index(1).to::<f64>(), 2.5);
        assert_eq!(v.get("a").get_index(2).to::<String>(), "x");
        assert!(v.get("a").get_index(3).is_null());
        assert!(v.get("b").is_object());
    }

    #[test]
    fn to_serde_json() {
        let mut v = Value::default();
        v.entry("n").set(3);
        v.entry("f").set(0.5);
        v.entry("s").set("str");
        v.entry("l").set(vec![Value::Null, Value::from(false)]);
        assert_eq!(
            serde_json::Value::from(&v),
            json!({"n": 3, "f": 0.5, "s": "str", "l": [null, false]})
        );
    }

    #[test]
    fn non_finite_numbers_become_null() {
        assert_eq!(serde_json::Value::from(Value::from(f64::NAN)), json!(null));
        assert_eq!(serde_json::Value::from(Value::from(f64::INFINITY)), json!(null));
    }

    #[test]
    fn invalid_utf8_is_replaced() {
        let v = Value::String(vec![b'a', 0xFF]);
        assert_eq!(serde_json::Value::from(&v), json!("a\u{FFFD}"));
    }

    #[test]
    fn large_integral_doubles_stay_floats() {
        assert_eq!(serde_json::Value::from(Value::from(1e300)), json!(1e300));
    }
}
