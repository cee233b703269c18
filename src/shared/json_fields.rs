//! Tolerant field access over parsed JSON documents.
//!
//! Every accessor answers "absent" for missing keys, `null`, and values of
//! the wrong JSON type, so extraction code never has to fail on a sparse
//! document.

use serde_json::{Map, Value};
use tracing::debug;

/// Largest magnitude at which every integral `f64` is exact
const MAX_EXACT_F64_INT: f64 = 9_007_199_254_740_992.0;

pub struct JsonFields;

impl JsonFields {
    /// Object stored under `key`, if it is a JSON object
    pub fn object<'a>(value: &'a Value, key: &str) -> Option<&'a Map<String, Value>> {
        value.get(key).and_then(Value::as_object)
    }

    /// Array stored under `key`; empty when absent, null or not an array
    pub fn list<'a>(value: &'a Value, key: &str) -> &'a [Value] {
        value
            .get(key)
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// String stored under `key`
    pub fn string(value: &Value, key: &str) -> Option<String> {
        value.get(key).and_then(Value::as_str).map(str::to_string)
    }

    /// Integer stored under `key`. Integral floats such as `12.0` are accepted.
    pub fn integer(value: &Value, key: &str) -> Option<i64> {
        value.get(key).and_then(Self::as_integer)
    }

    /// Any JSON number stored under `key`
    pub fn float(value: &Value, key: &str) -> Option<f64> {
        value.get(key).and_then(Value::as_f64)
    }

    fn as_integer(value: &Value) -> Option<i64> {
        if let Some(n) = value.as_i64() {
            return Some(n);
        }
        let f = value.as_f64()?;
        if f.fract() != 0.0 {
            return None;
        }
        if f.abs() > MAX_EXACT_F64_INT {
            debug!(value = %value, "integer out of range, field left empty");
            return None;
        }
        Some(f as i64)
    }
}
