//! Lenient readers for loosely typed request fields.

use serde_json::Value;

/// Numbers pass through; strings, booleans and the rest are dropped.
pub fn number(value: Option<&Value>) -> Option<f64> {
    value.and_then(Value::as_f64)
}

/// Keeps the string entries of a JSON array and ignores everything else.
pub fn string_list(values: Option<&[Value]>) -> Option<Vec<String>> {
    values.map(|values| {
        values
            .iter()
            .filter_map(|v| v.as_str().map(str::to_string))
            .collect()
    })
}

/// Integers pass through, floats are truncated, anything else is dropped.
pub fn integer(value: Option<&Value>) -> Option<i64> {
    value.and_then(|v| v.as_i64().or_else(|| v.as_f64().map(|f| f as i64)))
}
