//! Sparse query construction shared by every filtered list endpoint.
//!
//! A filter struct is serialized to a JSON object and each entry becomes one
//! query pair. Absent (`null`) fields and empty strings are dropped; `0` and
//! `false` are real constraints and are kept. Flattened pass-through entries
//! are written after the typed fields, so a pass-through key equal to a typed
//! field's name replaces that field's value.

use serde::ser::Error as _;
use serde::Serialize;
use serde_json::Value;

/// Build query pairs from a typed filter struct.
///
/// Keys are emitted verbatim, so pass-through keys that the SDK does not know
/// about reach the backend unchanged.
pub fn sparse_query<T: Serialize + ?Sized>(
    filters: &T,
) -> Result<Vec<(String, String)>, serde_json::Error> {
    let map = match serde_json::to_value(filters)? {
        Value::Object(map) => map,
        Value::Null => return Ok(Vec::new()),
        other => {
            return Err(serde_json::Error::custom(format!(
                "query filters must serialize to an object, got {}",
                other
            )))
        }
    };

    Ok(map
        .into_iter()
        .filter_map(|(key, value)| query_value(value).map(|v| (key, v)))
        .collect())
}

fn query_value(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        // Arrays and objects go out as compact JSON.
        other => Some(other.to_string()),
    }
}
