//! Pulls the reply text out of a model inference result.

use serde_json::Value;

/// JavaScript-style truthiness: `null`, `false`, `0`, `NaN` and `""` are
/// falsy, everything else (including empty arrays/objects) is truthy.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn as_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Returns the reply text of a model result.
///
/// Prefers a truthy `response` field, then `output_text`. A bare JSON
/// string is the reply itself; anything else is returned as compact JSON.
pub fn extract_reply(result: &Value) -> String {
    if let Value::Object(fields) = result {
        for key in ["response", "output_text"] {
            if let Some(value) = fields.get(key).filter(|v| is_truthy(v)) {
                return as_text(value);
            }
        }
    }
    as_text(result)
}
