//! Loose scalar coercion over `serde_json::Value`.
//!
//! Records originate in a dynamically typed grid editor, so a numeric
//! field may arrive as a number, a boolean, a null, or a numeric-looking
//! string. These helpers give every crate the same coercion rules.

use serde_json::Value;

/// Coerce a scalar to a number.
///
/// Numbers pass through, booleans map to 1/0, null maps to 0, and strings
/// are trimmed and parsed (an empty or all-whitespace string is 0).
/// Containers, unparseable strings, and non-finite results yield `None`.
pub fn numeric_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64().filter(|v| v.is_finite()),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::Null => Some(0.0),
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return Some(0.0);
            }
            trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
        }
        Value::Array(_) | Value::Object(_) => None,
    }
}

/// True when [`numeric_value`] can coerce the value.
pub fn is_numeric_like(value: &Value) -> bool {
    numeric_value(value).is_some()
}

/// Render a scalar as the grid editor would display it.
///
/// Null renders as `"null"`, booleans as `"true"`/`"false"`, and whole
/// floats without the trailing `.0`. Containers render as JSON text, which
/// callers are not expected to rely on.
pub fn scalar_to_string(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => {
            let s = n.to_string();
            if s.contains('.') && !s.contains(['e', 'E']) {
                s.trim_end_matches('0').trim_end_matches('.').to_string()
            } else {
                s
            }
        }
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Coerce `source` to the scalar type of `template`, the rule applied when
/// a pasted cell lands on a typed field.
///
/// A number template applies [`numeric_value`] and keeps the source
/// unchanged when it does not coerce; a boolean template matches yes/no
/// tokens on the string form of the source; every other template takes the
/// string rendering of the source (containers stay as they are).
pub fn coerce_like(template: &Value, source: &Value) -> Value {
    match template {
        Value::Number(_) => match numeric_value(source) {
            Some(v) => Value::from(v),
            None => source.clone(),
        },
        Value::Bool(_) => Value::Bool(string_truthiness(&scalar_to_string(source))),
        _ => match source {
            Value::Array(_) | Value::Object(_) => source.clone(),
            scalar => Value::String(scalar_to_string(scalar)),
        },
    }
}

// "true"/"yes"/"1" and "false"/"no"/"0" are the paste conventions of the
// grid editor; anything else falls back to non-empty truthiness.
fn string_truthiness(raw: &str) -> bool {
    match raw.trim().to_lowercase().as_str() {
        "true" | "yes" | "1" => true,
        "false" | "no" | "0" => false,
        other => !other.is_empty(),
    }
}
