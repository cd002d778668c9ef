//! Whole-record helpers.

use serde_json::{Map, Value};

use crate::identity::{DETACHED_KEY, RESERVED_KEY};

/// Deep-clone a value, renaming every reserved identity key to its parked
/// form so the clone starts life untracked.
///
/// Only key names are rewritten; value text that happens to contain the
/// reserved name is left alone.
pub fn detached_clone(value: &Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut out = Map::with_capacity(map.len());
            for (key, val) in map {
                let key = if key == RESERVED_KEY { DETACHED_KEY } else { key.as_str() };
                out.insert(key.to_string(), detached_clone(val));
            }
            Value::Object(out)
        }
        Value::Array(items) => Value::Array(items.iter().map(detached_clone).collect()),
        scalar => scalar.clone(),
    }
}

/// Recursively blank a record's values in place: numbers to 0, booleans to
/// false, everything else (strings and nulls) to "". The reserved identity
/// key keeps its value.
pub fn reset_values(value: &mut Value) {
    match value {
        Value::Object(map) => {
            for (key, val) in map.iter_mut() {
                if val.is_object() || val.is_array() {
                    reset_values(val);
                } else if key != RESERVED_KEY {
                    *val = blank_of(val);
                }
            }
        }
        Value::Array(items) => {
            for item in items.iter_mut() {
                if item.is_object() || item.is_array() {
                    reset_values(item);
                } else {
                    *item = blank_of(item);
                }
            }
        }
        _ => {}
    }
}

fn blank_of(value: &Value) -> Value {
    match value {
        Value::Number(_) => Value::from(0),
        Value::Bool(_) => Value::Bool(false),
        _ => Value::String(String::new()),
    }
}

/// The record's nth key, in insertion order.
pub fn key_at(record: &Value, index: usize) -> Option<&str> {
    record.as_object()?.keys().nth(index).map(String::as_str)
}
