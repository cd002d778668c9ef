//! Row-level operations over record collections.
//!
//! A collection is an ordered `Vec` of records. The positional operations
//! mirror grid row edits: inserted and moved rows are detached clones, so
//! the grid tracker hands them fresh identity on the next render.
//! Out-of-range indices are no-ops rather than errors.

use lynk_model::{detached_clone, reset_values};
use serde_json::Value;
use tracing::debug;

/// Insert a detached clone of `item` at `pos`, or append when `pos` is
/// `None` or past the end. With `reset`, the clone's values are blanked
/// first (the "new empty row from a template" path).
pub fn insert_item(items: &mut Vec<Value>, item: &Value, pos: Option<usize>, reset: bool) {
    let mut row = detached_clone(item);
    if reset {
        reset_values(&mut row);
    }
    match pos {
        Some(index) if index < items.len() => items.insert(index, row),
        _ => items.push(row),
    }
}

/// Append `n` detached clones of the first row. An empty collection has no
/// template row, so nothing happens.
pub fn append_copies(items: &mut Vec<Value>, n: usize) {
    let Some(template) = items.first().cloned() else {
        debug!("append: no template row, nothing added");
        return;
    };
    for _ in 0..n {
        items.push(detached_clone(&template));
    }
}

/// Remove the row at `index`; out-of-range indices are a no-op.
pub fn remove_item(items: &mut Vec<Value>, index: usize) {
    if index < items.len() {
        items.remove(index);
    }
}

/// Move the row at `from` to `to`, replacing it with a detached clone so
/// the grid tracker treats it as fresh. Equal or out-of-range positions
/// are a no-op.
pub fn move_item(items: &mut Vec<Value>, from: usize, to: usize) {
    if from == to || from >= items.len() || to >= items.len() {
        return;
    }
    let row = detached_clone(&items[from]);
    items.remove(from);
    items.insert(to, row);
}

/// Reorder `dest` in place so rows line up with `src`'s order on the `key`
/// field.
///
/// Rows present in `src` but missing from `dest` are inserted at their
/// position as detached clones; rows only in `dest` drift toward the end.
/// Rows on either side that lack `key` compare equal to each other.
pub fn align_order(src: &[Value], dest: &mut Vec<Value>, key: &str) {
    for (index, wanted) in src.iter().enumerate() {
        let target = wanted.get(key);
        let found = dest
            .get(index..)
            .and_then(|tail| tail.iter().position(|row| row.get(key) == target))
            .map(|offset| index + offset);
        match found {
            None => {
                debug!(key, index, "align: row missing from destination, inserting");
                dest.insert(index.min(dest.len()), detached_clone(wanted));
            }
            Some(j) if j > index => {
                let row = dest.remove(j);
                dest.insert(index, row);
            }
            Some(_) => {}
        }
    }
}

/// Drop rows from `dest` whose `key` value has no counterpart in `src`.
pub fn retain_matching(src: &[Value], dest: &mut Vec<Value>, key: &str) {
    dest.retain(|row| src.iter().any(|s| s.get(key) == row.get(key)));
}

/// Index of the first row whose `field` (a string cell) equals `value`.
///
/// With `strip`, every occurrence of that substring is removed from both
/// sides before comparing, so `"B-2"` matches `"B2"` when stripping `"-"`.
pub fn position_of(
    items: &[Value],
    field: &str,
    value: &str,
    strip: Option<&str>,
) -> Option<usize> {
    items
        .iter()
        .position(|row| field_matches(row, field, value, strip))
}

/// The `return_field` value of the first row whose `field` equals `value`,
/// with the same stripping rule as [`position_of`]. `None` when no row
/// matches or the matching row lacks `return_field`.
pub fn find_value<'a>(
    items: &'a [Value],
    field: &str,
    value: &str,
    return_field: &str,
    strip: Option<&str>,
) -> Option<&'a Value> {
    items
        .iter()
        .find(|row| field_matches(row, field, value, strip))
        .and_then(|row| row.get(return_field))
}

fn field_matches(row: &Value, field: &str, value: &str, strip: Option<&str>) -> bool {
    let Some(cell) = row.get(field).and_then(Value::as_str) else {
        return false;
    };
    match strip {
        Some(sub) if !sub.is_empty() => cell.replace(sub, "") == value.replace(sub, ""),
        _ => cell == value,
    }
}

/// Clone one field from every row. Rows without the field (or non-record
/// rows) contribute null, keeping positions aligned with the collection.
pub fn field_values(items: &[Value], field: &str) -> Vec<Value> {
    items
        .iter()
        .map(|row| row.get(field).cloned().unwrap_or(Value::Null))
        .collect()
}
