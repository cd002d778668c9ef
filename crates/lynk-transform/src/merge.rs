//! Recursive copy and merge over structurally similar records.
//!
//! All three operations share one traversal scheme: descend where both
//! sides hold the same container kind, apply a leaf rule otherwise, and
//! leave the reserved identity key alone. A record on one side facing a
//! scalar or array on the other is a shape mismatch; the field is skipped
//! with a debug breadcrumb.

use lynk_model::{DETACHED_KEY, RESERVED_KEY, is_numeric_like};
use serde_json::{Map, Value};
use tracing::debug;

use crate::text::unescape_html;

/// Copy field values from `src` onto `dest`, with `dest`'s shape
/// authoritative.
///
/// Keys (and array positions) present only in `src` are ignored. A nested
/// record or array on the destination side is descended into rather than
/// replaced; scalar destinations take a clone of the source value. The
/// reserved identity key is never touched.
pub fn copy_values(src: &Value, dest: &mut Value) {
    match (src, dest) {
        (Value::Object(src_map), Value::Object(dest_map)) => {
            for (key, dest_val) in dest_map.iter_mut() {
                if key == RESERVED_KEY {
                    continue;
                }
                if let Some(src_val) = src_map.get(key) {
                    copy_slot(src_val, dest_val, key);
                }
            }
        }
        (Value::Array(src_items), Value::Array(dest_items)) => {
            for (index, dest_val) in dest_items.iter_mut().enumerate() {
                if let Some(src_val) = src_items.get(index) {
                    copy_slot(src_val, dest_val, "[]");
                }
            }
        }
        _ => {}
    }
}

fn copy_slot(src_val: &Value, dest_val: &mut Value, key: &str) {
    if dest_val.is_object() || dest_val.is_array() {
        if same_container_kind(src_val, dest_val) {
            copy_values(src_val, dest_val);
        } else {
            debug!(key, "copy: mismatched shapes, field skipped");
        }
    } else {
        *dest_val = src_val.clone();
    }
}

/// Rebuild `dest` as a structural copy of `src` with excluded keys pruned.
///
/// Containers are recreated empty and filled recursively, so `dest` never
/// keeps stale fields inside copied subtrees. Exclusion names apply to
/// record keys at every depth, not to array indices; an excluded key prunes
/// its whole subtree. The reserved identity key is never copied.
pub fn copy_by_filter(src: &Value, dest: &mut Value, exclude: &[&str]) {
    match (src, dest) {
        (Value::Object(src_map), Value::Object(dest_map)) => {
            for (key, src_val) in src_map {
                if key == RESERVED_KEY || exclude.contains(&key.as_str()) {
                    continue;
                }
                if src_val.is_object() || src_val.is_array() {
                    dest_map.insert(key.clone(), filtered_child(src_val, exclude));
                } else {
                    dest_map.insert(key.clone(), src_val.clone());
                }
            }
        }
        (Value::Array(src_items), Value::Array(dest_items)) => {
            for (index, src_val) in src_items.iter().enumerate() {
                let item = if src_val.is_object() || src_val.is_array() {
                    filtered_child(src_val, exclude)
                } else {
                    src_val.clone()
                };
                if index < dest_items.len() {
                    dest_items[index] = item;
                } else {
                    dest_items.push(item);
                }
            }
        }
        _ => {
            debug!("filter copy: source and destination are not matching containers");
        }
    }
}

fn filtered_child(src_val: &Value, exclude: &[&str]) -> Value {
    let mut child = match src_val {
        Value::Array(_) => Value::Array(Vec::new()),
        _ => Value::Object(Map::new()),
    };
    copy_by_filter(src_val, &mut child, exclude);
    child
}

/// Merge `src` into `dest`: keys `dest` lacks are added, existing leaves
/// are overwritten, nested containers of the same kind are merged
/// recursively.
///
/// Excluded keys are completely inert, on both sides and at every depth.
/// String leaves that do not look numeric are HTML-unescaped on the way in
/// (merge is the entry point for entity-escaped text from the rendering
/// pipeline); numeric-looking values copy through untouched. Container
/// values cloned into `dest` are detached (reserved identity keys parked)
/// and their string leaves get the same unescape rule, so merging the same
/// `src` again changes nothing. The reserved identity key itself is never
/// written.
pub fn merge_values(src: &Value, dest: &mut Value, exclude: &[&str]) {
    match (src, dest) {
        (Value::Object(src_map), Value::Object(dest_map)) => {
            for (key, src_val) in src_map {
                if key == RESERVED_KEY || exclude.contains(&key.as_str()) {
                    continue;
                }
                match dest_map.get_mut(key) {
                    Some(dest_val) => merge_slot(src_val, dest_val, key, exclude),
                    None => {
                        dest_map.insert(key.clone(), merged_new(src_val));
                    }
                }
            }
        }
        (Value::Array(src_items), Value::Array(dest_items)) => {
            for (index, src_val) in src_items.iter().enumerate() {
                if let Some(dest_val) = dest_items.get_mut(index) {
                    merge_slot(src_val, dest_val, "[]", exclude);
                } else {
                    dest_items.push(merged_new(src_val));
                }
            }
        }
        _ => {}
    }
}

fn merge_slot(src_val: &Value, dest_val: &mut Value, key: &str, exclude: &[&str]) {
    if src_val.is_object() || src_val.is_array() {
        if same_container_kind(src_val, dest_val) {
            merge_values(src_val, dest_val, exclude);
        } else {
            debug!(key, "merge: mismatched shapes, field skipped");
        }
    } else {
        *dest_val = merged_leaf(src_val);
    }
}

// Leaf rule: anything that does not coerce to a number is display text and
// may carry HTML entities.
fn merged_leaf(src_val: &Value) -> Value {
    match src_val {
        Value::String(s) if !is_numeric_like(src_val) => Value::String(unescape_html(s)),
        other => other.clone(),
    }
}

// A value for a slot `dest` does not have yet: a detached clone with the
// leaf rule applied throughout, so a repeated merge finds nothing left to
// change.
fn merged_new(src_val: &Value) -> Value {
    match src_val {
        Value::Object(map) => {
            let mut out = Map::with_capacity(map.len());
            for (key, val) in map {
                let key = if key == RESERVED_KEY { DETACHED_KEY } else { key.as_str() };
                out.insert(key.to_string(), merged_new(val));
            }
            Value::Object(out)
        }
        Value::Array(items) => Value::Array(items.iter().map(merged_new).collect()),
        scalar => merged_leaf(scalar),
    }
}

fn same_container_kind(a: &Value, b: &Value) -> bool {
    (a.is_object() && b.is_object()) || (a.is_array() && b.is_array())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn copy_values_respects_destination_shape() {
        let src = json!({ "a": 5, "extra": 1, "nested": { "x": 9, "y": 8 } });
        let mut dest = json!({ "a": 1, "b": 2, "nested": { "x": 0 } });
        copy_values(&src, &mut dest);
        assert_eq!(dest, json!({ "a": 5, "b": 2, "nested": { "x": 9 } }));
    }

    #[test]
    fn copy_values_never_touches_the_reserved_key() {
        let src = json!({ "hashKey": "theirs", "v": 3 });
        let mut dest = json!({ "hashKey": "mine", "v": 0 });
        copy_values(&src, &mut dest);
        assert_eq!(dest, json!({ "hashKey": "mine", "v": 3 }));
    }

    #[test]
    fn copy_values_aligns_arrays_pairwise() {
        let src = json!({ "rows": [10, 20, 30] });
        let mut dest = json!({ "rows": [1, 2] });
        copy_values(&src, &mut dest);
        assert_eq!(dest, json!({ "rows": [10, 20] }));

        let src = json!({ "rows": [9] });
        let mut dest = json!({ "rows": [1, 2, 3] });
        copy_values(&src, &mut dest);
        assert_eq!(dest, json!({ "rows": [9, 2, 3] }));
    }

    #[test]
    fn copy_values_skips_mismatched_shapes() {
        let src = json!({ "n": 5 });
        let mut dest = json!({ "n": { "deep": 1 } });
        copy_values(&src, &mut dest);
        assert_eq!(dest, json!({ "n": { "deep": 1 } }));
    }

    #[test]
    fn copy_values_replaces_scalar_destination_with_source_container() {
        let src = json!({ "n": { "deep": 2 } });
        let mut dest = json!({ "n": 7 });
        copy_values(&src, &mut dest);
        assert_eq!(dest, json!({ "n": { "deep": 2 } }));
    }

    #[test]
    fn copy_by_filter_prunes_excluded_subtrees() {
        let src = json!({
            "keep": 1,
            "secret": 2,
            "nested": { "secret": { "deep": 3 }, "ok": "x" },
            "hashKey": "row-1"
        });
        let mut dest = json!({});
        copy_by_filter(&src, &mut dest, &["secret"]);
        assert_eq!(dest, json!({ "keep": 1, "nested": { "ok": "x" } }));
    }

    #[test]
    fn copy_by_filter_rebuilds_nested_containers() {
        let src = json!({ "keep": 1, "nested": { "ok": 2 }, "list": ["a", { "b": 1 }] });
        let mut dest = json!({ "nested": { "stale": 1 }, "keep": 0 });
        copy_by_filter(&src, &mut dest, &[]);
        assert_eq!(
            dest,
            json!({ "keep": 1, "nested": { "ok": 2 }, "list": ["a", { "b": 1 }] })
        );
    }

    #[test]
    fn merge_values_overwrites_and_adds() {
        let src = json!({ "a": 2, "new": "plain", "nested": { "x": 1, "add": 3 } });
        let mut dest = json!({ "a": 1, "keep": true, "nested": { "x": 0 } });
        merge_values(&src, &mut dest, &[]);
        assert_eq!(
            dest,
            json!({ "a": 2, "keep": true, "nested": { "x": 1, "add": 3 }, "new": "plain" })
        );
    }

    #[test]
    fn merge_values_unescapes_non_numeric_strings() {
        let src = json!({ "text": "a &lt; b", "num": "42", "esc": "&amp;gt;" });
        let mut dest = json!({ "text": "", "num": "", "esc": "" });
        merge_values(&src, &mut dest, &[]);
        assert_eq!(dest, json!({ "text": "a < b", "num": "42", "esc": "&gt;" }));
    }

    #[test]
    fn merge_values_excluded_keys_are_inert() {
        let src = json!({ "a": 1, "shield": 9, "nested": { "shield": 5, "x": 2 } });
        let mut dest = json!({ "shield": 0, "nested": { "shield": 1 } });
        merge_values(&src, &mut dest, &["shield"]);
        assert_eq!(
            dest,
            json!({ "shield": 0, "nested": { "shield": 1, "x": 2 }, "a": 1 })
        );
    }

    #[test]
    fn merge_values_never_writes_the_reserved_key() {
        let src = json!({ "hashKey": "theirs", "v": 1 });

        let mut tracked = json!({ "hashKey": "mine" });
        merge_values(&src, &mut tracked, &[]);
        assert_eq!(tracked, json!({ "hashKey": "mine", "v": 1 }));

        let mut fresh = json!({});
        merge_values(&src, &mut fresh, &[]);
        assert_eq!(fresh, json!({ "v": 1 }));
    }

    #[test]
    fn merge_values_detaches_cloned_subtrees() {
        let src = json!({ "sub": { "hashKey": "live", "v": "&lt;" } });
        let mut dest = json!({});
        merge_values(&src, &mut dest, &[]);
        assert_eq!(dest, json!({ "sub": { "_hashKey": "live", "v": "<" } }));
    }

    #[test]
    fn merge_values_extends_arrays_past_destination_length() {
        let src = json!({ "rows": [1, 2, 3] });
        let mut dest = json!({ "rows": [9] });
        merge_values(&src, &mut dest, &[]);
        assert_eq!(dest, json!({ "rows": [1, 2, 3] }));
    }

    #[test]
    fn merge_values_replaces_container_destination_with_source_leaf() {
        let src = json!({ "n": "&lt;ok&gt;" });
        let mut dest = json!({ "n": { "deep": 1 } });
        merge_values(&src, &mut dest, &[]);
        assert_eq!(dest, json!({ "n": "<ok>" }));
    }
}
