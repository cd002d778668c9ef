//! Rescale a numeric field across a collection so it sums to 100.
//!
//! The entry point is [`normalize_to_100`]. It reads one field from every
//! record, compares the total against 100, and folds the difference back
//! into the collection in one pass: either spread over every eligible row
//! in proportion to the row's share, or dumped into a single named row.
//! One row can be fenced off from redistribution entirely.

use lynk_model::{RESERVED_KEY, numeric_value};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::stats::round_to;

/// Where the rounding residue goes.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AdjustTarget {
    /// Spread the residue across every eligible row, weighted by the row's
    /// share of the pre-correction total.
    #[default]
    All,
    /// Add the entire residue to the row(s) carrying this name.
    Record(String),
}

/// Options for [`normalize_to_100`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NormalizeOptions {
    /// Field that names a row, used to resolve `skip` and
    /// [`AdjustTarget::Record`]. Without it every row is eligible.
    pub name_key: Option<String>,
    /// Name of the one row fenced off from redistribution. Its value still
    /// counts toward the original total.
    pub skip: Option<String>,
    /// Residue destination.
    pub adjust: AdjustTarget,
}

impl NormalizeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name_key(mut self, key: impl Into<String>) -> Self {
        self.name_key = Some(key.into());
        self
    }

    pub fn with_skip(mut self, name: impl Into<String>) -> Self {
        self.skip = Some(name.into());
        self
    }

    pub fn with_adjust(mut self, adjust: AdjustTarget) -> Self {
        self.adjust = adjust;
        self
    }
}

/// Rescale `field` across `items` so the collection sums to exactly 100,
/// redistributing the difference per `options`.
///
/// Values that do not coerce to a number contribute 0 to the totals and
/// are never written back. A collection whose total is 0 is left
/// untouched, as is one where every eligible weight is 0. Results are
/// rounded to three decimals; the residue formula divides by the
/// pre-correction total, so a large correction can land the final sum a
/// few thousandths off 100. That single-pass behavior is intentional.
pub fn normalize_to_100(field: &str, items: &mut [Value], options: &NormalizeOptions) {
    if field == RESERVED_KEY {
        warn!(field, "normalize called on the reserved identity key, ignoring");
        return;
    }

    let mut sum = 0.0;
    let mut sum_eligible = 0.0;
    let mut skip_val = 0.0;

    for row in items.iter() {
        let Some(v) = field_number(row, field) else {
            continue;
        };
        sum += v;
        if let Some(name_key) = options.name_key.as_deref() {
            if matches_name(row, name_key, options.skip.as_deref()) {
                skip_val = v;
            } else {
                sum_eligible += v;
            }
        }
    }
    if options.name_key.is_none() {
        sum_eligible = sum;
    }

    if sum == 0.0 {
        return;
    }

    let diff = round_to(100.0 - sum_eligible - skip_val, 3);

    match &options.adjust {
        AdjustTarget::Record(name) => {
            let Some(name_key) = options.name_key.as_deref() else {
                warn!("adjust target names a row but no name_key is set, ignoring");
                return;
            };
            for row in items.iter_mut() {
                if matches_name(row, name_key, Some(name.as_str())) {
                    if let Some(current) = field_number(row, field) {
                        write_field(row, field, round_to(current + diff, 3));
                    }
                }
            }
        }
        AdjustTarget::All => {
            if sum_eligible == 0.0 {
                return;
            }
            for row in items.iter_mut() {
                if let Some(name_key) = options.name_key.as_deref() {
                    if matches_name(row, name_key, options.skip.as_deref()) {
                        continue;
                    }
                }
                if let Some(current) = field_number(row, field) {
                    let share = current / sum_eligible;
                    write_field(row, field, round_to(current + diff * share, 3));
                }
            }
        }
    }
}

/// Plain proportional rescale of `field` so the collection sums to 100.
///
/// No rounding and no redistribution options; a zero total leaves the
/// collection untouched.
pub fn scale_to_100(field: &str, items: &mut [Value]) {
    if field == RESERVED_KEY {
        warn!(field, "scale called on the reserved identity key, ignoring");
        return;
    }
    let sum = sum_over(items.iter(), field);
    if sum == 0.0 {
        return;
    }
    for row in items.iter_mut() {
        if let Some(v) = field_number(row, field) {
            write_field(row, field, v / sum * 100.0);
        }
    }
}

/// Set (or create) `field` on every record row with a clone of `value`.
pub fn reset_to_value(field: &str, items: &mut [Value], value: &Value) {
    for row in items.iter_mut() {
        if let Some(map) = row.as_object_mut() {
            map.insert(field.to_string(), value.clone());
        }
    }
}

/// Sum `field` over the collection; values that do not coerce to a number
/// contribute 0. The reserved identity key never participates in sums.
pub fn sum_field(items: &[Value], field: &str) -> f64 {
    if field == RESERVED_KEY {
        warn!(field, "sum requested for the reserved identity key");
        return 0.0;
    }
    sum_over(items.iter(), field)
}

/// Sum `field` over rows `start..end`; `None` runs to the end of the
/// collection, and both bounds are clamped to it.
pub fn sum_field_range(items: &[Value], field: &str, start: usize, end: Option<usize>) -> f64 {
    if field == RESERVED_KEY {
        warn!(field, "sum requested for the reserved identity key");
        return 0.0;
    }
    let end = end.map_or(items.len(), |e| e.min(items.len()));
    let start = start.min(end);
    sum_over(items[start..end].iter(), field)
}

fn sum_over<'a, I>(rows: I, field: &str) -> f64
where
    I: Iterator<Item = &'a Value>,
{
    rows.filter_map(|row| field_number(row, field)).sum()
}

fn field_number(row: &Value, field: &str) -> Option<f64> {
    row.get(field).and_then(numeric_value)
}

// A row "matches" a name the way loose field comparison works in the grid:
// string cells compare by content, a missing field matches only a missing
// name, and everything else never matches.
fn matches_name(row: &Value, name_key: &str, name: Option<&str>) -> bool {
    match (name, row.get(name_key)) {
        (Some(wanted), Some(Value::String(actual))) => actual == wanted,
        (Some(_), _) => false,
        (None, cell) => cell.is_none(),
    }
}

fn write_field(row: &mut Value, field: &str, value: f64) {
    if let Some(map) = row.as_object_mut() {
        map.insert(field.to_string(), Value::from(value));
    }
}
