//! Worked examples for the normalizer against realistic collections.

use lynk_normalization::{
    AdjustTarget, NormalizeOptions, mean_positive, normalize_to_100, scale_to_100,
    std_dev_positive, sum_field,
};
use serde_json::{Value, json};

fn budget() -> Vec<Value> {
    vec![
        json!({ "hashKey": "r1", "name": "Rent", "pct": 40.0 }),
        json!({ "hashKey": "r2", "name": "Food", "pct": 25.0 }),
        json!({ "hashKey": "r3", "name": "Other", "pct": 15.0 }),
    ]
}

#[test]
fn a_partial_budget_is_stretched_to_100() {
    let mut rows = budget();
    normalize_to_100("pct", &mut rows, &NormalizeOptions::new());

    assert_eq!(rows[0]["pct"], json!(50.0));
    assert_eq!(rows[1]["pct"], json!(31.25));
    assert_eq!(rows[2]["pct"], json!(18.75));
    assert_eq!(sum_field(&rows, "pct"), 100.0);
}

#[test]
fn the_tracking_key_survives_normalization() {
    let mut rows = budget();
    normalize_to_100("pct", &mut rows, &NormalizeOptions::new());
    assert_eq!(rows[0]["hashKey"], json!("r1"));
    assert_eq!(rows[2]["hashKey"], json!("r3"));
}

#[test]
fn a_fixed_row_stays_fixed_while_the_rest_adapt() {
    let mut rows = budget();
    let options = NormalizeOptions::new()
        .with_name_key("name")
        .with_skip("Rent");
    normalize_to_100("pct", &mut rows, &options);

    assert_eq!(rows[0]["pct"], json!(40.0));
    assert_eq!(rows[1]["pct"], json!(37.5));
    assert_eq!(rows[2]["pct"], json!(22.5));
    assert_eq!(sum_field(&rows, "pct"), 100.0);
}

#[test]
fn the_residue_can_be_pinned_to_one_row() {
    let mut rows = budget();
    let options = NormalizeOptions::new()
        .with_name_key("name")
        .with_adjust(AdjustTarget::Record("Other".to_string()));
    normalize_to_100("pct", &mut rows, &options);

    assert_eq!(rows[0]["pct"], json!(40.0));
    assert_eq!(rows[1]["pct"], json!(25.0));
    assert_eq!(rows[2]["pct"], json!(35.0));
    assert_eq!(sum_field(&rows, "pct"), 100.0);
}

#[test]
fn scale_and_normalize_agree_on_clean_ratios() {
    let mut scaled = budget();
    scale_to_100("pct", &mut scaled);

    let mut normalized = budget();
    normalize_to_100("pct", &mut normalized, &NormalizeOptions::new());

    assert_eq!(scaled, normalized);
}

#[test]
fn spread_statistics_for_a_normalized_column() {
    let mut rows = budget();
    normalize_to_100("pct", &mut rows, &NormalizeOptions::new());

    let column: Vec<f64> = rows
        .iter()
        .filter_map(|row| row["pct"].as_f64())
        .collect();

    assert_eq!(mean_positive(&column), 100.0 / 3.0);
    let spread = std_dev_positive(&column);
    assert!(spread > 12.8 && spread < 12.9);
}
