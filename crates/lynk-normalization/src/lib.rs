//! Percentage normalization for Lynk record collections.
//!
//! - **normalize**: rescale a numeric field so it sums to exactly 100,
//!   with configurable redistribution of the rounding residue
//! - **stats**: decimal rounding and positive-only descriptive statistics

pub mod normalize;
pub mod stats;

pub use normalize::{
    AdjustTarget, NormalizeOptions, normalize_to_100, reset_to_value, scale_to_100, sum_field,
    sum_field_range,
};
pub use stats::{mean_positive, round_to, std_dev_positive};
