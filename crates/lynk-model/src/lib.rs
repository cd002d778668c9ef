#![deny(unsafe_code)]
//! Record and value primitives shared by the Lynk data utilities.
//!
//! A Lynk record is a `serde_json::Value::Object`; a collection is an
//! ordered `Vec` of records. This crate holds the building blocks the
//! transformation and normalization crates agree on:
//!
//! - **value**: loose scalar coercion in the style of the grid editor the
//!   records come from
//! - **record**: whole-record helpers (detached deep clones, recursive
//!   value reset, positional key lookup)
//! - **identity**: the reserved tracking key and row-key generation

pub mod identity;
pub mod record;
pub mod value;

pub use identity::{DETACHED_KEY, RESERVED_KEY, new_row_key, str_to_hex};
pub use record::{detached_clone, key_at, reset_values};
pub use value::{coerce_like, is_numeric_like, numeric_value, scalar_to_string};
