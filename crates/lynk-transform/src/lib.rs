//! Record transformation utilities for Lynk grids.
//!
//! This crate provides the mutation side of the Lynk utilities:
//!
//! - **merge**: recursive copy/merge/filter over structurally similar
//!   records
//! - **collection**: row-level insert/remove/reorder over record
//!   collections
//! - **text**: HTML entity unescaping for merged leaf values
//! - **grid**: clipboard-grid parsing and matrix transposition
//!
//! Shape mismatches and out-of-range positions are recovered silently (the
//! offending field or row is skipped); a `tracing` breadcrumb is emitted so
//! the skip can be diagnosed.

pub mod collection;
pub mod grid;
pub mod merge;
pub mod text;

pub use collection::{
    align_order, append_copies, field_values, find_value, insert_item, move_item, position_of,
    remove_item, retain_matching,
};
pub use grid::{parse_grid, parse_grid_with, transpose};
pub use merge::{copy_by_filter, copy_values, merge_values};
pub use text::unescape_html;
