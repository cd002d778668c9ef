//! Record identity: the reserved tracking key and fresh row keys.
//!
//! Grid rows carry an identity value under a reserved key so the editing
//! surface can track them across re-renders. Copy and merge operations
//! never plant or overwrite it, numeric aggregation never reads it, and
//! detached clones park it under a renamed key.

use uuid::Uuid;

/// Key that carries a row's tracking identity.
pub const RESERVED_KEY: &str = "hashKey";

/// Parked form of [`RESERVED_KEY`] used by detached clones.
pub const DETACHED_KEY: &str = "_hashKey";

/// Generate a fresh row identity: a hyphenated lowercase v4 UUID.
pub fn new_row_key() -> String {
    Uuid::new_v4().to_string()
}

/// Lowercase hex of a string's UTF-8 bytes, for identity-safe tokens.
pub fn str_to_hex(input: &str) -> String {
    hex::encode(input.as_bytes())
}
