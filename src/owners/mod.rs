//! `OWNERS` declarations: the on-disk YAML document and its filters.
//!
//! Submodules:
//! - `file`: typed document (`OwnersFile`, `OwnersConfig`) and decoding
//! - `filters`: regex compilation of filter patterns

pub mod file;
pub mod filters;

pub use file::{OwnersConfig, OwnersFile};
pub use filters::{compile_filters, CompiledFilter, InvalidFilter};

use sha2::{Digest, Sha256};

/// Hex SHA-256 of a declaration's raw bytes, recorded in load facts.
#[must_use]
pub fn digest_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}
