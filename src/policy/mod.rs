//! Policy configuration for ownership checks.
//!
//! Consumers construct a [`Policy`](crate::policy::Policy) via `Default` or
//! `strict_preset`, customize fields, and hand it to
//! [`OwnersGate`](crate::OwnersGate).
//!
//! Submodules:
//! - `config`: policy struct and presets
//! - `types`: the individual knobs

pub mod config;
pub mod types;

pub use config::Policy;
pub use types::{AuthorMatch, FilterPatternPolicy};
