#![forbid(unsafe_code)]
//! ownersgate: decide which changed files still need approval, from
//! hierarchical `OWNERS` declarations stored alongside the source tree.
//!
//! Model highlights:
//! - Each directory may carry an `OWNERS` YAML document naming `approvers` and
//!   regex-scoped `filters` with additional approvers.
//! - An author listed as a directory approver clears every changed file below
//!   that directory; otherwise filters clear or widen per file, and files still
//!   pending are resolved again one directory deeper.
//! - The repository is read through the read-only [`adapters::DirectoryView`]
//!   capability; nothing is mutated and nothing is read from the environment.

pub mod adapters;
pub mod api;
pub mod constants;
pub mod logging;
pub mod owners;
pub mod policy;
pub mod resolve;
pub mod types;

pub use api::*;
pub use resolve::required_owners;
