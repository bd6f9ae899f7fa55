//! Shared crate-wide constants for ownersgate.
//!
//! Centralizes magic values and default labels used across modules.

/// Default name of the per-directory ownership declaration.
pub const OWNERS_FILE_NAME: &str = "OWNERS";

/// Default hosting server recorded on pull requests built without one.
pub const DEFAULT_SERVER: &str = "github.com";

/// Upper bound on path depth followed by the resolver unless the policy says otherwise.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// UUIDv5 namespace tag for deterministic check IDs.
pub const NS_TAG: &str = "https://ownersgate/check";

/// Schema version stamped on every emitted fact.
pub const FACTS_SCHEMA_VERSION: i64 = 1;
