//! Deterministic UUIDv5 identifiers for checks.
//!
//! The UUID namespace is derived from a stable tag (`NS_TAG`) so that a
//! `check_id` is reproducible across runs for the same change set.
use uuid::Uuid;

use super::change::ChangeSet;
use crate::constants::NS_TAG;

fn namespace() -> Uuid {
    Uuid::new_v5(&Uuid::NAMESPACE_URL, NS_TAG.as_bytes())
}

/// Serialize a change set into a stable string used for UUIDv5 input.
/// `BTreeSet` iteration keeps the order independent of how the set was built.
fn serialize_change(change: &ChangeSet) -> String {
    let mut s = String::new();
    for a in &change.authors {
        s.push_str("A:");
        s.push_str(a);
        s.push('\n');
    }
    for f in &change.files {
        s.push_str("F:");
        s.push_str(f);
        s.push('\n');
    }
    s
}

/// Compute a deterministic UUIDv5 for a check of `change`.
#[must_use]
pub fn check_id(change: &ChangeSet) -> Uuid {
    Uuid::new_v5(&namespace(), serialize_change(change).as_bytes())
}
