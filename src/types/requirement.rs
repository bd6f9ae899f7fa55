//! The result of a resolution: which files are cleared and which still need
//! approval, and from whom.
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::Serialize;

/// Identities whose approval would satisfy a pending file.
/// An empty set means no declared owner was found anywhere above the file.
pub type ApproverSet = BTreeSet<String>;

/// What review is needed on a change. Keys are file paths; values in
/// `needs_approve` are approver identities.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ReviewRequirement {
    pub needs_review: BTreeSet<String>,
    pub needs_approve: BTreeMap<String, ApproverSet>,
}

impl ReviewRequirement {
    /// True when no file is waiting on an approval.
    pub fn is_satisfied(&self) -> bool {
        self.needs_approve.is_empty()
    }

    /// Pending files for which no owner was declared at any level.
    pub fn unowned(&self) -> impl Iterator<Item = &str> {
        self.needs_approve
            .iter()
            .filter(|(_, approvers)| approvers.is_empty())
            .map(|(f, _)| f.as_str())
    }

    pub(crate) fn resolve(&mut self, file: &str) {
        self.needs_approve.remove(file);
        self.needs_review.insert(file.to_string());
    }

    pub(crate) fn widen<'a, I>(&mut self, file: &str, approvers: I)
    where
        I: IntoIterator<Item = &'a String>,
    {
        if let Some(set) = self.needs_approve.get_mut(file) {
            set.extend(approvers.into_iter().cloned());
        }
    }
}

impl fmt::Display for ReviewRequirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.needs_approve.is_empty() {
            return write!(f, "all {} files cleared for review", self.needs_review.len());
        }
        write!(f, "{} files need approval:", self.needs_approve.len())?;
        for (file, approvers) in &self.needs_approve {
            if approvers.is_empty() {
                write!(f, "\n - {file}: no owners declared")?;
            } else {
                let names: Vec<&str> = approvers.iter().map(String::as_str).collect();
                write!(f, "\n - {file}: {}", names.join(", "))?;
            }
        }
        Ok(())
    }
}
