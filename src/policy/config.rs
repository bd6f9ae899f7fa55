use crate::constants::{DEFAULT_MAX_DEPTH, OWNERS_FILE_NAME};

use super::types::{AuthorMatch, FilterPatternPolicy};

/// Policy governs how declarations are located and evaluated.
///
/// Passed explicitly by the caller; nothing here is read from the process
/// environment.
#[derive(Clone, Debug)]
pub struct Policy {
    /// File name of the per-directory declaration.
    pub owners_file: String,
    pub filter_patterns: FilterPatternPolicy,
    pub author_match: AuthorMatch,
    /// Changed paths deeper than this are refused with `E_INVALID_PATH`.
    pub max_depth: usize,
}

impl Default for Policy {
    fn default() -> Self {
        Self {
            owners_file: OWNERS_FILE_NAME.to_string(),
            filter_patterns: FilterPatternPolicy::Skip,
            author_match: AuthorMatch::Exact,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl Policy {
    /// Construct a Policy that fails closed on configuration mistakes.
    ///
    /// Enables:
    /// - `filter_patterns = Reject` (an uncompilable filter blocks the check)
    /// - `author_match = CaseInsensitive` (logins compare like the hosting service does)
    ///
    /// # Example
    /// ```rust
    /// use ownersgate::policy::Policy;
    /// use ownersgate::{logging::JsonlSink, OwnersGate};
    ///
    /// let gate = OwnersGate::new(JsonlSink::default(), JsonlSink::default(), Policy::strict_preset());
    /// # let _ = gate;
    /// ```
    #[must_use]
    pub fn strict_preset() -> Self {
        let mut p = Self::default();
        p.apply_strict_preset();
        p
    }

    /// Mutate this Policy to apply the strict settings.
    pub fn apply_strict_preset(&mut self) -> &mut Self {
        self.filter_patterns = FilterPatternPolicy::Reject;
        self.author_match = AuthorMatch::CaseInsensitive;
        self
    }
}
