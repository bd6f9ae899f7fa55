/// What to do with a filter whose pattern does not compile.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FilterPatternPolicy {
    /// Skip the filter and emit a warning; the rest of the declaration applies.
    #[default]
    Skip,
    /// Treat the whole declaration as malformed.
    Reject,
}

/// How author identities are compared with declared approvers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthorMatch {
    #[default]
    Exact,
    /// ASCII case-insensitive, as hosting services treat logins.
    CaseInsensitive,
}

impl AuthorMatch {
    #[must_use]
    pub fn matches(self, author: &str, approver: &str) -> bool {
        if author.is_empty() {
            return false;
        }
        match self {
            AuthorMatch::Exact => author == approver,
            AuthorMatch::CaseInsensitive => author.eq_ignore_ascii_case(approver),
        }
    }
}
