//! Change input: the set of touched paths and who proposed them.
use std::collections::BTreeSet;
use std::fmt;

/// A set of changed file paths (relative to the repository root) and the
/// identities of the author(s) proposing them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChangeSet {
    pub files: BTreeSet<String>,
    pub authors: BTreeSet<String>,
}

impl ChangeSet {
    /// Change set with a single author. An empty `author` matches nobody.
    pub fn new<I, S>(files: I, author: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let author = author.into();
        let mut authors = BTreeSet::new();
        if !author.is_empty() {
            authors.insert(author);
        }
        Self {
            files: files.into_iter().map(Into::into).collect(),
            authors,
        }
    }

    #[must_use]
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        let author = author.into();
        if !author.is_empty() {
            self.authors.insert(author);
        }
        self
    }
}

/// A simplified pull request: hosting coordinates plus its change set.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PullRequest {
    pub server: String,
    pub repo: String,
    pub number: u64,
    pub change: ChangeSet,
}

impl fmt::Display for PullRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let authors: Vec<&str> = self.change.authors.iter().map(String::as_str).collect();
        write!(
            f,
            "PR #{}: {} files ({}):",
            self.number,
            self.change.files.len(),
            authors.join(", ")
        )?;
        for file in &self.change.files {
            write!(f, "\n - {file}")?;
        }
        Ok(())
    }
}
