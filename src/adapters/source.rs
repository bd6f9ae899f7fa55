use crate::types::change::PullRequest;
use crate::types::errors::Result;

/// Supplies the pull request under check: hosting coordinates, changed
/// files and author. Implementations talking to a hosting API live outside
/// this crate.
pub trait ChangeSource: Send + Sync {
    /// # Errors
    /// Returns a `ChangeSource` error if the change cannot be fetched.
    fn fetch(&self) -> Result<PullRequest>;
}

/// A `ChangeSource` over a pull request the caller already has in hand.
#[derive(Clone, Debug, Default)]
pub struct StaticChangeSource {
    pr: PullRequest,
}

impl StaticChangeSource {
    #[must_use]
    pub const fn new(pr: PullRequest) -> Self {
        Self { pr }
    }
}

impl ChangeSource for StaticChangeSource {
    fn fetch(&self) -> Result<PullRequest> {
        Ok(self.pr.clone())
    }
}
