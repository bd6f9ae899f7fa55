pub mod fs;
pub mod memory;

use std::path::{Component, Path};

use crate::types::errors::{Error, ErrorKind, Result};

/// Read-only, hierarchical view of a repository snapshot rooted at some
/// directory. The resolver borrows a view for the duration of a check and
/// never mutates it.
pub trait DirectoryView: Send + Sync {
    /// Read a file directly under the view root.
    /// # Errors
    /// `Ok(None)` when the file does not exist; an `Io` error for any other
    /// read failure.
    fn open(&self, name: &str) -> Result<Option<Vec<u8>>>;

    /// A view rooted at the child directory `dir`.
    /// # Errors
    /// Returns `SubViewUnavailable` if `dir` is not a directory of this view.
    fn sub(&self, dir: &str) -> Result<Box<dyn DirectoryView + '_>>;

    /// Human-readable location, used in facts and error messages.
    fn describe(&self) -> String;
}

/// Accept only a single, normal path segment as a child name.
pub(crate) fn single_segment(name: &str) -> Result<&str> {
    let mut comps = Path::new(name).components();
    match (comps.next(), comps.next()) {
        (Some(Component::Normal(_)), None) => Ok(name),
        _ => Err(Error::new(
            ErrorKind::InvalidPath,
            format!("not a single path segment: {name:?}"),
        )),
    }
}
