// In-memory DirectoryView. Directories exist implicitly wherever a file
// lives below them.

use std::collections::BTreeMap;
use std::sync::Arc;

use super::{single_segment, DirectoryView};
use crate::types::errors::{Error, ErrorKind, Result};
use crate::types::relpath::RelPath;

#[derive(Clone, Debug, Default)]
pub struct MemoryView {
    files: Arc<BTreeMap<String, Vec<u8>>>,
    prefix: String,
}

impl MemoryView {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file at a root-relative path.
    /// # Errors
    /// Returns `InvalidPath` for absolute paths or paths containing `..`.
    pub fn with_file(mut self, path: &str, contents: impl Into<Vec<u8>>) -> Result<Self> {
        let rel = RelPath::parse(path)?;
        Arc::make_mut(&mut self.files).insert(rel.as_string(), contents.into());
        Ok(self)
    }

    fn has_dir(&self, dir_prefix: &str) -> bool {
        self.files
            .range(dir_prefix.to_string()..)
            .next()
            .is_some_and(|(k, _)| k.starts_with(dir_prefix))
    }
}

impl DirectoryView for MemoryView {
    fn open(&self, name: &str) -> Result<Option<Vec<u8>>> {
        let key = format!("{}{}", self.prefix, single_segment(name)?);
        Ok(self.files.get(&key).cloned())
    }

    fn sub(&self, dir: &str) -> Result<Box<dyn DirectoryView + '_>> {
        let prefix = format!("{}{}/", self.prefix, single_segment(dir)?);
        if !self.has_dir(&prefix) {
            return Err(Error::new(
                ErrorKind::SubViewUnavailable,
                format!("no directory {:?} under {}", dir, self.describe()),
            ));
        }
        Ok(Box::new(MemoryView {
            files: Arc::clone(&self.files),
            prefix,
        }))
    }

    fn describe(&self) -> String {
        if self.prefix.is_empty() {
            "memory:/".to_string()
        } else {
            format!("memory:/{}", self.prefix)
        }
    }
}
