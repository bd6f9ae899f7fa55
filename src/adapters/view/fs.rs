// DirectoryView over a checked-out tree on local disk.

use std::io::ErrorKind as IoKind;
use std::path::{Path, PathBuf};

use super::{single_segment, DirectoryView};
use crate::types::errors::{Error, ErrorKind, Result};

#[derive(Clone, Debug)]
pub struct FsDirectoryView {
    root: PathBuf,
}

impl FsDirectoryView {
    /// Root a view at an existing directory.
    /// # Errors
    /// `SubViewUnavailable` if `root` is missing or not a directory.
    pub fn new(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        match std::fs::metadata(&root) {
            Ok(md) if md.is_dir() => Ok(Self { root }),
            Ok(_) => Err(Error::new(
                ErrorKind::SubViewUnavailable,
                format!("not a directory: {}", root.display()),
            )),
            Err(e) => Err(Error::new(
                ErrorKind::SubViewUnavailable,
                format!("{}: {e}", root.display()),
            )),
        }
    }
}

// Symlinks are never followed below the root: a link inside the checkout may
// point anywhere on the host.
fn is_symlink(path: &Path) -> std::io::Result<bool> {
    std::fs::symlink_metadata(path).map(|md| md.file_type().is_symlink())
}

impl DirectoryView for FsDirectoryView {
    fn open(&self, name: &str) -> Result<Option<Vec<u8>>> {
        let path = self.root.join(single_segment(name)?);
        match is_symlink(&path) {
            Ok(false) => {}
            Ok(true) => {
                return Err(Error::new(
                    ErrorKind::Io,
                    format!("refusing to follow symlink {}", path.display()),
                ))
            }
            Err(e) if e.kind() == IoKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(Error::new(
                    ErrorKind::Io,
                    format!("stat {}: {e}", path.display()),
                ))
            }
        }
        match std::fs::read(&path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == IoKind::NotFound => Ok(None),
            Err(e) => Err(Error::new(
                ErrorKind::Io,
                format!("read {}: {e}", path.display()),
            )),
        }
    }

    fn sub(&self, dir: &str) -> Result<Box<dyn DirectoryView + '_>> {
        let path = self.root.join(single_segment(dir)?);
        if is_symlink(&path).unwrap_or(false) {
            return Err(Error::new(
                ErrorKind::SubViewUnavailable,
                format!("refusing to follow symlink {}", path.display()),
            ));
        }
        Ok(Box::new(FsDirectoryView::new(path)?))
    }

    fn describe(&self) -> String {
        self.root.display().to_string()
    }
}
