use std::path::{Component, Path};

use super::errors::{Error, ErrorKind, Result};

/// Normalized, root-relative file path as carried through a resolution.
///
/// Segments are joined with `/` regardless of platform, matching how hosting
/// services report changed files and how `OWNERS` filters are written.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RelPath {
    segments: Vec<String>,
}

impl RelPath {
    /// Parse a candidate path relative to a view root.
    ///
    /// `.` segments are dropped. Absolute paths, `..`, and paths that
    /// normalize to nothing are rejected: a changed file may never point
    /// outside the tree it is resolved against.
    pub fn parse(candidate: &str) -> Result<Self> {
        let path = Path::new(candidate);
        let mut segments = Vec::new();
        for seg in path.components() {
            match seg {
                Component::CurDir => {}
                Component::Normal(p) => match p.to_str() {
                    Some(s) => segments.push(s.to_string()),
                    None => {
                        return Err(Error::new(
                            ErrorKind::InvalidPath,
                            format!("non-utf8 segment in {candidate:?}"),
                        ))
                    }
                },
                Component::ParentDir => {
                    return Err(Error::new(
                        ErrorKind::InvalidPath,
                        format!("dotdot in {candidate:?}"),
                    ));
                }
                Component::RootDir | Component::Prefix(_) => {
                    return Err(Error::new(
                        ErrorKind::InvalidPath,
                        format!("absolute path {candidate:?}"),
                    ));
                }
            }
        }
        if segments.is_empty() {
            return Err(Error::new(
                ErrorKind::InvalidPath,
                format!("empty path {candidate:?}"),
            ));
        }
        Ok(Self { segments })
    }

    /// Split off the first segment when the path lives below a subdirectory.
    /// Returns `None` for a file directly in the current directory.
    pub fn split_first_dir(&self) -> Option<(&str, RelPath)> {
        match self.segments.split_first() {
            Some((dir, rest)) if !rest.is_empty() => Some((
                dir.as_str(),
                RelPath {
                    segments: rest.to_vec(),
                },
            )),
            _ => None,
        }
    }

    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    pub fn as_string(&self) -> String {
        self.segments.join("/")
    }
}

impl std::fmt::Display for RelPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.as_string())
    }
}
