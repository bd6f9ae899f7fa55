use regex::Regex;

use super::file::{OwnersConfig, OwnersFile};

/// A filter whose pattern compiled.
#[derive(Debug)]
pub struct CompiledFilter<'a> {
    pub pattern: &'a str,
    pub regex: Regex,
    pub fragment: &'a OwnersConfig,
}

impl CompiledFilter<'_> {
    /// Unanchored match against a path relative to the declaring directory.
    pub fn matches(&self, rel_path: &str) -> bool {
        self.regex.is_match(rel_path)
    }
}

/// A filter whose pattern failed to compile.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InvalidFilter {
    pub pattern: String,
    pub reason: String,
}

/// Compile every filter of `file`, in pattern order.
///
/// Invalid patterns are returned separately; the caller decides whether they
/// are skipped or fatal.
pub fn compile_filters(file: &OwnersFile) -> (Vec<CompiledFilter<'_>>, Vec<InvalidFilter>) {
    let mut ok = Vec::with_capacity(file.filters.len());
    let mut bad = Vec::new();
    for (pattern, fragment) in &file.filters {
        match Regex::new(pattern) {
            Ok(regex) => ok.push(CompiledFilter {
                pattern,
                regex,
                fragment,
            }),
            Err(e) => bad.push(InvalidFilter {
                pattern: pattern.clone(),
                reason: e.to_string(),
            }),
        }
    }
    (ok, bad)
}
