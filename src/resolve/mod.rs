//! Recursive ownership resolution.
//!
//! Walks the directory view from its root towards each changed file. At every
//! level the local `OWNERS` declaration either clears files outright (the
//! author is an approver), or contributes approvers that would clear them.
//! Files still pending are handed to the child directory that contains them
//! and the child's answer is merged back.
//!
//! Submodules:
//! - `filters`: the per-declaration filter pass
//! - `descend`: grouping pending files by child directory and merging results

mod descend;
mod filters;

use std::collections::{BTreeMap, BTreeSet};

use log::Level;
use serde_json::json;

use crate::adapters::DirectoryView;
use crate::logging::audit::AuditCtx;
use crate::logging::{AuditSink, JsonlSink, StageLogger, TS_ZERO};
use crate::owners::{digest_hex, OwnersFile};
use crate::policy::Policy;
use crate::types::errors::{Error, ErrorKind, Result};
use crate::types::{check_id, ChangeSet, RelPath, ReviewRequirement};

/// Compute which files of `change` still need approval under the `OWNERS`
/// declarations of `view`, without facts or audit output.
///
/// # Errors
/// - `InvalidPath` if a changed path is absolute, contains `..`, or is deeper
///   than `policy.max_depth`;
/// - `MalformedDeclaration` if any declaration on the way fails to parse;
/// - `SubViewUnavailable` if a changed file's directory is missing from the view;
/// - `Io` for any other read failure.
///
/// No partial result is returned on error.
pub fn required_owners(
    change: &ChangeSet,
    view: &dyn DirectoryView,
    policy: &Policy,
) -> Result<ReviewRequirement> {
    let sink = JsonlSink;
    let ctx = AuditCtx::new(&sink, check_id(change).to_string(), TS_ZERO.to_string(), true);
    Resolver::new(policy, StageLogger::new(&ctx), &sink).run(change, view)
}

pub(crate) struct Resolver<'a> {
    policy: &'a Policy,
    slog: StageLogger<'a>,
    audit: &'a dyn AuditSink,
}

impl<'a> Resolver<'a> {
    pub(crate) fn new(policy: &'a Policy, slog: StageLogger<'a>, audit: &'a dyn AuditSink) -> Self {
        Self { policy, slog, audit }
    }

    /// Resolve a whole change set against the root of `view`.
    ///
    /// Paths are normalized before resolution and reported back under the
    /// exact spelling the caller supplied.
    pub(crate) fn run(&self, change: &ChangeSet, view: &dyn DirectoryView) -> Result<ReviewRequirement> {
        let mut spellings: BTreeMap<RelPath, Vec<&str>> = BTreeMap::new();
        for raw in &change.files {
            let rel = RelPath::parse(raw)?;
            if rel.depth() > self.policy.max_depth {
                return Err(Error::new(
                    ErrorKind::InvalidPath,
                    format!("{raw:?} is deeper than {} segments", self.policy.max_depth),
                ));
            }
            spellings.entry(rel).or_default().push(raw.as_str());
        }
        let files: BTreeSet<RelPath> = spellings.keys().cloned().collect();
        let normalized = self.resolve_dir(&files, &change.authors, view, "")?;

        let mut out = ReviewRequirement::default();
        for (rel, raws) in spellings {
            let key = rel.as_string();
            for raw in raws {
                if let Some(approvers) = normalized.needs_approve.get(&key) {
                    out.needs_approve.insert(raw.to_string(), approvers.clone());
                } else {
                    out.needs_review.insert(raw.to_string());
                }
            }
        }
        Ok(out)
    }

    /// One level of the recursion. `files` are relative to `view`; `at` is the
    /// location of `view` relative to the check root, for facts only.
    fn resolve_dir(
        &self,
        files: &BTreeSet<RelPath>,
        authors: &BTreeSet<String>,
        view: &dyn DirectoryView,
        at: &str,
    ) -> Result<ReviewRequirement> {
        let mut result = ReviewRequirement::default();

        let Some(decl) = self.load(view, at)? else {
            for f in files {
                result.needs_approve.insert(f.as_string(), BTreeSet::new());
            }
            return Ok(result);
        };

        if decl.config.has_approver(authors, self.policy.author_match) {
            self.slog
                .short_circuit()
                .path(at)
                .field("files", json!(files.len()))
                .emit_success();
            result.needs_review = files.iter().map(RelPath::as_string).collect();
            return Ok(result);
        }

        let baseline = decl.config.approver_set();
        for f in files {
            result.needs_approve.insert(f.as_string(), baseline.clone());
        }

        filters::apply(self, &decl, authors, &mut result, at)?;

        if !result.needs_approve.is_empty() {
            descend::into_children(self, files, authors, view, at, &mut result)?;
        }
        Ok(result)
    }

    /// Read and decode the declaration at the root of `view`.
    /// `Ok(None)` means there is none.
    fn load(&self, view: &dyn DirectoryView, at: &str) -> Result<Option<OwnersFile>> {
        let name = self.policy.owners_file.as_str();
        let bytes = match view.open(name) {
            Ok(Some(bytes)) => bytes,
            Ok(None) => {
                self.slog
                    .owners_load()
                    .path(at)
                    .field("found", json!(false))
                    .emit_success();
                return Ok(None);
            }
            Err(e) => {
                self.fail_load(view, at, &e);
                return Err(e);
            }
        };
        match OwnersFile::from_slice(&bytes) {
            Ok(decl) => {
                self.slog
                    .owners_load()
                    .path(at)
                    .field("found", json!(true))
                    .field("owners_sha256", json!(digest_hex(&bytes)))
                    .field("approvers", json!(decl.config.approvers.len()))
                    .field("filters", json!(decl.filters.len()))
                    .field("view", json!(view.describe()))
                    .emit_success();
                Ok(Some(decl))
            }
            Err(e) => {
                let e = Error::new(
                    ErrorKind::MalformedDeclaration,
                    format!("{}: {}", join(at, name), e.msg),
                );
                self.fail_load(view, at, &e);
                Err(e)
            }
        }
    }

    fn fail_load(&self, view: &dyn DirectoryView, at: &str, e: &Error) {
        self.slog
            .owners_load()
            .path(at)
            .field("error", json!(e.to_string()))
            .field("view", json!(view.describe()))
            .emit_failure();
        self.audit.log(Level::Error, &format!("loading owners at {:?}: {e}", at));
    }
}

/// Join a directory (possibly the empty root) and a relative path.
pub(crate) fn join(dir: &str, rel: &str) -> String {
    if dir.is_empty() {
        rel.to_string()
    } else {
        format!("{dir}/{rel}")
    }
}
