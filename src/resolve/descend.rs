use std::collections::{BTreeMap, BTreeSet};

use serde_json::json;

use super::{join, Resolver};
use crate::adapters::DirectoryView;
use crate::types::errors::Result;
use crate::types::{RelPath, ReviewRequirement};

/// Hand every still-pending file that lives below a child directory to that
/// child, then fold the child's answer into `result`.
///
/// Files directly in this directory stay as they are. Each file goes to
/// exactly one child, and each child call owns its own result until merged.
pub(super) fn into_children(
    r: &Resolver<'_>,
    files: &BTreeSet<RelPath>,
    authors: &BTreeSet<String>,
    view: &dyn DirectoryView,
    at: &str,
    result: &mut ReviewRequirement,
) -> Result<()> {
    let mut by_dir: BTreeMap<&str, BTreeSet<RelPath>> = BTreeMap::new();
    for f in files {
        if !result.needs_approve.contains_key(&f.as_string()) {
            continue;
        }
        if let Some((dir, rest)) = f.split_first_dir() {
            by_dir.entry(dir).or_default().insert(rest);
        }
    }

    for (dir, child_files) in by_dir {
        let child_at = join(at, dir);
        let sub = view.sub(dir)?;
        r.slog
            .descend()
            .path(child_at.as_str())
            .field("files", json!(child_files.len()))
            .emit_success();
        let child = r.resolve_dir(&child_files, authors, &*sub, &child_at)?;
        merge(result, dir, child);
    }
    Ok(())
}

/// Fold a child directory's result into its parent's.
/// Cleared files leave the parent's pending set; pending files keep the
/// parent's approvers and gain the child's.
fn merge(parent: &mut ReviewRequirement, dir: &str, child: ReviewRequirement) {
    for f in child.needs_review {
        parent.resolve(&join(dir, &f));
    }
    for (f, approvers) in child.needs_approve {
        parent.widen(&join(dir, &f), &approvers);
    }
}
