use std::collections::BTreeSet;

use log::Level;
use serde_json::json;

use super::Resolver;
use crate::owners::{compile_filters, OwnersFile};
use crate::policy::FilterPatternPolicy;
use crate::types::errors::{Error, ErrorKind, Result};
use crate::types::ReviewRequirement;

/// Apply every filter of `decl` to the files still pending in `result`.
///
/// A filter whose approvers include an author clears every pending match;
/// otherwise its approvers are added to each pending match. Each filter sees
/// the state left by the previous one, so a file cleared by one filter is no
/// longer widened by the next; the final state does not depend on the order.
pub(super) fn apply(
    r: &Resolver<'_>,
    decl: &OwnersFile,
    authors: &BTreeSet<String>,
    result: &mut ReviewRequirement,
    at: &str,
) -> Result<()> {
    let (compiled, invalid) = compile_filters(decl);

    for bad in &invalid {
        match r.policy.filter_patterns {
            FilterPatternPolicy::Reject => {
                return Err(Error::new(
                    ErrorKind::MalformedDeclaration,
                    format!(
                        "{}: filter {:?}: {}",
                        super::join(at, &r.policy.owners_file),
                        bad.pattern,
                        bad.reason
                    ),
                ));
            }
            FilterPatternPolicy::Skip => {
                r.slog
                    .filter()
                    .path(at)
                    .field("pattern", json!(bad.pattern))
                    .field("error", json!(bad.reason))
                    .field("skipped", json!(true))
                    .emit_warn();
                r.audit.log(
                    Level::Warn,
                    &format!("ignoring filter {:?} in {:?}: {}", bad.pattern, at, bad.reason),
                );
            }
        }
    }

    for filter in &compiled {
        let matched: Vec<String> = result
            .needs_approve
            .keys()
            .filter(|f| filter.matches(f))
            .cloned()
            .collect();
        let clears = filter.fragment.has_approver(authors, r.policy.author_match);
        for f in &matched {
            if clears {
                result.resolve(f);
            } else {
                result.widen(f, &filter.fragment.approvers);
            }
        }
        r.slog
            .filter()
            .path(at)
            .field("pattern", json!(filter.pattern))
            .field("matched", json!(matched.len()))
            .field("cleared", json!(clears))
            .emit_success();
    }
    Ok(())
}
