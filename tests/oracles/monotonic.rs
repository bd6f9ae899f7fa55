//! Adding a filter can only clear files or widen their pending approvers.

use proptest::prelude::*;

use ownersgate::policy::Policy;
use ownersgate::required_owners;
use ownersgate::types::ChangeSet;

use super::gen::{author, build_tree, change_files, declaration, declarations, fragment, PATTERNS};

proptest! {
    #[test]
    fn extra_filter_never_narrows(
        mut decls in declarations(),
        root in declaration(),
        extra_pattern in proptest::sample::select(PATTERNS),
        extra in fragment(),
        files in change_files(),
        who in author(),
    ) {
        prop_assume!(!root.filters.contains_key(extra_pattern));
        let change = ChangeSet::new(files, who);

        decls.insert(String::new(), root.clone());
        let before = required_owners(&change, &build_tree(&decls), &Policy::default()).unwrap();

        let mut wider = root;
        wider.filters.insert(extra_pattern.to_string(), extra);
        decls.insert(String::new(), wider);
        let after = required_owners(&change, &build_tree(&decls), &Policy::default()).unwrap();

        for f in &before.needs_review {
            prop_assert!(after.needs_review.contains(f), "{} was cleared before", f);
        }
        for (f, approvers) in &after.needs_approve {
            let prior = before.needs_approve.get(f);
            prop_assert!(prior.is_some(), "{} pending only after adding a filter", f);
            prop_assert!(prior.map(|p| p.is_subset(approvers)).unwrap_or(false));
        }
    }

    #[test]
    fn pending_files_keep_root_approvers(
        mut decls in declarations(),
        root in declaration(),
        files in change_files(),
        who in author(),
    ) {
        decls.insert(String::new(), root.clone());
        let r = required_owners(&ChangeSet::new(files, who), &build_tree(&decls), &Policy::default()).unwrap();
        let baseline = root.config.approver_set();
        for approvers in r.needs_approve.values() {
            prop_assert!(baseline.is_subset(approvers));
        }
    }
}
