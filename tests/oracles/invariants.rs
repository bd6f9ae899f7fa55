//! Partition, short-circuit and no-declaration properties.

use std::collections::BTreeMap;

use proptest::prelude::*;

use ownersgate::policy::Policy;
use ownersgate::required_owners;
use ownersgate::types::ChangeSet;

use super::gen::{author, build_tree, change_files, declaration, declarations};

proptest! {
    #[test]
    fn every_file_lands_in_exactly_one_bucket(
        decls in declarations(),
        files in change_files(),
        who in author(),
    ) {
        let tree = build_tree(&decls);
        let change = ChangeSet::new(files, who);
        let r = required_owners(&change, &tree, &Policy::default()).unwrap();

        for f in &change.files {
            let reviewed = r.needs_review.contains(f);
            let pending = r.needs_approve.contains_key(f);
            prop_assert!(reviewed != pending, "{} reviewed={} pending={}", f, reviewed, pending);
        }
        prop_assert_eq!(r.needs_review.len() + r.needs_approve.len(), change.files.len());
    }

    #[test]
    fn root_approver_clears_every_file(
        mut decls in declarations(),
        root in declaration(),
        files in change_files(),
        who in author(),
    ) {
        let mut root = root;
        if !root.config.approvers.contains(&who) {
            root.config.approvers.push(who.clone());
        }
        decls.insert(String::new(), root);
        let tree = build_tree(&decls);
        let change = ChangeSet::new(files, who);
        let r = required_owners(&change, &tree, &Policy::default()).unwrap();
        prop_assert!(r.needs_approve.is_empty());
        prop_assert_eq!(&r.needs_review, &change.files);
    }

    #[test]
    fn no_declarations_means_no_known_approvers(
        files in change_files(),
        who in author(),
    ) {
        let tree = build_tree(&BTreeMap::new());
        let change = ChangeSet::new(files, who);
        let r = required_owners(&change, &tree, &Policy::default()).unwrap();
        prop_assert!(r.needs_review.is_empty());
        prop_assert_eq!(r.needs_approve.len(), change.files.len());
        prop_assert!(r.needs_approve.values().all(|s| s.is_empty()));
    }
}
