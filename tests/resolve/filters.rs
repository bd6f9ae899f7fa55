//! Filter pass behaviour: clearing, widening, and invalid patterns.

use ownersgate::policy::{AuthorMatch, FilterPatternPolicy, Policy};
use ownersgate::required_owners;
use ownersgate::types::{ChangeSet, ErrorKind};

use crate::helpers::{memory_tree, set};

const BAD_FILTER: &str = r#"
approvers: [alice]
filters:
  "(unclosed": {approvers: [mallory]}
  "\\.md$": {approvers: [carol]}
"#;

#[test]
fn invalid_pattern_is_skipped_by_default() {
    let tree = memory_tree(&[("OWNERS", BAD_FILTER)]);
    let r = required_owners(&ChangeSet::new(["a.md", "b.rs"], "carol"), &tree, &Policy::default()).unwrap();
    assert_eq!(r.needs_review, set(&["a.md"]));
    assert_eq!(r.needs_approve["b.rs"], set(&["alice"]));
}

#[test]
fn invalid_pattern_is_fatal_when_rejected() {
    let tree = memory_tree(&[("OWNERS", BAD_FILTER)]);
    let policy = Policy {
        filter_patterns: FilterPatternPolicy::Reject,
        ..Policy::default()
    };
    let err = required_owners(&ChangeSet::new(["a.md"], "carol"), &tree, &policy).unwrap_err();
    assert_eq!(err.kind, ErrorKind::MalformedDeclaration);
    assert!(err.msg.contains("(unclosed"), "{}", err.msg);
}

#[test]
fn directory_approver_bypasses_invalid_filters() {
    let tree = memory_tree(&[("OWNERS", BAD_FILTER)]);
    let policy = Policy {
        filter_patterns: FilterPatternPolicy::Reject,
        ..Policy::default()
    };
    let r = required_owners(&ChangeSet::new(["a.md"], "alice"), &tree, &policy).unwrap();
    assert_eq!(r.needs_review, set(&["a.md"]));
}

#[test]
fn clearing_filter_wins_over_widening_filter_on_same_file() {
    let doc = r#"
approvers: [alice]
filters:
  "^docs/": {approvers: [carol]}
  "\\.md$": {approvers: [erin]}
"#;
    let tree = memory_tree(&[("OWNERS", doc), ("docs/a.md", ""), ("docs/b.txt", "")]);
    let change = ChangeSet::new(["docs/a.md", "docs/b.txt", "c.md"], "erin");
    let r = required_owners(&change, &tree, &Policy::default()).unwrap();
    assert_eq!(r.needs_review, set(&["docs/a.md", "c.md"]));
    assert_eq!(r.needs_approve["docs/b.txt"], set(&["alice", "carol"]));
}

#[test]
fn non_matching_filters_leave_baseline_alone() {
    let doc = "approvers: [alice]\nfilters:\n  \"^vendor/\": {approvers: [vic]}\n";
    let tree = memory_tree(&[("OWNERS", doc)]);
    let r = required_owners(&ChangeSet::new(["main.go"], "vic"), &tree, &Policy::default()).unwrap();
    assert_eq!(r.needs_approve["main.go"], set(&["alice"]));
}

#[test]
fn case_insensitive_authors_when_configured() {
    let tree = memory_tree(&[("OWNERS", "approvers: [Alice]\n")]);
    let change = ChangeSet::new(["x"], "alice");
    let exact = required_owners(&change, &tree, &Policy::default()).unwrap();
    assert_eq!(exact.needs_approve["x"], set(&["Alice"]));

    let policy = Policy {
        author_match: AuthorMatch::CaseInsensitive,
        ..Policy::default()
    };
    let relaxed = required_owners(&change, &tree, &policy).unwrap();
    assert_eq!(relaxed.needs_review, set(&["x"]));
}
