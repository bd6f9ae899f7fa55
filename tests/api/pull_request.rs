use log::Level;

use ownersgate::adapters::{ChangeSource, StaticChangeSource};
use ownersgate::api::errors::ErrorId;
use ownersgate::logging::JsonlSink;
use ownersgate::policy::Policy;
use ownersgate::types::{ChangeSet, Error, ErrorKind, PullRequest, Result};
use ownersgate::{CheckDecision, OwnersGate};

use crate::helpers::{memory_tree, set, TestAudit};

struct Unreachable;

impl ChangeSource for Unreachable {
    fn fetch(&self) -> Result<PullRequest> {
        Err(Error::new(ErrorKind::ChangeSource, "hosting API unreachable"))
    }
}

fn pr(files: &[&str], author: &str) -> PullRequest {
    PullRequest {
        server: "github.com".into(),
        repo: "acme/widgets".into(),
        number: 7,
        change: ChangeSet::new(files.iter().copied(), author),
    }
}

#[test]
fn checks_fetched_pull_request() {
    let audit = TestAudit::default();
    let gate = OwnersGate::new(JsonlSink::default(), audit.clone(), Policy::default());
    let tree = memory_tree(&[("OWNERS", "approvers: [alice]\n")]);
    let source = StaticChangeSource::new(pr(&["README.md", "LICENSE"], "bob"));

    let report = gate.check_pull_request(&source, &tree).unwrap();
    assert_eq!(report.decision, CheckDecision::ApprovalRequired);
    assert_eq!(report.requirement.needs_approve.keys().cloned().collect::<Vec<_>>(), vec!["LICENSE", "README.md"]);
    assert_eq!(report.requirement.needs_approve["LICENSE"], set(&["alice"]));

    let lines = audit.lines.lock().unwrap();
    assert!(lines
        .iter()
        .any(|(lvl, msg)| *lvl == Level::Info && msg.contains("PR #7: 2 files (bob):")));
}

#[test]
fn source_failure_is_change_source_error() {
    let gate = OwnersGate::new(JsonlSink::default(), JsonlSink::default(), Policy::default());
    let tree = memory_tree(&[("OWNERS", "approvers: [alice]\n")]);
    let err = gate.check_pull_request(&Unreachable, &tree).unwrap_err();
    assert_eq!(err.error_id(), ErrorId::E_CHANGE_SOURCE);
    assert_eq!(err.exit_code(), 6);
}
