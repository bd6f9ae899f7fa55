// Facade for the API module; the resolution itself lives in `crate::resolve`.

use std::time::Instant;

use log::Level;
use serde_json::json;

use crate::adapters::{ChangeSource, DirectoryView};
use crate::logging::audit::AuditCtx;
use crate::logging::{ts_for_mode, AuditSink, FactsEmitter, StageLogger};
use crate::policy::Policy;
use crate::resolve::Resolver;
use crate::types::{check_id, ChangeSet};

mod builder;
pub mod errors;
mod report;

pub use builder::ApiBuilder;
pub use report::{CheckDecision, CheckReport};

pub struct OwnersGate<E: FactsEmitter, A: AuditSink> {
    facts: E,
    audit: A,
    policy: Policy,
    deterministic: bool, // zero timestamps and redact volatile fields
}

impl<E: FactsEmitter, A: AuditSink> OwnersGate<E, A> {
    pub fn new(facts: E, audit: A, policy: Policy) -> Self {
        Self {
            facts,
            audit,
            policy,
            deterministic: false,
        }
    }

    /// Emit facts that compare equal across runs over the same logical tree.
    #[must_use]
    pub fn with_deterministic_facts(mut self, on: bool) -> Self {
        self.deterministic = on;
        self
    }

    pub fn policy(&self) -> &Policy {
        &self.policy
    }

    /// Decide which files of `change` still need approval under the `OWNERS`
    /// declarations of `view`.
    ///
    /// Emits `check.start`, per-directory `owners.*` facts, and a final
    /// `check.result` fact carrying `error_id`/`exit_code` on failure.
    ///
    /// # Errors
    /// Any failure to read or parse a declaration, to descend into a
    /// directory, or an invalid changed path aborts the check. No partial
    /// result is returned.
    pub fn check(
        &self,
        change: &ChangeSet,
        view: &dyn DirectoryView,
    ) -> Result<CheckReport, errors::ApiError> {
        let cid = check_id(change);
        let ctx = AuditCtx::new(
            &self.facts as &dyn FactsEmitter,
            cid.to_string(),
            ts_for_mode(self.deterministic),
            self.deterministic,
        );
        let slog = StageLogger::new(&ctx);
        slog.check_start()
            .field("files", json!(change.files.len()))
            .field("authors", json!(change.authors))
            .field("view", json!(view.describe()))
            .emit_success();

        let t0 = Instant::now();
        let outcome = Resolver::new(&self.policy, StageLogger::new(&ctx), &self.audit as &dyn AuditSink)
            .run(change, view);
        let duration_ms = u64::try_from(t0.elapsed().as_millis()).unwrap_or(u64::MAX);

        match outcome {
            Ok(requirement) => {
                let decision = CheckDecision::of(&requirement);
                let mut result = slog
                    .check_result()
                    .field("outcome", json!(decision.as_str()))
                    .field("needs_review", json!(requirement.needs_review.len()))
                    .field("needs_approve", json!(requirement.needs_approve.len()))
                    .field("unowned", json!(requirement.unowned().count()))
                    .field("exit_code", json!(decision.exit_code()))
                    .field("duration_ms", json!(duration_ms));
                if decision == CheckDecision::ApprovalRequired {
                    result = result.field(
                        "error_id",
                        json!(errors::id_str(errors::ErrorId::E_APPROVAL_REQUIRED)),
                    );
                }
                result.emit_success();
                self.audit.log(Level::Info, &format!("check {cid}: {requirement}"));
                Ok(CheckReport {
                    check_id: cid,
                    decision,
                    requirement,
                })
            }
            Err(e) => {
                let api_err = errors::ApiError::from(e);
                let id = api_err.error_id();
                slog.check_result()
                    .field("error", json!(api_err.to_string()))
                    .field("error_id", json!(errors::id_str(id)))
                    .field("exit_code", json!(errors::exit_code_for(id)))
                    .field("duration_ms", json!(duration_ms))
                    .emit_failure();
                self.audit.log(Level::Error, &format!("check {cid} failed: {api_err}"));
                Err(api_err)
            }
        }
    }

    /// Fetch a pull request from `source` and check it against `view`.
    ///
    /// # Errors
    /// `ChangeSource` if the pull request cannot be fetched; otherwise as
    /// [`check`](Self::check).
    pub fn check_pull_request(
        &self,
        source: &dyn ChangeSource,
        view: &dyn DirectoryView,
    ) -> Result<CheckReport, errors::ApiError> {
        let pr = source.fetch()?;
        self.audit
            .log(Level::Info, &format!("checking {}/{} {pr}", pr.server, pr.repo));
        self.check(&pr.change, view)
    }
}
