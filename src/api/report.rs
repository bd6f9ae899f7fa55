use serde::Serialize;
use uuid::Uuid;

use super::errors::{exit_code_for, ErrorId};
use crate::types::ReviewRequirement;

/// Overall outcome of a successful check.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckDecision {
    /// Every file is cleared for review.
    Approved,
    /// At least one file still needs approval.
    ApprovalRequired,
}

impl CheckDecision {
    #[must_use]
    pub fn of(requirement: &ReviewRequirement) -> Self {
        if requirement.is_satisfied() {
            CheckDecision::Approved
        } else {
            CheckDecision::ApprovalRequired
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            CheckDecision::Approved => "approved",
            CheckDecision::ApprovalRequired => "approval_required",
        }
    }

    #[must_use]
    pub const fn exit_code(self) -> i32 {
        match self {
            CheckDecision::Approved => 0,
            CheckDecision::ApprovalRequired => exit_code_for(ErrorId::E_APPROVAL_REQUIRED),
        }
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct CheckReport {
    pub check_id: Uuid,
    pub decision: CheckDecision,
    pub requirement: ReviewRequirement,
}

impl CheckReport {
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        self.decision.exit_code()
    }

    /// JSON rendering for artifacts and CI annotations.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}
