//! Audit trail and bulk outcome types for approval transitions

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::timesheet::TimesheetStatus;
use crate::errors::TimekeepError;
use crate::impl_domain_status_conversions;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApprovalAction {
    Submit,
    Approve,
    Reject,
    Reprocess,
}

impl_domain_status_conversions!(ApprovalAction {
    Submit => "submit",
    Approve => "approve",
    Reject => "reject",
    Reprocess => "reprocess",
});

/// Immutable record of one successful transition
///
/// `from` is `None` for the submission that created the timesheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditRecord {
    pub id: Uuid,
    pub timesheet_id: String,
    pub action: ApprovalAction,
    pub actor: String,
    pub at: DateTime<Utc>,
    pub from: Option<TimesheetStatus>,
    pub to: TimesheetStatus,
    /// Approval comment or rejection reason
    pub note: Option<String>,
}

impl AuditRecord {
    pub fn new(
        timesheet_id: impl Into<String>,
        action: ApprovalAction,
        actor: impl Into<String>,
        at: DateTime<Utc>,
        transition: (Option<TimesheetStatus>, TimesheetStatus),
        note: Option<String>,
    ) -> Self {
        let (from, to) = transition;
        Self {
            id: Uuid::now_v7(),
            timesheet_id: timesheet_id.into(),
            action,
            actor: actor.into(),
            at,
            from,
            to,
            note,
        }
    }
}

/// Why a single item of a bulk operation did not apply
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulkFailure {
    pub id: String,
    pub error: TimekeepError,
}

/// Itemized result of a bulk operation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BulkOutcome {
    pub succeeded: Vec<String>,
    pub failed: Vec<BulkFailure>,
}

impl BulkOutcome {
    pub fn record_success(&mut self, id: impl Into<String>) {
        self.succeeded.push(id.into());
    }

    pub fn record_failure(&mut self, id: impl Into<String>, error: TimekeepError) {
        self.failed.push(BulkFailure { id: id.into(), error });
    }

    pub fn is_complete_success(&self) -> bool {
        self.failed.is_empty()
    }

    pub fn total(&self) -> usize {
        self.succeeded.len() + self.failed.len()
    }
}
