//! Approval service - the command handler around the state machine
//!
//! This is the only place timesheet state changes. Every transition is
//! appended to the [`AuditLog`] from inside [`TimesheetRepository::update`],
//! so a failed append leaves the stored timesheet untouched.

use std::sync::Arc;

use timekeep_common::{RangeValidator, StringValidator, Validator};
use timekeep_domain::constants::MAX_ENTRY_HOURS;
use timekeep_domain::{
    ApprovalAction, ApprovalStats, AuditRecord, BulkOutcome, PolicyConfig, PolicyViolation,
    Result, TimekeepError, Timesheet, TimesheetState, TimesheetStatus, TimesheetSubmission,
};
use tracing::{error, info, warn};

use super::policy::PolicyEvaluator;
use super::ports::{AuditLog, Clock, TimesheetRepository};
use super::state_machine::{self, Transition};
use crate::aggregation::approval_stats;
use crate::validation::ValidationResultExt;

/// Approval workflow service
pub struct ApprovalService {
    repository: Arc<dyn TimesheetRepository>,
    audit: Arc<dyn AuditLog>,
    clock: Arc<dyn Clock>,
    policy: PolicyEvaluator,
}

impl ApprovalService {
    /// Create a new approval service with the default policy
    pub fn new(
        repository: Arc<dyn TimesheetRepository>,
        audit: Arc<dyn AuditLog>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self { repository, audit, clock, policy: PolicyEvaluator::default() }
    }

    /// Replace the policy thresholds
    pub fn with_policy(mut self, policy: PolicyConfig) -> Self {
        self.policy = PolicyEvaluator::new(policy);
        self
    }

    pub fn policy(&self) -> &PolicyEvaluator {
        &self.policy
    }

    /// Create a pending timesheet from a submission
    pub fn submit(&self, submission: TimesheetSubmission) -> Result<Timesheet> {
        validate_submission(&submission)?;

        let total_hours: f64 = submission.entries.iter().map(|line| line.hours).sum();
        let timesheet = Timesheet {
            id: submission.id,
            employee_id: submission.employee_id,
            employee_name: submission.employee_name,
            department: submission.department,
            period: submission.period,
            submitted_at: self.clock.now(),
            entries: submission.entries,
            employee_notes: submission.employee_notes,
            total_hours,
            overtime_hours: self.policy.overtime_for(total_hours),
            state: TimesheetState::Pending,
        };

        self.repository.insert(timesheet.clone())?;
        // the timesheet is stored either way; a lost submit record is logged
        let _ = self.record(
            &timesheet.id,
            ApprovalAction::Submit,
            &timesheet.employee_id,
            (None, timesheet.status()),
            None,
        );

        info!(
            timesheet_id = %timesheet.id,
            employee_id = %timesheet.employee_id,
            total_hours = timesheet.total_hours,
            overtime_hours = timesheet.overtime_hours,
            "Timesheet submitted"
        );
        Ok(timesheet)
    }

    pub fn approve(&self, id: &str, approver: &str, comment: Option<&str>) -> Result<Timesheet> {
        let approver = state_machine::validate_actor(approver)?;
        self.approve_validated(id, &approver, comment)
    }

    pub fn reject(&self, id: &str, approver: &str, reason: &str) -> Result<Timesheet> {
        let approver = state_machine::validate_actor(approver)?;
        let reason = state_machine::validate_reason(reason)?;
        self.reject_validated(id, &approver, &reason)
    }

    /// Return a rejected timesheet to the pending queue
    pub fn reprocess(&self, id: &str, actor: &str) -> Result<Timesheet> {
        let actor = state_machine::validate_actor(actor)?;
        let updated =
            self.transition(id, ApprovalAction::Reprocess, &actor, &state_machine::reprocess)?;
        info!(timesheet_id = %id, actor = %actor, "Timesheet returned to pending");
        Ok(updated)
    }

    /// Approve each id independently, itemizing failures
    pub fn bulk_approve(&self, ids: &[String], approver: &str) -> Result<BulkOutcome> {
        let approver = state_machine::validate_actor(approver)?;
        let mut outcome = BulkOutcome::default();
        for id in ids {
            match self.approve_validated(id, &approver, None) {
                Ok(_) => outcome.record_success(id.as_str()),
                Err(err) => outcome.record_failure(id.as_str(), err),
            }
        }
        info!(
            approver = %approver,
            succeeded = outcome.succeeded.len(),
            failed = outcome.failed.len(),
            "Bulk approve finished"
        );
        Ok(outcome)
    }

    /// Reject each id with the same reason
    ///
    /// A blank reason fails the whole call before any item is touched.
    pub fn bulk_reject(
        &self,
        ids: &[String],
        approver: &str,
        reason: &str,
    ) -> Result<BulkOutcome> {
        let approver = state_machine::validate_actor(approver)?;
        let reason = state_machine::validate_reason(reason)?;
        let mut outcome = BulkOutcome::default();
        for id in ids {
            match self.reject_validated(id, &approver, &reason) {
                Ok(_) => outcome.record_success(id.as_str()),
                Err(err) => outcome.record_failure(id.as_str(), err),
            }
        }
        info!(
            approver = %approver,
            succeeded = outcome.succeeded.len(),
            failed = outcome.failed.len(),
            "Bulk reject finished"
        );
        Ok(outcome)
    }

    pub fn get(&self, id: &str) -> Result<Timesheet> {
        self.repository
            .get(id)?
            .ok_or_else(|| TimekeepError::NotFound(format!("timesheet {id}")))
    }

    pub fn list(&self) -> Result<Vec<Timesheet>> {
        self.repository.list()
    }

    /// Policy violations of the stored timesheet, evaluated now
    pub fn violations(&self, id: &str) -> Result<Vec<PolicyViolation>> {
        Ok(self.policy.violations(&self.get(id)?))
    }

    /// Audit trail of one timesheet, oldest first
    pub fn history(&self, id: &str) -> Result<Vec<AuditRecord>> {
        self.audit.history(id)
    }

    pub fn stats(&self) -> Result<ApprovalStats> {
        Ok(approval_stats(&self.repository.list()?, self.policy.config()))
    }

    fn approve_validated(
        &self,
        id: &str,
        approver: &str,
        comment: Option<&str>,
    ) -> Result<Timesheet> {
        let now = self.clock.now();
        let updated = self.transition(id, ApprovalAction::Approve, approver, &|sheet| {
            state_machine::approve(sheet, approver, comment, now)
        })?;
        info!(timesheet_id = %id, approver = %approver, "Timesheet approved");
        Ok(updated)
    }

    fn reject_validated(&self, id: &str, approver: &str, reason: &str) -> Result<Timesheet> {
        let now = self.clock.now();
        let updated = self.transition(id, ApprovalAction::Reject, approver, &|sheet| {
            state_machine::reject(sheet, approver, reason, now)
        })?;
        info!(timesheet_id = %id, approver = %approver, "Timesheet rejected");
        Ok(updated)
    }

    /// Run one state-machine step and audit it inside the repository update
    ///
    /// The audit record is appended before the replacement is handed back,
    /// so the timesheet only changes once its record exists.
    fn transition(
        &self,
        id: &str,
        action: ApprovalAction,
        actor: &str,
        step: &dyn Fn(&Timesheet) -> Result<(Timesheet, Transition)>,
    ) -> Result<Timesheet> {
        self.repository
            .update(id, &mut |sheet| {
                let (next, Transition { from, to }) = step(sheet)?;
                self.record(id, action, actor, (Some(from), to), audit_note(&next.state))?;
                Ok(next)
            })
            .inspect_err(|err| {
                warn!(timesheet_id = %id, %action, error = %err, "Transition refused");
            })
    }

    fn record(
        &self,
        timesheet_id: &str,
        action: ApprovalAction,
        actor: &str,
        transition: (Option<TimesheetStatus>, TimesheetStatus),
        note: Option<String>,
    ) -> Result<()> {
        let record =
            AuditRecord::new(timesheet_id, action, actor, self.clock.now(), transition, note);
        self.audit.append(record).inspect_err(|err| {
            error!(timesheet_id, %action, error = %err, "Failed to append audit record");
        })
    }
}

fn audit_note(state: &TimesheetState) -> Option<String> {
    match state {
        TimesheetState::Approved { comment, .. } => comment.clone(),
        TimesheetState::Rejected { reason, .. } => Some(reason.clone()),
        TimesheetState::Pending => None,
    }
}

fn validate_submission(submission: &TimesheetSubmission) -> Result<()> {
    let required = StringValidator::new().not_empty();
    let hours = RangeValidator::new(0.0, MAX_ENTRY_HOURS).exclusive_min();

    let mut validator = Validator::new();
    validator.validate_field("id", &submission.id, &required);
    validator.validate_field("employee_id", &submission.employee_id, &required);
    validator.ensure(
        submission.period.start <= submission.period.end,
        "period",
        "Period start must not be after its end",
    );
    for (i, line) in submission.entries.iter().enumerate() {
        validator.validate_field(&format!("entries[{i}].hours"), &line.hours, &hours);
    }
    validator.finish().into_domain()
}
