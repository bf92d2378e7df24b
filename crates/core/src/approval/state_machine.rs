//! Pure approval transitions
//!
//! ```text
//! pending ──approve──▶ approved (terminal)
//!    │  ▲
//! reject  reprocess
//!    ▼  │
//!   rejected
//! ```
//!
//! Each function takes the current timesheet and returns its successor
//! without touching storage.

use chrono::{DateTime, Utc};
use timekeep_domain::{Result, TimekeepError, Timesheet, TimesheetState, TimesheetStatus};

/// Status change produced by a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: TimesheetStatus,
    pub to: TimesheetStatus,
}

pub fn approve(
    sheet: &Timesheet,
    approver: &str,
    comment: Option<&str>,
    at: DateTime<Utc>,
) -> Result<(Timesheet, Transition)> {
    require(sheet, TimesheetStatus::Pending, "approve")?;
    let comment = comment.map(str::trim).filter(|c| !c.is_empty()).map(str::to_string);
    Ok(advance(sheet, TimesheetState::Approved { by: approver.to_string(), at, comment }))
}

/// Reject a pending timesheet; `reason` must already be validated
pub fn reject(
    sheet: &Timesheet,
    approver: &str,
    reason: &str,
    at: DateTime<Utc>,
) -> Result<(Timesheet, Transition)> {
    require(sheet, TimesheetStatus::Pending, "reject")?;
    let rejected =
        TimesheetState::Rejected { by: approver.to_string(), at, reason: reason.to_string() };
    Ok(advance(sheet, rejected))
}

/// Send a rejected timesheet back to pending, dropping the rejection metadata
pub fn reprocess(sheet: &Timesheet) -> Result<(Timesheet, Transition)> {
    require(sheet, TimesheetStatus::Rejected, "reprocess")?;
    Ok(advance(sheet, TimesheetState::Pending))
}

/// Trimmed rejection reason, or a validation error when nothing is left
pub fn validate_reason(reason: &str) -> Result<String> {
    let trimmed = reason.trim();
    if trimmed.is_empty() {
        return Err(TimekeepError::validation("reason", "Rejection reason is required"));
    }
    Ok(trimmed.to_string())
}

pub fn validate_actor(actor: &str) -> Result<String> {
    let trimmed = actor.trim();
    if trimmed.is_empty() {
        return Err(TimekeepError::validation("actor", "Actor is required"));
    }
    Ok(trimmed.to_string())
}

fn require(sheet: &Timesheet, expected: TimesheetStatus, action: &str) -> Result<()> {
    let actual = sheet.status();
    if actual == expected {
        Ok(())
    } else {
        Err(TimekeepError::StateConflict(format!(
            "cannot {action} timesheet {}: status is {actual}, expected {expected}",
            sheet.id
        )))
    }
}

fn advance(sheet: &Timesheet, state: TimesheetState) -> (Timesheet, Transition) {
    let transition = Transition { from: sheet.status(), to: state.status() };
    let next = Timesheet { state, ..sheet.clone() };
    (next, transition)
}
