//! Weekly timesheets submitted for approval

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::impl_domain_status_conversions;

/// Approval status tag, without transition metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimesheetStatus {
    Pending,
    Approved,
    Rejected,
}

impl_domain_status_conversions!(TimesheetStatus {
    Pending => "pending",
    Approved => "approved",
    Rejected => "rejected",
});

/// Current approval state together with the metadata of the last transition
///
/// Approval metadata can only exist on an approved timesheet and rejection
/// metadata only on a rejected one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum TimesheetState {
    Pending,
    Approved { by: String, at: DateTime<Utc>, comment: Option<String> },
    Rejected { by: String, at: DateTime<Utc>, reason: String },
}

impl TimesheetState {
    pub fn status(&self) -> TimesheetStatus {
        match self {
            Self::Pending => TimesheetStatus::Pending,
            Self::Approved { .. } => TimesheetStatus::Approved,
            Self::Rejected { .. } => TimesheetStatus::Rejected,
        }
    }
}

/// Inclusive date range a timesheet covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl PeriodRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

impl fmt::Display for PeriodRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.start.format("%Y-%m-%d"), self.end.format("%Y-%m-%d"))
    }
}

/// One booked line on a timesheet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimesheetLine {
    pub date: NaiveDate,
    pub project: String,
    pub hours: f64,
    pub notes: String,
}

/// Weekly aggregate submitted by an employee
///
/// `total_hours` and `overtime_hours` are cached at submission time. Policy
/// violations are never stored here; they are evaluated on read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Timesheet {
    pub id: String,
    pub employee_id: String,
    pub employee_name: String,
    pub department: String,
    pub period: PeriodRange,
    pub submitted_at: DateTime<Utc>,
    pub entries: Vec<TimesheetLine>,
    pub employee_notes: Option<String>,
    pub total_hours: f64,
    pub overtime_hours: f64,
    #[serde(flatten)]
    pub state: TimesheetState,
}

impl Timesheet {
    pub fn status(&self) -> TimesheetStatus {
        self.state.status()
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.state, TimesheetState::Pending)
    }

    pub fn approved_by(&self) -> Option<&str> {
        match &self.state {
            TimesheetState::Approved { by, .. } => Some(by),
            _ => None,
        }
    }

    pub fn rejection_reason(&self) -> Option<&str> {
        match &self.state {
            TimesheetState::Rejected { reason, .. } => Some(reason),
            _ => None,
        }
    }

    /// Whether any line is booked on `project`
    pub fn books_project(&self, project: &str) -> bool {
        self.entries.iter().any(|line| line.project == project)
    }
}

/// Input accepted by the submission command
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimesheetSubmission {
    pub id: String,
    pub employee_id: String,
    pub employee_name: String,
    pub department: String,
    pub period: PeriodRange,
    pub entries: Vec<TimesheetLine>,
    pub employee_notes: Option<String>,
}

/// Policy rule a timesheet currently breaks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolicyViolation {
    OvertimeThreshold,
    InsufficientDetail,
}

impl_domain_status_conversions!(PolicyViolation {
    OvertimeThreshold => "overtime_threshold",
    InsufficientDetail => "insufficient_detail",
});
