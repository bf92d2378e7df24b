//! Port interfaces for the approval workflow
//!
//! These traits define the boundaries between the approval state machine and
//! whatever holds timesheets and the audit trail.

use chrono::{DateTime, Utc};
use timekeep_domain::{AuditRecord, Result, Timesheet};

/// Trait for storing timesheets by id
pub trait TimesheetRepository: Send + Sync {
    /// Get a timesheet, `None` when the id is unknown
    fn get(&self, id: &str) -> Result<Option<Timesheet>>;

    /// Snapshot of every stored timesheet
    fn list(&self) -> Result<Vec<Timesheet>>;

    /// Store a new timesheet; an existing id is a state conflict
    fn insert(&self, timesheet: Timesheet) -> Result<()>;

    /// Replace one timesheet atomically
    ///
    /// `apply` sees the current value and returns its replacement. Readers
    /// observe either the old or the new timesheet, never a partial write.
    /// Unknown ids fail with `NotFound`; an error from `apply` leaves the
    /// stored value untouched.
    fn update(
        &self,
        id: &str,
        apply: &mut dyn FnMut(&Timesheet) -> Result<Timesheet>,
    ) -> Result<Timesheet>;
}

/// Append-only log of successful transitions
///
/// Transitions append while the repository holds its write, so
/// implementations must not call back into the [`TimesheetRepository`].
pub trait AuditLog: Send + Sync {
    fn append(&self, record: AuditRecord) -> Result<()>;

    /// Records for one timesheet in append order
    fn history(&self, timesheet_id: &str) -> Result<Vec<AuditRecord>>;
}

/// Source of transition timestamps
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
