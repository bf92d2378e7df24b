//! In-memory, lock-guarded stores
//!
//! Both stores keep insertion order and hand out cloned snapshots, so a
//! reader never holds a reference into state another thread is rewriting.
//! `InMemoryTimesheetRepository::update` runs the caller's closure under the
//! write lock and swaps the result in whole.

use parking_lot::RwLock;
use timekeep_core::{AuditLog, TimesheetRepository};
use timekeep_domain::{AuditRecord, Result, TimekeepError, Timesheet};
use tracing::{debug, warn};

/// Timesheets held in submission order
#[derive(Debug, Default)]
pub struct InMemoryTimesheetRepository {
    timesheets: RwLock<Vec<Timesheet>>,
}

impl InMemoryTimesheetRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a repository, keeping the first occurrence of a duplicated id
    pub fn with_timesheets(timesheets: impl IntoIterator<Item = Timesheet>) -> Self {
        let mut seeded: Vec<Timesheet> = Vec::new();
        for timesheet in timesheets {
            if seeded.iter().any(|t| t.id == timesheet.id) {
                warn!(timesheet_id = %timesheet.id, "Skipping duplicate seeded timesheet");
                continue;
            }
            seeded.push(timesheet);
        }
        Self { timesheets: RwLock::new(seeded) }
    }

    pub fn len(&self) -> usize {
        self.timesheets.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.timesheets.read().is_empty()
    }
}

impl TimesheetRepository for InMemoryTimesheetRepository {
    fn get(&self, id: &str) -> Result<Option<Timesheet>> {
        Ok(self.timesheets.read().iter().find(|t| t.id == id).cloned())
    }

    fn list(&self) -> Result<Vec<Timesheet>> {
        Ok(self.timesheets.read().clone())
    }

    fn insert(&self, timesheet: Timesheet) -> Result<()> {
        let mut timesheets = self.timesheets.write();
        if timesheets.iter().any(|t| t.id == timesheet.id) {
            return Err(TimekeepError::StateConflict(format!(
                "Timesheet {} already exists",
                timesheet.id
            )));
        }
        debug!(timesheet_id = %timesheet.id, "Storing timesheet");
        timesheets.push(timesheet);
        Ok(())
    }

    fn update(
        &self,
        id: &str,
        apply: &mut dyn FnMut(&Timesheet) -> Result<Timesheet>,
    ) -> Result<Timesheet> {
        let mut timesheets = self.timesheets.write();
        let slot = timesheets
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| TimekeepError::NotFound(format!("Timesheet {id}")))?;

        let next = apply(slot)?;
        if next.id != id {
            return Err(TimekeepError::Internal(format!(
                "update of timesheet {id} returned timesheet {}",
                next.id
            )));
        }
        *slot = next.clone();
        debug!(timesheet_id = %id, status = %next.status(), "Updated timesheet");
        Ok(next)
    }
}

/// Append-only audit trail
#[derive(Debug, Default)]
pub struct InMemoryAuditLog {
    records: RwLock<Vec<AuditRecord>>,
}

impl InMemoryAuditLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every record across all timesheets, in append order
    pub fn all(&self) -> Vec<AuditRecord> {
        self.records.read().clone()
    }

    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }
}

impl AuditLog for InMemoryAuditLog {
    fn append(&self, record: AuditRecord) -> Result<()> {
        self.records.write().push(record);
        Ok(())
    }

    fn history(&self, timesheet_id: &str) -> Result<Vec<AuditRecord>> {
        Ok(self.records.read().iter().filter(|r| r.timesheet_id == timesheet_id).cloned().collect())
    }
}
