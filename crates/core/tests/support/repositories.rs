//! Mock port implementations for testing
//!
//! In-memory mocks for the approval ports plus a clock that only moves when
//! told to, enabling deterministic assertions on timestamps.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Duration, TimeZone, Utc};
use timekeep_core::{AuditLog, Clock, TimesheetRepository};
use timekeep_domain::{
    ApprovalAction, AuditRecord, Result as DomainResult, TimekeepError, Timesheet,
};

/// In-memory mock for `TimesheetRepository`.
#[derive(Default, Clone)]
pub struct MockTimesheetRepository {
    timesheets: Arc<Mutex<BTreeMap<String, Timesheet>>>,
}

impl MockTimesheetRepository {
    /// Create a new mock seeded with the provided timesheets.
    pub fn new(timesheets: Vec<Timesheet>) -> Self {
        let map = timesheets.into_iter().map(|t| (t.id.clone(), t)).collect();
        Self { timesheets: Arc::new(Mutex::new(map)) }
    }
}

impl TimesheetRepository for MockTimesheetRepository {
    fn get(&self, id: &str) -> DomainResult<Option<Timesheet>> {
        Ok(self.timesheets.lock().unwrap().get(id).cloned())
    }

    fn list(&self) -> DomainResult<Vec<Timesheet>> {
        Ok(self.timesheets.lock().unwrap().values().cloned().collect())
    }

    fn insert(&self, timesheet: Timesheet) -> DomainResult<()> {
        let mut map = self.timesheets.lock().unwrap();
        if map.contains_key(&timesheet.id) {
            return Err(TimekeepError::StateConflict(format!("timesheet {} exists", timesheet.id)));
        }
        map.insert(timesheet.id.clone(), timesheet);
        Ok(())
    }

    fn update(
        &self,
        id: &str,
        apply: &mut dyn FnMut(&Timesheet) -> DomainResult<Timesheet>,
    ) -> DomainResult<Timesheet> {
        let mut map = self.timesheets.lock().unwrap();
        let current =
            map.get(id).ok_or_else(|| TimekeepError::NotFound(format!("timesheet {id}")))?;
        let next = apply(current)?;
        map.insert(id.to_string(), next.clone());
        Ok(next)
    }
}

/// In-memory mock for `AuditLog`.
#[derive(Default, Clone)]
pub struct MockAuditLog {
    records: Arc<Mutex<Vec<AuditRecord>>>,
}

impl MockAuditLog {
    pub fn all(&self) -> Vec<AuditRecord> {
        self.records.lock().unwrap().clone()
    }
}

impl AuditLog for MockAuditLog {
    fn append(&self, record: AuditRecord) -> DomainResult<()> {
        self.records.lock().unwrap().push(record);
        Ok(())
    }

    fn history(&self, timesheet_id: &str) -> DomainResult<Vec<AuditRecord>> {
        let records = self.records.lock().unwrap();
        Ok(records.iter().filter(|r| r.timesheet_id == timesheet_id).cloned().collect())
    }
}

/// Audit log that accepts submissions and refuses every later transition.
#[derive(Default, Clone)]
pub struct DecisionRefusingAuditLog {
    inner: MockAuditLog,
}

impl DecisionRefusingAuditLog {
    pub fn all(&self) -> Vec<AuditRecord> {
        self.inner.all()
    }
}

impl AuditLog for DecisionRefusingAuditLog {
    fn append(&self, record: AuditRecord) -> DomainResult<()> {
        if record.action != ApprovalAction::Submit {
            return Err(TimekeepError::Internal("audit store unavailable".into()));
        }
        self.inner.append(record)
    }

    fn history(&self, timesheet_id: &str) -> DomainResult<Vec<AuditRecord>> {
        self.inner.history(timesheet_id)
    }
}

/// Clock frozen at a fixed instant until advanced.
#[derive(Clone)]
pub struct FixedClock {
    now: Arc<Mutex<DateTime<Utc>>>,
}

impl FixedClock {
    pub fn at(now: DateTime<Utc>) -> Self {
        Self { now: Arc::new(Mutex::new(now)) }
    }

    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap();
        *now += by;
    }
}

impl Default for FixedClock {
    fn default() -> Self {
        Self::at(Utc.with_ymd_and_hms(2024, 1, 22, 9, 0, 0).unwrap())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }
}
