//! Filter evaluation over timesheets and time entries
//!
//! Every active predicate of a [`FilterSpec`] must hold (AND). Output keeps
//! input order and input is never mutated, so filtering is idempotent.

use chrono::NaiveDate;
use timekeep_domain::{FilterSpec, TimeEntry, Timesheet};
use tracing::debug;

use crate::period::date_window;

/// A record the filter evaluator can inspect
///
/// Attribute accessors return `None` when the record does not carry the
/// attribute; a predicate on such an attribute excludes the record.
pub trait Filterable {
    /// Text fields OR-ed together by the free-text search
    fn search_fields(&self) -> Vec<&str>;

    /// Date the date-range predicate is evaluated against
    fn record_date(&self) -> NaiveDate;

    /// Hours compared against the hours threshold
    fn hours(&self) -> f64;

    /// Wire label of the record's status
    fn status_label(&self) -> String;

    /// Whether the record is booked on `project`
    fn books_project(&self, project: &str) -> bool;

    /// Employee matched exactly by the employee filter; `None` never matches
    fn employee_name(&self) -> Option<&str> {
        None
    }

    /// Department matched exactly by the department filter
    fn department(&self) -> Option<&str> {
        None
    }

    /// Client matched exactly by the client filter
    fn client(&self) -> Option<&str> {
        None
    }
}

impl Filterable for Timesheet {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.employee_name.as_str(), self.employee_id.as_str(), self.department.as_str()]
    }

    fn record_date(&self) -> NaiveDate {
        self.submitted_at.date_naive()
    }

    fn hours(&self) -> f64 {
        self.total_hours
    }

    fn status_label(&self) -> String {
        self.status().to_string()
    }

    fn books_project(&self, project: &str) -> bool {
        Timesheet::books_project(self, project)
    }

    fn employee_name(&self) -> Option<&str> {
        Some(&self.employee_name)
    }

    fn department(&self) -> Option<&str> {
        Some(&self.department)
    }
}

impl Filterable for TimeEntry {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.project.as_str(), self.task.as_str(), self.description_text()]
    }

    fn record_date(&self) -> NaiveDate {
        self.date
    }

    fn hours(&self) -> f64 {
        self.hours
    }

    fn status_label(&self) -> String {
        self.status.to_string()
    }

    fn books_project(&self, project: &str) -> bool {
        self.project == project
    }

    fn client(&self) -> Option<&str> {
        Some(&self.client)
    }
}

/// Whether `record` satisfies every active predicate of `spec`
pub fn matches<R: Filterable + ?Sized>(record: &R, spec: &FilterSpec, today: NaiveDate) -> bool {
    if !spec.search.is_empty() {
        let needle = spec.search.to_lowercase();
        if !record.search_fields().iter().any(|field| field.to_lowercase().contains(&needle)) {
            return false;
        }
    }

    if !spec.employee.is_empty() {
        let needle = spec.employee.to_lowercase();
        match record.employee_name() {
            Some(name) if name.to_lowercase().contains(&needle) => {}
            _ => return false,
        }
    }

    if !exact(&spec.department, record.department()) || !exact(&spec.client, record.client()) {
        return false;
    }

    if !spec.project.is_empty() && !record.books_project(&spec.project) {
        return false;
    }

    if !spec.status.is_empty() && record.status_label() != spec.status {
        return false;
    }

    if let Some((start, end)) = date_window(spec.date_range, today) {
        let date = record.record_date();
        if date < start || date > end {
            return false;
        }
    }

    spec.hours_threshold.map_or(true, |threshold| record.hours() >= threshold)
}

fn exact(wanted: &str, actual: Option<&str>) -> bool {
    wanted.is_empty() || actual == Some(wanted)
}

fn filter_records<R>(records: &[R], spec: &FilterSpec, today: NaiveDate) -> Vec<R>
where
    R: Filterable + Clone,
{
    if !spec.has_active_filters() {
        return records.to_vec();
    }
    let kept: Vec<R> = records.iter().filter(|r| matches(*r, spec, today)).cloned().collect();
    debug!(input = records.len(), kept = kept.len(), "Applied filter");
    kept
}

/// Timesheets passing every active predicate of `spec`, in input order
///
/// `today` anchors the relative date ranges.
pub fn filter_timesheets(
    timesheets: &[Timesheet],
    spec: &FilterSpec,
    today: NaiveDate,
) -> Vec<Timesheet> {
    filter_records(timesheets, spec, today)
}

/// Entries passing every active predicate of `spec`, in input order
pub fn filter_entries(
    entries: &[TimeEntry],
    spec: &FilterSpec,
    today: NaiveDate,
) -> Vec<TimeEntry> {
    filter_records(entries, spec, today)
}
