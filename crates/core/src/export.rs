//! Row projection for external CSV/PDF/XLSX renderers

use timekeep_domain::{ExportRow, TimeEntry};

/// One row per entry, in input order
pub fn export_rows(entries: &[TimeEntry]) -> Vec<ExportRow> {
    entries
        .iter()
        .map(|e| ExportRow {
            date: e.date,
            project: e.project.clone(),
            client: e.client.clone(),
            task: e.task.clone(),
            hours: e.hours,
            status: e.status,
            billable: e.billable,
        })
        .collect()
}
