//! Flat export projection handed to CSV/PDF/XLSX renderers

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::entry::EntryStatus;

/// Column headers in render order
pub const EXPORT_COLUMNS: [&str; 7] =
    ["date", "project", "client", "task", "hours", "status", "billable"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportRow {
    pub date: NaiveDate,
    pub project: String,
    pub client: String,
    pub task: String,
    pub hours: f64,
    pub status: EntryStatus,
    pub billable: bool,
}

impl ExportRow {
    /// Cells as strings, aligned with [`EXPORT_COLUMNS`]
    pub fn cells(&self) -> [String; 7] {
        [
            self.date.format("%Y-%m-%d").to_string(),
            self.project.clone(),
            self.client.clone(),
            self.task.clone(),
            format!("{:.2}", self.hours),
            self.status.to_string(),
            if self.billable { "yes" } else { "no" }.to_string(),
        ]
    }
}
