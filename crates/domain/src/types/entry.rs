//! Time entries: the raw records everything else is aggregated from

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::impl_domain_status_conversions;

/// Lifecycle of a single time entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryStatus {
    Draft,
    Pending,
    Approved,
}

impl_domain_status_conversions!(EntryStatus {
    Draft => "draft",
    Pending => "pending",
    Approved => "approved",
});

/// A recorded block of work on one project task
///
/// When both `start_time` and `end_time` are present, `hours` is derived from
/// them at the write boundary and must not be trusted independently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeEntry {
    pub id: String,
    pub date: NaiveDate,
    pub project: String,
    pub client: String,
    pub task: String,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub hours: f64,
    pub billable: bool,
    pub status: EntryStatus,
    pub description: Option<String>,
}

impl TimeEntry {
    pub fn description_text(&self) -> &str {
        self.description.as_deref().unwrap_or_default()
    }
}

/// Unvalidated input for creating or editing an entry
///
/// `hours` is optional because a draft with both times derives it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntryDraft {
    pub id: String,
    pub date: NaiveDate,
    pub project: String,
    pub client: String,
    pub task: String,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub hours: Option<f64>,
    pub billable: bool,
    pub status: EntryStatus,
    pub description: Option<String>,
}

impl From<&TimeEntry> for EntryDraft {
    fn from(entry: &TimeEntry) -> Self {
        Self {
            id: entry.id.clone(),
            date: entry.date,
            project: entry.project.clone(),
            client: entry.client.clone(),
            task: entry.task.clone(),
            start_time: entry.start_time,
            end_time: entry.end_time,
            hours: Some(entry.hours),
            billable: entry.billable,
            status: entry.status,
            description: entry.description.clone(),
        }
    }
}
