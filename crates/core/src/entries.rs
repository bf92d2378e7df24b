//! Write boundary for time entries
//!
//! Malformed entries are rejected here so that aggregation downstream can
//! stay total. When both times are present the hours are recomputed from
//! them, rounded to two decimals, and any submitted value is ignored.

use chrono::NaiveTime;
use timekeep_common::Validator;
use timekeep_domain::constants::{COMPUTED_HOURS_DECIMALS, MAX_ENTRY_HOURS};
use timekeep_domain::{EntryDraft, Result, TimeEntry};
use tracing::debug;

use crate::aggregation::round_for_display;
use crate::validation::ValidationResultExt;

/// Validate a draft and produce a new entry
pub fn create_entry(draft: EntryDraft) -> Result<TimeEntry> {
    let hours = validate(&draft)?;
    debug!(entry_id = %draft.id, hours, "Entry accepted");
    Ok(TimeEntry {
        id: draft.id,
        date: draft.date,
        project: draft.project.trim().to_string(),
        client: draft.client,
        task: draft.task.trim().to_string(),
        start_time: draft.start_time,
        end_time: draft.end_time,
        hours,
        billable: draft.billable,
        status: draft.status,
        description: draft.description.filter(|d| !d.trim().is_empty()),
    })
}

/// Re-validate an edited draft against the entry it replaces
pub fn edit_entry(existing: &TimeEntry, draft: EntryDraft) -> Result<TimeEntry> {
    let mut validator = Validator::new();
    validator.ensure(
        draft.id == existing.id,
        "id",
        format!("Draft id {} does not match entry {}", draft.id, existing.id),
    );
    validator.finish().into_domain()?;
    create_entry(draft)
}

/// Hours between two times, rounded for storage
pub fn hours_between(start: NaiveTime, end: NaiveTime) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    let minutes = (end - start).num_seconds() as f64 / 60.0;
    round_for_display(minutes / 60.0, COMPUTED_HOURS_DECIMALS)
}

fn validate(draft: &EntryDraft) -> Result<f64> {
    let mut validator = Validator::new();
    validator.ensure(!draft.id.trim().is_empty(), "id", "Entry id is required");
    validator.ensure(!draft.project.trim().is_empty(), "project", "Project is required");
    validator.ensure(!draft.task.trim().is_empty(), "task", "Task is required");

    let (hours, times_invalid) = match (draft.start_time, draft.end_time) {
        (Some(start), Some(end)) if end <= start => {
            validator.add_error("end_time", "End time must be after start time");
            (None, true)
        }
        (Some(start), Some(end)) => match hours_between(start, end) {
            // a span of a few seconds rounds to zero hours
            h if h <= 0.0 => {
                validator.add_error("end_time", "Time span is too short to record (under 0.01h)");
                (None, true)
            }
            h => (Some(h), false),
        },
        _ => (draft.hours, false),
    };

    match hours {
        Some(h) => validator.ensure(
            h > 0.0 && h <= MAX_ENTRY_HOURS,
            "hours",
            "Hours must be between 0 and 24",
        ),
        None if !times_invalid => validator.add_error("hours", "Hours is required"),
        None => {}
    }

    validator.finish().into_domain()?;
    Ok(hours.unwrap_or_default())
}
