//! Aggregation result types
//!
//! This module centralizes the summary structs produced by the aggregator:
//! - Daily and weekly hour totals
//! - Monthly calendar summaries
//! - Approval queue statistics
//! - Allocation and overtime breakdowns

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::entry::{EntryStatus, TimeEntry};

/* -------------------------------------------------------------------------- */
/* Daily & Weekly */
/* -------------------------------------------------------------------------- */

/// Hours booked on a single date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyTotal {
    pub date: NaiveDate,
    pub total_hours: f64,
    pub entry_count: usize,
    /// `total_hours >= target` (8h by default)
    pub target_met: bool,
}

/// One project's row in the weekly grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyRow {
    pub project: String,
    /// Hours per day, aligned with [`WeeklyGrid::dates`]
    pub daily_hours: [f64; 7],
    pub total: f64,
}

/// Project-by-day hour grid for one week
///
/// Invariant: the sum of `daily_totals` equals `week_total`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyGrid {
    pub dates: [NaiveDate; 7],
    pub rows: Vec<WeeklyRow>,
    pub daily_totals: [f64; 7],
    pub week_total: f64,
}

/* -------------------------------------------------------------------------- */
/* Monthly */
/* -------------------------------------------------------------------------- */

/// Calendar cell for one day of a month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DaySummary {
    pub date: NaiveDate,
    pub entries: Vec<TimeEntry>,
    pub total_hours: f64,
    pub billable_hours: f64,
    /// Distinct projects in first-appearance order
    pub projects: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlySummary {
    pub year: i32,
    pub month: u32,
    pub days: Vec<DaySummary>,
    pub month_total: f64,
    pub month_billable: f64,
    /// Days with at least one entry
    pub working_days: usize,
    pub average_per_working_day: f64,
}

/* -------------------------------------------------------------------------- */
/* Approvals */
/* -------------------------------------------------------------------------- */

/// Approval queue statistics
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApprovalStats {
    pub pending: usize,
    pub approved: usize,
    pub rejected: usize,
    pub total_hours: f64,
    pub overtime_hours: f64,
    pub with_violations: usize,
    /// `approved / (approved + rejected)`, 0 when nothing was decided
    pub approval_rate: f64,
}

impl ApprovalStats {
    /// Approval rate as a whole percentage (2 approved, 1 rejected gives 67)
    pub fn approval_rate_percent(&self) -> u32 {
        // approval_rate is within [0, 1]
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let percent = (self.approval_rate * 100.0).round() as u32;
        percent
    }
}

/* -------------------------------------------------------------------------- */
/* Entry breakdowns */
/* -------------------------------------------------------------------------- */

/// Totals over a filtered entry listing
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntryTotals {
    pub total_hours: f64,
    pub billable_hours: f64,
    pub overtime_hours: f64,
    pub entry_count: usize,
}

/// Share of one day's hours spent on a project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectAllocation {
    pub project: String,
    pub hours: f64,
    pub entry_count: usize,
    /// Percentage of the day's total, 0 when the day is empty
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentOvertime {
    pub department: String,
    /// Timesheets in this department with overtime above zero
    pub timesheets_with_overtime: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusHours {
    pub status: EntryStatus,
    pub hours: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectHours {
    pub project: String,
    pub hours: f64,
}
