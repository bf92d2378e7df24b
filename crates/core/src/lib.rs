//! # Timekeep Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - Filtering and aggregation of time entries and timesheets
//! - The project tree builder and bulk project operations
//! - The approval state machine and its service
//! - Port interfaces (traits) for timesheet storage, audit and time
//!
//! ## Architecture Principles
//! - Only depends on `timekeep-common` and `timekeep-domain`
//! - No filesystem, database or platform code
//! - All external state via traits
//! - Pure functions over immutable input wherever possible

pub mod aggregation;
pub mod approval;
pub mod entries;
pub mod export;
pub mod filter;
pub mod period;
pub mod projects;
pub mod validation;

// Re-export specific items to avoid ambiguity
pub use aggregation::{
    aggregate_daily, aggregate_monthly, aggregate_weekly, approval_stats, department_overtime,
    entry_totals, format_hours, format_hours_with, hours_by_project, hours_by_status,
    overtime_hours, project_allocation, round_for_display, Aggregator,
};
pub use approval::ports::{AuditLog, Clock, SystemClock, TimesheetRepository};
pub use approval::{ApprovalService, PolicyEvaluator};
pub use entries::{create_entry, edit_entry};
pub use export::export_rows;
pub use filter::{filter_entries, filter_timesheets, Filterable};
pub use period::{shift_period, week_start_of, Direction, PeriodUnit};
pub use projects::{build_project_tree, progress_percentage, BulkOperation, NodeSet, ProjectTree};
