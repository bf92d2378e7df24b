//! Domain types and models

pub mod approval;
pub mod entry;
pub mod export;
pub mod filter;
pub mod project;
pub mod stats;
pub mod timesheet;

pub use approval::{ApprovalAction, AuditRecord, BulkFailure, BulkOutcome};
pub use entry::{EntryDraft, EntryStatus, TimeEntry};
pub use export::{ExportRow, EXPORT_COLUMNS};
pub use filter::{DateRange, FilterSpec};
pub use project::{
    Project, ProjectRecord, ProjectStatus, ProjectTask, ProjectView, TaskStatus, TeamMember,
};
pub use stats::{
    ApprovalStats, DailyTotal, DaySummary, DepartmentOvertime, EntryTotals, MonthlySummary,
    ProjectAllocation, ProjectHours, StatusHours, WeeklyGrid, WeeklyRow,
};
pub use timesheet::{
    PeriodRange, PolicyViolation, Timesheet, TimesheetLine, TimesheetState, TimesheetStatus,
    TimesheetSubmission,
};
