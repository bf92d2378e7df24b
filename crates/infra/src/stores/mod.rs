//! Port implementations backing the approval workflow

pub mod memory;

pub use memory::{InMemoryAuditLog, InMemoryTimesheetRepository};
