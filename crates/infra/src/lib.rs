//! # Timekeep Infrastructure
//!
//! Infrastructure implementations of core ports.
//!
//! This crate contains:
//! - Configuration loading (environment, JSON and TOML files)
//! - Tracing subscriber setup and severity-aware error logging
//! - In-memory, lock-guarded timesheet and audit stores
//!
//! ## Architecture
//! - Implements traits defined in `timekeep-core`
//! - Depends on `timekeep-common`, `timekeep-domain` and `timekeep-core`
//! - Contains all "impure" code (environment, files, global subscriber)

pub mod config;
pub mod observability;
pub mod stores;

// Re-export commonly used items
pub use observability::{init_logging, log_common_error};
pub use stores::{InMemoryAuditLog, InMemoryTimesheetRepository};
