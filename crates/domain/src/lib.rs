//! # Timekeep Domain
//!
//! Business domain types and models for Timekeep.
//!
//! This crate contains:
//! - Domain data types (TimeEntry, Timesheet, Project, etc.)
//! - Domain error types and Result definitions
//! - Configuration structures
//! - Domain constants and the status conversion macro
//!
//! ## Architecture
//! - No dependencies on other Timekeep crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
