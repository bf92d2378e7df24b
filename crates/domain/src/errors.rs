//! Error types used throughout the engine

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for Timekeep
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum TimekeepError {
    #[error("Validation failed: {}", format_issues(.0))]
    Validation(Vec<FieldIssue>),

    #[error("State conflict: {0}")]
    StateConflict(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl TimekeepError {
    /// Single-field validation failure
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation(vec![FieldIssue::new(field, message)])
    }

    /// Field issues carried by a validation error, empty for other variants
    pub fn field_issues(&self) -> &[FieldIssue] {
        match self {
            Self::Validation(issues) => issues,
            _ => &[],
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    pub fn is_state_conflict(&self) -> bool {
        matches!(self, Self::StateConflict(_))
    }
}

/// A single field-level validation message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldIssue {
    pub field: String,
    pub message: String,
}

impl FieldIssue {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field: field.into(), message: message.into() }
    }
}

impl fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

fn format_issues(issues: &[FieldIssue]) -> String {
    issues.iter().map(ToString::to_string).collect::<Vec<_>>().join("; ")
}

/// Result type alias for Timekeep operations
pub type Result<T> = std::result::Result<T, TimekeepError>;
