//! Common error types and utilities
//!
//! This module provides standardized error handling infrastructure shared by
//! the Timekeep crates. It includes common error variants, conversions from
//! the serialization and I/O errors the loaders encounter, and a
//! classification trait used to pick log levels.
//!
//! # Error Handling Architecture
//!
//! 1. **`CommonError`**: failures of the configuration sources: bad values,
//!    documents that do not parse and files that cannot be read.
//! 2. **`ErrorClassification` trait**: classifies errors by retryability,
//!    severity and criticality.
//! 3. **`ErrorSeverity` enum**: unified severity levels for logging.
//!
//! ## When to Use CommonError vs Module-Specific Errors
//!
//! Use `CommonError` for plumbing failures that carry no business meaning
//! (a config file that does not parse or cannot be opened). Business rule
//! violations belong in the domain error type instead.
//!
//! ## ErrorSeverity Levels
//!
//! | Level | Use Case | Examples |
//! |-------|----------|----------|
//! | **Info** | Expected conditions | |
//! | **Warning** | Degraded but operational | Interrupted or timed-out reads |
//! | **Error** | Failure requiring attention | Invalid config, parse errors |
//! | **Critical** | Invariant broken | |
//!
//! `CommonError` itself only classifies as `Warning` or `Error`.
//!
//! ## Examples
//!
//! ```rust,ignore
//! use timekeep_common::error::{CommonError, CommonResult};
//!
//! fn read_settings(path: &str) -> CommonResult<String> {
//!     std::fs::read_to_string(path)
//!         .map_err(|e| CommonError::persistence_op("read", e.to_string()))
//! }
//! ```

use std::fmt;
use std::io;

/// Standard result type using CommonError
pub type CommonResult<T> = Result<T, CommonError>;

/// Failures raised while locating, reading and checking configuration
#[derive(Debug, Clone, PartialEq)]
pub enum CommonError {
    /// Configuration-related errors
    Config { message: String, field: Option<String> },

    /// Serialization or deserialization errors
    Serialization { message: String, format: Option<String> },

    /// Data persistence errors (file I/O)
    ///
    /// `transient` is set for I/O failures a retry may clear.
    Persistence { message: String, operation: Option<String>, transient: bool },
}

impl fmt::Display for CommonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config { message, field } => {
                if let Some(field) = field {
                    write!(f, "Configuration error in field '{}': {}", field, message)
                } else {
                    write!(f, "Configuration error: {}", message)
                }
            }
            Self::Serialization { message, format } => {
                if let Some(format) = format {
                    write!(f, "Serialization error ({}): {}", format, message)
                } else {
                    write!(f, "Serialization error: {}", message)
                }
            }
            Self::Persistence { message, operation, .. } => {
                if let Some(op) = operation {
                    write!(f, "Persistence error during '{}': {}", op, message)
                } else {
                    write!(f, "Persistence error: {}", message)
                }
            }
        }
    }
}

impl std::error::Error for CommonError {}

impl ErrorClassification for CommonError {
    fn is_retryable(&self) -> bool {
        matches!(self, Self::Persistence { transient: true, .. })
    }

    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Config { .. } => ErrorSeverity::Error,
            Self::Serialization { .. } => ErrorSeverity::Error,
            Self::Persistence { transient: true, .. } => ErrorSeverity::Warning,
            Self::Persistence { .. } => ErrorSeverity::Error,
        }
    }

    fn is_critical(&self) -> bool {
        self.severity() == ErrorSeverity::Critical
    }
}

impl CommonError {
    /// Create a simple configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config { message: message.into(), field: None }
    }

    /// Create a configuration error tied to a specific field
    pub fn config_field<S: Into<String>, F: Into<String>>(field: F, message: S) -> Self {
        Self::Config { message: message.into(), field: Some(field.into()) }
    }

    /// Create a serialization error with format
    pub fn serialization_format<S: Into<String>, F: Into<String>>(format: F, message: S) -> Self {
        Self::Serialization { message: message.into(), format: Some(format.into()) }
    }

    /// Create a persistence error with the failing operation
    pub fn persistence_op<S: Into<String>, O: Into<String>>(operation: O, message: S) -> Self {
        Self::Persistence {
            message: message.into(),
            operation: Some(operation.into()),
            transient: false,
        }
    }

    /// Stable label for the error variant, suitable for log fields
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Config { .. } => "config",
            Self::Serialization { .. } => "serialization",
            Self::Persistence { .. } => "persistence",
        }
    }
}

/// Error classification trait for consistent error handling across modules
///
/// Implementors describe how an error should be treated by callers that do
/// not care about the concrete variant: whether retrying can help and which
/// log level it deserves.
pub trait ErrorClassification {
    /// Check if this error is retryable
    fn is_retryable(&self) -> bool;

    /// Get the error severity level
    fn severity(&self) -> ErrorSeverity;

    /// Check if this is a critical error requiring immediate attention
    fn is_critical(&self) -> bool;
}

/// Error severity levels for monitoring and alerting
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    /// Informational, typically for debugging
    Info,
    /// Warning, should be monitored but not critical
    Warning,
    /// Error, requires attention and action
    Error,
    /// Critical, immediate action required
    Critical,
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Info => write!(f, "INFO"),
            Self::Warning => write!(f, "WARN"),
            Self::Error => write!(f, "ERROR"),
            Self::Critical => write!(f, "CRITICAL"),
        }
    }
}

// Standard conversions from common error types
impl From<serde_json::Error> for CommonError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization_format("JSON", err.to_string())
    }
}

impl From<toml::de::Error> for CommonError {
    fn from(err: toml::de::Error) -> Self {
        Self::serialization_format("TOML", err.to_string())
    }
}

impl From<io::Error> for CommonError {
    fn from(err: io::Error) -> Self {
        let transient = matches!(
            err.kind(),
            io::ErrorKind::Interrupted | io::ErrorKind::WouldBlock | io::ErrorKind::TimedOut
        );
        Self::Persistence { message: err.to_string(), operation: None, transient }
    }
}
