// Validation Module - field-level validation framework
use std::fmt;

mod validators;

pub use validators::{FieldValidator, RangeValidator, StringValidator};

/// Type alias for validation results
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validation error with detailed field-level errors
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationError {
    pub errors: Vec<FieldError>,
}

impl ValidationError {
    /// Create a new validation error
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Create with a single field error
    pub fn field(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut err = Self::new();
        err.add_field_error(field, message);
        err
    }

    /// Add a field-level error
    pub fn add_field_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(FieldError::new(field, message));
    }

    /// Check if there are any errors
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Get error count
    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    /// Get errors for a specific field
    pub fn field_errors(&self, field: &str) -> Vec<&FieldError> {
        self.errors.iter().filter(|e| e.field == field).collect()
    }

    /// Merge another validation error into this one
    pub fn merge(&mut self, other: ValidationError) {
        self.errors.extend(other.errors);
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.errors.is_empty() {
            write!(f, "Validation error with no specific field errors")?;
        } else if self.errors.len() == 1 {
            write!(f, "Validation failed: {}", self.errors[0].message)?;
        } else {
            write!(f, "Validation failed with {} errors: ", self.errors.len())?;
            for (i, error) in self.errors.iter().enumerate() {
                if i > 0 {
                    write!(f, "; ")?;
                }
                write!(f, "{}: {}", error.field, error.message)?;
            }
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

/// Individual field error
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    /// Create a new field error
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field: field.into(), message: message.into() }
    }
}

/// Accumulates field errors across a whole input before reporting them
///
/// Every check records its failure and moves on, so a caller sees all
/// offending fields at once instead of fixing them one by one.
#[derive(Debug, Default)]
pub struct Validator {
    errors: ValidationError,
}

impl Validator {
    /// Create a new validator
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an error
    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.add_field_error(field, message);
    }

    /// Record an error when `condition` does not hold
    pub fn ensure(&mut self, condition: bool, field: &str, message: impl Into<String>) {
        if !condition {
            self.add_error(field, message);
        }
    }

    /// Validate a field with a specific validator
    pub fn validate_field<T, V>(&mut self, field: &str, value: &T, validator: &V)
    where
        V: FieldValidator<T> + ?Sized,
    {
        if let Err(msg) = validator.validate(value) {
            self.add_error(field, msg);
        }
    }

    /// Validate a numeric range (inclusive on both ends)
    pub fn validate_range<T>(&mut self, field: &str, value: T, min: T, max: T)
    where
        T: PartialOrd + fmt::Display,
    {
        if value < min || value > max {
            self.add_error(field, format!("must be between {} and {}", min, max));
        }
    }

    /// Whether any error has been recorded so far
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Finish validation, returning every recorded error
    pub fn finish(self) -> ValidationResult<()> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self.errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validator_collects_all_errors() {
        let mut validator = Validator::new();
        validator.validate_field("project", &"", &StringValidator::new().not_empty());
        validator.validate_field("task", &"", &StringValidator::new().not_empty());
        validator.validate_range("hours", 30.0, 0.0, 24.0);

        let err = validator.finish().unwrap_err();
        assert_eq!(err.error_count(), 3);
        assert_eq!(err.field_errors("hours").len(), 1);
        assert_eq!(err.field_errors("hours")[0].message, "must be between 0 and 24");
    }

    #[test]
    fn test_validator_passes_clean_input() {
        let mut validator = Validator::new();
        let required = StringValidator::new().not_empty();
        validator.validate_field("project", &"Website Redesign", &required);
        validator.ensure(true, "end_time", "End time must be after start time");
        assert!(!validator.has_errors());
        assert!(validator.finish().is_ok());
    }

    #[test]
    fn test_display_single_and_multiple() {
        let single = ValidationError::field("reason", "Rejection reason is required");
        assert_eq!(single.to_string(), "Validation failed: Rejection reason is required");

        let mut multi = ValidationError::field("project", "Project is required");
        multi.merge(ValidationError::field("task", "Task is required"));
        assert_eq!(
            multi.to_string(),
            "Validation failed with 2 errors: project: Project is required; task: Task is required"
        );
    }
}
