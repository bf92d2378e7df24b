//! Bridge from the shared validation framework to the domain error

use timekeep_common::ValidationError;
use timekeep_domain::{FieldIssue, Result, TimekeepError};

/// Convert accumulated field errors into `TimekeepError::Validation`
pub fn into_domain_error(err: ValidationError) -> TimekeepError {
    TimekeepError::Validation(
        err.errors.into_iter().map(|e| FieldIssue::new(e.field, e.message)).collect(),
    )
}

pub trait ValidationResultExt<T> {
    fn into_domain(self) -> Result<T>;
}

impl<T> ValidationResultExt<T> for std::result::Result<T, ValidationError> {
    fn into_domain(self) -> Result<T> {
        self.map_err(into_domain_error)
    }
}

#[cfg(test)]
mod tests {
    use timekeep_common::Validator;

    use super::*;

    #[test]
    fn keeps_every_field_issue() {
        let mut validator = Validator::new();
        validator.add_error("project", "Project is required");
        validator.add_error("task", "Task is required");

        let err = validator.finish().into_domain().unwrap_err();
        let fields: Vec<_> = err.field_issues().iter().map(|i| i.field.as_str()).collect();
        assert_eq!(fields, ["project", "task"]);
    }
}
