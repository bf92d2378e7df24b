//! Filter criteria shared by timesheet and entry listings

use serde::{Deserialize, Serialize};

use crate::impl_domain_status_conversions;

/// Date window relative to the caller-supplied "today"
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateRange {
    #[default]
    All,
    Today,
    /// Sunday-start week containing today
    Week,
    Month,
    Quarter,
}

impl_domain_status_conversions!(DateRange {
    All => "all",
    Today => "today",
    Week => "week",
    Month => "month",
    Quarter => "quarter",
});

/// AND-combined predicates; empty strings and `None` are wildcards
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterSpec {
    pub search: String,
    pub employee: String,
    pub department: String,
    pub client: String,
    pub project: String,
    pub status: String,
    pub date_range: DateRange,
    pub hours_threshold: Option<f64>,
}

impl FilterSpec {
    pub fn has_active_filters(&self) -> bool {
        !self.search.is_empty()
            || !self.employee.is_empty()
            || !self.department.is_empty()
            || !self.client.is_empty()
            || !self.project.is_empty()
            || !self.status.is_empty()
            || self.date_range != DateRange::All
            || self.hours_threshold.is_some()
    }

    /// Filter with every predicate reset to its wildcard
    pub fn cleared() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_spec_is_inactive() {
        assert!(!FilterSpec::default().has_active_filters());
        assert!(!FilterSpec::cleared().has_active_filters());
    }

    #[test]
    fn any_predicate_activates() {
        let spec = FilterSpec { date_range: DateRange::Week, ..FilterSpec::default() };
        assert!(spec.has_active_filters());

        let spec = FilterSpec { hours_threshold: Some(40.0), ..FilterSpec::default() };
        assert!(spec.has_active_filters());
    }
}
