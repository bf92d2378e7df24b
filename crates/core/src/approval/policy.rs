//! Policy rules evaluated against timesheets on every read

use timekeep_domain::{PolicyConfig, PolicyViolation, Timesheet, TimesheetLine};

use crate::aggregation::overtime_hours;

/// Evaluates the configured approval policy
#[derive(Debug, Clone, Default)]
pub struct PolicyEvaluator {
    config: PolicyConfig,
}

impl PolicyEvaluator {
    pub fn new(config: PolicyConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PolicyConfig {
        &self.config
    }

    /// Overtime owed for a weekly total under this policy
    pub fn overtime_for(&self, total_hours: f64) -> f64 {
        overtime_hours(total_hours, self.config.overtime_threshold_hours)
    }

    /// Rules `timesheet` currently breaks, in a stable order
    pub fn violations(&self, timesheet: &Timesheet) -> Vec<PolicyViolation> {
        let mut violations = Vec::new();
        if timesheet.overtime_hours > 0.0 {
            violations.push(PolicyViolation::OvertimeThreshold);
        }
        if timesheet.entries.iter().any(|line| self.lacks_detail(line)) {
            violations.push(PolicyViolation::InsufficientDetail);
        }
        violations
    }

    fn lacks_detail(&self, line: &TimesheetLine) -> bool {
        line.notes.trim().chars().count() < self.config.min_note_chars
    }
}
