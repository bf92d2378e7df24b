//! Grouped sums and derived metrics over entries and timesheets
//!
//! Sums keep full `f64` precision; rounding happens only in the display
//! helpers at the bottom of this module.

mod approvals;
mod breakdown;
mod daily;
mod monthly;
mod weekly;

use chrono::NaiveDate;
use timekeep_domain::constants::DISPLAY_DECIMALS;
use timekeep_domain::{AggregationConfig, DailyTotal, TimeEntry};

pub use approvals::approval_stats;
pub use breakdown::{
    department_overtime, entry_totals, hours_by_project, hours_by_status, project_allocation,
};
pub use daily::aggregate_daily;
pub use monthly::aggregate_monthly;
pub use weekly::aggregate_weekly;

/// Hours above `threshold`, never negative
pub fn overtime_hours(total: f64, threshold: f64) -> f64 {
    (total - threshold).max(0.0)
}

/// Round to `decimals` places for presentation
pub fn round_for_display(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(i32::try_from(decimals).unwrap_or(i32::MAX));
    (value * factor).round() / factor
}

/// Hours with one decimal and an `h` suffix ("7.0h")
pub fn format_hours(hours: f64) -> String {
    format_hours_with(hours, DISPLAY_DECIMALS)
}

/// Hours with `decimals` places and an `h` suffix
pub fn format_hours_with(hours: f64, decimals: u32) -> String {
    let precision = usize::try_from(decimals).unwrap_or(usize::MAX);
    format!("{hours:.precision$}h")
}

/// Daily targets and display rounding taken from the loaded configuration
#[derive(Debug, Clone, Default)]
pub struct Aggregator {
    config: AggregationConfig,
}

impl Aggregator {
    pub fn new(config: AggregationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AggregationConfig {
        &self.config
    }

    /// [`aggregate_daily`] against the configured daily target
    pub fn daily(&self, entries: &[TimeEntry], date: NaiveDate) -> DailyTotal {
        aggregate_daily(entries, date, self.config.daily_target_hours)
    }

    /// [`round_for_display`] with the configured decimals
    pub fn round(&self, value: f64) -> f64 {
        round_for_display(value, self.config.display_decimals)
    }

    pub fn format_hours(&self, hours: f64) -> String {
        format_hours_with(hours, self.config.display_decimals)
    }
}

/// Keys in first-appearance order with their accumulated values
pub(crate) fn group_in_order<'a, T, K, V>(
    items: impl IntoIterator<Item = &'a T>,
    key: impl Fn(&'a T) -> K,
    mut fold: impl FnMut(&mut V, &'a T),
) -> Vec<(K, V)>
where
    T: 'a,
    K: PartialEq,
    V: Default,
{
    let mut groups: Vec<(K, V)> = Vec::new();
    for item in items {
        let k = key(item);
        let idx = match groups.iter().position(|(existing, _)| *existing == k) {
            Some(idx) => idx,
            None => {
                groups.push((k, V::default()));
                groups.len() - 1
            }
        };
        fold(&mut groups[idx].1, item);
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overtime_is_clamped_at_zero() {
        assert_eq!(overtime_hours(42.5, 40.0), 2.5);
        assert_eq!(overtime_hours(35.0, 40.0), 0.0);
        assert_eq!(overtime_hours(40.0, 40.0), 0.0);
    }

    #[test]
    fn display_rounding() {
        assert_eq!(round_for_display(7.25, 1), 7.3);
        assert_eq!(round_for_display(2.0 / 3.0, 2), 0.67);
        assert_eq!(format_hours(7.0), "7.0h");
        assert_eq!(format_hours(42.5), "42.5h");
    }

    #[test]
    fn aggregator_uses_configured_target_and_decimals() {
        let config = AggregationConfig { daily_target_hours: 7.5, display_decimals: 2 };
        let aggregator = Aggregator::new(config);
        let day = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let entry = TimeEntry {
            id: "e-1".into(),
            date: day,
            project: "Website Redesign".into(),
            client: "Acme Corp".into(),
            task: "Frontend Development".into(),
            start_time: None,
            end_time: None,
            hours: 7.5,
            billable: true,
            status: timekeep_domain::EntryStatus::Draft,
            description: None,
        };

        assert!(aggregator.daily(&[entry.clone()], day).target_met);
        assert!(!Aggregator::default().daily(&[entry], day).target_met);
        assert_eq!(aggregator.round(2.0 / 3.0), 0.67);
        assert_eq!(aggregator.format_hours(7.0), "7.00h");
        assert_eq!(Aggregator::default().format_hours(7.26), "7.3h");
        assert_eq!(format_hours_with(7.0, 0), "7h");
    }

    #[test]
    fn groups_keep_first_appearance_order() {
        let words = ["b", "a", "b", "c", "a"];
        let groups = group_in_order(words.iter(), |w| *w, |count: &mut usize, _| *count += 1);
        assert_eq!(groups, vec![("b", 2), ("a", 2), ("c", 1)]);
    }
}
