use timekeep_domain::{ApprovalStats, PolicyConfig, Timesheet, TimesheetStatus};

use crate::approval::PolicyEvaluator;

/// Queue statistics; violations are evaluated against `policy` on the fly
pub fn approval_stats(timesheets: &[Timesheet], policy: &PolicyConfig) -> ApprovalStats {
    let evaluator = PolicyEvaluator::new(policy.clone());
    let mut stats = ApprovalStats::default();

    for sheet in timesheets {
        match sheet.status() {
            TimesheetStatus::Pending => stats.pending += 1,
            TimesheetStatus::Approved => stats.approved += 1,
            TimesheetStatus::Rejected => stats.rejected += 1,
        }
        stats.total_hours += sheet.total_hours;
        stats.overtime_hours += sheet.overtime_hours;
        if !evaluator.violations(sheet).is_empty() {
            stats.with_violations += 1;
        }
    }

    let decided = stats.approved + stats.rejected;
    if decided > 0 {
        #[allow(clippy::cast_precision_loss)]
        let rate = stats.approved as f64 / decided as f64;
        stats.approval_rate = rate;
    }
    stats
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, TimeZone, Utc};
    use timekeep_domain::{PeriodRange, TimesheetLine, TimesheetState};

    use super::*;

    fn sheet(id: &str, total: f64, overtime: f64, state: TimesheetState) -> Timesheet {
        let day = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        Timesheet {
            id: id.into(),
            employee_id: "EMP001".into(),
            employee_name: "John Doe".into(),
            department: "Engineering".into(),
            period: PeriodRange::new(day, day),
            submitted_at: Utc.with_ymd_and_hms(2024, 1, 22, 9, 0, 0).unwrap(),
            entries: vec![TimesheetLine {
                date: day,
                project: "Website Redesign".into(),
                hours: total,
                notes: "Frontend development".into(),
            }],
            employee_notes: None,
            total_hours: total,
            overtime_hours: overtime,
            state,
        }
    }

    fn decided(approved: bool) -> TimesheetState {
        let at = Utc.with_ymd_and_hms(2024, 1, 23, 9, 0, 0).unwrap();
        if approved {
            TimesheetState::Approved { by: "Jane Smith".into(), at, comment: None }
        } else {
            let reason = "Missing detail".to_string();
            TimesheetState::Rejected { by: "Jane Smith".into(), at, reason }
        }
    }

    #[test]
    fn pending_only_queue_has_zero_rate() {
        let sheets = [
            sheet("ts-1", 40.0, 0.0, TimesheetState::Pending),
            sheet("ts-2", 42.5, 2.5, TimesheetState::Pending),
        ];
        let stats = approval_stats(&sheets, &PolicyConfig::default());

        assert_eq!(stats.pending, 2);
        assert_eq!(stats.approval_rate, 0.0);
        assert_eq!(stats.approval_rate_percent(), 0);
        assert_eq!(stats.total_hours, 82.5);
        assert_eq!(stats.overtime_hours, 2.5);
        assert_eq!(stats.with_violations, 1);
    }

    #[test]
    fn all_rejected_is_zero_percent() {
        let sheets =
            [sheet("ts-1", 40.0, 0.0, decided(false)), sheet("ts-2", 38.0, 0.0, decided(false))];
        let stats = approval_stats(&sheets, &PolicyConfig::default());

        assert_eq!(stats.rejected, 2);
        assert_eq!(stats.approval_rate, 0.0);
        assert_eq!(stats.approval_rate_percent(), 0);
    }

    #[test]
    fn pending_does_not_dilute_the_rate() {
        let sheets = [
            sheet("ts-1", 40.0, 0.0, decided(true)),
            sheet("ts-2", 40.0, 0.0, decided(true)),
            sheet("ts-3", 40.0, 0.0, decided(false)),
            sheet("ts-4", 40.0, 0.0, TimesheetState::Pending),
        ];
        let stats = approval_stats(&sheets, &PolicyConfig::default());

        assert_eq!((stats.pending, stats.approved, stats.rejected), (1, 2, 1));
        assert_eq!(stats.approval_rate_percent(), 67);
    }

    #[test]
    fn violations_follow_the_given_policy() {
        let mut terse = sheet("ts-1", 40.0, 0.0, TimesheetState::Pending);
        terse.entries[0].notes = "Coding".into();
        let sheets = [terse];

        assert_eq!(approval_stats(&sheets, &PolicyConfig::default()).with_violations, 1);
        let lenient = PolicyConfig { overtime_threshold_hours: 40.0, min_note_chars: 4 };
        assert_eq!(approval_stats(&sheets, &lenient).with_violations, 0);
    }

    #[test]
    fn empty_input_yields_defaults() {
        assert_eq!(approval_stats(&[], &PolicyConfig::default()), ApprovalStats::default());
    }
}
