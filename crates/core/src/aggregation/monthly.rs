use chrono::Days;
use timekeep_domain::{DaySummary, MonthlySummary, Result, TimeEntry};

use crate::period::month_bounds;

/// One summary per calendar day of `year`-`month`
///
/// Fails with a validation error when the month does not exist.
pub fn aggregate_monthly(entries: &[TimeEntry], year: i32, month: u32) -> Result<MonthlySummary> {
    let (first, last) = month_bounds(year, month)?;

    let mut days = Vec::with_capacity(31);
    let mut date = first;
    while date <= last {
        days.push(summarize_day(entries, date));
        date = date + Days::new(1);
    }

    let month_total: f64 = days.iter().map(|d| d.total_hours).sum();
    let month_billable: f64 = days.iter().map(|d| d.billable_hours).sum();
    let working_days = days.iter().filter(|d| !d.entries.is_empty()).count();
    let average_per_working_day = if working_days == 0 {
        0.0
    } else {
        #[allow(clippy::cast_precision_loss)]
        let divisor = working_days as f64;
        month_total / divisor
    };

    Ok(MonthlySummary {
        year,
        month,
        days,
        month_total,
        month_billable,
        working_days,
        average_per_working_day,
    })
}

fn summarize_day(entries: &[TimeEntry], date: chrono::NaiveDate) -> DaySummary {
    let day_entries: Vec<TimeEntry> = entries.iter().filter(|e| e.date == date).cloned().collect();

    let mut projects: Vec<String> = Vec::new();
    for entry in &day_entries {
        if !projects.contains(&entry.project) {
            projects.push(entry.project.clone());
        }
    }

    DaySummary {
        date,
        total_hours: day_entries.iter().map(|e| e.hours).sum(),
        billable_hours: day_entries.iter().filter(|e| e.billable).map(|e| e.hours).sum(),
        projects,
        entries: day_entries,
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use timekeep_domain::EntryStatus;

    use super::*;

    fn entry(month: u32, day: u32, project: &str, hours: f64, billable: bool) -> TimeEntry {
        TimeEntry {
            id: format!("{project}-{month}-{day}"),
            date: NaiveDate::from_ymd_opt(2024, month, day).unwrap(),
            project: project.into(),
            client: "Acme Corp".into(),
            task: "Development".into(),
            start_time: None,
            end_time: None,
            hours,
            billable,
            status: EntryStatus::Approved,
            description: None,
        }
    }

    #[test]
    fn february_leap_year() {
        let entries = vec![
            entry(2, 5, "Website Redesign", 6.0, true),
            entry(2, 5, "Internal Training", 2.0, false),
            entry(2, 5, "Website Redesign", 1.0, true),
            entry(2, 6, "Mobile App", 3.0, true),
            entry(3, 1, "Mobile App", 8.0, true),
        ];
        let summary = aggregate_monthly(&entries, 2024, 2).unwrap();

        assert_eq!(summary.days.len(), 29);
        assert_eq!(summary.month_total, 12.0);
        assert_eq!(summary.month_billable, 10.0);
        assert_eq!(summary.working_days, 2);
        assert_eq!(summary.average_per_working_day, 6.0);

        let fifth = &summary.days[4];
        assert_eq!(fifth.entries.len(), 3);
        assert_eq!(fifth.projects, ["Website Redesign", "Internal Training"]);
    }

    #[test]
    fn empty_month_average_is_zero() {
        let summary = aggregate_monthly(&[], 2024, 4).unwrap();
        assert_eq!(summary.days.len(), 30);
        assert_eq!(summary.working_days, 0);
        assert_eq!(summary.average_per_working_day, 0.0);
    }

    #[test]
    fn invalid_month_is_rejected() {
        let err = aggregate_monthly(&[], 2024, 13).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(err.field_issues()[0].field, "month");
    }
}
