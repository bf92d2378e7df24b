use chrono::NaiveDate;
use timekeep_domain::{DailyTotal, TimeEntry};

/// Totals for one date; `target_met` when the day reaches `target` hours
pub fn aggregate_daily(entries: &[TimeEntry], date: NaiveDate, target: f64) -> DailyTotal {
    let (total_hours, entry_count) = entries
        .iter()
        .filter(|e| e.date == date)
        .fold((0.0, 0), |(hours, count), e| (hours + e.hours, count + 1));

    DailyTotal { date, total_hours, entry_count, target_met: total_hours >= target }
}

#[cfg(test)]
mod tests {
    use timekeep_domain::EntryStatus;

    use super::*;

    fn entry(day: u32, hours: f64) -> TimeEntry {
        TimeEntry {
            id: format!("e-{day}-{hours}"),
            date: NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
            project: "Website Redesign".into(),
            client: "Acme Corp".into(),
            task: "Frontend Development".into(),
            start_time: None,
            end_time: None,
            hours,
            billable: true,
            status: EntryStatus::Draft,
            description: None,
        }
    }

    #[test]
    fn two_short_entries_miss_target() {
        let entries = vec![entry(15, 3.5), entry(15, 3.5), entry(16, 8.0)];
        let day = aggregate_daily(&entries, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(), 8.0);
        assert_eq!(day.total_hours, 7.0);
        assert_eq!(day.entry_count, 2);
        assert!(!day.target_met);
    }

    #[test]
    fn reaching_target_exactly_counts() {
        let entries = vec![entry(16, 8.0)];
        let day = aggregate_daily(&entries, NaiveDate::from_ymd_opt(2024, 1, 16).unwrap(), 8.0);
        assert!(day.target_met);
    }

    #[test]
    fn empty_day() {
        let day = aggregate_daily(&[], NaiveDate::from_ymd_opt(2024, 1, 17).unwrap(), 8.0);
        assert_eq!(day.entry_count, 0);
        assert_eq!(day.total_hours, 0.0);
    }
}
