use chrono::{NaiveDate, Weekday};
use timekeep_domain::{TimeEntry, WeeklyGrid, WeeklyRow};

use super::group_in_order;
use crate::period::{week_dates, week_start_of};

/// Project-by-day grid for the week containing `week_of`
///
/// Rows cover only projects with entries inside the week, in the order they
/// first appear in `entries`.
pub fn aggregate_weekly(
    entries: &[TimeEntry],
    week_of: NaiveDate,
    week_start: Weekday,
) -> WeeklyGrid {
    let dates = week_dates(week_start_of(week_of, week_start));
    let in_week: Vec<(usize, &TimeEntry)> = entries
        .iter()
        .filter_map(|e| dates.iter().position(|d| *d == e.date).map(|i| (i, e)))
        .collect();

    let grouped = group_in_order(
        &in_week,
        |(_, e)| e.project.clone(),
        |daily: &mut [f64; 7], (i, e)| daily[*i] += e.hours,
    );

    let mut daily_totals = [0.0; 7];
    let rows: Vec<WeeklyRow> = grouped
        .into_iter()
        .map(|(project, daily_hours)| {
            for (total, hours) in daily_totals.iter_mut().zip(daily_hours) {
                *total += hours;
            }
            WeeklyRow { project, daily_hours, total: daily_hours.iter().sum() }
        })
        .collect();

    let week_total = daily_totals.iter().sum();
    WeeklyGrid { dates, rows, daily_totals, week_total }
}
