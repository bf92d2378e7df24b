//! Calendar arithmetic for period navigation and date windows
//!
//! Weeks start on Sunday unless a caller asks otherwise. All functions work
//! on naive dates; time zones are resolved before dates reach the engine.

use chrono::{Datelike, Days, Months, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use timekeep_domain::{DateRange, Result, TimekeepError};

/// Granularity of the timesheet view being navigated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PeriodUnit {
    Day,
    Week,
    Month,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Previous,
    Next,
}

/// First day of the week containing `date`
pub fn week_start_of(date: NaiveDate, week_start: Weekday) -> NaiveDate {
    let offset =
        (7 + date.weekday().num_days_from_sunday() - week_start.num_days_from_sunday()) % 7;
    date - Days::new(u64::from(offset))
}

/// The seven consecutive dates beginning at `start`
pub fn week_dates(start: NaiveDate) -> [NaiveDate; 7] {
    let mut dates = [start; 7];
    for (offset, slot) in (0u64..).zip(dates.iter_mut()) {
        *slot = start + Days::new(offset);
    }
    dates
}

/// Move `date` one unit backwards or forwards
///
/// Month steps follow the calendar and clamp the day (Jan 31 + 1 month is the
/// last day of February).
pub fn shift_period(date: NaiveDate, unit: PeriodUnit, direction: Direction) -> Result<NaiveDate> {
    let shifted = match (unit, direction) {
        (PeriodUnit::Day, Direction::Previous) => date.checked_sub_days(Days::new(1)),
        (PeriodUnit::Day, Direction::Next) => date.checked_add_days(Days::new(1)),
        (PeriodUnit::Week, Direction::Previous) => date.checked_sub_days(Days::new(7)),
        (PeriodUnit::Week, Direction::Next) => date.checked_add_days(Days::new(7)),
        (PeriodUnit::Month, Direction::Previous) => date.checked_sub_months(Months::new(1)),
        (PeriodUnit::Month, Direction::Next) => date.checked_add_months(Months::new(1)),
    };
    shifted.ok_or_else(|| {
        TimekeepError::validation("date", format!("{date} cannot be shifted further"))
    })
}

/// First and last day of a calendar month
pub fn month_bounds(year: i32, month: u32) -> Result<(NaiveDate, NaiveDate)> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| {
            TimekeepError::validation("month", format!("invalid month {year}-{month}"))
        })?;
    let last = first
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .ok_or_else(|| {
            TimekeepError::validation("month", format!("month {year}-{month} is out of range"))
        })?;
    Ok((first, last))
}

/// Inclusive window a [`DateRange`] selects around `today`, `None` for `All`
pub fn date_window(range: DateRange, today: NaiveDate) -> Option<(NaiveDate, NaiveDate)> {
    match range {
        DateRange::All => None,
        DateRange::Today => Some((today, today)),
        DateRange::Week => {
            let start = week_start_of(today, Weekday::Sun);
            Some((start, start + Days::new(6)))
        }
        DateRange::Month => month_bounds(today.year(), today.month()).ok(),
        DateRange::Quarter => {
            let first_month = (today.month0() / 3) * 3 + 1;
            let (start, _) = month_bounds(today.year(), first_month).ok()?;
            let (_, end) = month_bounds(today.year(), first_month + 2).ok()?;
            Some((start, end))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn sunday_start_week() {
        // 2024-01-17 is a Wednesday
        assert_eq!(week_start_of(date(2024, 1, 17), Weekday::Sun), date(2024, 1, 14));
        assert_eq!(week_start_of(date(2024, 1, 14), Weekday::Sun), date(2024, 1, 14));
        assert_eq!(week_start_of(date(2024, 1, 17), Weekday::Mon), date(2024, 1, 15));
    }

    #[test]
    fn week_dates_are_consecutive() {
        let dates = week_dates(date(2023, 12, 31));
        assert_eq!(dates[0], date(2023, 12, 31));
        assert_eq!(dates[6], date(2024, 1, 6));
    }

    #[test]
    fn shift_by_each_unit() {
        let d = date(2024, 1, 31);
        assert_eq!(shift_period(d, PeriodUnit::Day, Direction::Next).unwrap(), date(2024, 2, 1));
        let previous_week = shift_period(d, PeriodUnit::Week, Direction::Previous).unwrap();
        assert_eq!(previous_week, date(2024, 1, 24));
        assert_eq!(shift_period(d, PeriodUnit::Month, Direction::Next).unwrap(), date(2024, 2, 29));
        let previous_month = shift_period(d, PeriodUnit::Month, Direction::Previous).unwrap();
        assert_eq!(previous_month, date(2023, 12, 31));
    }

    #[test]
    fn month_bounds_handles_december_and_invalid() {
        assert_eq!(month_bounds(2024, 12).unwrap(), (date(2024, 12, 1), date(2024, 12, 31)));
        assert_eq!(month_bounds(2024, 2).unwrap().1, date(2024, 2, 29));
        assert!(month_bounds(2024, 13).unwrap_err().is_validation());
    }

    #[test]
    fn quarter_window() {
        let (start, end) = date_window(DateRange::Quarter, date(2024, 5, 10)).unwrap();
        assert_eq!(start, date(2024, 4, 1));
        assert_eq!(end, date(2024, 6, 30));
        assert_eq!(date_window(DateRange::All, date(2024, 5, 10)), None);
    }
}
