//! Sample timesheets and entries modelled on a small consultancy week.

use chrono::NaiveDate;
use timekeep_domain::{EntryStatus, PeriodRange, TimeEntry, TimesheetLine, TimesheetSubmission};

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn line(day: u32, project: &str, hours: f64, notes: &str) -> TimesheetLine {
    TimesheetLine { date: date(2024, 1, day), project: project.into(), hours, notes: notes.into() }
}

/// Submission for the week starting Monday 2024-01-15
pub fn submission(
    id: &str,
    employee: &str,
    department: &str,
    lines: Vec<TimesheetLine>,
) -> TimesheetSubmission {
    TimesheetSubmission {
        id: id.into(),
        employee_id: format!("EMP-{id}"),
        employee_name: employee.into(),
        department: department.into(),
        period: PeriodRange::new(date(2024, 1, 15), date(2024, 1, 21)),
        entries: lines,
        employee_notes: None,
    }
}

pub fn standard_week(id: &str, employee: &str, department: &str) -> TimesheetSubmission {
    let lines =
        (15..=19).map(|d| line(d, "Website Redesign", 8.0, "Frontend development")).collect();
    submission(id, employee, department, lines)
}

pub fn overtime_week(id: &str, employee: &str, department: &str) -> TimesheetSubmission {
    let mut lines: Vec<_> =
        (15..=19).map(|d| line(d, "Website Redesign", 8.0, "Frontend development")).collect();
    lines.push(line(20, "Mobile App", 2.5, "Work"));
    submission(id, employee, department, lines)
}

pub fn entry(id: &str, day: u32, project: &str, hours: f64, billable: bool) -> TimeEntry {
    TimeEntry {
        id: id.into(),
        date: date(2024, 1, day),
        project: project.into(),
        client: if project == "Mobile App" { "TechStart Inc" } else { "Acme Corp" }.into(),
        task: "Development".into(),
        start_time: None,
        end_time: None,
        hours,
        billable,
        status: EntryStatus::Pending,
        description: Some(format!("{project} work")),
    }
}
