use chrono::NaiveDate;
use timekeep_domain::{
    DepartmentOvertime, EntryTotals, ProjectAllocation, ProjectHours, StatusHours, TimeEntry,
    Timesheet,
};

use super::{group_in_order, overtime_hours};

/// Total, billable and overtime hours over an already filtered listing
pub fn entry_totals(entries: &[TimeEntry], overtime_threshold: f64) -> EntryTotals {
    let total_hours: f64 = entries.iter().map(|e| e.hours).sum();
    let billable_hours = entries.iter().filter(|e| e.billable).map(|e| e.hours).sum();
    EntryTotals {
        total_hours,
        billable_hours,
        overtime_hours: overtime_hours(total_hours, overtime_threshold),
        entry_count: entries.len(),
    }
}

/// Per-project share of the hours booked on `date`
pub fn project_allocation(entries: &[TimeEntry], date: NaiveDate) -> Vec<ProjectAllocation> {
    let day: Vec<&TimeEntry> = entries.iter().filter(|e| e.date == date).collect();
    let day_total: f64 = day.iter().map(|e| e.hours).sum();

    group_in_order(
        day.iter().copied(),
        |e| e.project.clone(),
        |acc: &mut (f64, usize), e| {
            acc.0 += e.hours;
            acc.1 += 1;
        },
    )
    .into_iter()
    .map(|(project, (hours, entry_count))| ProjectAllocation {
        project,
        hours,
        entry_count,
        percentage: if day_total > 0.0 { hours / day_total * 100.0 } else { 0.0 },
    })
    .collect()
}

/// Departments with at least one timesheet over the overtime threshold
pub fn department_overtime(timesheets: &[Timesheet]) -> Vec<DepartmentOvertime> {
    let mut alerts = group_in_order(
        timesheets.iter().filter(|t| t.overtime_hours > 0.0),
        |t| t.department.clone(),
        |count: &mut usize, _| *count += 1,
    );
    alerts.sort_by(|a, b| a.0.cmp(&b.0));
    alerts
        .into_iter()
        .map(|(department, timesheets_with_overtime)| DepartmentOvertime {
            department,
            timesheets_with_overtime,
        })
        .collect()
}

pub fn hours_by_status(entries: &[TimeEntry]) -> Vec<StatusHours> {
    group_in_order(entries, |e| e.status, |hours: &mut f64, e| *hours += e.hours)
        .into_iter()
        .map(|(status, hours)| StatusHours { status, hours })
        .collect()
}

pub fn hours_by_project(entries: &[TimeEntry]) -> Vec<ProjectHours> {
    group_in_order(entries, |e| e.project.clone(), |hours: &mut f64, e| *hours += e.hours)
        .into_iter()
        .map(|(project, hours)| ProjectHours { project, hours })
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use timekeep_domain::{EntryStatus, PeriodRange, TimesheetState};

    use super::*;

    fn entry(
        day: u32,
        project: &str,
        hours: f64,
        billable: bool,
        status: EntryStatus,
    ) -> TimeEntry {
        TimeEntry {
            id: format!("{project}-{day}-{hours}"),
            date: NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
            project: project.into(),
            client: "Acme Corp".into(),
            task: "Development".into(),
            start_time: None,
            end_time: None,
            hours,
            billable,
            status,
            description: None,
        }
    }

    fn sheet(id: &str, department: &str, overtime: f64) -> Timesheet {
        let start = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        Timesheet {
            id: id.into(),
            employee_id: id.into(),
            employee_name: id.into(),
            department: department.into(),
            period: PeriodRange::new(start, start),
            submitted_at: Utc.with_ymd_and_hms(2024, 1, 22, 9, 0, 0).unwrap(),
            entries: vec![],
            employee_notes: None,
            total_hours: 40.0 + overtime,
            overtime_hours: overtime,
            state: TimesheetState::Pending,
        }
    }

    #[test]
    fn totals_split_billable_and_overtime() {
        let entries = vec![
            entry(15, "Website Redesign", 30.0, true, EntryStatus::Approved),
            entry(16, "Internal Training", 12.5, false, EntryStatus::Pending),
        ];
        let totals = entry_totals(&entries, 40.0);
        assert_eq!(totals.total_hours, 42.5);
        assert_eq!(totals.billable_hours, 30.0);
        assert_eq!(totals.overtime_hours, 2.5);
        assert_eq!(totals.entry_count, 2);
    }

    #[test]
    fn allocation_percentages() {
        let entries = vec![
            entry(15, "Website Redesign", 3.0, true, EntryStatus::Draft),
            entry(15, "Mobile App", 1.0, true, EntryStatus::Draft),
            entry(15, "Website Redesign", 2.0, true, EntryStatus::Draft),
            entry(16, "Mobile App", 8.0, true, EntryStatus::Draft),
        ];
        let monday = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let allocation = project_allocation(&entries, monday);
        assert_eq!(allocation.len(), 2);
        assert_eq!(allocation[0].project, "Website Redesign");
        assert_eq!(allocation[0].entry_count, 2);
        assert!((allocation[0].percentage - 83.333).abs() < 0.01);
        let wednesday = NaiveDate::from_ymd_opt(2024, 1, 17).unwrap();
        assert!(project_allocation(&entries, wednesday).is_empty());
    }

    #[test]
    fn department_alerts_sorted() {
        let sheets = vec![
            sheet("a", "Marketing", 3.0),
            sheet("b", "Engineering", 2.5),
            sheet("c", "Engineering", 0.0),
            sheet("d", "Engineering", 1.0),
        ];
        let alerts = department_overtime(&sheets);
        assert_eq!(
            alerts,
            vec![
                DepartmentOvertime {
                    department: "Engineering".into(),
                    timesheets_with_overtime: 2,
                },
                DepartmentOvertime { department: "Marketing".into(), timesheets_with_overtime: 1 },
            ]
        );
    }

    #[test]
    fn grouping_by_status_and_project() {
        let entries = vec![
            entry(15, "Website Redesign", 3.0, true, EntryStatus::Approved),
            entry(15, "Mobile App", 1.5, true, EntryStatus::Pending),
            entry(16, "Website Redesign", 2.0, true, EntryStatus::Pending),
        ];
        let by_status = hours_by_status(&entries);
        assert_eq!(by_status[0], StatusHours { status: EntryStatus::Approved, hours: 3.0 });
        assert_eq!(by_status[1], StatusHours { status: EntryStatus::Pending, hours: 3.5 });

        let by_project = hours_by_project(&entries);
        assert_eq!(by_project[0], ProjectHours { project: "Website Redesign".into(), hours: 5.0 });
    }
}
