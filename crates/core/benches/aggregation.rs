use chrono::{Days, NaiveDate, Weekday};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use timekeep_core::{aggregate_monthly, aggregate_weekly, entry_totals, filter_entries};
use timekeep_domain::{DateRange, EntryStatus, FilterSpec, TimeEntry};

const PROJECTS: [&str; 4] =
    ["Website Redesign", "Mobile App", "Database Migration", "Internal Training"];

fn sample_entries(count: usize) -> Vec<TimeEntry> {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    (0..count)
        .map(|idx| TimeEntry {
            id: format!("entry-{idx}"),
            date: start + Days::new((idx % 90) as u64),
            project: PROJECTS[idx % PROJECTS.len()].to_string(),
            client: if idx % 3 == 0 { "TechStart Inc" } else { "Acme Corp" }.to_string(),
            task: "Development".to_string(),
            start_time: None,
            end_time: None,
            hours: 0.5 + (idx % 8) as f64,
            billable: idx % 5 != 0,
            status: if idx % 2 == 0 { EntryStatus::Approved } else { EntryStatus::Pending },
            description: Some(format!("Benchmark entry {idx}")),
        })
        .collect()
}

fn aggregation_benchmark(c: &mut Criterion) {
    let entries = sample_entries(5_000);
    let today = NaiveDate::from_ymd_opt(2024, 2, 14).unwrap();

    let mut group = c.benchmark_group("aggregation");
    group.sample_size(20).measurement_time(std::time::Duration::from_secs(10));

    group.bench_function("filter_entries", |b| {
        let spec = FilterSpec {
            search: "benchmark".into(),
            client: "Acme Corp".into(),
            date_range: DateRange::Month,
            hours_threshold: Some(2.0),
            ..FilterSpec::default()
        };
        b.iter(|| black_box(filter_entries(black_box(&entries), &spec, today)));
    });

    group.bench_function("aggregate_weekly", |b| {
        b.iter(|| black_box(aggregate_weekly(black_box(&entries), today, Weekday::Sun)));
    });

    group.bench_function("aggregate_monthly", |b| {
        b.iter(|| black_box(aggregate_monthly(black_box(&entries), 2024, 2).unwrap()));
    });

    group.bench_function("entry_totals", |b| {
        b.iter(|| black_box(entry_totals(black_box(&entries), 40.0)));
    });

    group.finish();
}

criterion_group!(core_benchmarks, aggregation_benchmark);
criterion_main!(core_benchmarks);
