//! Performance benchmarks for the shift roster.
//!
//! Measures the duration calculator and the full assignment rule pass over
//! in-memory stores of increasing size. Every rule reads whole collections,
//! so assignment cost grows with the number of stored records.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use std::sync::Arc;

use chrono::NaiveDate;
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;

use shift_roster::calculation::{check_daily_hours, shift_duration};
use shift_roster::config::PolicyConfig;
use shift_roster::models::{Assignment, ClockTime, NewEmployee, Shift};
use shift_roster::roster::Roster;
use shift_roster::store::MemoryStore;

fn make_shift(index: usize) -> Shift {
    let date = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap() + chrono::Days::new((index / 4) as u64);
    let start_hour = ((index % 4) * 6) as u32;
    Shift {
        shift_id: format!("S{}", index),
        date,
        start_time: ClockTime::from_hm(start_hour, 0).unwrap(),
        end_time: ClockTime::from_hm((start_hour + 2) % 24, 30).unwrap(),
    }
}

/// Builds a store with `records` employees and shifts, each employee
/// already holding one assignment.
fn populated_store(records: usize) -> MemoryStore {
    let employees = (1..=records)
        .map(|i| NewEmployee::new(format!("Employee {}", i), "555-0100").with_id(format!("E{:03}", i)))
        .collect();
    let shifts = (0..records).map(make_shift).collect();
    let assignments = (1..=records)
        .map(|i| Assignment::new(format!("E{:03}", i), format!("S{}", i - 1)))
        .collect();

    MemoryStore::new(PolicyConfig::new(Decimal::new(24, 0)))
        .with_employees(employees)
        .with_shifts(shifts)
        .with_assignments(assignments)
}

fn bench_shift_duration(c: &mut Criterion) {
    let start = ClockTime::parse("2200").unwrap();
    let end = ClockTime::parse("0630").unwrap();

    c.bench_function("shift_duration_overnight", |b| {
        b.iter(|| shift_duration(black_box(start), black_box(end)))
    });
}

fn bench_daily_hours_check(c: &mut Criterion) {
    let existing: Vec<Shift> = (0..4).map(make_shift).collect();
    let candidate = make_shift(1);

    c.bench_function("daily_hours_check_four_shifts", |b| {
        b.iter(|| check_daily_hours(black_box(&existing), black_box(&candidate), Decimal::new(8, 0)))
    });
}

fn bench_assignment_rules(c: &mut Criterion) {
    let mut group = c.benchmark_group("assign_shift");

    for records in [10usize, 100, 1000] {
        group.throughput(Throughput::Elements(1));
        group.bench_with_input(BenchmarkId::from_parameter(records), &records, |b, &records| {
            b.iter_batched(
                || Roster::new(Arc::new(populated_store(records))),
                |roster| {
                    // Last employee takes the first shift: passes every rule
                    let employee_id = format!("E{:03}", records);
                    black_box(roster.assign_shift(&employee_id, "S0").unwrap())
                },
                criterion::BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

fn bench_duplicate_rejection(c: &mut Criterion) {
    let roster = Roster::new(Arc::new(populated_store(1000)));

    c.bench_function("assign_shift_duplicate_1000", |b| {
        b.iter(|| black_box(roster.assign_shift("E001", "S0").unwrap()))
    });
}

criterion_group!(
    benches,
    bench_shift_duration,
    bench_daily_hours_check,
    bench_assignment_rules,
    bench_duplicate_rejection,
);
criterion_main!(benches);
