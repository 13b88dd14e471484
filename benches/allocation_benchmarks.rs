//! Allocation Benchmarks
//!
//! Stratified allocation and team bucketing over rosters of increasing size.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use cohort_core::allocation::{
    allocate, bucket_seeded, classroom_names, location_names, BucketOptions,
};
use cohort_core::models::Record;

fn roster(size: usize) -> Vec<Record> {
    let branches = ["CSE", "ECE", "MECH", "CIVIL", "BT", "AIML"];
    (0..size)
        .map(|i| {
            Record::new(
                format!("Student {i}"),
                format!("ADM{i:06}"),
                if i % 3 == 0 { "F" } else { "M" },
                branches[i % branches.len()],
            )
        })
        .collect()
}

fn benchmark_stratified_allocation(c: &mut Criterion) {
    let mut group = c.benchmark_group("stratified_allocation");
    let classrooms = classroom_names(12);

    for size in [100, 1_000, 10_000] {
        let records = roster(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &records, |b, records| {
            b.iter(|| allocate(black_box(records), &classrooms))
        });
    }
    group.finish();
}

fn benchmark_team_bucketing(c: &mut Criterion) {
    let mut group = c.benchmark_group("team_bucketing");
    let options = BucketOptions::new(6, location_names(8), "T");

    for size in [100, 1_000, 10_000] {
        let records = roster(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &records, |b, records| {
            b.iter(|| bucket_seeded(black_box(records), &options, Some(42)))
        });
    }
    group.finish();
}

criterion_group!(benches, benchmark_stratified_allocation, benchmark_team_bucketing);
criterion_main!(benches);
