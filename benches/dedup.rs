// benches/dedup.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};

use jobsweep::{
    model::JobPosting,
    pipeline::{combine, dedup},
    stats,
};

/// 30 result tables of 20 rows, roughly a third of them repeats.
fn sample_tables() -> Vec<Vec<JobPosting>> {
    (0..30)
        .map(|t| {
            (0..20)
                .map(|i| {
                    let id = (t * 13 + i) % 400;
                    JobPosting::new("indeed", "Software Engineer Intern", &format!("https://agg/{id}"))
                        .with_company(&format!("Company {}", id % 37))
                        .with_location("Boston, MA")
                })
                .collect()
        })
        .collect()
}

fn bench_dedup(c: &mut Criterion) {
    let tables = sample_tables();

    c.bench_function("combine_dedup", |b| {
        b.iter(|| {
            let combined = combine(black_box(tables.clone())).unwrap_or_default();
            black_box(dedup(combined).removed)
        })
    });

    let unique = dedup(combine(tables).unwrap_or_default()).rows;
    c.bench_function("count_by_company", |b| {
        b.iter(|| black_box(stats::count_by_company(black_box(&unique)).len()))
    });
}

criterion_group!(benches, bench_dedup);
criterion_main!(benches);
