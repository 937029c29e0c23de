use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use restaurant_booking::fixtures::generate_grid;

// Benchmark grid construction and the hot query paths over realistic grids.
pub fn grid_benchmark(c: &mut Criterion) {
    let today = NaiveDate::from_ymd_opt(2025, 6, 2).expect("valid date");

    let mut group = c.benchmark_group("availability_grid");

    // Construction cost scales with restaurants x days x slots.
    for restaurant_count in [10usize, 100, 500].iter() {
        group.bench_with_input(
            BenchmarkId::new("generate", restaurant_count),
            restaurant_count,
            |b, &count| {
                let ids: Vec<String> = (0..count).map(|i| format!("r{}", i + 1)).collect();
                let id_refs: Vec<&str> = ids.iter().map(String::as_str).collect();
                b.iter(|| {
                    let mut rng = StdRng::seed_from_u64(7);
                    black_box(generate_grid(&id_refs, 14, today, &mut rng))
                });
            },
        );
    }

    // Queries run against one pre-built 100-restaurant, 14-day grid.
    let ids: Vec<String> = (0..100).map(|i| format!("r{}", i + 1)).collect();
    let id_refs: Vec<&str> = ids.iter().map(String::as_str).collect();
    let mut rng = StdRng::seed_from_u64(7);
    let grid = generate_grid(&id_refs, 14, today, &mut rng);
    let date = "2025-06-07";

    group.bench_function("lookup", |b| {
        b.iter(|| black_box(grid.lookup(black_box("r57"), black_box(date), black_box("19:00"))))
    });

    group.bench_function("slots_for_date", |b| {
        b.iter(|| black_box(grid.slots_for_date(black_box("r57"), black_box(date), 1)))
    });

    group.bench_function("find_alternatives", |b| {
        b.iter(|| {
            black_box(grid.find_alternatives(
                black_box("r57"),
                black_box(date),
                black_box("19:00"),
                1,
                3,
            ))
        })
    });

    group.bench_function("compare_across_100", |b| {
        b.iter(|| black_box(grid.compare_across(&id_refs, black_box(date), black_box("19:00"), 1)))
    });

    group.finish();
}

criterion_group!(benches, grid_benchmark);
criterion_main!(benches);
