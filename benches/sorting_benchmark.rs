use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use indexsort::permutation::sort_index_by_values;
use indexsort::prelude::*;
use rand::Rng;
use std::hint::black_box;

fn bench_integers(c: &mut Criterion) {
    let mut group = c.benchmark_group("Index Sort i32");
    group.sample_size(10);

    // Dataset generation
    let mut rng = rand::rng();
    let count = 10_000;

    let values: Vec<i32> = (0..count).map(|_| rng.random()).collect();
    let index: Vec<u32> = identity_index(count);

    // Not an index sort, kept as a lower bound.
    group.bench_function("slice::sort_unstable (values only)", |b| {
        b.iter_batched(
            || values.clone(),
            |mut data| data.sort_unstable(),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("sort_index_by_values (index only)", |b| {
        b.iter_batched(
            || index.clone(),
            |mut index| sort_index_by_values(&values, black_box(&mut index), i32::cmp),
            BatchSize::SmallInput,
        )
    });

    for algorithm in Algorithm::ALL {
        group.bench_function(algorithm.name(), |b| {
            b.iter_batched(
                || (values.clone(), index.clone()),
                |(mut values, mut index)| {
                    algorithm.sort(black_box(&mut values), black_box(&mut index))
                },
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

fn bench_doubles(c: &mut Criterion) {
    let mut group = c.benchmark_group("Index Sort f64");
    group.sample_size(10);

    let mut rng = rand::rng();
    let count = 10_000;

    let values: Vec<f64> = (0..count).map(|_| rng.random_range(0.0..1.0)).collect();
    let index: Vec<u32> = identity_index(count);

    group.bench_function("slice::sort_unstable_by (values only)", |b| {
        b.iter_batched(
            || values.clone(),
            |mut data| data.sort_unstable_by(f64::total_cmp),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("sort_index_by_values (index only)", |b| {
        b.iter_batched(
            || index.clone(),
            |mut index| sort_index_by_values(&values, black_box(&mut index), f64::total_cmp),
            BatchSize::SmallInput,
        )
    });

    for algorithm in Algorithm::ALL {
        group.bench_function(algorithm.name(), |b| {
            b.iter_batched(
                || (values.clone(), index.clone()),
                |(mut values, mut index)| {
                    algorithm.sort_by(
                        black_box(&mut values),
                        black_box(&mut index),
                        f64::total_cmp,
                    )
                },
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

criterion_group!(benches, bench_integers, bench_doubles);
criterion_main!(benches);
