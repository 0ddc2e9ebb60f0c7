use std::hint::black_box;

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use rand::Rng;
use sequence::{Sequence, ops};

const BENCH_SIZES: [usize; 3] = [1_024, 8_192, 65_536];
const VALUE_BITS: u32 = 20;

fn random_sequence<R: Rng>(rng: &mut R, size: usize) -> Sequence<u64> {
    bench::random_values(rng, size, VALUE_BITS).into_iter().collect()
}

fn bench_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("sequence/sort");
    bench::SEQUENCE_OPS.apply(&mut group);
    let mut rng = bench::default_rng();

    for &size in &BENCH_SIZES {
        let base = random_sequence(&mut rng, size);
        group.bench_function(BenchmarkId::new("quick_sort", size), |bencher| {
            bencher.iter_batched(
                || base.clone(),
                |mut seq| {
                    ops::sort(&mut seq, u64::cmp);
                    black_box(seq)
                },
                BatchSize::LargeInput,
            );
        });
        group.bench_function(BenchmarkId::new("std_sort_unstable", size), |bencher| {
            bencher.iter_batched(
                || base.clone().into_slots(),
                |mut slots| {
                    slots.sort_unstable();
                    black_box(slots)
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

fn bench_splice(c: &mut Criterion) {
    let mut group = c.benchmark_group("sequence/splice");
    bench::SEQUENCE_OPS.apply(&mut group);
    let mut rng = bench::default_rng();

    for &size in &BENCH_SIZES {
        let base = random_sequence(&mut rng, size);
        let start = rng.random_range(0..size) as i64;
        let items: Vec<u64> = (0..16).collect();
        group.bench_function(BenchmarkId::new("grow_middle", size), |bencher| {
            bencher.iter_batched(
                || base.clone(),
                |mut seq| {
                    let removed = ops::splice(&mut seq, start, Some(4), items.iter().copied());
                    black_box((seq, removed))
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

fn bench_ends(c: &mut Criterion) {
    let mut group = c.benchmark_group("sequence/ends");
    bench::SEQUENCE_OPS.apply(&mut group);
    let mut rng = bench::default_rng();

    for &size in &BENCH_SIZES {
        let base = random_sequence(&mut rng, size);
        group.bench_function(BenchmarkId::new("shift_unshift", size), |bencher| {
            bencher.iter_batched(
                || base.clone(),
                |mut seq| {
                    let first = ops::shift(&mut seq);
                    ops::unshift(&mut seq, first);
                    black_box(seq)
                },
                BatchSize::LargeInput,
            );
        });
        group.bench_function(BenchmarkId::new("reverse", size), |bencher| {
            bencher.iter_batched(
                || base.clone(),
                |mut seq| {
                    ops::reverse(&mut seq);
                    black_box(seq)
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_sort, bench_splice, bench_ends);
criterion_main!(benches);
