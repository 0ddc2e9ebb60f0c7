use std::hint::black_box;

use bfs::generator::{ALL_CASES, generate_case};
use bfs::{bfs_distances, shortest_path};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

const SIZES: [usize; 3] = [2_048, 8_192, 32_768];

fn bench_bfs(c: &mut Criterion) {
    for case in ALL_CASES {
        let mut group = c.benchmark_group(format!("bfs/{}", case.label()));
        bench::GRAPH_TRAVERSAL.apply(&mut group);

        for &size in &SIZES {
            let seed = bench::input_seed(case as u64, size);
            let input = generate_case(case, size, seed);

            group.bench_function(BenchmarkId::new("distances", size), |bencher| {
                bencher.iter(|| black_box(bfs_distances(&input.graph, input.source)));
            });
            group.bench_function(BenchmarkId::new("path", size), |bencher| {
                bencher.iter(|| black_box(shortest_path(&input.graph, input.source, input.target)));
            });
        }

        group.finish();
    }
}

criterion_group!(benches, bench_bfs);
criterion_main!(benches);
