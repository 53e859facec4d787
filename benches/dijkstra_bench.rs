use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use lazy_sssp::algorithm::{dijkstra::Dijkstra, scan::ScanDijkstra, ShortestPathAlgorithm};
use lazy_sssp::graph::generators::{connected_random_graph, grid_graph};
use lazy_sssp::shortest_paths_from_each;

fn bench_heap_vs_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("SSSP Algorithms");

    for &n in &[100, 500, 1000, 5000] {
        let graph = connected_random_graph(n, 4.0, 0.1, 42);

        group.bench_with_input(BenchmarkId::new("heap", n), &graph, |b, g| {
            b.iter(|| Dijkstra::new().compute_shortest_paths(black_box(g), &0))
        });

        // The quadratic baseline is only worth timing on the smaller graphs
        if n <= 1000 {
            group.bench_with_input(BenchmarkId::new("scan", n), &graph, |b, g| {
                b.iter(|| ScanDijkstra::new().compute_shortest_paths(black_box(g), &0))
            });
        }
    }

    group.finish();
}

fn bench_parallel_sources(c: &mut Criterion) {
    let graph = grid_graph(60, 60);
    let sources: Vec<usize> = (0..3600).step_by(120).collect();

    c.bench_function("grid 60x60, 30 sources in parallel", |b| {
        b.iter(|| shortest_paths_from_each(black_box(&graph), &sources))
    });
}

criterion_group!(benches, bench_heap_vs_scan, bench_parallel_sources);
criterion_main!(benches);
