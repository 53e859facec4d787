use lazy_sssp::algorithm::{dijkstra::Dijkstra, scan::ScanDijkstra, ShortestPathAlgorithm};
use lazy_sssp::graph::generators::random_graph;
use lazy_sssp::graph::{Graph, WeightedGraph};
use std::time::{Duration, Instant};

type BenchGraph = WeightedGraph<usize, f64>;

// Function to benchmark an algorithm on a graph
fn benchmark_algorithm<A>(algorithm: &A, graph: &BenchGraph, source: usize) -> Duration
where
    A: ShortestPathAlgorithm<usize, f64, BenchGraph>,
{
    println!(
        "Running {} on graph with {} vertices...",
        algorithm.name(),
        graph.vertex_count()
    );

    let start = Instant::now();
    let result = match algorithm.compute_shortest_paths(graph, &source) {
        Ok(result) => result,
        Err(err) => {
            eprintln!("  - failed: {}", err);
            return Duration::ZERO;
        }
    };
    let duration = start.elapsed();

    println!(
        "  - Found {} reachable vertices in {:?} ({} stale pops)",
        result.reachable_count(),
        duration,
        result.stats.stale_pops
    );

    duration
}

fn main() {
    env_logger::init();

    let graph_sizes = vec![1_000, 5_000, 10_000, 20_000];

    // Edge factor: average number of arcs per vertex
    let edge_factor = 4.0;

    println!("=====================================================");
    println!("Benchmark: heap Dijkstra vs scan Dijkstra");
    println!("Edge factor: {} arcs per vertex (on average)", edge_factor);
    println!("=====================================================");

    let heap = Dijkstra::new();
    let scan = ScanDijkstra::new();

    let mut results = Vec::new();

    for (i, &size) in graph_sizes.iter().enumerate() {
        println!("\nGenerating random graph with {} vertices...", size);
        let graph = random_graph(size, edge_factor, i as u64);
        println!("Graph has {} vertices and {} arcs", graph.vertex_count(), graph.edge_count());

        let heap_time = benchmark_algorithm(&heap, &graph, 0);
        let scan_time = benchmark_algorithm(&scan, &graph, 0);

        let speedup = scan_time.as_secs_f64() / heap_time.as_secs_f64().max(f64::EPSILON);
        println!("Speedup - heap vs scan: {:.2}x", speedup);

        results.push((size, heap_time, scan_time, speedup));
    }

    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!("{:<10} | {:<12} | {:<12} | {:<10}", "Vertices", "Heap (ms)", "Scan (ms)", "Speedup");
    println!("-----------------------------------------------------");

    for (size, heap_time, scan_time, speedup) in &results {
        println!(
            "{:<10} | {:<12} | {:<12} | {:<10.2}",
            size,
            heap_time.as_millis(),
            scan_time.as_millis(),
            speedup
        );
    }
}
