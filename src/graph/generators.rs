use crate::graph::{MutableGraph, WeightedGraph};
use rand::prelude::*;
use rand::rngs::StdRng;

/// Generates a directed graph with `n` vertices and about `edge_factor * n` random arcs
///
/// Weights are drawn uniformly from `1.0..100.0`. Self-loops are skipped, so the
/// graph may be disconnected. The same seed always yields the same graph.
pub fn random_graph(n: usize, edge_factor: f64, seed: u64) -> WeightedGraph<usize, f64> {
    let mut graph = WeightedGraph::with_capacity(n);
    let mut rng = StdRng::seed_from_u64(seed);

    for v in 0..n {
        graph.add_vertex(v);
    }
    if n < 2 {
        return graph;
    }

    let num_edges = (edge_factor * n as f64) as usize;
    for _ in 0..num_edges {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        if u != v {
            insert(&mut graph, u, v, rng.gen_range(1.0..100.0), false);
        }
    }

    graph
}

/// Generates a directed graph where every vertex is reachable from vertex 0
///
/// A random spanning tree rooted at 0 is laid down first, then extra random arcs
/// are added until there are about `edge_factor * n` of them. `zero_weight_ratio`
/// of the extra arcs get weight zero.
pub fn connected_random_graph(
    n: usize,
    edge_factor: f64,
    zero_weight_ratio: f64,
    seed: u64,
) -> WeightedGraph<usize, f64> {
    let mut graph = WeightedGraph::with_capacity(n);
    let mut rng = StdRng::seed_from_u64(seed);

    for v in 0..n {
        graph.add_vertex(v);
    }

    for v in 1..n {
        let parent = rng.gen_range(0..v);
        insert(&mut graph, parent, v, rng.gen_range(1.0..10.0), false);
    }

    let num_edges = (edge_factor * n as f64) as usize;
    for _ in 0..num_edges.saturating_sub(n.saturating_sub(1)) {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        let weight = if rng.gen_bool(zero_weight_ratio.clamp(0.0, 1.0)) {
            0.0
        } else {
            rng.gen_range(1.0..10.0)
        };
        insert(&mut graph, u, v, weight, false);
    }

    graph
}

/// Generates an undirected `width` x `height` grid with unit weights (4-neighbourhood)
///
/// Vertex `(x, y)` is numbered `y * width + x`.
pub fn grid_graph(width: usize, height: usize) -> WeightedGraph<usize, f64> {
    let mut graph = WeightedGraph::with_capacity(width * height);

    for y in 0..height {
        for x in 0..width {
            let current = y * width + x;
            graph.add_vertex(current);

            if x + 1 < width {
                insert(&mut graph, current, current + 1, 1.0, true);
            }
            if y + 1 < height {
                insert(&mut graph, current, current + width, 1.0, true);
            }
        }
    }

    graph
}

fn insert(graph: &mut WeightedGraph<usize, f64>, u: usize, v: usize, weight: f64, undirected: bool) {
    // Generated weights are always finite and non-negative
    if let Err(err) = graph.add_edge(u, v, weight, undirected) {
        log::warn!("generator skipped arc {} -> {}: {}", u, v, err);
    }
}
