use log::{debug, trace};
use ordered_float::OrderedFloat;
use std::collections::HashMap;

use crate::algorithm::{extend_distance, QueryStats, ShortestPathAlgorithm, ShortestPaths};
use crate::data_structures::MinQueue;
use crate::graph::{Graph, Vertex, Weight};
use crate::{Error, Result};

/// Dijkstra's algorithm with a lazy-deletion binary heap
///
/// Runs in O((V + E) log E): every strict improvement pushes a new queue entry,
/// and popped entries whose distance no longer matches the distance table are
/// dropped. Ties between equal distances are popped in vertex order.
///
/// A distance sum that overflows the weight type aborts the query with
/// [`Error::AlgorithmError`].
#[derive(Debug, Default, Clone, Copy)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }
}

impl<V, W, G> ShortestPathAlgorithm<V, W, G> for Dijkstra
where
    V: Vertex,
    W: Weight,
    G: Graph<V, W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &G, source: &V) -> Result<ShortestPaths<V, W>> {
        if !graph.has_vertex(source) {
            return Err(Error::InvalidVertex(format!("{:?}", source)));
        }

        let n = graph.vertex_count();
        debug!("dijkstra: source {:?}, {} vertices, {} arcs", source, n, graph.edge_count());

        // Every known vertex starts unreached
        let mut distances: HashMap<V, W> = HashMap::with_capacity(n);
        let mut predecessors: HashMap<V, Option<V>> = HashMap::with_capacity(n);
        for v in graph.vertices() {
            distances.insert(v.clone(), W::infinity());
            predecessors.insert(v.clone(), None);
        }
        distances.insert(source.clone(), W::zero());

        let mut stats = QueryStats::default();
        let mut queue = MinQueue::new();
        queue.push(source.clone(), OrderedFloat(W::zero()));
        stats.peak_queue_len = queue.len();

        while let Some((u, OrderedFloat(dist_u))) = queue.pop() {
            stats.pops += 1;

            let recorded = distances.get(&u).copied().unwrap_or_else(W::infinity);
            if dist_u != recorded {
                trace!("stale entry {:?} at {:?}, recorded {:?}", u, dist_u, recorded);
                stats.stale_pops += 1;
                continue;
            }

            for (v, weight) in graph.neighbors(&u) {
                let candidate = extend_distance(dist_u, *weight, &u, v)?;
                let current = distances.get(v).copied().unwrap_or_else(W::infinity);

                // Ties keep the first predecessor found
                if candidate < current {
                    distances.insert(v.clone(), candidate);
                    predecessors.insert(v.clone(), Some(u.clone()));
                    queue.push(v.clone(), OrderedFloat(candidate));
                    stats.relaxations += 1;
                    stats.peak_queue_len = stats.peak_queue_len.max(queue.len());
                }
            }
        }
        stats.pushes = queue.pushes();

        debug!(
            "dijkstra: done, {} pops ({} stale), {} relaxations",
            stats.pops, stats.stale_pops, stats.relaxations
        );

        Ok(ShortestPaths {
            source: source.clone(),
            distances,
            predecessors,
            stats,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{MutableGraph, WeightedGraph};

    #[test]
    fn zero_weight_tie_keeps_first_predecessor() {
        // s -> a (1), s -> b (1), a -> t (0), b -> t (0)
        let mut graph: WeightedGraph<&str, f64> = WeightedGraph::new();
        graph.add_directed_edge("s", "a", 1.0).unwrap();
        graph.add_directed_edge("s", "b", 1.0).unwrap();
        graph.add_directed_edge("a", "t", 0.0).unwrap();
        graph.add_directed_edge("b", "t", 0.0).unwrap();

        let result = Dijkstra::new().compute_shortest_paths(&graph, &"s").unwrap();

        assert_eq!(result.distance(&"t"), Some(1.0));
        // "a" is popped before "b" on the tie, so it reaches "t" first
        assert_eq!(result.predecessor(&"t"), Some(&"a"));
    }

    #[test]
    fn stale_entries_are_skipped() {
        // b is first reached at 10, then improved to 2 via a
        let mut graph: WeightedGraph<char, f64> = WeightedGraph::new();
        graph.add_directed_edge('s', 'b', 10.0).unwrap();
        graph.add_directed_edge('s', 'a', 1.0).unwrap();
        graph.add_directed_edge('a', 'b', 1.0).unwrap();

        let result = Dijkstra::new().compute_shortest_paths(&graph, &'s').unwrap();

        assert_eq!(result.distance(&'b'), Some(2.0));
        assert_eq!(result.stats.stale_pops, 1);
        assert_eq!(result.stats.pushes, 4);
        assert_eq!(result.stats.pops, 4);
        assert_eq!(result.stats.relaxations, 3);
    }

    #[test]
    fn parallel_edges_use_cheapest() {
        let mut graph: WeightedGraph<u8, f32> = WeightedGraph::new();
        graph.add_directed_edge(0, 1, 5.0).unwrap();
        graph.add_directed_edge(0, 1, 2.0).unwrap();
        graph.add_directed_edge(0, 1, 7.0).unwrap();

        let result = Dijkstra::new().compute_shortest_paths(&graph, &0).unwrap();
        assert_eq!(result.distance(&1), Some(2.0));
        assert_eq!(result.stats.relaxations, 2);
    }

    #[test]
    fn overflowing_distance_is_an_error() {
        let mut graph: WeightedGraph<u8, f32> = WeightedGraph::new();
        graph.add_directed_edge(0, 1, 3e38).unwrap();
        graph.add_directed_edge(1, 2, 3e38).unwrap();

        let err = Dijkstra::new().compute_shortest_paths(&graph, &0).unwrap_err();
        assert!(matches!(err, Error::AlgorithmError(_)));

        // The first hop alone is still representable
        let from_one = Dijkstra::new().compute_shortest_paths(&graph, &1).unwrap();
        assert_eq!(from_one.distance(&2), Some(3e38));
    }

    #[test]
    fn peak_queue_len_counts_stale_entries() {
        let mut graph: WeightedGraph<char, f64> = WeightedGraph::new();
        graph.add_directed_edge('s', 'b', 10.0).unwrap();
        graph.add_directed_edge('s', 'a', 1.0).unwrap();
        graph.add_directed_edge('a', 'b', 1.0).unwrap();

        let result = Dijkstra::new().compute_shortest_paths(&graph, &'s').unwrap();
        // b(10) is still queued when b(2) is pushed
        assert_eq!(result.stats.peak_queue_len, 2);
    }

    #[test]
    fn unknown_source_is_rejected() {
        let mut graph: WeightedGraph<&str, f64> = WeightedGraph::new();
        graph.add_directed_edge("a", "b", 1.0).unwrap();

        let err = Dijkstra::new()
            .compute_shortest_paths(&graph, &"missing")
            .unwrap_err();
        assert_eq!(err, Error::InvalidVertex("\"missing\"".to_string()));
    }
}
