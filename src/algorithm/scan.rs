use log::debug;
use std::collections::HashMap;

use crate::algorithm::{extend_distance, QueryStats, ShortestPathAlgorithm, ShortestPaths};
use crate::graph::{Graph, Vertex, Weight};
use crate::{Error, Result};

/// Dijkstra's algorithm with a linear scan instead of a priority queue
///
/// O(V^2): each round scans every unsettled vertex for the smallest distance.
/// This is a deliberate simplification, kept as a baseline for benchmarks and
/// as an independent cross-check of [`Dijkstra`](crate::Dijkstra). It applies
/// the same strict-improvement rule and picks the smallest vertex on ties, and
/// fails the same way when a distance sum overflows.
#[derive(Debug, Default, Clone, Copy)]
pub struct ScanDijkstra;

impl ScanDijkstra {
    /// Creates a new scan-based Dijkstra instance
    pub fn new() -> Self {
        ScanDijkstra
    }
}

impl<V, W, G> ShortestPathAlgorithm<V, W, G> for ScanDijkstra
where
    V: Vertex,
    W: Weight,
    G: Graph<V, W>,
{
    fn name(&self) -> &'static str {
        "Scan Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &G, source: &V) -> Result<ShortestPaths<V, W>> {
        if !graph.has_vertex(source) {
            return Err(Error::InvalidVertex(format!("{:?}", source)));
        }

        // Sorted so that the first minimum found is also the smallest vertex
        let vertices = graph.sorted_vertices();
        let index: HashMap<&V, usize> = vertices.iter().enumerate().map(|(i, v)| (v, i)).collect();
        let n = vertices.len();

        let mut dist = vec![W::infinity(); n];
        let mut pred: Vec<Option<usize>> = vec![None; n];
        let mut settled = vec![false; n];
        let mut stats = QueryStats::default();

        dist[index[source]] = W::zero();

        loop {
            let mut next: Option<usize> = None;
            for i in 0..n {
                if settled[i] || !dist[i].is_finite() {
                    continue;
                }
                if next.map_or(true, |best| dist[i] < dist[best]) {
                    next = Some(i);
                }
            }

            let u = match next {
                Some(u) => u,
                None => break,
            };
            settled[u] = true;
            stats.pops += 1;

            for (v, weight) in graph.neighbors(&vertices[u]) {
                let v = match index.get(v) {
                    Some(&v) => v,
                    None => {
                        return Err(Error::AlgorithmError(format!(
                            "arc {:?} -> {:?} leads to an unknown vertex",
                            vertices[u], v
                        )))
                    }
                };
                let candidate = extend_distance(dist[u], *weight, &vertices[u], &vertices[v])?;
                if candidate < dist[v] {
                    dist[v] = candidate;
                    pred[v] = Some(u);
                    stats.relaxations += 1;
                }
            }
        }

        debug!(
            "scan dijkstra: settled {} of {} vertices, {} relaxations",
            stats.pops, n, stats.relaxations
        );

        let predecessors = pred
            .iter()
            .enumerate()
            .map(|(i, p)| (vertices[i].clone(), p.map(|p| vertices[p].clone())))
            .collect();
        let distances = vertices.iter().cloned().zip(dist).collect();

        Ok(ShortestPaths {
            source: source.clone(),
            distances,
            predecessors,
            stats,
        })
    }
}
