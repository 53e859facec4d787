use serde::Serialize;
use std::collections::{HashMap, HashSet};

use crate::graph::{Graph, Vertex, Weight};
use crate::{Error, Result};

/// Counters collected while a query runs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct QueryStats {
    /// Entries taken off the queue (or vertices selected by a scan)
    pub pops: usize,

    /// Popped entries discarded because a shorter distance was already recorded
    pub stale_pops: usize,

    /// Relaxations that strictly improved a distance
    pub relaxations: usize,

    /// Entries pushed onto the queue, including the source
    pub pushes: usize,

    /// Largest number of entries queued at once, stale ones included
    pub peak_queue_len: usize,
}

/// Result of a shortest path algorithm execution
///
/// Every vertex known to the graph has an entry in both tables. Unreached
/// vertices keep `W::infinity()` as their distance and `None` as predecessor.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPaths<V, W>
where
    V: Vertex,
    W: Weight,
{
    /// Source vertex of the query
    pub source: V,

    /// Distances from source to each vertex
    pub distances: HashMap<V, W>,

    /// Predecessor of each vertex on its best known path from the source
    pub predecessors: HashMap<V, Option<V>>,

    /// Counters from the run that produced this result
    pub stats: QueryStats,
}

impl<V, W> ShortestPaths<V, W>
where
    V: Vertex,
    W: Weight,
{
    /// Finite distance to `vertex`, or `None` if it was not reached or is unknown
    pub fn distance(&self, vertex: &V) -> Option<W> {
        self.distances
            .get(vertex)
            .copied()
            .filter(|distance| distance.is_finite())
    }

    pub fn is_reachable(&self, vertex: &V) -> bool {
        self.distance(vertex).is_some()
    }

    pub fn predecessor(&self, vertex: &V) -> Option<&V> {
        self.predecessors.get(vertex).and_then(|pred| pred.as_ref())
    }

    /// Number of vertices with a finite distance, the source included
    pub fn reachable_count(&self) -> usize {
        self.distances.values().filter(|d| d.is_finite()).count()
    }

    /// Path from the source to `target`, or `None` when `target` is unreachable.
    ///
    /// Unlike [`reconstruct_path`], an unreachable target can never be confused
    /// with a path that consists of the source alone.
    pub fn path_to(&self, target: &V) -> Option<Vec<V>> {
        if !self.is_reachable(target) {
            return None;
        }
        Some(reconstruct_path(&self.predecessors, target))
    }
}

/// Walks the predecessor chain back from `target` and returns it source-first.
///
/// A target without predecessor yields `[target]`, whether it is the source or
/// was never reached; check the distance table to tell the two apart. A cyclic
/// table (which no query produces) stops the walk at the first repeated vertex.
pub fn reconstruct_path<V: Vertex>(predecessors: &HashMap<V, Option<V>>, target: &V) -> Vec<V> {
    let mut path = vec![target.clone()];
    let mut visited = HashSet::new();
    visited.insert(target);

    let mut current = target;
    while let Some(Some(pred)) = predecessors.get(current) {
        if !visited.insert(pred) {
            log::warn!("cycle in predecessor table at {:?}, path truncated", pred);
            break;
        }
        path.push(pred.clone());
        current = pred;
    }

    path.reverse();
    path
}

/// Distance reached by following an arc of `weight` from a vertex at `dist`.
///
/// Weights are finite, but their sum can still overflow the weight type. An
/// overflowed sum is reported as an error instead of being treated as "no
/// improvement", which would leave a reachable vertex looking unreachable.
pub(crate) fn extend_distance<V: Vertex, W: Weight>(dist: W, weight: W, from: &V, to: &V) -> Result<W> {
    let candidate = dist + weight;
    if candidate.is_finite() {
        Ok(candidate)
    } else {
        Err(Error::AlgorithmError(format!(
            "distance overflow on arc {:?} -> {:?} ({:?} + {:?})",
            from, to, dist, weight
        )))
    }
}

/// Trait for single-source shortest path algorithms
pub trait ShortestPathAlgorithm<V, W, G>
where
    V: Vertex,
    W: Weight,
    G: Graph<V, W>,
{
    /// Compute shortest paths from a source vertex to all other vertices
    fn compute_shortest_paths(&self, graph: &G, source: &V) -> Result<ShortestPaths<V, W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Get the shortest path from source to target as a sequence of vertices
    fn get_path(&self, result: &ShortestPaths<V, W>, target: &V) -> Option<Vec<V>> {
        result.path_to(target)
    }
}
