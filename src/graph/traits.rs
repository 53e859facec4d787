use num_traits::Float;
use std::fmt::Debug;
use std::hash::Hash;

use crate::Result;

/// Identifier of a vertex.
///
/// Labels are opaque: the only requirements are hashing for table lookups and a
/// total order, which the priority queue uses to break distance ties.
pub trait Vertex: Clone + Eq + Hash + Ord + Debug {}

impl<T> Vertex for T where T: Clone + Eq + Hash + Ord + Debug {}

/// Edge weight type. `W::infinity()` doubles as the "unreached" distance.
pub trait Weight: Float + Debug {}

impl<T> Weight for T where T: Float + Debug {}

/// Trait representing a weighted graph with adjacency lists
pub trait Graph<V, W>: Debug
where
    V: Vertex,
    W: Weight,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of stored arcs. An undirected edge counts twice.
    fn edge_count(&self) -> usize;

    /// Returns an iterator over all known vertices, in no meaningful order
    fn vertices(&self) -> Box<dyn Iterator<Item = &V> + '_>;

    /// Returns all known vertices sorted by their natural order
    fn sorted_vertices(&self) -> Vec<V> {
        let mut vertices: Vec<V> = self.vertices().cloned().collect();
        vertices.sort();
        vertices
    }

    /// Returns the outgoing `(neighbor, weight)` pairs of a vertex in insertion order.
    ///
    /// Unknown vertices have no neighbors: the slice is empty rather than an error.
    fn neighbors(&self, vertex: &V) -> &[(V, W)];

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: &V) -> bool;

    /// Returns true if there's an arc from `from` to `to`
    fn has_edge(&self, from: &V, to: &V) -> bool {
        self.neighbors(from).iter().any(|(target, _)| target == to)
    }

    /// Gets the weight of the first arc from `from` to `to`, if any
    fn edge_weight(&self, from: &V, to: &V) -> Option<W> {
        self.neighbors(from)
            .iter()
            .find(|(target, _)| target == to)
            .map(|(_, weight)| *weight)
    }
}

/// Trait for mutable graph operations
pub trait MutableGraph<V, W>: Graph<V, W>
where
    V: Vertex,
    W: Weight,
{
    /// Adds a vertex without edges. Returns false if it was already present.
    fn add_vertex(&mut self, vertex: V) -> bool;

    /// Adds the arc `from -> to`, and `to -> from` as well when `undirected` is set.
    ///
    /// Both endpoints are known vertices afterwards. Parallel edges are kept.
    fn add_edge(&mut self, from: V, to: V, weight: W, undirected: bool) -> Result<()>;

    /// Adds a single arc `from -> to`
    fn add_directed_edge(&mut self, from: V, to: V, weight: W) -> Result<()> {
        self.add_edge(from, to, weight, false)
    }

    /// Adds arcs in both directions with the same weight
    fn add_undirected_edge(&mut self, a: V, b: V, weight: W) -> Result<()> {
        self.add_edge(a, b, weight, true)
    }
}
