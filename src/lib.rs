//! Lazy SSSP - Single-Source Shortest Paths with a lazy-deletion heap
//!
//! This library builds weighted graphs over arbitrary vertex labels and runs
//! Dijkstra's algorithm from one source vertex. Instead of a decrease-key
//! operation the priority queue receives a fresh entry on every improvement,
//! and entries that no longer match the distance table are skipped when popped.
//!
//! Edge weights must be finite and non-negative; anything else is rejected
//! when the edge is inserted.

pub mod algorithm;
pub mod data_structures;
pub mod graph;
pub mod report;
pub mod web;

pub use algorithm::{
    dijkstra::Dijkstra, parallel::shortest_paths_from_each, reconstruct_path, scan::ScanDijkstra,
    QueryStats, ShortestPathAlgorithm, ShortestPaths,
};
/// Re-export main types for convenient use
pub use graph::weighted::WeightedGraph;
pub use report::DistanceReport;

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Invalid vertex: {0}")]
    InvalidVertex(String),

    #[error("Invalid edge weight: {0} (weights must be finite and non-negative)")]
    InvalidWeight(f64),

    #[error("Algorithm execution error: {0}")]
    AlgorithmError(String),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Shortest-path distances and predecessor links from one source.
///
/// Convenience wrapper around [`Dijkstra`].
pub fn shortest_paths<V, W>(graph: &WeightedGraph<V, W>, source: &V) -> Result<ShortestPaths<V, W>>
where
    V: graph::Vertex,
    W: graph::Weight,
{
    Dijkstra::new().compute_shortest_paths(graph, source)
}
