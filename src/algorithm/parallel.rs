use rayon::prelude::*;

use crate::algorithm::{dijkstra::Dijkstra, ShortestPathAlgorithm, ShortestPaths};
use crate::graph::{Graph, Vertex, Weight};
use crate::{Error, Result};

/// Runs one independent query per source against the same graph, in parallel.
///
/// The graph is only read. Each query owns its distance table, predecessor
/// table and queue, and results come back in the order of `sources`. Every
/// source is checked before any query starts.
pub fn shortest_paths_from_each<V, W, G>(graph: &G, sources: &[V]) -> Result<Vec<ShortestPaths<V, W>>>
where
    V: Vertex + Send + Sync,
    W: Weight + Send + Sync,
    G: Graph<V, W> + Sync,
{
    if let Some(missing) = sources.iter().find(|source| !graph.has_vertex(source)) {
        return Err(Error::InvalidVertex(format!("{:?}", missing)));
    }

    log::debug!("running {} independent queries", sources.len());

    let dijkstra = Dijkstra::new();
    sources
        .par_iter()
        .map(|source| dijkstra.compute_shortest_paths(graph, source))
        .collect()
}
