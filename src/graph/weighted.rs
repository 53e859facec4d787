use crate::graph::traits::{Graph, MutableGraph, Vertex, Weight};
use crate::{Error, Result};
use std::collections::HashMap;

/// A weighted graph over arbitrary vertex labels, stored as adjacency lists
///
/// Arcs are kept in insertion order per vertex. Duplicate and parallel arcs are
/// preserved and each is considered independently during relaxation.
#[derive(Debug, Clone)]
pub struct WeightedGraph<V, W>
where
    V: Vertex,
    W: Weight,
{
    /// Outgoing arcs for each vertex: vertex -> [(target_vertex, weight)]
    adjacency: HashMap<V, Vec<(V, W)>>,

    /// Total number of stored arcs
    arc_count: usize,
}

impl<V, W> WeightedGraph<V, W>
where
    V: Vertex,
    W: Weight,
{
    /// Creates a new empty graph
    pub fn new() -> Self {
        WeightedGraph {
            adjacency: HashMap::new(),
            arc_count: 0,
        }
    }

    /// Creates a new empty graph with room for the given number of vertices
    pub fn with_capacity(vertices: usize) -> Self {
        WeightedGraph {
            adjacency: HashMap::with_capacity(vertices),
            arc_count: 0,
        }
    }

    /// Builds a graph from `(from, to, weight)` triples, stopping at the first invalid weight
    pub fn from_edges<I>(edges: I, undirected: bool) -> Result<Self>
    where
        I: IntoIterator<Item = (V, V, W)>,
    {
        let mut graph = WeightedGraph::new();
        for (from, to, weight) in edges {
            graph.add_edge(from, to, weight, undirected)?;
        }
        Ok(graph)
    }

    /// Iterates over every stored arc as `(from, to, weight)`
    pub fn edges(&self) -> impl Iterator<Item = (&V, &V, W)> + '_ {
        self.adjacency
            .iter()
            .flat_map(|(from, arcs)| arcs.iter().map(move |(to, weight)| (from, to, *weight)))
    }

    fn validate_weight(weight: W) -> Result<()> {
        if weight.is_finite() && weight >= W::zero() {
            Ok(())
        } else {
            Err(Error::InvalidWeight(weight.to_f64().unwrap_or(f64::NAN)))
        }
    }
}

impl<V, W> Default for WeightedGraph<V, W>
where
    V: Vertex,
    W: Weight,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V, W> Graph<V, W> for WeightedGraph<V, W>
where
    V: Vertex,
    W: Weight,
{
    fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    fn edge_count(&self) -> usize {
        self.arc_count
    }

    fn vertices(&self) -> Box<dyn Iterator<Item = &V> + '_> {
        Box::new(self.adjacency.keys())
    }

    fn neighbors(&self, vertex: &V) -> &[(V, W)] {
        self.adjacency
            .get(vertex)
            .map(|arcs| arcs.as_slice())
            .unwrap_or(&[])
    }

    fn has_vertex(&self, vertex: &V) -> bool {
        self.adjacency.contains_key(vertex)
    }
}

impl<V, W> MutableGraph<V, W> for WeightedGraph<V, W>
where
    V: Vertex,
    W: Weight,
{
    fn add_vertex(&mut self, vertex: V) -> bool {
        if self.adjacency.contains_key(&vertex) {
            return false;
        }
        self.adjacency.insert(vertex, Vec::new());
        true
    }

    fn add_edge(&mut self, from: V, to: V, weight: W, undirected: bool) -> Result<()> {
        // Rejected insertions leave the graph untouched, endpoints included
        Self::validate_weight(weight)?;

        self.adjacency.entry(to.clone()).or_default();
        self.adjacency
            .entry(from.clone())
            .or_default()
            .push((to.clone(), weight));
        self.arc_count += 1;

        if undirected {
            if let Some(arcs) = self.adjacency.get_mut(&to) {
                arcs.push((from, weight));
                self.arc_count += 1;
            }
        }

        Ok(())
    }
}
