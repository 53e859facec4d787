use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::graph::{Graph, MutableGraph, WeightedGraph};
use crate::report::DistanceReport;
use crate::Result;

/// Graph with string labels and `f64` weights, as exchanged over the API
pub type LabelGraph = WeightedGraph<String, f64>;

/// A single edge in a request body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EdgeInput {
    pub from: String,
    pub to: String,
    pub weight: f64,
}

/// Parameters for graph creation
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct CreateGraphRequest {
    /// Vertices to register even if no edge touches them
    #[serde(default)]
    pub vertices: Vec<String>,
    #[serde(default)]
    pub edges: Vec<EdgeInput>,
    #[serde(default)]
    pub undirected: bool,
}

/// Edges appended to an existing graph
#[derive(Debug, Serialize, Deserialize)]
pub struct AddEdgesRequest {
    pub edges: Vec<EdgeInput>,
    #[serde(default)]
    pub undirected: bool,
}

/// Parameters for a shortest path query
#[derive(Debug, Serialize, Deserialize)]
pub struct QueryRequest {
    pub source: String,
}

/// Response containing query results
#[derive(Debug, Clone, Serialize)]
pub struct QueryResponse {
    pub execution_id: Uuid,
    pub graph_id: Uuid,
    pub algorithm: String,
    pub execution_time_ms: f64,
    pub report: DistanceReport<String>,
}

/// Public view of a session
#[derive(Debug, Clone, Serialize)]
pub struct GraphSummary {
    pub id: Uuid,
    pub vertex_count: usize,
    pub edge_count: usize,
    pub vertices: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// Error response for API
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub details: Option<serde_json::Value>,
}

/// Session holding one graph
///
/// The graph is shared so a query can keep its snapshot after the session
/// lock is released. Edge insertion swaps in a new graph.
#[derive(Debug, Clone)]
pub struct Session {
    pub id: Uuid,
    pub graph: Arc<LabelGraph>,
    pub created_at: DateTime<Utc>,
}

impl Session {
    pub fn new(graph: LabelGraph) -> Self {
        Self {
            id: Uuid::new_v4(),
            graph: Arc::new(graph),
            created_at: Utc::now(),
        }
    }

    pub fn summary(&self) -> GraphSummary {
        GraphSummary {
            id: self.id,
            vertex_count: self.graph.vertex_count(),
            edge_count: self.graph.edge_count(),
            vertices: self.graph.sorted_vertices(),
            created_at: self.created_at,
        }
    }
}

/// Inserts every edge in order, stopping at the first rejected weight
pub fn apply_edges(graph: &mut LabelGraph, edges: &[EdgeInput], undirected: bool) -> Result<()> {
    for edge in edges {
        graph.add_edge(edge.from.clone(), edge.to.clone(), edge.weight, undirected)?;
    }
    Ok(())
}
