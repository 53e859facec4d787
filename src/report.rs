//! Human- and machine-readable summaries of a query result.
//!
//! Reports are built from the engine's output only; they never run a query.

use serde::Serialize;
use std::fmt::{Display, Write};

use crate::algorithm::{QueryStats, ShortestPaths};
use crate::graph::{Graph, Vertex, Weight};

/// One line of a report: a vertex, its distance and the path reaching it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRow<V> {
    pub vertex: V,
    /// `None` when the vertex is unreachable
    pub distance: Option<f64>,
    /// `None` when the vertex is unreachable
    pub path: Option<Vec<V>>,
}

/// Distances and paths for every vertex of a graph, sorted by vertex
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistanceReport<V> {
    pub source: V,
    pub rows: Vec<ReportRow<V>>,
    pub stats: QueryStats,
}

impl<V> DistanceReport<V>
where
    V: Vertex,
{
    /// Builds a report covering every vertex of `graph`
    pub fn new<W, G>(graph: &G, result: &ShortestPaths<V, W>) -> Self
    where
        W: Weight,
        G: Graph<V, W>,
    {
        let rows = graph
            .sorted_vertices()
            .into_iter()
            .map(|vertex| ReportRow {
                distance: result.distance(&vertex).and_then(|d| d.to_f64()),
                path: result.path_to(&vertex),
                vertex,
            })
            .collect();

        DistanceReport {
            source: result.source.clone(),
            rows,
            stats: result.stats,
        }
    }

    pub fn row(&self, vertex: &V) -> Option<&ReportRow<V>> {
        self.rows.iter().find(|row| &row.vertex == vertex)
    }

    /// Vertices that could not be reached, in sorted order
    pub fn unreachable(&self) -> Vec<&V> {
        self.rows
            .iter()
            .filter(|row| row.distance.is_none())
            .map(|row| &row.vertex)
            .collect()
    }
}

impl<V> DistanceReport<V>
where
    V: Vertex + Display,
{
    /// Renders the distance block followed by the path block
    pub fn render_text(&self) -> String {
        let mut out = String::new();

        let _ = writeln!(out, "Shortest distances from {}", self.source);
        for row in &self.rows {
            match row.distance {
                Some(d) => {
                    let _ = writeln!(out, "  {}: {:.2}", row.vertex, d);
                }
                None => {
                    let _ = writeln!(out, "  {}: inf", row.vertex);
                }
            }
        }

        let _ = writeln!(out);
        let _ = writeln!(out, "Paths from source:");
        for row in &self.rows {
            match (&row.path, row.distance) {
                (Some(path), Some(d)) => {
                    let pretty: Vec<String> = path.iter().map(|v| v.to_string()).collect();
                    let _ = writeln!(out, "  {}: {}  (cost {:.2})", row.vertex, pretty.join(" -> "), d);
                }
                _ => {
                    let _ = writeln!(out, "  {}: unreachable", row.vertex);
                }
            }
        }

        out
    }
}
