pub mod traits;
pub mod weighted;
pub mod generators;

pub use traits::{Graph, MutableGraph, Vertex, Weight};
pub use weighted::WeightedGraph;
