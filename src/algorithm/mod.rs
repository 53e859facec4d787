pub mod traits;
pub mod dijkstra;
pub mod scan;
pub mod parallel;

pub(crate) use traits::extend_distance;
pub use traits::{reconstruct_path, QueryStats, ShortestPathAlgorithm, ShortestPaths};
