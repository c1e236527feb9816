//! Weighted undirected graphs and A* shortest-path search.
//!
//! Vertices can be any type implementing [`Vertex`]: `Eq + Hash` for the
//! adjacency maps, `Ord` so each undirected edge is stored under one canonical
//! (smaller, larger) endpoint pair, `Clone` for search bookkeeping, and `Debug`
//! because [`GraphError`] reports the offending vertex.

pub mod astar;
pub mod error;
pub mod graph;
pub mod heuristic;
pub mod path;
pub mod weight;

#[cfg(test)]
pub(crate) mod test_graph_utils;

pub use astar::{AStar, search, shortest_path};
pub use error::GraphError;
pub use graph::{Vertex, WeightedGraph};
pub use heuristic::{AStarHeuristic, ZeroHeuristic};
pub use path::{Path, SearchDebugInfo, SearchOptions, SearchOutcome, SearchResult, SearchStats};
pub use weight::Weight;
