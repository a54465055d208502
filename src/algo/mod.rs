//! Graph algorithms, implemented as inherent methods on [`Graph`](crate::Graph).
//!
//! - `shortest_path`: Dijkstra, Bellman-Ford, bounded path enumeration
//! - `ordering`: topological sort, cycle detection
//! - `components`: connected / strongly connected components, bipartiteness
//! - `lowlink`: articulation points and bridges
//! - `mst`: Kruskal and Prim spanning trees

pub mod components;
pub mod lowlink;
pub mod mst;
pub mod ordering;
pub mod shortest_path;
mod union_find;

pub use mst::SpanningTree;
pub use shortest_path::{PathEntry, PathTree, ShortestPath};
