//! graphkit: generic weighted graph container and classical graph algorithms.
//!
//! A [`Graph`] holds caller-supplied node values and weighted adjacency,
//! directed or undirected (fixed at construction). Algorithms are inherent
//! methods: traversal (BFS/DFS), shortest paths (Dijkstra, Bellman-Ford),
//! structural analysis (topological sort, cycles, components, bipartiteness,
//! articulation points, bridges) and minimum spanning trees (Kruskal, Prim).
//! Graphs cross the crate boundary as [`GraphRecord`]s or adjacency matrices.
//!
//! ```
//! use graphkit::Graph;
//!
//! let mut g = Graph::directed();
//! g.add_edge("A", "B", 1.0);
//! g.add_edge("B", "C", 2.0);
//! g.add_edge("A", "C", 4.0);
//! g.add_edge("C", "D", 1.0);
//!
//! let result = g.dijkstra(&"A", &"D").unwrap();
//! assert_eq!(result.path, vec!["A", "B", "C", "D"]);
//! assert_eq!(result.distance, 4.0);
//! ```

pub mod algo;
pub mod cli;
pub mod format;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use algo::{PathEntry, PathTree, ShortestPath, SpanningTree};
pub use format::{AdjacencyMatrix, EdgeRecord, GraphRecord};
pub use graph::{Graph, GraphBuilder};
pub use types::{
    Edge, GraphError, GraphKind, GraphResult, GraphStats, DEFAULT_MAX_PATH_LENGTH,
    DEFAULT_WEIGHT, NO_EDGE,
};
