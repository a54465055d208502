//! Summary statistics for a graph.

use serde::Serialize;

/// Counts and density of a graph, as returned by `Graph::stats`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphStats {
    pub directed: bool,
    pub node_count: usize,
    pub edge_count: usize,
    /// |E| divided by the maximum simple-graph edge count; 0 when fewer
    /// than 2 nodes. Self-loops count in |E| but not in the maximum, so a
    /// graph with loops can exceed 1.0.
    pub density: f64,
    pub average_degree: f64,
    pub self_loops: usize,
    /// Nodes with no incident edges.
    pub isolated_nodes: usize,
}

/// Maximum simple-graph edge count for `n` nodes.
pub fn max_edges(node_count: usize, directed: bool) -> usize {
    let n = node_count;
    if n < 2 {
        return 0;
    }
    if directed {
        n * (n - 1)
    } else {
        n * (n - 1) / 2
    }
}

/// Edge density: `edge_count / max_edges`, or 0 when no edge is possible.
/// Not clamped; see [`GraphStats::density`].
pub fn density(node_count: usize, edge_count: usize, directed: bool) -> f64 {
    match max_edges(node_count, directed) {
        0 => 0.0,
        max => edge_count as f64 / max as f64,
    }
}
