//! Immutable index-space snapshot of a graph.
//!
//! Algorithms that need per-node arrays (distances, low-link values,
//! colours) take one of these at call start and work on dense `usize`
//! indices instead of hashing node values on every step.

use std::hash::Hash;

use super::Graph;

/// Dense adjacency snapshot: node `i` is the `i`-th inserted node.
pub(crate) struct IndexedView<'a, T> {
    nodes: Vec<&'a T>,
    adj: Vec<Vec<(usize, f64)>>,
}

impl<'a, T: Eq + Hash + Clone> IndexedView<'a, T> {
    /// Snapshot of the outgoing adjacency.
    pub(crate) fn forward(graph: &'a Graph<T>) -> Self {
        let adjacency = graph.adjacency();
        let nodes: Vec<&T> = adjacency.keys().collect();
        let adj = adjacency
            .values()
            .map(|neighbors| {
                neighbors
                    .iter()
                    .filter_map(|(n, &w)| graph.index_of(n).map(|j| (j, w)))
                    .collect()
            })
            .collect();
        Self { nodes, adj }
    }

    /// Snapshot of the transpose (incoming adjacency).
    pub(crate) fn reversed(graph: &'a Graph<T>) -> Self {
        let forward = Self::forward(graph);
        let mut adj = vec![Vec::new(); forward.len()];
        for (u, neighbors) in forward.adj.iter().enumerate() {
            for &(v, w) in neighbors {
                adj[v].push((u, w));
            }
        }
        Self {
            nodes: forward.nodes,
            adj,
        }
    }

    /// Union of forward and reverse adjacency, deduplicated. Equal to the
    /// forward view for undirected graphs.
    pub(crate) fn underlying(graph: &'a Graph<T>) -> Self {
        let mut view = Self::forward(graph);
        if !graph.is_directed() {
            return view;
        }
        let reversed = Self::reversed(graph);
        for (u, incoming) in reversed.adj.into_iter().enumerate() {
            for (v, w) in incoming {
                if !view.adj[u].iter().any(|&(x, _)| x == v) {
                    view.adj[u].push((v, w));
                }
            }
        }
        view
    }

    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    pub(crate) fn node(&self, index: usize) -> &'a T {
        self.nodes[index]
    }

    pub(crate) fn neighbors(&self, index: usize) -> &[(usize, f64)] {
        &self.adj[index]
    }

    /// Every adjacency entry as `(from, to, weight)`.
    pub(crate) fn arcs(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        self.adj
            .iter()
            .enumerate()
            .flat_map(|(u, neighbors)| neighbors.iter().map(move |&(v, w)| (u, v, w)))
    }

    /// Clone the nodes at the given indices.
    pub(crate) fn collect(&self, indices: &[usize]) -> Vec<T> {
        indices.iter().map(|&i| self.nodes[i].clone()).collect()
    }
}
