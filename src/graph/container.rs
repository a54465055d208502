//! Core graph structure: nodes + weighted adjacency with a reverse index.

use std::hash::Hash;

use indexmap::{IndexMap, IndexSet};

use crate::types::{stats, Edge, GraphKind, GraphStats, DEFAULT_WEIGHT};

/// A directed or undirected weighted graph over caller-supplied node values.
///
/// Nodes and neighbors iterate in insertion order. Undirected edges are
/// stored as two mirrored adjacency entries with identical weight; a
/// self-loop is a single entry. Parallel edges are not supported: adding an
/// edge between an already-connected ordered pair overwrites its weight.
#[derive(Debug, Clone)]
pub struct Graph<T> {
    /// Construction flag, never mutated.
    directed: bool,
    /// Adjacency: node -> (neighbor -> weight).
    adjacency: IndexMap<T, IndexMap<T, f64>>,
    /// Reverse adjacency: target -> sources. Only maintained for directed graphs.
    incoming: IndexMap<T, IndexSet<T>>,
}

impl<T: Eq + Hash + Clone> Graph<T> {
    /// Create a new empty graph.
    pub fn new(directed: bool) -> Self {
        Self {
            directed,
            adjacency: IndexMap::new(),
            incoming: IndexMap::new(),
        }
    }

    /// Create a new empty directed graph.
    pub fn directed() -> Self {
        Self::new(true)
    }

    /// Create a new empty undirected graph.
    pub fn undirected() -> Self {
        Self::new(false)
    }

    /// Create from pre-existing nodes and edges (used by the builder and
    /// the serialization adapters). Edge endpoints missing from `nodes` are
    /// created on the fly.
    pub fn from_parts<N, E>(directed: bool, nodes: N, edges: E) -> Self
    where
        N: IntoIterator<Item = T>,
        E: IntoIterator<Item = Edge<T>>,
    {
        let mut graph = Self::new(directed);
        for node in nodes {
            graph.add_node(node);
        }
        for edge in edges {
            graph.add_edge(edge.from, edge.to, edge.weight);
        }
        graph
    }

    /// Whether this graph is directed.
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Directed or undirected.
    pub fn kind(&self) -> GraphKind {
        GraphKind::from_directed(self.directed)
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of edges. Each undirected edge counts once.
    pub fn edge_count(&self) -> usize {
        if self.directed {
            return self.adjacency.values().map(|n| n.len()).sum();
        }
        self.adjacency
            .iter()
            .enumerate()
            .map(|(i, (_, neighbors))| {
                neighbors
                    .keys()
                    .filter(|v| self.index_of(v).is_some_and(|j| j >= i))
                    .count()
            })
            .sum()
    }

    /// Iterate nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &T> + '_ {
        self.adjacency.keys()
    }

    /// True if the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Add a node. Returns false if it was already present.
    pub fn add_node(&mut self, node: T) -> bool {
        if self.adjacency.contains_key(&node) {
            return false;
        }
        if self.directed {
            self.incoming.insert(node.clone(), IndexSet::new());
        }
        self.adjacency.insert(node, IndexMap::new());
        true
    }

    /// Remove a node and every edge that references it.
    /// Returns whether the node existed.
    pub fn remove_node(&mut self, node: &T) -> bool {
        let Some(successors) = self.adjacency.shift_remove(node) else {
            return false;
        };

        if self.directed {
            for succ in successors.keys() {
                if let Some(sources) = self.incoming.get_mut(succ) {
                    sources.shift_remove(node);
                }
            }
            if let Some(sources) = self.incoming.shift_remove(node) {
                for pred in &sources {
                    if let Some(neighbors) = self.adjacency.get_mut(pred) {
                        neighbors.shift_remove(node);
                    }
                }
            }
        } else {
            for neighbor in successors.keys() {
                if let Some(neighbors) = self.adjacency.get_mut(neighbor) {
                    neighbors.shift_remove(node);
                }
            }
        }
        true
    }

    /// Check whether a node exists.
    pub fn has_node(&self, node: &T) -> bool {
        self.adjacency.contains_key(node)
    }

    /// Add (or re-weight) an edge, creating missing endpoints.
    pub fn add_edge(&mut self, from: T, to: T, weight: f64) {
        self.add_node(from.clone());
        self.add_node(to.clone());

        if let Some(neighbors) = self.adjacency.get_mut(&from) {
            neighbors.insert(to.clone(), weight);
        }
        if self.directed {
            if let Some(sources) = self.incoming.get_mut(&to) {
                sources.insert(from);
            }
        } else if let Some(neighbors) = self.adjacency.get_mut(&to) {
            neighbors.insert(from, weight);
        }
    }

    /// Add an edge carrying the default weight.
    pub fn add_unit_edge(&mut self, from: T, to: T) {
        self.add_edge(from, to, DEFAULT_WEIGHT);
    }

    /// Remove an edge. Returns whether it existed.
    pub fn remove_edge(&mut self, from: &T, to: &T) -> bool {
        let removed = self
            .adjacency
            .get_mut(from)
            .and_then(|neighbors| neighbors.shift_remove(to))
            .is_some();
        if !removed {
            return false;
        }
        if self.directed {
            if let Some(sources) = self.incoming.get_mut(to) {
                sources.shift_remove(from);
            }
        } else if let Some(neighbors) = self.adjacency.get_mut(to) {
            neighbors.shift_remove(from);
        }
        true
    }

    /// Check whether an edge exists.
    pub fn has_edge(&self, from: &T, to: &T) -> bool {
        self.adjacency
            .get(from)
            .is_some_and(|neighbors| neighbors.contains_key(to))
    }

    /// Weight of an edge, if it exists.
    pub fn weight(&self, from: &T, to: &T) -> Option<f64> {
        self.adjacency.get(from)?.get(to).copied()
    }

    /// Change the weight of an existing edge. Never creates an edge;
    /// returns false if the edge does not exist.
    pub fn set_weight(&mut self, from: &T, to: &T, weight: f64) -> bool {
        let Some(slot) = self.adjacency.get_mut(from).and_then(|n| n.get_mut(to)) else {
            return false;
        };
        *slot = weight;
        if !self.directed {
            if let Some(slot) = self.adjacency.get_mut(to).and_then(|n| n.get_mut(from)) {
                *slot = weight;
            }
        }
        true
    }

    /// Outgoing neighbors (all neighbors for undirected graphs).
    /// Empty for a missing node.
    pub fn neighbors(&self, node: &T) -> Vec<&T> {
        self.adjacency
            .get(node)
            .map(|neighbors| neighbors.keys().collect())
            .unwrap_or_default()
    }

    /// Outgoing neighbors paired with edge weights.
    pub fn neighbors_weighted(&self, node: &T) -> Vec<(&T, f64)> {
        self.adjacency
            .get(node)
            .map(|neighbors| neighbors.iter().map(|(n, w)| (n, *w)).collect())
            .unwrap_or_default()
    }

    /// Nodes with an edge into `node` (same as `neighbors` when undirected).
    pub fn predecessors(&self, node: &T) -> Vec<&T> {
        if !self.directed {
            return self.neighbors(node);
        }
        self.incoming
            .get(node)
            .map(|sources| sources.iter().collect())
            .unwrap_or_default()
    }

    /// Total degree: in + out for directed graphs, neighbor count otherwise.
    pub fn degree(&self, node: &T) -> Option<usize> {
        if self.directed {
            Some(self.in_degree(node)? + self.out_degree(node)?)
        } else {
            self.out_degree(node)
        }
    }

    /// Number of edges into `node`.
    pub fn in_degree(&self, node: &T) -> Option<usize> {
        if self.directed {
            self.incoming.get(node).map(|sources| sources.len())
        } else {
            self.out_degree(node)
        }
    }

    /// Number of edges out of `node`.
    pub fn out_degree(&self, node: &T) -> Option<usize> {
        self.adjacency.get(node).map(|neighbors| neighbors.len())
    }

    /// All edges. Undirected edges are reported once, oriented from the
    /// earlier-inserted endpoint.
    pub fn edges(&self) -> Vec<Edge<T>> {
        let mut edges = Vec::new();
        for (i, (from, neighbors)) in self.adjacency.iter().enumerate() {
            for (to, &weight) in neighbors {
                if !self.directed && self.index_of(to).is_some_and(|j| j < i) {
                    continue;
                }
                edges.push(Edge::new(from.clone(), to.clone(), weight));
            }
        }
        edges
    }

    /// Transposed copy: every directed edge reversed. Undirected graphs
    /// are their own transpose.
    pub fn reversed(&self) -> Self {
        if !self.directed {
            return self.clone();
        }
        let edges = self
            .edges()
            .into_iter()
            .map(|e| Edge::new(e.to, e.from, e.weight));
        Self::from_parts(true, self.adjacency.keys().cloned(), edges)
    }

    /// Summary statistics.
    pub fn stats(&self) -> GraphStats {
        let node_count = self.node_count();
        let edge_count = self.edge_count();
        let self_loops = self
            .adjacency
            .iter()
            .filter(|(node, neighbors)| neighbors.contains_key(*node))
            .count();
        let isolated_nodes = self
            .adjacency
            .keys()
            .filter(|node| self.degree(node) == Some(0))
            .count();
        let degree_sum: usize = self.adjacency.keys().filter_map(|n| self.degree(n)).sum();
        let average_degree = if node_count == 0 {
            0.0
        } else {
            degree_sum as f64 / node_count as f64
        };

        GraphStats {
            directed: self.directed,
            node_count,
            edge_count,
            density: stats::density(node_count, edge_count, self.directed),
            average_degree,
            self_loops,
            isolated_nodes,
        }
    }

    /// Position of a node in insertion order.
    pub(crate) fn index_of(&self, node: &T) -> Option<usize> {
        self.adjacency.get_index_of(node)
    }

    /// Raw adjacency map, for snapshots and serializers.
    pub(crate) fn adjacency(&self) -> &IndexMap<T, IndexMap<T, f64>> {
        &self.adjacency
    }
}

impl<T: Eq + Hash + Clone> Default for Graph<T> {
    fn default() -> Self {
        Self::directed()
    }
}
