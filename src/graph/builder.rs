//! Fluent API for building Graph instances.

use std::hash::Hash;

use crate::types::Edge;

use super::Graph;

/// Fluent builder for constructing a [`Graph`].
///
/// ```
/// use graphkit::GraphBuilder;
///
/// let graph = GraphBuilder::directed()
///     .edge("a", "b", 2.0)
///     .unit_edge("b", "c")
///     .node("d")
///     .build();
/// assert_eq!(graph.node_count(), 4);
/// ```
pub struct GraphBuilder<T> {
    directed: bool,
    nodes: Vec<T>,
    edges: Vec<Edge<T>>,
}

impl<T: Eq + Hash + Clone> GraphBuilder<T> {
    /// Create a new builder.
    pub fn new(directed: bool) -> Self {
        Self {
            directed,
            nodes: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Builder for a directed graph.
    pub fn directed() -> Self {
        Self::new(true)
    }

    /// Builder for an undirected graph.
    pub fn undirected() -> Self {
        Self::new(false)
    }

    /// Add a node (possibly isolated).
    pub fn node(mut self, node: T) -> Self {
        self.nodes.push(node);
        self
    }

    /// Add several nodes.
    pub fn nodes<I: IntoIterator<Item = T>>(mut self, nodes: I) -> Self {
        self.nodes.extend(nodes);
        self
    }

    /// Add a weighted edge.
    pub fn edge(mut self, from: T, to: T, weight: f64) -> Self {
        self.edges.push(Edge::new(from, to, weight));
        self
    }

    /// Add an edge with the default weight.
    pub fn unit_edge(mut self, from: T, to: T) -> Self {
        self.edges.push(Edge::unit(from, to));
        self
    }

    /// Build the final Graph.
    pub fn build(self) -> Graph<T> {
        Graph::from_parts(self.directed, self.nodes, self.edges)
    }
}
