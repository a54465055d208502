//! The weighted edge struct.

use serde::Serialize;

use super::DEFAULT_WEIGHT;

/// A weighted edge between two nodes.
///
/// In an undirected graph `from`/`to` carry no direction; the container
/// reports each undirected edge once, oriented from the endpoint that was
/// inserted first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Edge<T> {
    /// Source node.
    pub from: T,
    /// Target node.
    pub to: T,
    /// Edge weight.
    pub weight: f64,
}

impl<T> Edge<T> {
    /// Create a new weighted edge.
    pub fn new(from: T, to: T, weight: f64) -> Self {
        Self { from, to, weight }
    }

    /// Create an edge carrying the default weight.
    pub fn unit(from: T, to: T) -> Self {
        Self::new(from, to, DEFAULT_WEIGHT)
    }

    /// True when both endpoints are the same node.
    pub fn is_self_loop(&self) -> bool
    where
        T: PartialEq,
    {
        self.from == self.to
    }
}
