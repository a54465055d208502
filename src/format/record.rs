//! Plain-record interchange format: `{directed, nodes, edges}`.
//!
//! This is the only shape graphs take outside the crate. It derives serde
//! traits so callers can pick any serializer; JSON helpers are provided.

use std::hash::Hash;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::graph::Graph;
use crate::types::{Edge, GraphError, GraphResult, DEFAULT_WEIGHT};

/// Serializable snapshot of a graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphRecord<T> {
    pub directed: bool,
    /// Every node, including isolated ones, in insertion order.
    pub nodes: Vec<T>,
    pub edges: Vec<EdgeRecord<T>>,
}

/// One edge of a [`GraphRecord`]. A missing weight means the default weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeRecord<T> {
    pub from: T,
    pub to: T,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
}

impl<T> From<Edge<T>> for EdgeRecord<T> {
    fn from(edge: Edge<T>) -> Self {
        Self {
            from: edge.from,
            to: edge.to,
            weight: Some(edge.weight),
        }
    }
}

impl<T> From<EdgeRecord<T>> for Edge<T> {
    fn from(record: EdgeRecord<T>) -> Self {
        Edge::new(
            record.from,
            record.to,
            record.weight.unwrap_or(DEFAULT_WEIGHT),
        )
    }
}

impl<T: Eq + Hash + Clone> From<&Graph<T>> for GraphRecord<T> {
    fn from(graph: &Graph<T>) -> Self {
        Self {
            directed: graph.is_directed(),
            nodes: graph.nodes().cloned().collect(),
            edges: graph.edges().into_iter().map(EdgeRecord::from).collect(),
        }
    }
}

impl<T: Eq + Hash + Clone> From<GraphRecord<T>> for Graph<T> {
    fn from(record: GraphRecord<T>) -> Self {
        Graph::from_parts(
            record.directed,
            record.nodes,
            record.edges.into_iter().map(Edge::from),
        )
    }
}

impl<T> GraphRecord<T> {
    /// Fail on the first edge whose weight would not survive a JSON round
    /// trip (`serde_json` writes infinity and NaN as `null`).
    pub fn check_finite(&self) -> GraphResult<()> {
        match self
            .edges
            .iter()
            .enumerate()
            .find_map(|(i, e)| e.weight.filter(|w| !w.is_finite()).map(|w| (i, w)))
        {
            Some((edge, weight)) => Err(GraphError::NonFiniteWeight { edge, weight }),
            None => Ok(()),
        }
    }
}

impl<T: Eq + Hash + Clone> Graph<T> {
    /// Export to the interchange record. Undirected edges appear once.
    pub fn to_record(&self) -> GraphRecord<T> {
        GraphRecord::from(self)
    }

    /// Rebuild a graph from an interchange record. Edge endpoints absent
    /// from `nodes` are created.
    pub fn from_record(record: GraphRecord<T>) -> Self {
        Self::from(record)
    }

    /// Serialize the interchange record as compact JSON.
    ///
    /// Fails with [`GraphError::NonFiniteWeight`] if any edge weight is
    /// infinite or NaN.
    pub fn to_json_string(&self) -> GraphResult<String>
    where
        T: Serialize,
    {
        let record = self.to_record();
        record.check_finite()?;
        Ok(serde_json::to_string(&record)?)
    }

    /// Serialize the interchange record as indented JSON. Same weight
    /// restriction as [`Graph::to_json_string`].
    pub fn to_json_string_pretty(&self) -> GraphResult<String>
    where
        T: Serialize,
    {
        let record = self.to_record();
        record.check_finite()?;
        Ok(serde_json::to_string_pretty(&record)?)
    }

    /// Parse a graph from interchange JSON.
    pub fn from_json_str(json: &str) -> GraphResult<Self>
    where
        T: DeserializeOwned,
    {
        let record: GraphRecord<T> = serde_json::from_str(json)?;
        Ok(Self::from_record(record))
    }
}
