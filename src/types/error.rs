//! Error types for the graphkit library.

use thiserror::Error;

use super::GraphKind;

/// All errors that can occur in the graphkit library.
///
/// Absence of a node or edge is never an error; queries return `Option`,
/// `bool` or an empty collection instead.
#[derive(Error, Debug)]
pub enum GraphError {
    /// An algorithm was invoked on the wrong kind of graph.
    #[error("{operation} requires a {required} graph")]
    InvalidOperation {
        operation: &'static str,
        required: GraphKind,
    },

    /// Dijkstra was given a graph containing a negative edge weight.
    #[error("Negative edge weight {weight} on {from} -> {to}; use bellman_ford instead")]
    NegativeWeight {
        from: String,
        to: String,
        weight: f64,
    },

    /// JSON has no representation for infinite or NaN numbers.
    #[error("Edge {edge} has non-finite weight {weight}; JSON cannot represent it")]
    NonFiniteWeight { edge: usize, weight: f64 },

    /// Adjacency matrix shape or node list is inconsistent.
    #[error("Invalid adjacency matrix: {0}")]
    InvalidMatrix(String),

    /// Node lookup by name failed.
    #[error("Node {0} not found")]
    NodeNotFound(String),

    /// JSON encode/decode error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl GraphError {
    /// Shorthand for an `InvalidOperation` error.
    pub fn invalid_operation(operation: &'static str, required: GraphKind) -> Self {
        Self::InvalidOperation {
            operation,
            required,
        }
    }
}

/// Convenience result type for graphkit operations.
pub type GraphResult<T> = Result<T, GraphError>;
