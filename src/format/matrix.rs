//! Dense adjacency-matrix import/export.

use std::collections::HashSet;
use std::hash::Hash;

use serde::Serialize;

use crate::graph::Graph;
use crate::types::{Edge, GraphError, GraphResult, NO_EDGE};

/// An `n × n` weight matrix with row/column labels.
///
/// `weights[i][j]` is the weight of the edge `nodes[i] -> nodes[j]`,
/// [`NO_EDGE`] when absent, and `0.0` on the diagonal.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdjacencyMatrix<T> {
    pub nodes: Vec<T>,
    pub weights: Vec<Vec<f64>>,
}

impl<T> AdjacencyMatrix<T> {
    /// Entry at `(row, col)`, if in range.
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        self.weights.get(row)?.get(col).copied()
    }

    /// Number of rows (and columns).
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl<T: Eq + Hash + Clone> Graph<T> {
    /// Export a dense matrix in node insertion order. Self-loop weights are
    /// not representable; the diagonal is always `0.0`.
    pub fn to_adjacency_matrix(&self) -> AdjacencyMatrix<T> {
        let nodes: Vec<T> = self.nodes().cloned().collect();
        let n = nodes.len();
        let mut weights = vec![vec![NO_EDGE; n]; n];
        for (i, row) in weights.iter_mut().enumerate() {
            row[i] = 0.0;
        }
        for (i, neighbors) in self.adjacency().values().enumerate() {
            for (to, &w) in neighbors {
                if let Some(j) = self.index_of(to) {
                    if i != j {
                        weights[i][j] = w;
                    }
                }
            }
        }
        AdjacencyMatrix { nodes, weights }
    }

    /// Build a graph from a dense matrix. Diagonal and infinite entries are
    /// skipped; undirected graphs read the upper triangle only.
    pub fn from_adjacency_matrix(matrix: AdjacencyMatrix<T>, directed: bool) -> GraphResult<Self> {
        let n = matrix.nodes.len();
        if matrix.weights.len() != n {
            return Err(GraphError::InvalidMatrix(format!(
                "{} rows for {} nodes",
                matrix.weights.len(),
                n
            )));
        }
        if let Some((i, row)) = matrix.weights.iter().enumerate().find(|(_, r)| r.len() != n) {
            return Err(GraphError::InvalidMatrix(format!(
                "row {} has {} columns, expected {}",
                i,
                row.len(),
                n
            )));
        }
        let unique: HashSet<&T> = matrix.nodes.iter().collect();
        if unique.len() != n {
            return Err(GraphError::InvalidMatrix("duplicate node labels".to_string()));
        }

        let mut edges = Vec::new();
        for (i, row) in matrix.weights.iter().enumerate() {
            let first = if directed { 0 } else { i + 1 };
            for (j, &w) in row.iter().enumerate().skip(first) {
                if i != j && !w.is_infinite() && !w.is_nan() {
                    edges.push(Edge::new(matrix.nodes[i].clone(), matrix.nodes[j].clone(), w));
                }
            }
        }
        Ok(Self::from_parts(directed, matrix.nodes, edges))
    }
}
