//! Minimum spanning trees: Kruskal and Prim.
//!
//! Both builders take a snapshot of the edge list at call start and work
//! on it alone. Spanning trees are defined for undirected graphs only.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::hash::Hash;

use log::debug;
use serde::Serialize;

use super::union_find::UnionFind;
use crate::graph::view::IndexedView;
use crate::graph::Graph;
use crate::types::{Edge, GraphError, GraphKind, GraphResult};

/// A spanning tree: `node_count - 1` edges and their summed weight.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpanningTree<T> {
    pub edges: Vec<Edge<T>>,
    pub total_weight: f64,
}

impl<T> SpanningTree<T> {
    fn from_edges(edges: Vec<Edge<T>>) -> Self {
        let total_weight = edges.iter().map(|e| e.weight).sum();
        Self {
            edges,
            total_weight,
        }
    }
}

/// Candidate edge on Prim's frontier, popped smallest-weight first with
/// ties broken by discovery order.
struct Candidate {
    weight: f64,
    seq: usize,
    from: usize,
    to: usize,
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Candidate {}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .weight
            .total_cmp(&self.weight)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Move `node` into the tree and push its edges to outside nodes.
fn expand<T: Eq + Hash + Clone>(
    view: &IndexedView<'_, T>,
    node: usize,
    in_tree: &mut [bool],
    frontier: &mut BinaryHeap<Candidate>,
    seq: &mut usize,
) {
    in_tree[node] = true;
    for &(to, weight) in view.neighbors(node) {
        if !in_tree[to] {
            frontier.push(Candidate {
                weight,
                seq: *seq,
                from: node,
                to,
            });
            *seq += 1;
        }
    }
}

impl<T: Eq + Hash + Clone> Graph<T> {
    fn require_undirected(&self, operation: &'static str) -> GraphResult<()> {
        if self.is_directed() {
            return Err(GraphError::invalid_operation(operation, GraphKind::Undirected));
        }
        Ok(())
    }

    /// Kruskal's algorithm. Returns `Ok(None)` when the graph is disconnected.
    pub fn kruskal_mst(&self) -> GraphResult<Option<SpanningTree<T>>> {
        self.require_undirected("kruskal_mst")?;

        let n = self.node_count();
        let mut candidates: Vec<(usize, usize, f64)> = self
            .edges()
            .iter()
            .filter(|e| !e.is_self_loop())
            .filter_map(|e| Some((self.index_of(&e.from)?, self.index_of(&e.to)?, e.weight)))
            .collect();
        candidates.sort_by(|a, b| a.2.total_cmp(&b.2));

        let view = IndexedView::forward(self);
        let mut sets = UnionFind::new(n);
        let mut accepted = Vec::with_capacity(n.saturating_sub(1));
        for (u, v, w) in candidates {
            if accepted.len() + 1 >= n {
                break;
            }
            if sets.union(u, v) {
                accepted.push(Edge::new(view.node(u).clone(), view.node(v).clone(), w));
            }
        }

        if accepted.len() + 1 < n {
            debug!(
                "kruskal_mst: graph disconnected, {} of {} edges accepted",
                accepted.len(),
                n - 1
            );
            return Ok(None);
        }
        let tree = SpanningTree::from_edges(accepted);
        debug!("kruskal_mst: total weight {}", tree.total_weight);
        Ok(Some(tree))
    }

    /// Prim's algorithm grown from `start` (default: the first inserted
    /// node). Returns `Ok(None)` when the tree cannot reach every node or
    /// an explicit start does not exist.
    pub fn prim_mst(&self, start: Option<&T>) -> GraphResult<Option<SpanningTree<T>>> {
        self.require_undirected("prim_mst")?;

        let view = IndexedView::forward(self);
        let n = view.len();
        if n == 0 {
            return Ok(Some(SpanningTree::from_edges(Vec::new())));
        }
        let root = match start {
            Some(node) => match self.index_of(node) {
                Some(i) => i,
                None => return Ok(None),
            },
            None => 0,
        };

        let mut in_tree = vec![false; n];
        let mut frontier = BinaryHeap::new();
        let mut seq = 0usize;
        let mut accepted = Vec::with_capacity(n - 1);

        expand(&view, root, &mut in_tree, &mut frontier, &mut seq);
        while accepted.len() + 1 < n {
            let Some(edge) = frontier.pop() else {
                break;
            };
            if in_tree[edge.to] {
                continue;
            }
            accepted.push(Edge::new(
                view.node(edge.from).clone(),
                view.node(edge.to).clone(),
                edge.weight,
            ));
            expand(&view, edge.to, &mut in_tree, &mut frontier, &mut seq);
        }

        if accepted.len() + 1 < n {
            debug!(
                "prim_mst: graph disconnected, reached {} of {} nodes",
                accepted.len() + 1,
                n
            );
            return Ok(None);
        }
        let tree = SpanningTree::from_edges(accepted);
        debug!("prim_mst: total weight {}", tree.total_weight);
        Ok(Some(tree))
    }
}
