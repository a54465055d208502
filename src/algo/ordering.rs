//! Topological ordering and cycle detection.

use std::collections::VecDeque;
use std::hash::Hash;

use log::debug;

use crate::graph::view::IndexedView;
use crate::graph::Graph;
use crate::types::{GraphError, GraphKind, GraphResult};

/// Explicit DFS frame for undirected cycle detection.
struct Frame {
    node: usize,
    parent: Option<usize>,
    cursor: usize,
}

impl<T: Eq + Hash + Clone> Graph<T> {
    /// Kahn's algorithm. Directed graphs only.
    ///
    /// Returns `Ok(None)` when the graph contains a cycle. Ready nodes are
    /// emitted in insertion order.
    pub fn topological_sort(&self) -> GraphResult<Option<Vec<T>>> {
        if !self.is_directed() {
            return Err(GraphError::invalid_operation(
                "topological_sort",
                GraphKind::Directed,
            ));
        }

        let view = IndexedView::forward(self);
        let n = view.len();
        let mut in_degree = vec![0usize; n];
        for (_, v, _) in view.arcs() {
            in_degree[v] += 1;
        }

        let mut ready: VecDeque<usize> = (0..n).filter(|&i| in_degree[i] == 0).collect();
        let mut order = Vec::with_capacity(n);
        while let Some(u) = ready.pop_front() {
            order.push(u);
            for &(v, _) in view.neighbors(u) {
                in_degree[v] -= 1;
                if in_degree[v] == 0 {
                    ready.push_back(v);
                }
            }
        }

        if order.len() < n {
            debug!(
                "topological_sort: cycle detected, {} of {} nodes ordered",
                order.len(),
                n
            );
            return Ok(None);
        }
        Ok(Some(view.collect(&order)))
    }

    /// Whether the graph contains a cycle.
    ///
    /// Directed graphs: a topological order does not exist. Undirected
    /// graphs: DFS reaches an already-visited node other than its parent
    /// (self-loops count as cycles).
    pub fn has_cycle(&self) -> bool {
        if self.is_directed() {
            return matches!(self.topological_sort(), Ok(None));
        }

        let view = IndexedView::forward(self);
        let n = view.len();
        let mut visited = vec![false; n];
        let mut stack: Vec<Frame> = Vec::new();

        for root in 0..n {
            if visited[root] {
                continue;
            }
            visited[root] = true;
            stack.push(Frame {
                node: root,
                parent: None,
                cursor: 0,
            });

            while let Some(frame) = stack.last_mut() {
                let Some(&(next, _)) = view.neighbors(frame.node).get(frame.cursor) else {
                    stack.pop();
                    continue;
                };
                frame.cursor += 1;
                if Some(next) == frame.parent {
                    continue;
                }
                if visited[next] {
                    debug!("has_cycle: back edge found");
                    return true;
                }
                visited[next] = true;
                let parent = Some(frame.node);
                stack.push(Frame {
                    node: next,
                    parent,
                    cursor: 0,
                });
            }
        }
        false
    }
}
