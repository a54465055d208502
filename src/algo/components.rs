//! Connectivity analysis: connected components, strongly connected
//! components (Kosaraju) and bipartiteness.

use std::collections::VecDeque;
use std::hash::Hash;

use log::debug;

use crate::graph::view::IndexedView;
use crate::graph::Graph;
use crate::types::{GraphError, GraphKind, GraphResult};

impl<T: Eq + Hash + Clone> Graph<T> {
    /// Partition the nodes of an undirected graph into connected components.
    ///
    /// Components are ordered by their earliest-inserted node; nodes within
    /// a component are in BFS order.
    pub fn connected_components(&self) -> GraphResult<Vec<Vec<T>>> {
        if self.is_directed() {
            return Err(GraphError::invalid_operation(
                "connected_components",
                GraphKind::Undirected,
            ));
        }

        let view = IndexedView::forward(self);
        let mut visited = vec![false; view.len()];
        let mut components = Vec::new();
        let mut queue = VecDeque::new();

        for root in 0..view.len() {
            if visited[root] {
                continue;
            }
            visited[root] = true;
            queue.push_back(root);
            let mut members = Vec::new();
            while let Some(u) = queue.pop_front() {
                members.push(u);
                for &(v, _) in view.neighbors(u) {
                    if !visited[v] {
                        visited[v] = true;
                        queue.push_back(v);
                    }
                }
            }
            components.push(view.collect(&members));
        }

        debug!("connected_components: {} components", components.len());
        Ok(components)
    }

    /// Strongly connected components of a directed graph (Kosaraju).
    ///
    /// The first pass records DFS finish order; the second pass walks the
    /// transpose in reverse finish order, each tree forming one component.
    /// Both passes use explicit stacks.
    pub fn strongly_connected_components(&self) -> GraphResult<Vec<Vec<T>>> {
        if !self.is_directed() {
            return Err(GraphError::invalid_operation(
                "strongly_connected_components",
                GraphKind::Directed,
            ));
        }

        let forward = IndexedView::forward(self);
        let n = forward.len();

        // Pass 1: finish order.
        let mut visited = vec![false; n];
        let mut finished = Vec::with_capacity(n);
        let mut stack: Vec<(usize, usize)> = Vec::new();
        for root in 0..n {
            if visited[root] {
                continue;
            }
            visited[root] = true;
            stack.push((root, 0));
            while let Some((u, cursor)) = stack.last_mut() {
                let u = *u;
                match forward.neighbors(u).get(*cursor) {
                    Some(&(v, _)) => {
                        *cursor += 1;
                        if !visited[v] {
                            visited[v] = true;
                            stack.push((v, 0));
                        }
                    }
                    None => {
                        stack.pop();
                        finished.push(u);
                    }
                }
            }
        }

        // Pass 2: transpose in reverse finish order.
        let transpose = IndexedView::reversed(self);
        let mut assigned = vec![false; n];
        let mut components = Vec::new();
        let mut pending = Vec::new();
        for &root in finished.iter().rev() {
            if assigned[root] {
                continue;
            }
            assigned[root] = true;
            pending.push(root);
            let mut members = Vec::new();
            while let Some(u) = pending.pop() {
                members.push(u);
                for &(v, _) in transpose.neighbors(u) {
                    if !assigned[v] {
                        assigned[v] = true;
                        pending.push(v);
                    }
                }
            }
            components.push(forward.collect(&members));
        }

        debug!(
            "strongly_connected_components: {} components over {} nodes",
            components.len(),
            n
        );
        Ok(components)
    }

    /// Two-colouring check. Directed graphs are coloured over both edge
    /// directions. A self-loop makes a graph non-bipartite.
    pub fn is_bipartite(&self) -> bool {
        let view = IndexedView::underlying(self);
        let mut colour: Vec<Option<bool>> = vec![None; view.len()];
        let mut queue = VecDeque::new();

        for root in 0..view.len() {
            if colour[root].is_some() {
                continue;
            }
            colour[root] = Some(false);
            queue.push_back(root);
            while let Some(u) = queue.pop_front() {
                let side = colour[u].unwrap_or(false);
                for &(v, _) in view.neighbors(u) {
                    match colour[v] {
                        None => {
                            colour[v] = Some(!side);
                            queue.push_back(v);
                        }
                        Some(c) if c == side => {
                            debug!("is_bipartite: conflicting colours on an edge");
                            return false;
                        }
                        Some(_) => {}
                    }
                }
            }
        }
        true
    }
}
