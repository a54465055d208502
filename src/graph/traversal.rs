//! Graph traversal algorithms (BFS, recursive DFS, iterative DFS).
//!
//! Every traversal follows outgoing edges in neighbor insertion order,
//! never revisits a node, and accepts an optional `max_depth`: nodes at
//! that depth are visited but not expanded. The `*_visit` variants call a
//! visitor with `(node, depth)` for each newly visited node; returning
//! `ControlFlow::Break(())` stops the traversal after that node.

use std::collections::{HashSet, VecDeque};
use std::hash::Hash;
use std::ops::ControlFlow;

use log::trace;

use super::Graph;

fn within(depth: usize, max_depth: Option<usize>) -> bool {
    max_depth.map_or(true, |max| depth < max)
}

impl<T: Eq + Hash + Clone> Graph<T> {
    /// Breadth-first traversal. Returns nodes in visit order.
    pub fn bfs(&self, start: &T, max_depth: Option<usize>) -> Vec<T> {
        self.bfs_visit(start, max_depth, |_, _| ControlFlow::Continue(()))
    }

    /// Breadth-first traversal with a visitor that may stop early.
    pub fn bfs_visit<F>(&self, start: &T, max_depth: Option<usize>, mut visit: F) -> Vec<T>
    where
        F: FnMut(&T, usize) -> ControlFlow<()>,
    {
        let Some((start, _)) = self.adjacency().get_key_value(start) else {
            return Vec::new();
        };

        let mut visited: HashSet<&T> = HashSet::new();
        let mut order: Vec<T> = Vec::new();
        let mut queue: VecDeque<(&T, usize)> = VecDeque::new();

        visited.insert(start);
        order.push(start.clone());
        if visit(start, 0).is_break() {
            return order;
        }
        queue.push_back((start, 0));

        while let Some((current, depth)) = queue.pop_front() {
            if !within(depth, max_depth) {
                continue;
            }
            let Some(neighbors) = self.adjacency().get(current) else {
                continue;
            };
            for neighbor in neighbors.keys() {
                if !visited.insert(neighbor) {
                    continue;
                }
                trace!("bfs: visiting node at depth {}", depth + 1);
                order.push(neighbor.clone());
                if visit(neighbor, depth + 1).is_break() {
                    return order;
                }
                queue.push_back((neighbor, depth + 1));
            }
        }

        order
    }

    /// Recursive depth-first traversal. Returns nodes in preorder.
    ///
    /// Uses call-stack depth proportional to the longest explored path;
    /// prefer [`Graph::dfs_iterative`] for very deep graphs.
    pub fn dfs(&self, start: &T, max_depth: Option<usize>) -> Vec<T> {
        self.dfs_visit(start, max_depth, |_, _| ControlFlow::Continue(()))
    }

    /// Recursive depth-first traversal with a visitor that may stop early.
    pub fn dfs_visit<F>(&self, start: &T, max_depth: Option<usize>, mut visit: F) -> Vec<T>
    where
        F: FnMut(&T, usize) -> ControlFlow<()>,
    {
        let Some((start, _)) = self.adjacency().get_key_value(start) else {
            return Vec::new();
        };
        let mut visited = HashSet::new();
        let mut order = Vec::new();
        let _ = self.dfs_recurse(start, 0, max_depth, &mut visited, &mut order, &mut visit);
        order
    }

    fn dfs_recurse<'a, F>(
        &'a self,
        node: &'a T,
        depth: usize,
        max_depth: Option<usize>,
        visited: &mut HashSet<&'a T>,
        order: &mut Vec<T>,
        visit: &mut F,
    ) -> ControlFlow<()>
    where
        F: FnMut(&T, usize) -> ControlFlow<()>,
    {
        visited.insert(node);
        order.push(node.clone());
        visit(node, depth)?;

        if !within(depth, max_depth) {
            return ControlFlow::Continue(());
        }
        if let Some(neighbors) = self.adjacency().get(node) {
            for neighbor in neighbors.keys() {
                if !visited.contains(neighbor) {
                    self.dfs_recurse(neighbor, depth + 1, max_depth, visited, order, visit)?;
                }
            }
        }
        ControlFlow::Continue(())
    }

    /// Depth-first traversal with an explicit stack. Visits nodes in the
    /// same order as [`Graph::dfs`] without recursion.
    pub fn dfs_iterative(&self, start: &T, max_depth: Option<usize>) -> Vec<T> {
        self.dfs_iterative_visit(start, max_depth, |_, _| ControlFlow::Continue(()))
    }

    /// Iterative depth-first traversal with a visitor that may stop early.
    pub fn dfs_iterative_visit<F>(
        &self,
        start: &T,
        max_depth: Option<usize>,
        mut visit: F,
    ) -> Vec<T>
    where
        F: FnMut(&T, usize) -> ControlFlow<()>,
    {
        let Some((start, _)) = self.adjacency().get_key_value(start) else {
            return Vec::new();
        };

        let mut visited: HashSet<&T> = HashSet::new();
        let mut order: Vec<T> = Vec::new();
        let mut stack: Vec<(&T, usize)> = vec![(start, 0)];

        while let Some((node, depth)) = stack.pop() {
            if !visited.insert(node) {
                continue;
            }
            order.push(node.clone());
            if visit(node, depth).is_break() {
                break;
            }
            if !within(depth, max_depth) {
                continue;
            }
            if let Some(neighbors) = self.adjacency().get(node) {
                // Reverse push so the first neighbor is popped first.
                for neighbor in neighbors.keys().rev() {
                    if !visited.contains(neighbor) {
                        stack.push((neighbor, depth + 1));
                    }
                }
            }
        }

        order
    }
}
