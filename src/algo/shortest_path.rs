//! Shortest-path solvers: Dijkstra, Bellman-Ford and bounded path enumeration.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashSet};
use std::fmt::Debug;
use std::hash::Hash;

use indexmap::IndexMap;
use log::debug;
use serde::Serialize;

use crate::graph::view::IndexedView;
use crate::graph::Graph;
use crate::types::{GraphError, GraphResult};

/// Result of a single-pair shortest-path query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShortestPath<T> {
    /// Nodes from start to end inclusive; empty when not found.
    pub path: Vec<T>,
    /// Total weight; `f64::INFINITY` when not found.
    pub distance: f64,
    pub found: bool,
}

impl<T> ShortestPath<T> {
    fn not_found() -> Self {
        Self {
            path: Vec::new(),
            distance: f64::INFINITY,
            found: false,
        }
    }
}

/// Distance and path to one node in a single-source result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathEntry<T> {
    /// `f64::INFINITY` for unreachable nodes.
    pub distance: f64,
    /// Empty for unreachable nodes.
    pub path: Vec<T>,
}

/// Per-node single-source shortest paths, in node insertion order.
pub type PathTree<T> = IndexMap<T, PathEntry<T>>;

/// Heap entry ordered so that `BinaryHeap` pops the smallest distance.
#[derive(Clone, Copy)]
struct Frontier {
    distance: f64,
    node: usize,
}

impl PartialEq for Frontier {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Frontier {}

impl PartialOrd for Frontier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Frontier {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .distance
            .total_cmp(&self.distance)
            .then_with(|| other.node.cmp(&self.node))
    }
}

/// Walk predecessor links back from `end`.
fn unwind(predecessor: &[Option<usize>], end: usize) -> Vec<usize> {
    let mut path = vec![end];
    let mut current = end;
    while let Some(prev) = predecessor[current] {
        path.push(prev);
        current = prev;
    }
    path.reverse();
    path
}

impl<T: Eq + Hash + Clone> Graph<T> {
    /// Shortest path between two nodes by Dijkstra's algorithm.
    ///
    /// Missing or unreachable endpoints yield `found == false` with an
    /// infinite distance. Graphs containing any negative edge weight are
    /// rejected with [`GraphError::NegativeWeight`]; use
    /// [`Graph::bellman_ford`] for those.
    ///
    /// `T: Debug` is required only to name the offending edge's endpoints
    /// in that error.
    pub fn dijkstra(&self, start: &T, end: &T) -> GraphResult<ShortestPath<T>>
    where
        T: Debug,
    {
        let view = IndexedView::forward(self);
        if let Some((u, v, w)) = view.arcs().find(|&(_, _, w)| w < 0.0) {
            return Err(GraphError::NegativeWeight {
                from: format!("{:?}", view.node(u)),
                to: format!("{:?}", view.node(v)),
                weight: w,
            });
        }

        let (Some(source), Some(target)) = (self.index_of(start), self.index_of(end)) else {
            return Ok(ShortestPath::not_found());
        };

        let n = view.len();
        let mut distance = vec![f64::INFINITY; n];
        let mut predecessor: Vec<Option<usize>> = vec![None; n];
        let mut settled = vec![false; n];
        let mut heap = BinaryHeap::new();

        distance[source] = 0.0;
        heap.push(Frontier {
            distance: 0.0,
            node: source,
        });

        while let Some(Frontier { distance: d, node: u }) = heap.pop() {
            if settled[u] {
                continue;
            }
            settled[u] = true;
            if u == target {
                break;
            }
            for &(v, w) in view.neighbors(u) {
                let candidate = d + w;
                if !settled[v] && candidate < distance[v] {
                    distance[v] = candidate;
                    predecessor[v] = Some(u);
                    heap.push(Frontier {
                        distance: candidate,
                        node: v,
                    });
                }
            }
        }

        if distance[target].is_infinite() {
            debug!("dijkstra: target unreachable from source");
            return Ok(ShortestPath::not_found());
        }

        let path = view.collect(&unwind(&predecessor, target));
        debug!(
            "dijkstra: found path of {} nodes, distance {}",
            path.len(),
            distance[target]
        );
        Ok(ShortestPath {
            path,
            distance: distance[target],
            found: true,
        })
    }

    /// Single-source shortest paths tolerating negative weights.
    ///
    /// Returns `None` when a negative cycle is reachable from `start`. A
    /// missing start leaves every node unreachable. Undirected edges relax
    /// in both directions, so any negative undirected edge forms a negative
    /// cycle.
    pub fn bellman_ford(&self, start: &T) -> Option<PathTree<T>> {
        let view = IndexedView::forward(self);
        let n = view.len();
        let mut distance = vec![f64::INFINITY; n];
        let mut predecessor: Vec<Option<usize>> = vec![None; n];

        if let Some(source) = self.index_of(start) {
            distance[source] = 0.0;
        }

        let mut rounds = 0;
        for _ in 1..n {
            rounds += 1;
            let mut changed = false;
            for (u, v, w) in view.arcs() {
                if distance[u].is_finite() && distance[u] + w < distance[v] {
                    distance[v] = distance[u] + w;
                    predecessor[v] = Some(u);
                    changed = true;
                }
            }
            if !changed {
                break;
            }
        }

        let negative_cycle = view
            .arcs()
            .any(|(u, v, w)| distance[u].is_finite() && distance[u] + w < distance[v]);
        if negative_cycle {
            debug!("bellman_ford: negative cycle detected after {} rounds", rounds);
            return None;
        }

        let tree: PathTree<T> = (0..n)
            .map(|i| {
                let entry = if distance[i].is_finite() {
                    PathEntry {
                        distance: distance[i],
                        path: view.collect(&unwind(&predecessor, i)),
                    }
                } else {
                    PathEntry {
                        distance: f64::INFINITY,
                        path: Vec::new(),
                    }
                };
                (view.node(i).clone(), entry)
            })
            .collect();
        debug!("bellman_ford: converged after {} rounds", rounds);
        Some(tree)
    }

    /// Enumerate simple paths from `start` to `end` with at most
    /// `max_length` edges. Paths longer than the bound are not explored.
    pub fn find_all_paths(&self, start: &T, end: &T, max_length: usize) -> Vec<Vec<T>> {
        let (Some(source), Some(target)) = (self.index_of(start), self.index_of(end)) else {
            return Vec::new();
        };
        let view = IndexedView::forward(self);
        let mut found = Vec::new();
        let mut path = vec![source];
        let mut on_path = HashSet::from([source]);
        collect_paths(&view, target, max_length, &mut path, &mut on_path, &mut found);
        debug!("find_all_paths: {} paths within {} edges", found.len(), max_length);
        found
    }
}

fn collect_paths<T: Eq + Hash + Clone>(
    view: &IndexedView<'_, T>,
    target: usize,
    max_length: usize,
    path: &mut Vec<usize>,
    on_path: &mut HashSet<usize>,
    found: &mut Vec<Vec<T>>,
) {
    let Some(&current) = path.last() else {
        return;
    };
    if current == target {
        found.push(view.collect(path));
        return;
    }
    if path.len() > max_length {
        return;
    }
    for &(next, _) in view.neighbors(current) {
        if on_path.insert(next) {
            path.push(next);
            collect_paths(view, target, max_length, path, on_path, found);
            path.pop();
            on_path.remove(&next);
        }
    }
}
