//! Articulation points and bridges via Tarjan's low-link DFS.
//!
//! The DFS runs on an explicit frame stack, so graph depth is bounded by
//! heap memory rather than the call stack.

use std::hash::Hash;

use log::debug;

use crate::graph::view::IndexedView;
use crate::graph::Graph;
use crate::types::{Edge, GraphError, GraphKind, GraphResult};

#[derive(Clone, Copy)]
struct Frame {
    node: usize,
    parent: Option<usize>,
    cursor: usize,
}

/// Outcome of one low-link scan over every component.
struct LowLink {
    articulation: Vec<bool>,
    /// `(parent, child)` tree edges whose removal disconnects the graph.
    bridges: Vec<(usize, usize)>,
}

fn low_link_scan<T: Eq + Hash + Clone>(view: &IndexedView<'_, T>) -> LowLink {
    let n = view.len();
    let mut discovery: Vec<Option<usize>> = vec![None; n];
    let mut low = vec![0usize; n];
    let mut articulation = vec![false; n];
    let mut bridges = Vec::new();
    let mut timer = 0usize;
    let mut stack: Vec<Frame> = Vec::new();

    for root in 0..n {
        if discovery[root].is_some() {
            continue;
        }
        discovery[root] = Some(timer);
        low[root] = timer;
        timer += 1;
        let mut root_children = 0usize;
        stack.push(Frame {
            node: root,
            parent: None,
            cursor: 0,
        });

        while let Some(frame) = stack.last_mut() {
            let u = frame.node;
            if let Some(&(v, _)) = view.neighbors(u).get(frame.cursor) {
                frame.cursor += 1;
                if v == u || Some(v) == frame.parent {
                    continue;
                }
                match discovery[v] {
                    Some(disc_v) => low[u] = low[u].min(disc_v),
                    None => {
                        discovery[v] = Some(timer);
                        low[v] = timer;
                        timer += 1;
                        if u == root {
                            root_children += 1;
                        }
                        stack.push(Frame {
                            node: v,
                            parent: Some(u),
                            cursor: 0,
                        });
                    }
                }
                continue;
            }

            let done = *frame;
            stack.pop();
            let Some(p) = done.parent else {
                continue;
            };
            let child = done.node;
            low[p] = low[p].min(low[child]);
            let disc_p = discovery[p].unwrap_or(0);
            if p != root && low[child] >= disc_p {
                articulation[p] = true;
            }
            if low[child] > disc_p {
                bridges.push((p, child));
            }
        }

        if root_children > 1 {
            articulation[root] = true;
        }
    }

    LowLink {
        articulation,
        bridges,
    }
}

impl<T: Eq + Hash + Clone> Graph<T> {
    /// Nodes whose removal disconnects their component. Undirected graphs
    /// only. Returned in insertion order.
    pub fn articulation_points(&self) -> GraphResult<Vec<T>> {
        if self.is_directed() {
            return Err(GraphError::invalid_operation(
                "articulation_points",
                GraphKind::Undirected,
            ));
        }
        let view = IndexedView::forward(self);
        let scan = low_link_scan(&view);
        let points: Vec<usize> = (0..view.len()).filter(|&i| scan.articulation[i]).collect();
        debug!("articulation_points: {} found", points.len());
        Ok(view.collect(&points))
    }

    /// Edges whose removal disconnects their component. Undirected graphs
    /// only. Each bridge is oriented from DFS parent to child.
    pub fn bridges(&self) -> GraphResult<Vec<Edge<T>>> {
        if self.is_directed() {
            return Err(GraphError::invalid_operation("bridges", GraphKind::Undirected));
        }
        let view = IndexedView::forward(self);
        let scan = low_link_scan(&view);
        let bridges: Vec<Edge<T>> = scan
            .bridges
            .iter()
            .map(|&(p, c)| {
                let from = view.node(p).clone();
                let to = view.node(c).clone();
                let weight = self.weight(&from, &to).unwrap_or_default();
                Edge::new(from, to, weight)
            })
            .collect();
        debug!("bridges: {} found", bridges.len());
        Ok(bridges)
    }
}
