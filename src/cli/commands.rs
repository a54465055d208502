//! CLI command implementations.
//!
//! Every command loads a graph of string nodes from an interchange JSON
//! file, runs one operation and prints the result as text or JSON.

use std::path::Path;

use serde_json::{json, Value};

use crate::graph::Graph;
use crate::types::{Edge, GraphError, GraphResult};

/// Which MST builder to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MstAlgorithm {
    Kruskal,
    Prim,
}

impl MstAlgorithm {
    /// Parse an algorithm from its name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "kruskal" => Some(Self::Kruskal),
            "prim" => Some(Self::Prim),
            _ => None,
        }
    }
}

/// Read an interchange JSON file into a graph.
pub fn load_graph(path: &Path) -> GraphResult<Graph<String>> {
    let text = std::fs::read_to_string(path)?;
    let graph = Graph::from_json_str(&text)?;
    log::debug!(
        "loaded {} ({} nodes, {} edges)",
        path.display(),
        graph.node_count(),
        graph.edge_count()
    );
    Ok(graph)
}

/// Write a graph as pretty interchange JSON.
pub fn save_graph(graph: &Graph<String>, path: &Path) -> GraphResult<()> {
    std::fs::write(path, graph.to_json_string_pretty()?)?;
    Ok(())
}

fn require_node(graph: &Graph<String>, name: &str) -> GraphResult<String> {
    let node = name.to_string();
    if graph.has_node(&node) {
        Ok(node)
    } else {
        Err(GraphError::NodeNotFound(node))
    }
}

/// JSON has no infinity; unreachable distances are emitted as null.
fn distance_value(distance: f64) -> Value {
    if distance.is_finite() {
        json!(distance)
    } else {
        Value::Null
    }
}

fn print_json(value: &Value) {
    println!(
        "{}",
        serde_json::to_string_pretty(value).unwrap_or_default()
    );
}

fn print_nodes(label: &str, nodes: &[String], json: bool) {
    if json {
        print_json(&json!({ label: nodes }));
    } else {
        println!("{}: {}", label, nodes.join(" "));
    }
}

fn print_edges(label: &str, edges: &[Edge<String>], json: bool) {
    if json {
        print_json(&json!({ label: edges }));
    } else {
        println!("{} ({}):", label, edges.len());
        for e in edges {
            println!("  {} -- {} ({})", e.from, e.to, e.weight);
        }
    }
}

/// Display summary statistics.
pub fn cmd_info(path: &Path, json: bool) -> GraphResult<()> {
    let graph = load_graph(path)?;
    let stats = graph.stats();

    if json {
        print_json(&json!({
            "file": path.display().to_string(),
            "stats": stats,
        }));
    } else {
        println!("File: {}", path.display());
        println!("Kind: {}", graph.kind());
        println!("Nodes: {}", stats.node_count);
        println!("Edges: {}", stats.edge_count);
        println!("Density: {:.4}", stats.density);
        println!("Average degree: {:.2}", stats.average_degree);
        println!("Self-loops: {}", stats.self_loops);
        println!("Isolated nodes: {}", stats.isolated_nodes);
    }
    Ok(())
}

/// Show a node's neighbors and degrees.
pub fn cmd_neighbors(path: &Path, node: &str, json: bool) -> GraphResult<()> {
    let graph = load_graph(path)?;
    let node = require_node(&graph, node)?;
    let neighbors: Vec<(&String, f64)> = graph.neighbors_weighted(&node);

    if json {
        let list: Vec<Value> = neighbors
            .iter()
            .map(|(n, w)| json!({"node": n, "weight": w}))
            .collect();
        print_json(&json!({
            "node": node,
            "neighbors": list,
            "in_degree": graph.in_degree(&node),
            "out_degree": graph.out_degree(&node),
        }));
    } else {
        println!("Node {}", node);
        println!("  In degree: {}", graph.in_degree(&node).unwrap_or(0));
        println!("  Out degree: {}", graph.out_degree(&node).unwrap_or(0));
        for (n, w) in neighbors {
            println!("  -> {} ({})", n, w);
        }
    }
    Ok(())
}

/// Breadth-first traversal.
pub fn cmd_bfs(path: &Path, start: &str, max_depth: Option<usize>, json: bool) -> GraphResult<()> {
    let graph = load_graph(path)?;
    let start = require_node(&graph, start)?;
    print_nodes("visited", &graph.bfs(&start, max_depth), json);
    Ok(())
}

/// Depth-first traversal, recursive or iterative.
pub fn cmd_dfs(
    path: &Path,
    start: &str,
    max_depth: Option<usize>,
    iterative: bool,
    json: bool,
) -> GraphResult<()> {
    let graph = load_graph(path)?;
    let start = require_node(&graph, start)?;
    let order = if iterative {
        graph.dfs_iterative(&start, max_depth)
    } else {
        graph.dfs(&start, max_depth)
    };
    print_nodes("visited", &order, json);
    Ok(())
}

/// Dijkstra shortest path between two nodes.
pub fn cmd_path(path: &Path, from: &str, to: &str, json: bool) -> GraphResult<()> {
    let graph = load_graph(path)?;
    let from = require_node(&graph, from)?;
    let to = require_node(&graph, to)?;
    let result = graph.dijkstra(&from, &to)?;

    if json {
        print_json(&json!({
            "found": result.found,
            "distance": distance_value(result.distance),
            "path": result.path,
        }));
    } else if result.found {
        println!("Distance: {}", result.distance);
        println!("Path: {}", result.path.join(" -> "));
    } else {
        println!("No path from {} to {}", from, to);
    }
    Ok(())
}

/// Bellman-Ford single-source distances.
pub fn cmd_bellman_ford(path: &Path, start: &str, json: bool) -> GraphResult<()> {
    let graph = load_graph(path)?;
    let start = require_node(&graph, start)?;

    let Some(tree) = graph.bellman_ford(&start) else {
        if json {
            print_json(&json!({"negative_cycle": true}));
        } else {
            println!("Negative cycle detected; no shortest-path tree exists");
        }
        return Ok(());
    };

    if json {
        let entries: Vec<Value> = tree
            .iter()
            .map(|(node, entry)| {
                json!({
                    "node": node,
                    "distance": distance_value(entry.distance),
                    "path": entry.path,
                })
            })
            .collect();
        print_json(&json!({"negative_cycle": false, "distances": entries}));
    } else {
        for (node, entry) in &tree {
            if entry.distance.is_finite() {
                println!("{}: {} via {}", node, entry.distance, entry.path.join(" -> "));
            } else {
                println!("{}: unreachable", node);
            }
        }
    }
    Ok(())
}

/// Enumerate simple paths up to `max_length` edges.
pub fn cmd_all_paths(
    path: &Path,
    from: &str,
    to: &str,
    max_length: usize,
    json: bool,
) -> GraphResult<()> {
    let graph = load_graph(path)?;
    let from = require_node(&graph, from)?;
    let to = require_node(&graph, to)?;
    let paths = graph.find_all_paths(&from, &to, max_length);

    if json {
        print_json(&json!({"paths": paths}));
    } else {
        println!("{} paths (max {} edges):", paths.len(), max_length);
        for p in &paths {
            println!("  {}", p.join(" -> "));
        }
    }
    Ok(())
}

/// Topological order of a directed graph.
pub fn cmd_topo(path: &Path, json: bool) -> GraphResult<()> {
    let graph = load_graph(path)?;
    match graph.topological_sort()? {
        Some(order) => print_nodes("order", &order, json),
        None if json => print_json(&json!({"order": Value::Null, "cyclic": true})),
        None => println!("Graph contains a cycle; no topological order"),
    }
    Ok(())
}

/// Cycle detection.
pub fn cmd_cycle(path: &Path, json: bool) -> GraphResult<()> {
    let graph = load_graph(path)?;
    let cyclic = graph.has_cycle();
    if json {
        print_json(&json!({"has_cycle": cyclic}));
    } else {
        println!("Has cycle: {}", cyclic);
    }
    Ok(())
}

/// Connected components (undirected) or strongly connected components
/// (directed).
pub fn cmd_components(path: &Path, json: bool) -> GraphResult<()> {
    let graph = load_graph(path)?;
    let (label, components) = if graph.is_directed() {
        ("strongly_connected", graph.strongly_connected_components()?)
    } else {
        ("connected", graph.connected_components()?)
    };

    if json {
        print_json(&json!({"kind": label, "components": components}));
    } else {
        println!("{} {} components:", components.len(), label.replace('_', " "));
        for (i, c) in components.iter().enumerate() {
            println!("  {}: {}", i, c.join(" "));
        }
    }
    Ok(())
}

/// Bipartiteness check.
pub fn cmd_bipartite(path: &Path, json: bool) -> GraphResult<()> {
    let graph = load_graph(path)?;
    let bipartite = graph.is_bipartite();
    if json {
        print_json(&json!({"bipartite": bipartite}));
    } else {
        println!("Bipartite: {}", bipartite);
    }
    Ok(())
}

/// Articulation points of an undirected graph.
pub fn cmd_articulation(path: &Path, json: bool) -> GraphResult<()> {
    let graph = load_graph(path)?;
    print_nodes("articulation_points", &graph.articulation_points()?, json);
    Ok(())
}

/// Bridges of an undirected graph.
pub fn cmd_bridges(path: &Path, json: bool) -> GraphResult<()> {
    let graph = load_graph(path)?;
    print_edges("bridges", &graph.bridges()?, json);
    Ok(())
}

/// Minimum spanning tree of an undirected graph.
pub fn cmd_mst(
    path: &Path,
    algorithm: MstAlgorithm,
    start: Option<&str>,
    json: bool,
) -> GraphResult<()> {
    let graph = load_graph(path)?;
    let tree = match algorithm {
        MstAlgorithm::Kruskal => graph.kruskal_mst()?,
        MstAlgorithm::Prim => {
            let start = start.map(|s| require_node(&graph, s)).transpose()?;
            graph.prim_mst(start.as_ref())?
        }
    };

    match tree {
        Some(tree) if json => print_json(&json!({"connected": true, "tree": tree})),
        Some(tree) => {
            println!("Total weight: {}", tree.total_weight);
            print_edges("edges", &tree.edges, false);
        }
        None if json => print_json(&json!({"connected": false, "tree": Value::Null})),
        None => println!("Graph is disconnected; no spanning tree"),
    }
    Ok(())
}

/// Adjacency-matrix export.
pub fn cmd_matrix(path: &Path, json: bool) -> GraphResult<()> {
    let graph = load_graph(path)?;
    let matrix = graph.to_adjacency_matrix();

    if json {
        let rows: Vec<Vec<Value>> = matrix
            .weights
            .iter()
            .map(|row| row.iter().map(|&w| distance_value(w)).collect())
            .collect();
        print_json(&json!({"nodes": matrix.nodes, "weights": rows}));
    } else {
        println!("\t{}", matrix.nodes.join("\t"));
        for (node, row) in matrix.nodes.iter().zip(&matrix.weights) {
            let cells: Vec<String> = row
                .iter()
                .map(|w| if w.is_finite() { w.to_string() } else { "-".to_string() })
                .collect();
            println!("{}\t{}", node, cells.join("\t"));
        }
    }
    Ok(())
}
