//! Phase 6 tests: CLI commands over interchange files.

use std::io::Write;
use std::path::Path;

use graphkit::cli::commands::{self, MstAlgorithm};
use graphkit::graph::{Graph, GraphBuilder};
use graphkit::types::GraphError;
use tempfile::{NamedTempFile, TempDir};

// ==================== Helper ====================

fn s(value: &str) -> String {
    value.to_string()
}

fn write_graph(dir: &TempDir, name: &str, graph: &Graph<String>) -> std::path::PathBuf {
    let path = dir.path().join(name);
    commands::save_graph(graph, &path).unwrap();
    path
}

fn directed_fixture() -> Graph<String> {
    GraphBuilder::directed()
        .edge(s("A"), s("B"), 1.0)
        .edge(s("B"), s("C"), 2.0)
        .edge(s("A"), s("C"), 4.0)
        .edge(s("C"), s("D"), 1.0)
        .build()
}

fn undirected_fixture() -> Graph<String> {
    GraphBuilder::undirected()
        .edge(s("A"), s("B"), 1.0)
        .edge(s("B"), s("C"), 2.0)
        .edge(s("C"), s("A"), 3.0)
        .edge(s("C"), s("D"), 1.0)
        .build()
}

// ==================== Load / Save Tests ====================

#[test]
fn test_save_and_load_round_trip() {
    let dir = TempDir::new().unwrap();
    let graph = directed_fixture();
    let path = write_graph(&dir, "g.json", &graph);

    let loaded = commands::load_graph(&path).unwrap();
    assert!(loaded.is_directed());
    assert_eq!(loaded.node_count(), 4);
    assert_eq!(loaded.weight(&s("A"), &s("C")), Some(4.0));
}

#[test]
fn test_load_missing_file() {
    let result = commands::load_graph(Path::new("/definitely/not/here.json"));
    assert!(matches!(result, Err(GraphError::Io(_))));
}

#[test]
fn test_load_malformed_json() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"{ not json").unwrap();
    let result = commands::load_graph(file.path());
    assert!(matches!(result, Err(GraphError::Json(_))));
}

// ==================== Command Tests ====================

#[test]
fn test_directed_commands_succeed() {
    let dir = TempDir::new().unwrap();
    let path = write_graph(&dir, "directed.json", &directed_fixture());

    for json in [false, true] {
        commands::cmd_info(&path, json).unwrap();
        commands::cmd_neighbors(&path, "A", json).unwrap();
        commands::cmd_bfs(&path, "A", None, json).unwrap();
        commands::cmd_dfs(&path, "A", Some(2), false, json).unwrap();
        commands::cmd_dfs(&path, "A", None, true, json).unwrap();
        commands::cmd_path(&path, "A", "D", json).unwrap();
        commands::cmd_path(&path, "D", "A", json).unwrap();
        commands::cmd_bellman_ford(&path, "A", json).unwrap();
        commands::cmd_all_paths(&path, "A", "D", 5, json).unwrap();
        commands::cmd_topo(&path, json).unwrap();
        commands::cmd_cycle(&path, json).unwrap();
        commands::cmd_components(&path, json).unwrap();
        commands::cmd_bipartite(&path, json).unwrap();
        commands::cmd_matrix(&path, json).unwrap();
    }
}

#[test]
fn test_undirected_commands_succeed() {
    let dir = TempDir::new().unwrap();
    let path = write_graph(&dir, "undirected.json", &undirected_fixture());

    for json in [false, true] {
        commands::cmd_components(&path, json).unwrap();
        commands::cmd_articulation(&path, json).unwrap();
        commands::cmd_bridges(&path, json).unwrap();
        commands::cmd_mst(&path, MstAlgorithm::Kruskal, None, json).unwrap();
        commands::cmd_mst(&path, MstAlgorithm::Prim, Some("D"), json).unwrap();
        commands::cmd_cycle(&path, json).unwrap();
    }
}

#[test]
fn test_command_reports_missing_node() {
    let dir = TempDir::new().unwrap();
    let path = write_graph(&dir, "g.json", &directed_fixture());
    match commands::cmd_path(&path, "A", "Z", false) {
        Err(GraphError::NodeNotFound(name)) => assert_eq!(name, "Z"),
        other => panic!("Expected NodeNotFound, got {:?}", other),
    }
}

#[test]
fn test_command_reports_invalid_operation() {
    let dir = TempDir::new().unwrap();
    let directed = write_graph(&dir, "d.json", &directed_fixture());
    let undirected = write_graph(&dir, "u.json", &undirected_fixture());

    assert!(matches!(
        commands::cmd_topo(&undirected, false),
        Err(GraphError::InvalidOperation { .. })
    ));
    assert!(matches!(
        commands::cmd_bridges(&directed, false),
        Err(GraphError::InvalidOperation { .. })
    ));
    assert!(matches!(
        commands::cmd_mst(&directed, MstAlgorithm::Kruskal, None, false),
        Err(GraphError::InvalidOperation { .. })
    ));
}

#[test]
fn test_path_command_rejects_negative_weights() {
    let dir = TempDir::new().unwrap();
    let mut graph = directed_fixture();
    graph.add_edge(s("D"), s("A"), -5.0);
    let path = write_graph(&dir, "neg.json", &graph);

    assert!(matches!(
        commands::cmd_path(&path, "A", "D", false),
        Err(GraphError::NegativeWeight { .. })
    ));
    // Bellman-Ford reports the negative cycle as a normal outcome.
    commands::cmd_bellman_ford(&path, "A", true).unwrap();
}

#[test]
fn test_save_refuses_non_finite_weight() {
    let dir = TempDir::new().unwrap();
    let mut graph = directed_fixture();
    graph.set_weight(&s("A"), &s("B"), f64::NEG_INFINITY);
    let path = dir.path().join("inf.json");

    assert!(matches!(
        commands::save_graph(&graph, &path),
        Err(GraphError::NonFiniteWeight { .. })
    ));
    assert!(!path.exists());
}

#[test]
fn test_mst_algorithm_names() {
    assert_eq!(MstAlgorithm::from_name("Kruskal"), Some(MstAlgorithm::Kruskal));
    assert_eq!(MstAlgorithm::from_name("prim"), Some(MstAlgorithm::Prim));
    assert_eq!(MstAlgorithm::from_name("boruvka"), None);
}
