//! Phase 5 tests: spanning trees + serialization adapters.

use std::collections::BTreeSet;

use graphkit::format::{AdjacencyMatrix, EdgeRecord, GraphRecord};
use graphkit::graph::{Graph, GraphBuilder};
use graphkit::types::{GraphError, NO_EDGE};

// ==================== Helper ====================

/// A-B 1, B-C 2, A-C 3, C-D 4, B-D 5 (MST weight 7).
fn weighted_square() -> Graph<&'static str> {
    GraphBuilder::undirected()
        .edge("A", "B", 1.0)
        .edge("B", "C", 2.0)
        .edge("A", "C", 3.0)
        .edge("C", "D", 4.0)
        .edge("B", "D", 5.0)
        .build()
}

/// Edge set with weights, ignoring undirected orientation.
fn edge_set<T: Ord + Clone>(graph: &Graph<T>) -> BTreeSet<(T, T, u64)>
where
    T: std::hash::Hash,
{
    graph
        .edges()
        .into_iter()
        .map(|e| {
            let (a, b) = if graph.is_directed() || e.from <= e.to {
                (e.from, e.to)
            } else {
                (e.to, e.from)
            };
            (a, b, e.weight.to_bits())
        })
        .collect()
}

// ==================== Kruskal / Prim Tests ====================

#[test]
fn test_kruskal_mst() {
    let tree = weighted_square().kruskal_mst().unwrap().unwrap();
    assert_eq!(tree.edges.len(), 3);
    assert_eq!(tree.total_weight, 7.0);
    let weights: Vec<f64> = tree.edges.iter().map(|e| e.weight).collect();
    assert_eq!(weights, vec![1.0, 2.0, 4.0]);
}

#[test]
fn test_prim_mst() {
    let g = weighted_square();
    let tree = g.prim_mst(None).unwrap().unwrap();
    assert_eq!(tree.edges.len(), 3);
    assert_eq!(tree.total_weight, 7.0);

    let from_d = g.prim_mst(Some(&"D")).unwrap().unwrap();
    assert_eq!(from_d.total_weight, 7.0);
    assert_eq!(from_d.edges[0].from, "D");
}

#[test]
fn test_kruskal_and_prim_agree_under_ties() {
    let g = GraphBuilder::undirected()
        .edge(1, 2, 1.0)
        .edge(2, 3, 1.0)
        .edge(3, 4, 1.0)
        .edge(4, 1, 1.0)
        .edge(1, 3, 2.0)
        .build();
    let kruskal = g.kruskal_mst().unwrap().unwrap();
    let prim = g.prim_mst(Some(&3)).unwrap().unwrap();
    assert_eq!(kruskal.total_weight, prim.total_weight);
    assert_eq!(kruskal.total_weight, 3.0);
}

#[test]
fn test_mst_disconnected_returns_none() {
    let mut g = weighted_square();
    g.add_node("island");
    assert!(g.kruskal_mst().unwrap().is_none());
    assert!(g.prim_mst(None).unwrap().is_none());
}

#[test]
fn test_mst_trivial_graphs() {
    let empty: Graph<u8> = Graph::undirected();
    assert_eq!(empty.kruskal_mst().unwrap().unwrap().total_weight, 0.0);
    assert!(empty.prim_mst(None).unwrap().unwrap().edges.is_empty());

    let mut single = Graph::undirected();
    single.add_edge(1, 1, 5.0);
    assert!(single.kruskal_mst().unwrap().unwrap().edges.is_empty());
    assert!(single.prim_mst(None).unwrap().unwrap().edges.is_empty());
}

#[test]
fn test_prim_missing_start() {
    assert!(weighted_square().prim_mst(Some(&"Z")).unwrap().is_none());
}

#[test]
fn test_mst_requires_undirected() {
    let g = GraphBuilder::directed().edge(1, 2, 1.0).build();
    assert!(matches!(
        g.kruskal_mst(),
        Err(GraphError::InvalidOperation { .. })
    ));
    assert!(matches!(
        g.prim_mst(None),
        Err(GraphError::InvalidOperation { .. })
    ));
}

// ==================== Record / JSON Tests ====================

#[test]
fn test_record_round_trip() {
    let mut g = GraphBuilder::directed()
        .edge("a".to_string(), "b".to_string(), 2.5)
        .edge("b".to_string(), "c".to_string(), -1.0)
        .unit_edge("c".to_string(), "a".to_string())
        .build();
    g.add_node("lonely".to_string());

    let json = g.to_json_string().unwrap();
    let back: Graph<String> = Graph::from_json_str(&json).unwrap();

    assert!(back.is_directed());
    let nodes: Vec<&String> = back.nodes().collect();
    let original: Vec<&String> = g.nodes().collect();
    assert_eq!(nodes, original);
    assert_eq!(edge_set(&back), edge_set(&g));
}

#[test]
fn test_record_shape() {
    let g = GraphBuilder::undirected()
        .edge(1, 2, 3.0)
        .unit_edge(2, 3)
        .build();
    let record = g.to_record();
    assert!(!record.directed);
    assert_eq!(record.nodes, vec![1, 2, 3]);
    assert_eq!(
        record.edges,
        vec![
            EdgeRecord {
                from: 1,
                to: 2,
                weight: Some(3.0)
            },
            EdgeRecord {
                from: 2,
                to: 3,
                weight: Some(1.0)
            },
        ]
    );

    let value: serde_json::Value = serde_json::from_str(&g.to_json_string().unwrap()).unwrap();
    assert_eq!(value["directed"], serde_json::json!(false));
    assert_eq!(value["edges"].as_array().map(|a| a.len()), Some(2));
}

#[test]
fn test_from_record_defaults_and_auto_creates() {
    let record = GraphRecord {
        directed: false,
        nodes: vec!["x"],
        edges: vec![EdgeRecord {
            from: "x",
            to: "y",
            weight: None,
        }],
    };
    let g = Graph::from_record(record);
    assert_eq!(g.node_count(), 2);
    assert_eq!(g.weight(&"y", &"x"), Some(1.0));
}

#[test]
fn test_from_json_rejects_malformed_input() {
    let result: Result<Graph<String>, _> = Graph::from_json_str(r#"{"directed": true}"#);
    assert!(matches!(result, Err(GraphError::Json(_))));
}

#[test]
fn test_to_json_rejects_non_finite_weights() {
    let mut g = Graph::directed();
    g.add_edge(1, 2, 3.0);
    g.add_edge(2, 3, f64::INFINITY);

    match g.to_json_string() {
        Err(GraphError::NonFiniteWeight { edge, weight }) => {
            assert_eq!(edge, 1);
            assert_eq!(weight, f64::INFINITY);
        }
        other => panic!("Expected NonFiniteWeight error, got {:?}", other),
    }
    assert!(matches!(
        g.to_json_string_pretty(),
        Err(GraphError::NonFiniteWeight { edge: 1, .. })
    ));

    g.set_weight(&2, &3, f64::NAN);
    assert!(matches!(
        g.to_json_string(),
        Err(GraphError::NonFiniteWeight { edge: 1, .. })
    ));

    // The record itself keeps the weight for non-JSON serializers.
    assert!(g.to_record().edges[1].weight.is_some_and(f64::is_nan));
}

#[test]
fn test_json_round_trip_keeps_extreme_finite_weights() {
    let g = GraphBuilder::undirected()
        .edge("a", "b", f64::MAX)
        .edge("b", "c", -0.5)
        .edge("c", "a", f64::MIN_POSITIVE)
        .build();
    let back: Graph<String> = Graph::from_json_str(&g.to_json_string().unwrap()).unwrap();
    let a = "a".to_string();
    let b = "b".to_string();
    let c = "c".to_string();
    assert_eq!(back.weight(&a, &b), Some(f64::MAX));
    assert_eq!(back.weight(&c, &b), Some(-0.5));
    assert_eq!(back.weight(&a, &c), Some(f64::MIN_POSITIVE));
}

#[test]
fn test_pretty_json_parses_back() {
    let g = weighted_square();
    let pretty = g.to_json_string_pretty().unwrap();
    assert!(pretty.contains('\n'));
    let back: Graph<String> = Graph::from_json_str(&pretty).unwrap();
    assert_eq!(back.edge_count(), g.edge_count());
}

// ==================== Adjacency Matrix Tests ====================

#[test]
fn test_to_adjacency_matrix() {
    let g = GraphBuilder::directed()
        .edge("a", "b", 2.0)
        .edge("b", "c", 3.0)
        .edge("c", "c", 9.0)
        .build();
    let m = g.to_adjacency_matrix();
    assert_eq!(m.nodes, vec!["a", "b", "c"]);
    assert_eq!(m.len(), 3);
    assert_eq!(m.get(0, 1), Some(2.0));
    assert_eq!(m.get(1, 2), Some(3.0));
    assert_eq!(m.get(1, 0), Some(NO_EDGE));
    assert_eq!(m.get(2, 2), Some(0.0));
    assert_eq!(m.get(0, 0), Some(0.0));
    assert_eq!(m.get(3, 0), None);
}

#[test]
fn test_adjacency_matrix_round_trip() {
    let g = weighted_square();
    let back = Graph::from_adjacency_matrix(g.to_adjacency_matrix(), false).unwrap();
    assert_eq!(edge_set(&back), edge_set(&g));

    let directed = GraphBuilder::directed()
        .edge(1, 2, 0.5)
        .edge(2, 1, 4.0)
        .node(3)
        .build();
    let back = Graph::from_adjacency_matrix(directed.to_adjacency_matrix(), true).unwrap();
    assert_eq!(edge_set(&back), edge_set(&directed));
    assert!(back.has_node(&3));
}

#[test]
fn test_from_adjacency_matrix_upper_triangle_for_undirected() {
    let matrix = AdjacencyMatrix {
        nodes: vec!['a', 'b'],
        weights: vec![vec![0.0, 2.0], vec![7.0, 0.0]],
    };
    let g = Graph::from_adjacency_matrix(matrix, false).unwrap();
    assert_eq!(g.weight(&'b', &'a'), Some(2.0));
    assert_eq!(g.edge_count(), 1);
}

#[test]
fn test_from_adjacency_matrix_validates_shape() {
    let not_square = AdjacencyMatrix {
        nodes: vec![1, 2],
        weights: vec![vec![0.0, 1.0], vec![1.0]],
    };
    assert!(matches!(
        Graph::from_adjacency_matrix(not_square, true),
        Err(GraphError::InvalidMatrix(_))
    ));

    let wrong_rows = AdjacencyMatrix {
        nodes: vec![1, 2, 3],
        weights: vec![vec![0.0, 1.0, 1.0]],
    };
    assert!(matches!(
        Graph::from_adjacency_matrix(wrong_rows, true),
        Err(GraphError::InvalidMatrix(_))
    ));

    let duplicate = AdjacencyMatrix {
        nodes: vec![1, 1],
        weights: vec![vec![0.0, 1.0], vec![1.0, 0.0]],
    };
    assert!(matches!(
        Graph::from_adjacency_matrix(duplicate, true),
        Err(GraphError::InvalidMatrix(_))
    ));
}
