use adjgraph::{Graph, GraphConfig, GraphError, breadth_first_search};
use serde_json::json;

fn prepared_graph() -> Graph<&'static str> {
    let mut graph = Graph::new();
    graph.add_nodes(["a", "b", "c", "d"]).expect("nodes");
    graph.add_edge("a", "b", 2.0, "ab").expect("edge");
    graph.add_edge("b", "c", 3.0, "bc").expect("edge");
    graph.add_edge("c", "a", 4.0, "ca").expect("edge");
    graph
}

#[test]
fn test_add_edge_is_symmetric() {
    let graph = prepared_graph();
    assert_eq!(graph.neighbors(&"a").unwrap(), &["b", "c"]);
    assert_eq!(graph.neighbors(&"b").unwrap(), &["a", "c"]);
    assert!(graph.has_edge(&"a", &"b"));
    assert!(graph.has_edge(&"b", &"a"));
    assert_eq!(graph.edge_weight(&"b", &"a").unwrap(), 2.0);
    assert_eq!(graph.edge_label(&"c", &"a").unwrap(), "ca");
}

#[test]
fn test_weight_and_label_updates_apply_to_both_orientations() {
    let mut graph = prepared_graph();
    graph.set_edge_weight(&"b", &"a", 9.5).unwrap();
    graph.set_edge_label(&"a", &"b", "renamed").unwrap();
    assert_eq!(graph.edge_weight(&"a", &"b").unwrap(), 9.5);
    assert_eq!(graph.edge_weight(&"b", &"a").unwrap(), 9.5);
    assert_eq!(graph.edge_label(&"b", &"a").unwrap(), "renamed");
    assert_eq!(
        graph.edge_property(&"a", &"b").unwrap(),
        graph.edge_property(&"b", &"a").unwrap()
    );
}

#[test]
fn test_duplicate_node_leaves_store_unchanged() {
    let mut graph = prepared_graph();
    let nodes = graph.nodes();
    let edges = graph.edges();
    let err = graph.add_node("a").expect_err("duplicate");
    assert!(matches!(err, GraphError::DuplicateNode(_)));
    assert_eq!(graph.nodes(), nodes);
    assert_eq!(graph.edges(), edges);
}

#[test]
fn test_add_nodes_is_all_or_nothing() {
    let mut graph = prepared_graph();
    let err = graph.add_nodes(["x", "y", "a"]).expect_err("duplicate");
    assert!(matches!(err, GraphError::DuplicateNode(_)));
    assert!(!graph.has_node(&"x"));
    let err = graph.add_nodes(["x", "x"]).expect_err("repeated");
    assert!(matches!(err, GraphError::DuplicateNode(_)));
    assert_eq!(graph.len(), 4);
}

#[test]
fn test_add_nodes_handles_large_batches() {
    let mut graph = Graph::new();
    graph.add_nodes(0..100_000u32).expect("bulk insert");
    assert_eq!(graph.len(), 100_000);
    assert_eq!(graph.nodes()[99_999], 99_999);
    let err = graph
        .add_nodes((100_000..200_000u32).chain([150_000]))
        .expect_err("repeat at the tail");
    assert!(matches!(err, GraphError::DuplicateNode(_)));
    assert_eq!(graph.len(), 100_000);
}

#[test]
fn test_duplicate_edge_rejected_in_either_orientation() {
    let mut graph = prepared_graph();
    let err = graph.add_edge("b", "a", 1.0, "").expect_err("duplicate");
    assert!(matches!(err, GraphError::DuplicateEdge(_)));
    assert_eq!(graph.edge_weight(&"a", &"b").unwrap(), 2.0);
    assert_eq!(graph.neighbors(&"a").unwrap().len(), 2);
}

#[test]
fn test_add_edge_requires_existing_endpoints() {
    let mut graph = prepared_graph();
    let err = graph.add_edge("a", "zz", 1.0, "").expect_err("unknown");
    assert!(matches!(err, GraphError::UnknownNode(_)));
    assert_eq!(graph.neighbors(&"a").unwrap(), &["b", "c"]);
}

#[test]
fn test_del_node_leaves_no_dangling_edges() {
    let mut graph = prepared_graph();
    graph.del_node(&"a").expect("delete");
    assert!(!graph.has_node(&"a"));
    for node in graph.nodes() {
        assert!(!graph.neighbors(&node).unwrap().contains(&"a"));
        assert!(!graph.has_edge(&"a", &node));
        assert!(!graph.has_edge(&node, &"a"));
    }
    assert_eq!(graph.edges(), vec![("b", "c"), ("c", "b")]);
    assert!(matches!(
        graph.node_attributes(&"a"),
        Err(GraphError::UnknownNode(_))
    ));
}

#[test]
fn test_del_node_unknown_fails() {
    let mut graph = prepared_graph();
    let err = graph.del_node(&"q").expect_err("unknown");
    assert!(matches!(err, GraphError::UnknownNode(_)));
}

#[test]
fn test_del_edge_removes_both_orientations() {
    let mut graph = prepared_graph();
    graph.del_edge(&"b", &"a").expect("delete");
    assert!(!graph.has_edge(&"a", &"b"));
    assert!(!graph.has_edge(&"b", &"a"));
    assert_eq!(graph.neighbors(&"a").unwrap(), &["c"]);
    assert_eq!(graph.neighbors(&"b").unwrap(), &["c"]);
    let err = graph.del_edge(&"a", &"b").expect_err("gone");
    assert!(matches!(err, GraphError::UnknownEdge(_)));
}

#[test]
fn test_self_loop_listed_once() {
    let mut graph = prepared_graph();
    graph.add_edge("d", "d", 1.0, "loop").expect("loop");
    assert_eq!(graph.neighbors(&"d").unwrap(), &["d"]);
    assert_eq!(graph.node_order(&"d").unwrap(), 1);
    let err = graph.add_edge("d", "d", 1.0, "").expect_err("duplicate");
    assert!(matches!(err, GraphError::DuplicateEdge(_)));
    graph.del_node(&"d").expect("delete");
    assert!(!graph.has_edge(&"d", &"d"));
}

#[test]
fn test_neighbors_of_unknown_node_fails() {
    let graph = prepared_graph();
    assert!(matches!(
        graph.neighbors(&"nope"),
        Err(GraphError::UnknownNode(_))
    ));
    assert!(matches!(
        graph.edge_weight(&"a", &"d"),
        Err(GraphError::UnknownEdge(_))
    ));
}

#[test]
fn test_complete_connects_every_pair_without_loops() {
    let mut graph = prepared_graph();
    graph.complete();
    for u in graph.nodes() {
        for v in graph.nodes() {
            assert_eq!(graph.has_edge(&u, &v), u != v, "pair ({u}, {v})");
        }
    }
    assert_eq!(graph.edge_weight(&"a", &"b").unwrap(), 2.0);
    assert_eq!(graph.edge_weight(&"a", &"d").unwrap(), 1.0);
}

#[test]
fn test_inverse_is_complement() {
    let graph = prepared_graph();
    let inverse = graph.inverse();
    assert_eq!(inverse.nodes(), graph.nodes());
    for u in graph.nodes() {
        for v in graph.nodes() {
            if u != v {
                assert_ne!(graph.has_edge(&u, &v), inverse.has_edge(&u, &v));
            }
        }
    }
    assert_eq!(inverse.neighbors(&"d").unwrap(), &["a", "b", "c"]);
}

#[test]
fn test_default_edge_uses_configured_weight() {
    let mut graph = Graph::with_config(GraphConfig::default().with_default_weight(3.5));
    graph.add_nodes([1, 2]).unwrap();
    graph.add_default_edge(1, 2).unwrap();
    assert_eq!(graph.edge_weight(&2, &1).unwrap(), 3.5);
    assert_eq!(graph.edge_label(&1, &2).unwrap(), "");
}

#[test]
fn test_node_and_edge_attributes() {
    let mut graph = prepared_graph();
    graph
        .add_node_attribute(&"a", "position", json!([0, 1]))
        .unwrap();
    graph
        .add_edge_attribute(&"a", &"b", "color", json!("red"))
        .unwrap();
    assert_eq!(
        graph.node_attributes(&"a").unwrap(),
        &[("position".to_string(), json!([0, 1]))]
    );
    assert_eq!(
        graph.edge_attributes(&"b", &"a").unwrap(),
        &[("color".to_string(), json!("red"))]
    );
    assert!(matches!(
        graph.add_edge_attribute(&"a", &"d", "color", json!("blue")),
        Err(GraphError::UnknownEdge(_))
    ));
}

#[test]
fn test_add_graph_merges_missing_nodes_and_edges() {
    let mut graph = prepared_graph();
    let mut other = Graph::new();
    other.add_nodes(["a", "e"]).unwrap();
    other.add_edge("a", "e", 7.0, "ae").unwrap();
    graph.add_graph(&other);
    assert!(graph.has_node(&"e"));
    assert_eq!(graph.edge_weight(&"e", &"a").unwrap(), 7.0);
    assert_eq!(graph.len(), 5);
}

#[test]
fn test_add_spanning_tree_rebuilds_tree_edges() {
    let graph = prepared_graph();
    let search = breadth_first_search(&graph, Some(&"a")).unwrap();
    let mut rebuilt = Graph::new();
    rebuilt.add_spanning_tree(&search.spanning_tree);
    assert_eq!(rebuilt.nodes(), vec!["a", "b", "c"]);
    assert!(rebuilt.has_edge(&"a", &"b"));
    assert!(rebuilt.has_edge(&"a", &"c"));
    assert!(!rebuilt.has_edge(&"b", &"c"));
}

#[test]
fn test_edge_property_serializes() {
    let graph = prepared_graph();
    let property = graph.edge_property(&"a", &"b").unwrap();
    let encoded = serde_json::to_value(property).unwrap();
    assert_eq!(encoded, json!({"weight": 2.0, "label": "ab"}));
}
