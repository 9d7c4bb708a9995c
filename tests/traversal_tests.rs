use adjgraph::{
    Digraph, Find, Graph, GraphError, Order, Radius, breadth_first_search,
    breadth_first_search_filtered, depth_first_search, depth_first_search_filtered,
    filtered_breadth_first_search, traversal,
};

// Two components: a square 1-2-4-3 and the pair 5-6.
fn two_components() -> Graph<u32> {
    let mut graph = Graph::new();
    graph.add_nodes(1..=6).expect("nodes");
    for &(u, v) in &[(1, 2), (1, 3), (2, 4), (3, 4), (5, 6)] {
        graph.add_default_edge(u, v).expect("edge");
    }
    graph
}

fn weighted() -> Graph<&'static str> {
    let mut graph = Graph::new();
    graph.add_nodes(["a", "b", "c", "d", "e"]).expect("nodes");
    for &(u, v, w) in &[
        ("a", "b", 1.0),
        ("a", "c", 4.0),
        ("b", "c", 2.0),
        ("c", "d", 1.0),
        ("b", "e", 7.0),
        ("d", "e", 1.0),
    ] {
        graph.add_edge(u, v, w, "").expect("edge");
    }
    graph
}

#[test]
fn test_depth_first_orders() {
    let graph = two_components();
    let search = depth_first_search(&graph, None).unwrap();
    assert_eq!(search.preorder, vec![1, 2, 4, 3, 5, 6]);
    assert_eq!(search.postorder, vec![3, 4, 2, 1, 6, 5]);
    assert_eq!(search.spanning_tree.get(&3), Some(&Some(4)));
    assert_eq!(search.spanning_tree.get(&6), Some(&Some(5)));
}

#[test]
fn test_depth_first_forest_has_one_root_per_component() {
    let graph = two_components();
    let search = depth_first_search(&graph, None).unwrap();
    assert_eq!(search.spanning_tree.len(), graph.len());
    let roots: Vec<u32> = search
        .spanning_tree
        .iter()
        .filter(|(_, parent)| parent.is_none())
        .map(|(node, _)| *node)
        .collect();
    assert_eq!(roots, vec![1, 5]);
}

#[test]
fn test_depth_first_from_root_covers_component_only() {
    let graph = two_components();
    let search = depth_first_search(&graph, Some(&4)).unwrap();
    assert_eq!(search.preorder.len(), 4);
    assert_eq!(search.preorder[0], 4);
    assert_eq!(search.postorder.last(), Some(&4));
    assert!(!search.spanning_tree.contains_key(&5));
    let roots = search
        .spanning_tree
        .values()
        .filter(|parent| parent.is_none())
        .count();
    assert_eq!(roots, 1);
}

#[test]
fn test_tree_parents_are_adjacent() {
    let graph = two_components();
    let search = depth_first_search(&graph, None).unwrap();
    for (child, parent) in &search.spanning_tree {
        if let Some(parent) = parent {
            assert!(graph.has_edge(parent, child));
        }
    }
}

#[test]
fn test_breadth_first_levels() {
    let graph = two_components();
    let search = breadth_first_search(&graph, None).unwrap();
    assert_eq!(search.ordering, vec![1, 2, 3, 4, 5, 6]);
    assert_eq!(search.spanning_tree.get(&3), Some(&Some(1)));
    assert_eq!(search.spanning_tree.get(&4), Some(&Some(2)));
    assert_eq!(search.spanning_tree.get(&5), Some(&None));
}

#[test]
fn test_breadth_first_on_digraph_follows_direction() {
    let mut graph = Digraph::new();
    graph.add_nodes(["x", "y", "z"]).unwrap();
    graph.add_default_edge("y", "x").unwrap();
    graph.add_default_edge("y", "z").unwrap();
    let search = breadth_first_search(&graph, Some(&"x")).unwrap();
    assert_eq!(search.ordering, vec!["x"]);
    let search = breadth_first_search(&graph, Some(&"y")).unwrap();
    assert_eq!(search.ordering, vec!["y", "x", "z"]);
}

#[test]
fn test_unknown_root_fails() {
    let graph = two_components();
    assert!(matches!(
        depth_first_search(&graph, Some(&99)),
        Err(GraphError::UnknownNode(_))
    ));
    assert!(matches!(
        breadth_first_search(&graph, Some(&99)),
        Err(GraphError::UnknownNode(_))
    ));
    assert!(matches!(
        traversal(&graph, &99, Order::Pre),
        Err(GraphError::UnknownNode(_))
    ));
}

#[test]
fn test_empty_graph_searches_are_empty() {
    let graph: Graph<u32> = Graph::new();
    let search = depth_first_search(&graph, None).unwrap();
    assert!(search.preorder.is_empty());
    assert!(search.spanning_tree.is_empty());
    assert!(breadth_first_search(&graph, None).unwrap().ordering.is_empty());
}

#[test]
fn test_lazy_traversal_matches_depth_first_orders() {
    let graph = two_components();
    let pre: Vec<u32> = traversal(&graph, &1, Order::Pre).unwrap().collect();
    let post: Vec<u32> = traversal(&graph, &1, Order::Post).unwrap().collect();
    assert_eq!(pre, vec![1, 2, 4, 3]);
    assert_eq!(post, vec![3, 4, 2, 1]);
    let first_two: Vec<u32> = traversal(&graph, &5, Order::Pre).unwrap().take(2).collect();
    assert_eq!(first_two, vec![5, 6]);
}

#[test]
fn test_filtered_search_yields_cheapest_costs_in_order() {
    let graph = weighted();
    let visits: Vec<(f64, &str)> = filtered_breadth_first_search(&graph, &"a", |_, _| true)
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(
        visits,
        vec![(0.0, "a"), (1.0, "b"), (3.0, "c"), (4.0, "d"), (5.0, "e")]
    );
    assert!(visits.windows(2).all(|pair| pair[0].0 <= pair[1].0));
}

#[test]
fn test_filtered_search_skips_rejected_nodes() {
    let graph = weighted();
    let visits: Vec<(f64, &str)> =
        filtered_breadth_first_search(&graph, &"a", |_, node| *node != "c")
            .unwrap()
            .collect::<Result<_, _>>()
            .unwrap();
    assert_eq!(visits, vec![(0.0, "a"), (1.0, "b"), (8.0, "e"), (9.0, "d")]);
}

#[test]
fn test_filtered_search_with_rejected_root_is_empty() {
    let graph = weighted();
    let mut visits = filtered_breadth_first_search(&graph, &"a", |_, node| *node != "a").unwrap();
    assert!(visits.next().is_none());
}

#[test]
fn test_filtered_search_reports_negative_weight() {
    let mut graph = weighted();
    graph.set_edge_weight(&"a", &"b", -1.0).unwrap();
    let mut visits = filtered_breadth_first_search(&graph, &"a", |_, _| true).unwrap();
    assert!(matches!(
        visits.next(),
        Some(Err(GraphError::InvalidWeight(_)))
    ));
    assert!(visits.next().is_none());
}

fn pentagon() -> Graph<u32> {
    let mut graph = Graph::new();
    graph.add_nodes(1..=5).expect("nodes");
    for &(u, v) in &[(1, 2), (2, 3), (2, 4), (4, 5), (1, 5), (3, 5)] {
        graph.add_default_edge(u, v).expect("edge");
    }
    graph
}

#[test]
fn test_breadth_first_find_stops_growing_after_target() {
    let graph = pentagon();
    let mut find = Find::new(5);
    let search = breadth_first_search_filtered(&graph, Some(&1), &mut find).unwrap();
    assert!(find.found());
    let tree: Vec<(u32, Option<u32>)> = search.spanning_tree.into_iter().collect();
    assert_eq!(tree, vec![(1, None), (2, Some(1)), (5, Some(1))]);
    assert_eq!(search.ordering, vec![1, 2, 5]);
}

#[test]
fn test_breadth_first_find_on_digraph() {
    let mut graph = Digraph::new();
    graph.add_nodes(1..=6).expect("nodes");
    for &(u, v) in &[(1, 2), (1, 3), (2, 4), (4, 3), (5, 1), (3, 5), (5, 6)] {
        graph.add_default_edge(u, v).expect("edge");
    }
    let search = breadth_first_search_filtered(&graph, Some(&1), Find::new(5)).unwrap();
    let tree: Vec<(u32, Option<u32>)> = search.spanning_tree.into_iter().collect();
    assert_eq!(
        tree,
        vec![(1, None), (2, Some(1)), (3, Some(1)), (4, Some(2)), (5, Some(3))]
    );
}

#[test]
fn test_depth_first_find_keeps_path_to_target() {
    let graph = pentagon();
    let search = depth_first_search_filtered(&graph, Some(&1), Find::new(5)).unwrap();
    assert_eq!(search.preorder, vec![1, 2, 3, 5]);
    assert_eq!(search.postorder, vec![5, 3, 2, 1]);
    assert_eq!(search.spanning_tree.get(&5), Some(&Some(3)));
    assert!(!search.spanning_tree.contains_key(&4));
}

#[test]
fn test_find_missing_target_covers_everything() {
    let graph = two_components();
    let mut find = Find::new(42);
    let search = breadth_first_search_filtered(&graph, None, &mut find).unwrap();
    assert!(!find.found());
    assert_eq!(search.ordering, breadth_first_search(&graph, None).unwrap().ordering);
}

#[test]
fn test_radius_bounds_weighted_tree_depth() {
    let graph = weighted();
    let wide = breadth_first_search_filtered(&graph, Some(&"a"), Radius::new(4.0)).unwrap();
    assert_eq!(wide.ordering, vec!["a", "b", "c"]);
    let deep = depth_first_search_filtered(&graph, Some(&"a"), Radius::new(4.0)).unwrap();
    assert_eq!(deep.preorder, vec!["a", "b", "c", "d"]);
    assert_eq!(deep.spanning_tree.get(&"d"), Some(&Some("c")));
    assert!(!deep.spanning_tree.contains_key(&"e"));
}

#[test]
fn test_rejected_nodes_can_start_their_own_trees() {
    let graph = two_components();
    let search = breadth_first_search_filtered(&graph, None, Radius::new(0.0)).unwrap();
    assert_eq!(search.ordering, vec![1, 2, 3, 4, 5, 6]);
    assert!(search.spanning_tree.values().all(Option::is_none));
}
