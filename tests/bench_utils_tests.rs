use adjgraph::{
    EuclideanHeuristic, Heuristic, find_cycle, heuristic_search, shortest_path,
    bench_utils::{GraphShape, generate_graph},
};

#[test]
fn test_generation_is_deterministic_per_seed() {
    let first = generate_graph(GraphShape::RandomErdosRenyi { edges: 40 }, 20, 7);
    let second = generate_graph(GraphShape::RandomErdosRenyi { edges: 40 }, 20, 7);
    assert_eq!(first.edges, second.edges);
    assert!(first.edges.len() <= 40);
    assert!(first.edges.iter().all(|&(_, _, w)| (1.0..10.0).contains(&w)));
}

#[test]
fn test_line_is_acyclic_and_connected() {
    let dataset = generate_graph(GraphShape::Line, 50, 1);
    assert_eq!(dataset.edges.len(), 49);
    let graph = dataset.to_graph().unwrap();
    assert!(find_cycle(&graph).unwrap().is_empty());
    assert_eq!(shortest_path(&graph, &0).unwrap().distance.len(), 50);
}

#[test]
fn test_star_hub_is_center() {
    let dataset = generate_graph(GraphShape::Star, 10, 3);
    assert_eq!(dataset.hub_index(), 0);
    assert_eq!(dataset.degrees()[0], 9);
}

#[test]
fn test_scale_free_edges_are_unique() {
    let dataset = generate_graph(GraphShape::ScaleFree { m: 3 }, 60, 11);
    let graph = dataset.to_digraph().unwrap();
    assert_eq!(graph.edges().len(), dataset.edges.len());
}

#[test]
fn test_grid_positions_feed_euclidean_search() {
    let dataset = generate_graph(GraphShape::Grid2D { width: 4, height: 3 }, 12, 5);
    assert_eq!(dataset.edges.len(), 3 * 3 + 4 * 2);
    let graph = dataset.to_graph().unwrap();
    let mut heuristic = EuclideanHeuristic::new();
    heuristic.optimize(&graph).unwrap();
    assert_eq!(heuristic.estimate(&0, &11).unwrap(), 9.0 + 4.0);
    let found = heuristic_search(&graph, &0, &11, &heuristic).unwrap();
    assert_eq!(found.nodes.first(), Some(&0));
    assert_eq!(found.nodes.last(), Some(&11));
}
