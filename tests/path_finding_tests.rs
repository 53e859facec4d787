use lazy_sssp::algorithm::dijkstra::Dijkstra;
use lazy_sssp::algorithm::traits::ShortestPathAlgorithm;
use lazy_sssp::graph::generators::grid_graph;
use lazy_sssp::graph::{Graph, MutableGraph, WeightedGraph};
use lazy_sssp::{reconstruct_path, shortest_paths, Error};

// The weighted graph from the classic textbook example, all edges undirected
fn textbook_graph() -> WeightedGraph<&'static str, f64> {
    let edges = vec![
        ("A", "B", 4.0),
        ("A", "C", 2.0),
        ("C", "B", 1.0),
        ("B", "D", 5.0),
        ("C", "D", 8.0),
        ("C", "E", 10.0),
        ("D", "E", 2.0),
        ("D", "Z", 6.0),
        ("E", "Z", 3.0),
    ];
    WeightedGraph::from_edges(edges, true).unwrap()
}

#[test]
fn test_textbook_distances_from_a() {
    let graph = textbook_graph();
    let result = shortest_paths(&graph, &"A").unwrap();

    let expected = [("A", 0.0), ("B", 3.0), ("C", 2.0), ("D", 8.0), ("E", 10.0), ("Z", 13.0)];
    for (vertex, distance) in expected {
        assert_eq!(result.distance(&vertex), Some(distance), "distance to {}", vertex);
    }
}

#[test]
fn test_textbook_paths_from_a() {
    let graph = textbook_graph();
    let result = shortest_paths(&graph, &"A").unwrap();

    assert_eq!(result.path_to(&"B"), Some(vec!["A", "C", "B"]));
    assert_eq!(result.path_to(&"D"), Some(vec!["A", "C", "B", "D"]));
    assert_eq!(result.path_to(&"Z"), Some(vec!["A", "C", "B", "D", "E", "Z"]));
    assert_eq!(result.path_to(&"A"), Some(vec!["A"]));
}

#[test]
fn test_isolated_source() {
    let mut graph: WeightedGraph<&str, f64> = WeightedGraph::new();
    graph.add_vertex("solo");

    let result = shortest_paths(&graph, &"solo").unwrap();

    assert_eq!(result.distances.len(), 1);
    assert_eq!(result.distance(&"solo"), Some(0.0));
    assert_eq!(result.predecessor(&"solo"), None);
    assert_eq!(result.path_to(&"solo"), Some(vec!["solo"]));
}

#[test]
fn test_disconnected_components() {
    let mut graph: WeightedGraph<&str, f64> = WeightedGraph::new();
    graph.add_undirected_edge("a1", "a2", 1.0).unwrap();
    graph.add_undirected_edge("a2", "a3", 1.0).unwrap();
    graph.add_undirected_edge("b1", "b2", 1.0).unwrap();
    graph.add_vertex("lonely");

    let result = shortest_paths(&graph, &"a1").unwrap();

    // Every vertex appears in both tables
    assert_eq!(result.distances.len(), 6);
    assert_eq!(result.predecessors.len(), 6);

    for vertex in ["b1", "b2", "lonely"] {
        assert_eq!(result.distances[&vertex], f64::INFINITY);
        assert_eq!(result.predecessors[&vertex], None);
        assert!(!result.is_reachable(&vertex));
        assert_eq!(reconstruct_path(&result.predecessors, &vertex), vec![vertex]);
        assert_eq!(result.path_to(&vertex), None);
    }
    assert_eq!(result.distance(&"a3"), Some(2.0));
}

#[test]
fn test_negative_weight_rejected_at_insertion() {
    let mut graph: WeightedGraph<&str, f64> = WeightedGraph::new();
    graph.add_directed_edge("a", "b", 1.0).unwrap();

    let err = graph.add_directed_edge("b", "c", -2.0).unwrap_err();

    assert_eq!(err, Error::InvalidWeight(-2.0));
    assert!(!graph.has_vertex(&"c"));
    assert!(graph.neighbors(&"b").is_empty());
}

#[test]
fn test_unknown_source() {
    let graph = textbook_graph();
    assert!(matches!(
        shortest_paths(&graph, &"Q"),
        Err(Error::InvalidVertex(_))
    ));
}

#[test]
fn test_directed_edges_are_one_way() {
    let mut graph: WeightedGraph<u32, f64> = WeightedGraph::new();
    graph.add_directed_edge(1, 2, 1.0).unwrap();
    graph.add_directed_edge(2, 3, 1.0).unwrap();

    let from_one = shortest_paths(&graph, &1).unwrap();
    let from_three = shortest_paths(&graph, &3).unwrap();

    assert_eq!(from_one.distance(&3), Some(2.0));
    assert_eq!(from_three.distance(&1), None);
    assert_eq!(from_three.reachable_count(), 1);
}

#[test]
fn test_path_finding_simple_grid() {
    let graph = grid_graph(10, 10);
    let source = 0;
    let target = 99;

    let dijkstra = Dijkstra::new();
    let result = dijkstra.compute_shortest_paths(&graph, &source).unwrap();

    // Manhattan distance on a unit grid
    assert_eq!(result.distance(&target), Some(18.0));

    let path = <Dijkstra as ShortestPathAlgorithm<usize, f64, WeightedGraph<usize, f64>>>::get_path(
        &dijkstra, &result, &target,
    )
    .expect("grid corner should be reachable");
    assert_eq!(path[0], source, "Path should start at source");
    assert_eq!(path[path.len() - 1], target, "Path should end at target");
    assert_eq!(path.len(), 19);

    for pair in path.windows(2) {
        assert!(graph.has_edge(&pair[0], &pair[1]), "Path should only use existing edges");
    }
}

#[test]
fn test_zero_weight_edges() {
    let mut graph: WeightedGraph<char, f64> = WeightedGraph::new();
    graph.add_directed_edge('s', 'a', 0.0).unwrap();
    graph.add_directed_edge('a', 'b', 0.0).unwrap();
    graph.add_directed_edge('b', 'a', 0.0).unwrap();
    graph.add_directed_edge('s', 'b', 0.0).unwrap();

    let result = shortest_paths(&graph, &'s').unwrap();

    assert_eq!(result.distance(&'a'), Some(0.0));
    assert_eq!(result.distance(&'b'), Some(0.0));
    // Equal-cost alternatives never replace the first predecessor
    assert_eq!(result.predecessor(&'a'), Some(&'s'));
    assert_eq!(result.predecessor(&'b'), Some(&'s'));
}

#[test]
fn test_self_loop_is_harmless() {
    let mut graph: WeightedGraph<&str, f64> = WeightedGraph::new();
    graph.add_directed_edge("x", "x", 0.0).unwrap();
    graph.add_directed_edge("x", "y", 1.0).unwrap();

    let result = shortest_paths(&graph, &"x").unwrap();

    assert_eq!(result.predecessor(&"x"), None);
    assert_eq!(result.path_to(&"y"), Some(vec!["x", "y"]));
}
