use wrasse::{Error, Graph, Mode, bellman_ford, dijkstra};

fn weighted_triangle() -> Graph {
    // A -> B (1), A -> C (4), B -> C (1)
    let mut g = Graph::new();
    for id in ["A", "B", "C"] {
        g.add_node(id, None).unwrap();
    }
    g.add_edge("A", "B", Some(1.0), None).unwrap();
    g.add_edge("A", "C", Some(4.0), None).unwrap();
    g.add_edge("B", "C", Some(1.0), None).unwrap();
    g
}

#[test]
fn dijkstra_relaxes_through_cheaper_path() {
    let dist = dijkstra(&weighted_triangle(), Mode::Directed, "A").unwrap();
    assert_eq!(dist["A"], 0.0);
    assert_eq!(dist["B"], 1.0);
    assert_eq!(dist["C"], 2.0);
}

#[test]
fn dijkstra_marks_unreachable_as_infinite() {
    let mut g = weighted_triangle();
    g.add_node("D", None).unwrap();
    let dist = dijkstra(&g, Mode::Directed, "A").unwrap();
    assert_eq!(dist["D"], f64::INFINITY);

    // Directed: nothing reaches back into A from C.
    let dist = dijkstra(&g, Mode::Directed, "C").unwrap();
    assert_eq!(dist["A"], f64::INFINITY);
    assert_eq!(dist["C"], 0.0);
}

#[test]
fn dijkstra_undirected_traverses_edges_both_ways() {
    let dist = dijkstra(&weighted_triangle(), Mode::Undirected, "C").unwrap();
    assert_eq!(dist["C"], 0.0);
    assert_eq!(dist["B"], 1.0);
    assert_eq!(dist["A"], 2.0);
}

#[test]
fn dijkstra_rejects_negative_weights_before_running() {
    let mut g = weighted_triangle();
    g.add_edge("C", "A", Some(-1.0), None).unwrap();
    let err = dijkstra(&g, Mode::Directed, "A").unwrap_err();
    assert_eq!(err, Error::NegativeWeightUnsupported);
}

#[test]
fn dijkstra_rejects_non_finite_weights() {
    let mut g = weighted_triangle();
    let id = g.add_edge("C", "A", None, None).unwrap();
    g.set_edge_weight(&id, f64::NAN).unwrap();
    assert!(matches!(
        dijkstra(&g, Mode::Directed, "A").unwrap_err(),
        Error::InvalidWeight { .. }
    ));

    g.set_edge_weight(&id, f64::INFINITY).unwrap();
    assert!(matches!(
        dijkstra(&g, Mode::Directed, "A").unwrap_err(),
        Error::InvalidWeight { .. }
    ));
}

#[test]
fn dijkstra_rejects_unknown_start() {
    let err = dijkstra(&weighted_triangle(), Mode::Directed, "Z").unwrap_err();
    assert_eq!(err, Error::InvalidStartNode { id: "Z".into() });
}

#[test]
fn bellman_ford_matches_dijkstra_on_non_negative_graphs() {
    let g = weighted_triangle();
    for mode in [Mode::Directed, Mode::Undirected] {
        let d1 = dijkstra(&g, mode, "A").unwrap();
        let d2 = bellman_ford(&g, mode, "A").unwrap();
        assert_eq!(d1, d2);
    }
}

#[test]
fn bellman_ford_handles_negative_edges() {
    // A -> B (4), A -> C (1), C -> B (-2): best path to B is 1 + (-2) = -1.
    let mut g = Graph::new();
    for id in ["A", "B", "C"] {
        g.add_node(id, None).unwrap();
    }
    g.add_edge("A", "B", Some(4.0), None).unwrap();
    g.add_edge("A", "C", Some(1.0), None).unwrap();
    g.add_edge("C", "B", Some(-2.0), None).unwrap();

    let dist = bellman_ford(&g, Mode::Directed, "A").unwrap();
    assert_eq!(dist["B"], -1.0);
    assert_eq!(dist["C"], 1.0);
}

#[test]
fn bellman_ford_detects_negative_cycle() {
    // A -> B (1), B -> A (-2)
    let mut g = Graph::new();
    g.add_node("A", None).unwrap();
    g.add_node("B", None).unwrap();
    g.add_edge("A", "B", Some(1.0), None).unwrap();
    g.add_edge("B", "A", Some(-2.0), None).unwrap();

    let err = bellman_ford(&g, Mode::Directed, "A").unwrap_err();
    assert_eq!(err, Error::NegativeCycleDetected);

    // Same graph trips Dijkstra's precondition instead.
    let err = dijkstra(&g, Mode::Directed, "A").unwrap_err();
    assert_eq!(err, Error::NegativeWeightUnsupported);
}

#[test]
fn bellman_ford_undirected_treats_negative_edge_as_cycle() {
    // An undirected negative edge is a two-node negative cycle.
    let mut g = Graph::new();
    g.add_node("A", None).unwrap();
    g.add_node("B", None).unwrap();
    g.add_edge("A", "B", Some(-1.0), None).unwrap();

    let err = bellman_ford(&g, Mode::Undirected, "A").unwrap_err();
    assert_eq!(err, Error::NegativeCycleDetected);
}

#[test]
fn bellman_ford_rejects_unknown_start() {
    let err = bellman_ford(&weighted_triangle(), Mode::Directed, "Z").unwrap_err();
    assert_eq!(err, Error::InvalidStartNode { id: "Z".into() });
}

#[test]
fn distance_maps_preserve_node_insertion_order() {
    let dist = dijkstra(&weighted_triangle(), Mode::Directed, "A").unwrap();
    let keys: Vec<&str> = dist.keys().map(|k| k.as_str()).collect();
    assert_eq!(keys, vec!["A", "B", "C"]);
}
