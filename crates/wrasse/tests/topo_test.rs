use wrasse::{Error, Graph, Mode, topo_sort};

fn dag() -> Graph {
    // A -> B -> D, A -> C -> D, C -> E
    let mut g = Graph::new();
    for id in ["A", "B", "C", "D", "E"] {
        g.add_node(id, None).unwrap();
    }
    g.add_edge("A", "B", None, None).unwrap();
    g.add_edge("A", "C", None, None).unwrap();
    g.add_edge("B", "D", None, None).unwrap();
    g.add_edge("C", "D", None, None).unwrap();
    g.add_edge("C", "E", None, None).unwrap();
    g
}

fn position(order: &[String], id: &str) -> usize {
    order.iter().position(|n| n == id).unwrap()
}

#[test]
fn order_respects_every_edge_on_a_dag() {
    let g = dag();
    let result = topo_sort(&g, Mode::Directed).unwrap();
    assert_eq!(result.order.len(), 5);
    for e in g.edges() {
        assert!(
            position(&result.order, &e.source) < position(&result.order, &e.target),
            "{} must precede {}",
            e.source,
            e.target
        );
    }
}

#[test]
fn covers_disconnected_components() {
    let mut g = dag();
    g.add_node("X", None).unwrap();
    g.add_node("Y", None).unwrap();
    g.add_edge("X", "Y", None, None).unwrap();

    let result = topo_sort(&g, Mode::Directed).unwrap();
    assert_eq!(result.order.len(), 7);
    assert!(position(&result.order, "X") < position(&result.order, "Y"));
}

#[test]
fn synthesized_chain_connects_consecutive_ids() {
    let result = topo_sort(&dag(), Mode::Directed).unwrap();
    assert_eq!(result.edges.len(), result.order.len() - 1);
    for (i, e) in result.edges.iter().enumerate() {
        assert_eq!(e.source, result.order[i]);
        assert_eq!(e.target, result.order[i + 1]);
    }
}

#[test]
fn rejects_undirected_mode() {
    let err = topo_sort(&dag(), Mode::Undirected).unwrap_err();
    assert_eq!(err, Error::UnsupportedOnUndirected);
}

#[test]
fn cyclic_input_still_yields_a_full_linearization() {
    // Documented best-effort behavior: no cycle detection, every node
    // appears exactly once.
    let mut g = Graph::new();
    for id in ["A", "B", "C"] {
        g.add_node(id, None).unwrap();
    }
    g.add_edge("A", "B", None, None).unwrap();
    g.add_edge("B", "C", None, None).unwrap();
    g.add_edge("C", "A", None, None).unwrap();

    let result = topo_sort(&g, Mode::Directed).unwrap();
    let mut seen = result.order.clone();
    seen.sort();
    assert_eq!(seen, vec!["A", "B", "C"]);
}
