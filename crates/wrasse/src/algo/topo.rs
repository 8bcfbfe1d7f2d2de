//! DFS-based topological sort.
//!
//! Defined only for directed graphs. Cycles are not detected: a cyclic input
//! yields a best-effort linearization with no ordering guarantee for the
//! nodes on the cycle.

use crate::error::{Error, Result};
use crate::graph::{Edge, Graph, Mode};
use rustc_hash::FxHashSet;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopoOrder {
    /// Node ids in topological order.
    pub order: Vec<String>,
    /// A synthesized chain of edges connecting consecutive ids in `order`.
    /// Rendering convenience only; carries no semantic weight.
    pub edges: Vec<Edge>,
}

/// Linearizes a directed graph by DFS finishing order, covering disconnected
/// components. Each node is started once in insertion order; the reversed
/// postorder stack is the result.
pub fn topo_sort(g: &Graph, mode: Mode) -> Result<TopoOrder> {
    if mode == Mode::Undirected {
        return Err(Error::UnsupportedOnUndirected);
    }
    tracing::debug!(nodes = g.node_count(), "toposort");

    fn walk(g: &Graph, v: &str, visited: &mut FxHashSet<String>, stack: &mut Vec<String>) {
        if !visited.insert(v.to_string()) {
            return;
        }
        for w in g.neighbors(v, Mode::Directed) {
            if !visited.contains(w) {
                walk(g, w, visited, stack);
            }
        }
        stack.push(v.to_string());
    }

    let mut visited: FxHashSet<String> = FxHashSet::default();
    let mut stack: Vec<String> = Vec::new();
    for n in g.nodes() {
        if !visited.contains(n.id.as_str()) {
            walk(g, &n.id, &mut visited, &mut stack);
        }
    }
    stack.reverse();

    let edges = stack
        .windows(2)
        .enumerate()
        .map(|(i, pair)| Edge {
            id: format!("topo-{i}"),
            source: pair[0].clone(),
            target: pair[1].clone(),
            weight: 1.0,
            label: String::new(),
        })
        .collect();

    Ok(TopoOrder {
        order: stack,
        edges,
    })
}
