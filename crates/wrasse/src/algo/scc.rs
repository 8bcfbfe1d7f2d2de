//! Strongly connected components via Kosaraju's two-pass DFS.
//!
//! Always operates on directed adjacency: an `Undirected` mode flag is forced
//! to directed before computing (every edge pair is trivially mutually
//! reachable under undirected reading, which would collapse the partition).

use crate::graph::{Graph, Mode};
use rustc_hash::FxHashSet;

struct Kosaraju<'a> {
    g: &'a Graph,
    visited: FxHashSet<&'a str>,
}

impl<'a> Kosaraju<'a> {
    /// Forward DFS, pushing each node on exit (finishing order).
    fn finish_order(&mut self, v: &'a str, stack: &mut Vec<&'a str>) {
        if !self.visited.insert(v) {
            return;
        }
        let g: &'a Graph = self.g;
        for e in g.edges() {
            if e.source == v && !self.visited.contains(e.target.as_str()) {
                self.finish_order(&e.target, stack);
            }
        }
        stack.push(v);
    }

    /// Reverse-adjacency DFS collecting one component.
    fn collect(&mut self, v: &'a str, comp: &mut Vec<String>) {
        if !self.visited.insert(v) {
            return;
        }
        comp.push(v.to_string());
        let g: &'a Graph = self.g;
        for e in g.edges() {
            if e.target == v && !self.visited.contains(e.source.as_str()) {
                self.collect(&e.source, comp);
            }
        }
    }
}

/// Partitions the nodes into strongly connected components.
///
/// Component order follows the finishing-order stack (highest finish time
/// first) and is reproducible from identical input. Every node belongs to
/// exactly one component; a singleton component is a node on no nontrivial
/// cycle.
pub fn kosaraju(g: &Graph, mode: Mode) -> Vec<Vec<String>> {
    if mode == Mode::Undirected {
        tracing::debug!("scc forces directed interpretation");
    }
    tracing::debug!(nodes = g.node_count(), "kosaraju");

    let mut state = Kosaraju {
        g,
        visited: FxHashSet::default(),
    };
    let mut stack: Vec<&str> = Vec::new();
    for n in g.nodes() {
        if !state.visited.contains(n.id.as_str()) {
            state.finish_order(&n.id, &mut stack);
        }
    }

    state.visited.clear();
    let mut components: Vec<Vec<String>> = Vec::new();
    while let Some(v) = stack.pop() {
        if !state.visited.contains(v) {
            let mut comp: Vec<String> = Vec::new();
            state.collect(v, &mut comp);
            components.push(comp);
        }
    }
    components
}

/// Maps each component index to a palette entry, cycling when there are more
/// components than entries. Rendering convenience; not part of the core
/// contract.
pub fn palette_cycle<'a, T>(components: &[Vec<String>], palette: &'a [T]) -> Vec<&'a T> {
    if palette.is_empty() {
        return Vec::new();
    }
    components
        .iter()
        .enumerate()
        .map(|(i, _)| &palette[i % palette.len()])
        .collect()
}
