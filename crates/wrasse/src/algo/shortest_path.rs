//! Single-source shortest paths: Dijkstra and Bellman-Ford.
//!
//! Both produce the same output shape: a map from every node id to its
//! shortest distance from the start node, `f64::INFINITY` for unreachable
//! nodes, keyed in node insertion order.

use crate::error::{Error, Result};
use crate::graph::{Graph, Mode};
use indexmap::IndexMap;
use rustc_hash::FxHashSet;

pub type DistanceMap = IndexMap<String, f64>;

fn check_weights_finite(g: &Graph) -> Result<()> {
    for e in g.edges() {
        if !e.weight.is_finite() {
            return Err(Error::InvalidWeight {
                edge_id: e.id.clone(),
                source: e.source.clone(),
                target: e.target.clone(),
            });
        }
    }
    Ok(())
}

fn check_start(g: &Graph, start: &str) -> Result<()> {
    if !g.has_node(start) {
        return Err(Error::InvalidStartNode {
            id: start.to_string(),
        });
    }
    Ok(())
}

fn initial_distances(g: &Graph, start: &str) -> DistanceMap {
    let mut dist: DistanceMap = g
        .nodes()
        .iter()
        .map(|n| (n.id.clone(), f64::INFINITY))
        .collect();
    dist[start] = 0.0;
    dist
}

/// Classic label-setting shortest path. Requires finite, non-negative weights.
///
/// Minimum extraction is a linear scan over the unsettled set; output is
/// identical to a priority-queue variant.
pub fn dijkstra(g: &Graph, mode: Mode, start: &str) -> Result<DistanceMap> {
    check_weights_finite(g)?;
    if g.edges().iter().any(|e| e.weight < 0.0) {
        return Err(Error::NegativeWeightUnsupported);
    }
    check_start(g, start)?;
    tracing::debug!(start, ?mode, "dijkstra");

    let mut dist = initial_distances(g, start);
    let mut unsettled: FxHashSet<String> = g.nodes().iter().map(|n| n.id.clone()).collect();
    let mut settled: FxHashSet<String> = FxHashSet::default();

    while !unsettled.is_empty() {
        // Unsettled node with minimum tentative distance, ties broken by
        // node insertion order via the distance map.
        let mut min_node: Option<String> = None;
        let mut min_dist = f64::INFINITY;
        for (id, &d) in &dist {
            if unsettled.contains(id) && d < min_dist {
                min_dist = d;
                min_node = Some(id.clone());
            }
        }
        // Every remaining node is unreachable.
        let Some(v) = min_node else {
            break;
        };
        unsettled.remove(&v);
        settled.insert(v.clone());

        for e in g.edges() {
            let neighbor = match mode {
                Mode::Directed => {
                    if e.source != v {
                        continue;
                    }
                    e.target.as_str()
                }
                Mode::Undirected => {
                    if e.source == v {
                        e.target.as_str()
                    } else if e.target == v {
                        e.source.as_str()
                    } else {
                        continue;
                    }
                }
            };
            let candidate = dist[&v] + e.weight;
            if !settled.contains(neighbor) && candidate < dist[neighbor] {
                dist[neighbor] = candidate;
            }
        }
    }

    Ok(dist)
}

/// Edge-list relaxation shortest path. Handles negative weights and reports
/// negative cycles instead of producing a distance map.
///
/// Runs `|V| - 1` passes over the edges in insertion order; in undirected
/// mode each edge also relaxes in the symmetric direction within the same
/// pass. One extra pass afterwards detects any remaining relaxation.
pub fn bellman_ford(g: &Graph, mode: Mode, start: &str) -> Result<DistanceMap> {
    check_weights_finite(g)?;
    check_start(g, start)?;
    tracing::debug!(start, ?mode, "bellman-ford");

    let mut dist = initial_distances(g, start);
    let passes = g.node_count().saturating_sub(1);

    for _ in 0..passes {
        for e in g.edges() {
            let d_source = dist[&e.source];
            if d_source.is_finite() && d_source + e.weight < dist[&e.target] {
                dist[&e.target] = d_source + e.weight;
            }
            if mode == Mode::Undirected {
                let d_target = dist[&e.target];
                if d_target.is_finite() && d_target + e.weight < dist[&e.source] {
                    dist[&e.source] = d_target + e.weight;
                }
            }
        }
    }

    for e in g.edges() {
        let d_source = dist[&e.source];
        if d_source.is_finite() && d_source + e.weight < dist[&e.target] {
            return Err(Error::NegativeCycleDetected);
        }
        if mode == Mode::Undirected {
            let d_target = dist[&e.target];
            if d_target.is_finite() && d_target + e.weight < dist[&e.source] {
                return Err(Error::NegativeCycleDetected);
            }
        }
    }

    Ok(dist)
}
