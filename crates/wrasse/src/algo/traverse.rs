//! Depth-first and breadth-first traversal as ordered event streams.
//!
//! The event sequence is the whole contract: a consumer that wants to animate
//! a traversal replays the events at its own pace. The engine models no time.

use crate::error::{Error, Result};
use crate::graph::{Graph, Mode};
use rustc_hash::FxHashSet;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    /// DFS: node first discovered.
    Visit,
    /// DFS: all of the node's unvisited neighbors have been fully explored.
    Exit,
    /// BFS: node first discovered and queued.
    Enqueue,
    /// BFS: node popped from the queue and its neighbors expanded.
    Dequeue,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TraversalEvent {
    #[serde(rename = "type")]
    pub kind: EventKind,
    #[serde(rename = "nodeId")]
    pub node: String,
}

impl TraversalEvent {
    fn new(kind: EventKind, node: &str) -> Self {
        Self {
            kind,
            node: node.to_string(),
        }
    }
}

/// Pre/post-order depth-first walk from `start`.
///
/// Emits exactly one `visit` and one `exit` per reachable node; unreachable
/// nodes never appear. Neighbor order is edge insertion order.
pub fn dfs(g: &Graph, mode: Mode, start: &str) -> Result<Vec<TraversalEvent>> {
    if !g.has_node(start) {
        return Err(Error::InvalidStartNode {
            id: start.to_string(),
        });
    }
    tracing::debug!(start, ?mode, "dfs");

    fn walk(
        g: &Graph,
        mode: Mode,
        v: &str,
        visited: &mut FxHashSet<String>,
        out: &mut Vec<TraversalEvent>,
    ) {
        if !visited.insert(v.to_string()) {
            return;
        }
        out.push(TraversalEvent::new(EventKind::Visit, v));
        for w in g.neighbors(v, mode) {
            if !visited.contains(w) {
                walk(g, mode, w, visited, out);
            }
        }
        out.push(TraversalEvent::new(EventKind::Exit, v));
    }

    let mut visited: FxHashSet<String> = FxHashSet::default();
    let mut out: Vec<TraversalEvent> = Vec::new();
    walk(g, mode, start, &mut visited, &mut out);
    Ok(out)
}

/// Queue-based breadth-first walk from `start`.
///
/// Emits `enqueue` on first discovery and `dequeue` when the node is popped
/// and expanded; a node is enqueued at most once (first discovery wins).
pub fn bfs(g: &Graph, mode: Mode, start: &str) -> Result<Vec<TraversalEvent>> {
    if !g.has_node(start) {
        return Err(Error::InvalidStartNode {
            id: start.to_string(),
        });
    }
    tracing::debug!(start, ?mode, "bfs");

    let mut seen: FxHashSet<String> = FxHashSet::default();
    let mut queue: std::collections::VecDeque<String> = std::collections::VecDeque::new();
    let mut out: Vec<TraversalEvent> = Vec::new();

    seen.insert(start.to_string());
    queue.push_back(start.to_string());
    out.push(TraversalEvent::new(EventKind::Enqueue, start));

    while let Some(v) = queue.pop_front() {
        out.push(TraversalEvent::new(EventKind::Dequeue, &v));
        for w in g.neighbors(&v, mode) {
            if seen.insert(w.to_string()) {
                out.push(TraversalEvent::new(EventKind::Enqueue, w));
                queue.push_back(w.to_string());
            }
        }
    }
    Ok(out)
}
