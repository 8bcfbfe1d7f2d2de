//! Mutable node/edge container and its snapshot form.
//!
//! Insertion order of nodes and edges is preserved and is the tie-break order
//! every algorithm observes. Edges are stored as directed records; whether
//! they are read as bidirectional is decided per algorithm call by [`Mode`].

use crate::error::{Error, Result};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Adjacency interpretation for a single algorithm run.
///
/// Serialized as the exact strings `"Directed"` / `"Undirected"`, matching the
/// persisted `graphState` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Mode {
    #[default]
    Directed,
    Undirected,
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "Directed" => Ok(Mode::Directed),
            "Undirected" => Ok(Mode::Undirected),
            other => Err(format!("unknown graph mode: {other}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    #[serde(default)]
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub id: String,
    pub source: String,
    pub target: String,
    #[serde(default = "default_weight")]
    pub weight: f64,
    #[serde(default)]
    pub label: String,
}

fn default_weight() -> f64 {
    1.0
}

/// The wire/persistence shape of a graph: `{nodes: [...], edges: [...]}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub nodes: Vec<Node>,
    #[serde(default)]
    pub edges: Vec<Edge>,
}

#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: Vec<Node>,
    node_index: FxHashMap<String, usize>,
    edges: Vec<Edge>,
    edge_seq: u64,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// The hard-coded starter graph: nodes `A`, `B`, `C` and edges `A->B`,
    /// `A->C` with unit weight.
    pub fn seed() -> Self {
        let mut g = Graph::new();
        for id in ["A", "B", "C"] {
            let _ = g.add_node(id, None);
        }
        let _ = g.add_edge("A", "B", None, None);
        let _ = g.add_edge("A", "C", None, None);
        g
    }

    pub fn from_snapshot(snapshot: Snapshot) -> Result<Self> {
        let mut g = Graph::new();
        for n in snapshot.nodes {
            let label = if n.label.is_empty() { None } else { Some(n.label.as_str()) };
            g.add_node(&n.id, label)?;
        }
        for e in snapshot.edges {
            g.check_endpoints(&e.source, &e.target)?;
            g.edges.push(e);
        }
        Ok(g)
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            nodes: self.nodes.clone(),
            edges: self.edges.clone(),
        }
    }

    pub fn has_node(&self, id: &str) -> bool {
        self.node_index.contains_key(id)
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.node_index.get(id).map(|&idx| &self.nodes[idx])
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Appends a node. The display label falls back to the id when not given.
    pub fn add_node(&mut self, id: &str, label: Option<&str>) -> Result<()> {
        if self.node_index.contains_key(id) {
            return Err(Error::DuplicateNode { id: id.to_string() });
        }
        let idx = self.nodes.len();
        self.nodes.push(Node {
            id: id.to_string(),
            label: label.unwrap_or(id).to_string(),
        });
        self.node_index.insert(id.to_string(), idx);
        Ok(())
    }

    /// Removes a node and every edge incident to it.
    pub fn remove_node(&mut self, id: &str) -> Result<()> {
        let Some(idx) = self.node_index.remove(id) else {
            return Err(Error::NodeNotFound { id: id.to_string() });
        };
        self.nodes.remove(idx);
        for i in idx..self.nodes.len() {
            let node_id = self.nodes[i].id.as_str();
            if let Some(v) = self.node_index.get_mut(node_id) {
                *v = i;
            }
        }
        self.edges.retain(|e| e.source != id && e.target != id);
        Ok(())
    }

    /// Appends an edge with a freshly generated unique id. Both endpoints must
    /// already be nodes; the error names the one(s) that are not.
    pub fn add_edge(
        &mut self,
        source: &str,
        target: &str,
        weight: Option<f64>,
        label: Option<&str>,
    ) -> Result<String> {
        self.check_endpoints(source, target)?;
        let id = self.next_edge_id(source, target);
        self.edges.push(Edge {
            id: id.clone(),
            source: source.to_string(),
            target: target.to_string(),
            weight: weight.unwrap_or(1.0),
            label: label.unwrap_or("").to_string(),
        });
        Ok(id)
    }

    /// Removes every edge whose `(source, target)` pair matches exactly. The
    /// reversed pair is never touched, even when the graph is being read as
    /// undirected.
    pub fn remove_edge(&mut self, source: &str, target: &str) -> Result<usize> {
        let before = self.edges.len();
        self.edges.retain(|e| !(e.source == source && e.target == target));
        let removed = before - self.edges.len();
        if removed == 0 {
            return Err(Error::EdgeNotFound {
                source: source.to_string(),
                target: target.to_string(),
            });
        }
        Ok(removed)
    }

    /// Updates an edge weight and regenerates its display label from the new
    /// weight.
    pub fn set_edge_weight(&mut self, edge_id: &str, weight: f64) -> Result<()> {
        let Some(edge) = self.edges.iter_mut().find(|e| e.id == edge_id) else {
            return Err(Error::EdgeIdNotFound {
                edge_id: edge_id.to_string(),
            });
        };
        edge.weight = weight;
        edge.label = format_weight(weight);
        Ok(())
    }

    /// Neighbors of `id` in edge insertion order: out-edge targets when
    /// directed, the other endpoint of every incident edge when undirected.
    /// Parallel edges yield repeated entries; traversals dedupe via their
    /// visited set.
    pub fn neighbors<'a>(&'a self, id: &str, mode: Mode) -> Vec<&'a str> {
        let mut out: Vec<&str> = Vec::new();
        for e in &self.edges {
            match mode {
                Mode::Directed => {
                    if e.source == id {
                        out.push(e.target.as_str());
                    }
                }
                Mode::Undirected => {
                    if e.source == id {
                        out.push(e.target.as_str());
                    } else if e.target == id {
                        out.push(e.source.as_str());
                    }
                }
            }
        }
        out
    }

    fn check_endpoints(&self, source: &str, target: &str) -> Result<()> {
        let mut missing: Vec<String> = Vec::new();
        if !self.has_node(source) {
            missing.push(source.to_string());
        }
        if !self.has_node(target) && source != target {
            missing.push(target.to_string());
        }
        if !missing.is_empty() {
            return Err(Error::MissingEndpoint { missing });
        }
        Ok(())
    }

    fn next_edge_id(&mut self, source: &str, target: &str) -> String {
        loop {
            self.edge_seq += 1;
            let id = format!("e-{source}-{target}-{}", self.edge_seq);
            // Snapshot-loaded edges carry arbitrary ids; skip past collisions.
            if !self.edges.iter().any(|e| e.id == id) {
                return id;
            }
        }
    }
}

fn format_weight(weight: f64) -> String {
    if weight.fract() == 0.0 && weight.is_finite() {
        format!("{}", weight as i64)
    } else {
        format!("{weight}")
    }
}
