//! File-backed snapshot store.
//!
//! The graph snapshot and mode flag live under the fixed keys
//! `graphElements` and `graphState`, mirroring the persistence contract of
//! the browser playground this engine serves. An absent store loads as the
//! seed graph in directed mode.

use serde::{Deserialize, Serialize};
use std::path::Path;
use wrasse::{Graph, Mode, Snapshot};

#[derive(Debug, Serialize, Deserialize)]
struct StoreDoc {
    #[serde(rename = "graphElements")]
    graph_elements: Snapshot,
    #[serde(rename = "graphState", default)]
    graph_state: Mode,
}

#[derive(Debug)]
pub enum StoreError {
    Io(std::io::Error),
    Json(serde_json::Error),
    Graph(wrasse::Error),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Io(err) => write!(f, "store I/O error: {err}"),
            StoreError::Json(err) => write!(f, "store is not valid JSON: {err}"),
            StoreError::Graph(err) => write!(f, "stored snapshot is invalid: {err}"),
        }
    }
}

impl From<std::io::Error> for StoreError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

pub fn load(path: &Path) -> Result<(Graph, Mode), StoreError> {
    if !path.exists() {
        return Ok((Graph::seed(), Mode::Directed));
    }
    let text = std::fs::read_to_string(path)?;
    if text.trim().is_empty() {
        return Ok((Graph::seed(), Mode::Directed));
    }
    let doc: StoreDoc = serde_json::from_str(&text)?;
    let graph = Graph::from_snapshot(doc.graph_elements).map_err(StoreError::Graph)?;
    Ok((graph, doc.graph_state))
}

pub fn save(path: &Path, graph: &Graph, mode: Mode) -> Result<(), StoreError> {
    let doc = StoreDoc {
        graph_elements: graph.snapshot(),
        graph_state: mode,
    };
    let text = serde_json::to_string_pretty(&doc)?;
    std::fs::write(path, text)?;
    Ok(())
}
