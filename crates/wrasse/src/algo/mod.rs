//! Deterministic algorithms over an immutable graph snapshot.
//!
//! Every function takes the graph and mode explicitly and returns a
//! self-contained result; nothing here mutates or retains the graph.

pub mod scc;
pub mod shortest_path;
pub mod topo;
pub mod traverse;

pub use scc::{kosaraju, palette_cycle};
pub use shortest_path::{DistanceMap, bellman_ford, dijkstra};
pub use topo::{TopoOrder, topo_sort};
pub use traverse::{EventKind, TraversalEvent, bfs, dfs};
