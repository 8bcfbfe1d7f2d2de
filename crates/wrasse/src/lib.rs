#![forbid(unsafe_code)]

//! `wrasse` is a headless graph algorithms engine: a mutable node/edge
//! container plus deterministic algorithms over snapshots of it.
//!
//! The engine is the computation core of an interactive graph playground;
//! rendering, animation pacing, and persistence are external collaborators
//! that exchange plain JSON-shaped data with it (see [`graph::Snapshot`]).
//!
//! - [`graph`]: the container, CRUD operations, and the snapshot shape
//! - [`algo::traverse`]: DFS/BFS as ordered visit-event streams
//! - [`algo::topo`]: DFS-postorder topological sort (directed only)
//! - [`algo::shortest_path`]: Dijkstra and Bellman-Ford distance maps
//! - [`algo::scc`]: Kosaraju strongly-connected-component decomposition
//!
//! All algorithms are synchronous and pure: they take `&Graph` plus a
//! [`Mode`] flag, never mutate their input, and repeated runs are fully
//! independent.

pub mod algo;
pub mod error;
pub mod graph;

pub use algo::{
    DistanceMap, EventKind, TopoOrder, TraversalEvent, bellman_ford, bfs, dfs, dijkstra, kosaraju,
    palette_cycle, topo_sort,
};
pub use error::{Error, Result};
pub use graph::{Edge, Graph, Mode, Node, Snapshot};
