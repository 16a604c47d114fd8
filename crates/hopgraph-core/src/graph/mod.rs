//! Generic directed-graph container and search.
//!
//! A [`GraphStore`] owns a node registry and an edge arena;
//! [`shortest_path`] runs an unweighted breadth-first search over it
//! under a pluggable [`EdgePolicy`]. Partitions, the combined graph,
//! and the external boundary graph are all built on this one container,
//! differing only in how they populate it and which policy they search
//! with.
//!
//! # Example
//!
//! ```rust
//! use hopgraph_core::{GraphEdge, GraphStore, NodeId, PathOutcome};
//!
//! let mut store = GraphStore::new();
//! let a = NodeId::new(0, 1);
//! let b = NodeId::new(0, 2);
//! store.ensure_endpoints(a, b);
//! store.insert_edge(GraphEdge::new(a, b)).unwrap();
//!
//! match store.find_path(1, 2) {
//!     PathOutcome::Found(path) => assert_eq!(path.len(), 1),
//!     other => panic!("unexpected outcome: {other:?}"),
//! }
//! ```

mod store;
pub mod traversal;
mod types;


pub use store::{EdgeId, GraphStore};
pub use traversal::{shortest_path, EdgePolicy, PathOutcome};
pub use types::{EdgeKind, GraphEdge, GraphNode};
