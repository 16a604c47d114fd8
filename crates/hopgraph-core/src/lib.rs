//! # hopgraph-core
//!
//! Hierarchical path-search engine for directed graphs whose nodes are
//! grouped into disjoint partitions.
//!
//! The engine splits a graph by partition id, finds each partition's
//! boundary nodes, precomputes intra-partition shortcut paths ("hop
//! edges") between them, and answers cross-partition reachability
//! queries over a combined graph in which a shortcut is admissible only
//! when its partition is purely in transit between the query endpoints.
//! Searches are unweighted breadth-first, so a returned path always has
//! the minimum hop count under the active admissibility rule.
//!
//! ## Quick Start
//!
//! ```rust
//! use hopgraph_core::{loader, PartitionedGraph, PathOutcome};
//!
//! // One edge per line: srcPartition srcLocal dstPartition dstLocal.
//! let input = "\
//! 0 1 0 2
//! 0 2 1 5
//! 1 5 1 6
//! 1 6 2 9
//! ";
//! let (graph, stats) = loader::load_str(input)?;
//! assert_eq!(stats.edges, 4);
//!
//! // Query the flat graph directly...
//! assert_eq!(graph.find_path(1, 9).edges().len(), 4);
//!
//! // ...or partition it and query through boundary shortcuts.
//! let partitioned = PartitionedGraph::new(&graph)?;
//! match partitioned.find_path(1, 9) {
//!     PathOutcome::Found(path) => assert!(!path.is_empty()),
//!     other => panic!("unexpected outcome: {other:?}"),
//! }
//! # Ok::<(), hopgraph_core::Error>(())
//! ```

#![warn(missing_docs)]
// Clippy lints configured in workspace Cargo.toml [workspace.lints.clippy]

pub mod error;
pub mod graph;
pub mod id;
pub mod loader;
pub mod partition;
pub mod partitioned;
#[cfg(test)]
mod partitioned_tests;

pub use error::{Error, Result};
pub use graph::{
    shortest_path, EdgeId, EdgeKind, EdgePolicy, GraphEdge, GraphNode, GraphStore, PathOutcome,
};
pub use id::NodeId;
pub use loader::{load_path, load_str, LoadStats};
pub use partition::Partition;
pub use partitioned::{CombinedGraph, ExternalGraph, PartitionedGraph};
