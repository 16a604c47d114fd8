//! Error types for hopgraph-core.

use thiserror::Error;

use crate::id::NodeId;

/// Engine error types.
#[derive(Error, Debug)]
pub enum Error {
    /// A node with the same local id is already registered.
    #[error("Node with local id {0} already exists in this registry")]
    NodeExists(u16),

    /// An edge was registered before its endpoints were created.
    #[error("Edge {from} -> {to} references no registered endpoint")]
    DetachedEdge {
        /// Source endpoint of the rejected edge.
        from: NodeId,
        /// Target endpoint of the rejected edge.
        to: NodeId,
    },

    /// A hop edge whose member sequence is not a connected path
    /// between its own endpoints.
    #[error("Invalid hop edge: {0}")]
    InvalidHopPath(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for engine operations.
pub type Result<T> = std::result::Result<T, Error>;
