//! Graph node and edge types.
//!
//! Edges come in two kinds: plain directed arcs, and hop edges that
//! cache a precomputed intra-partition sub-path between two boundary
//! nodes. A hop edge always owns deep copies of its member edges, so
//! cloning an edge into another graph never aliases the original
//! partition's storage.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::id::NodeId;

/// A graph vertex.
///
/// Adjacency and transient search state live in [`GraphStore`] and the
/// traversal routine respectively, so a node is just its identity.
///
/// [`GraphStore`]: super::GraphStore
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphNode {
    id: NodeId,
}

impl GraphNode {
    /// Creates a node with the given identity.
    #[must_use]
    pub fn new(id: NodeId) -> Self {
        Self { id }
    }

    /// Returns the full packed identity.
    #[must_use]
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Returns the local id (unique within the owning registry).
    #[must_use]
    pub fn local(&self) -> u16 {
        self.id.local()
    }

    /// Returns the partition id.
    #[must_use]
    pub fn partition(&self) -> u16 {
        self.id.partition()
    }
}

/// Edge payload distinguishing plain arcs from cached shortcuts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EdgeKind {
    /// An ordinary directed arc.
    Plain,
    /// A shortcut caching the ordered real sub-path it summarizes.
    Hop(Vec<GraphEdge>),
}

/// A directed edge between two nodes.
///
/// # Example
///
/// ```rust
/// use hopgraph_core::{GraphEdge, NodeId};
///
/// let edge = GraphEdge::new(NodeId::new(0, 2), NodeId::new(1, 5));
/// assert!(edge.is_inter_partition());
/// assert!(!edge.is_hop());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphEdge {
    source: NodeId,
    target: NodeId,
    kind: EdgeKind,
}

impl GraphEdge {
    /// Creates a plain directed edge.
    #[must_use]
    pub fn new(source: NodeId, target: NodeId) -> Self {
        Self {
            source,
            target,
            kind: EdgeKind::Plain,
        }
    }

    /// Creates a hop edge caching `members` as its underlying sub-path.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidHopPath`] unless `members` is a connected
    /// walk of at least two edges from `source` to `target`. A one-edge
    /// path gains nothing over the direct edge and is rejected.
    pub fn hop(source: NodeId, target: NodeId, members: Vec<GraphEdge>) -> Result<Self> {
        if members.len() < 2 {
            return Err(Error::InvalidHopPath(format!(
                "hop {source} -> {target} must cache at least 2 edges, got {}",
                members.len()
            )));
        }
        if members[0].source != source {
            return Err(Error::InvalidHopPath(format!(
                "member path starts at {}, hop starts at {source}",
                members[0].source
            )));
        }
        if members[members.len() - 1].target != target {
            return Err(Error::InvalidHopPath(format!(
                "member path ends at {}, hop ends at {target}",
                members[members.len() - 1].target
            )));
        }
        for pair in members.windows(2) {
            if pair[0].target != pair[1].source {
                return Err(Error::InvalidHopPath(format!(
                    "member path disconnected at {} -> {}",
                    pair[0].target, pair[1].source
                )));
            }
        }
        Ok(Self {
            source,
            target,
            kind: EdgeKind::Hop(members),
        })
    }

    /// Returns the source endpoint.
    #[must_use]
    pub fn source(&self) -> NodeId {
        self.source
    }

    /// Returns the target endpoint.
    #[must_use]
    pub fn target(&self) -> NodeId {
        self.target
    }

    /// Returns the edge payload.
    #[must_use]
    pub fn kind(&self) -> &EdgeKind {
        &self.kind
    }

    /// Returns true for hop edges.
    #[must_use]
    pub fn is_hop(&self) -> bool {
        matches!(self.kind, EdgeKind::Hop(_))
    }

    /// Returns the cached member edges (empty for plain edges).
    #[must_use]
    pub fn members(&self) -> &[GraphEdge] {
        match &self.kind {
            EdgeKind::Plain => &[],
            EdgeKind::Hop(members) => members,
        }
    }

    /// Returns true when the endpoints lie in different partitions.
    #[must_use]
    pub fn is_inter_partition(&self) -> bool {
        self.source.partition() != self.target.partition()
    }

    /// Returns true when both endpoints lie in the same partition.
    #[must_use]
    pub fn is_intra_partition(&self) -> bool {
        !self.is_inter_partition()
    }
}
