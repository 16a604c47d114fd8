//! Unweighted breadth-first path search with pluggable edge admissibility.
//!
//! Search state is local to each call, never attached to nodes, so
//! concurrent traversals over the same store are safe. Hop-edge
//! precomputation exploits this by running its pair searches in
//! parallel.

use std::collections::{HashMap, HashSet, VecDeque};

use serde::{Deserialize, Serialize};

use super::store::{EdgeId, GraphStore};
use super::types::GraphEdge;

/// The closed set of edge-admissibility rules.
///
/// Admissibility can depend on where the overall query starts and ends,
/// not just on the edge itself, which is why the combined-graph rule
/// carries the query endpoints' partitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EdgePolicy {
    /// Every edge may be taken.
    All,
    /// Only genuine intra-partition, non-hop edges may be taken.
    ///
    /// This is the rule hop-edge construction searches under: a
    /// shortcut must never be built from another shortcut, and must
    /// never leave its partition.
    IntraPartition,
    /// Non-hop edges always; a hop edge only when its partition is
    /// purely in transit between the query endpoints.
    ///
    /// A shortcut originating inside the query's source or destination
    /// partition would jump past fine-grained nodes the query still
    /// needs to reach or depart from.
    TransitHops {
        /// Partition of the query's source node.
        src_partition: u16,
        /// Partition of the query's destination node.
        dst_partition: u16,
    },
}

impl EdgePolicy {
    /// Decides whether a traversal may take `edge`.
    #[must_use]
    pub fn admits(&self, edge: &GraphEdge) -> bool {
        match self {
            Self::All => true,
            Self::IntraPartition => !edge.is_hop() && edge.is_intra_partition(),
            Self::TransitHops {
                src_partition,
                dst_partition,
            } => {
                if edge.is_hop() {
                    // Hop edges connect boundary nodes of one partition,
                    // so the source endpoint names the originating partition.
                    let hop_partition = edge.source().partition();
                    hop_partition != *src_partition && hop_partition != *dst_partition
                } else {
                    true
                }
            }
        }
    }
}

/// Result of a path query.
///
/// A lookup miss and an unreachable pair are distinct outcomes: "no
/// such node" is not the same answer as "node exists but cannot be
/// reached". Neither is an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PathOutcome {
    /// A minimum-hop path, edges in source-to-destination order.
    Found(Vec<GraphEdge>),
    /// Both endpoints exist but no admissible walk connects them.
    NoPath,
    /// The given local id is not registered in the queried graph.
    MissingEndpoint(u16),
}

impl PathOutcome {
    /// Returns true when a path was found.
    #[must_use]
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// Returns the path edges, or an empty slice for the other outcomes.
    #[must_use]
    pub fn edges(&self) -> &[GraphEdge] {
        match self {
            Self::Found(path) => path,
            _ => &[],
        }
    }

    /// Consumes the outcome, yielding the path edges (empty when no
    /// path was found).
    #[must_use]
    pub fn into_edges(self) -> Vec<GraphEdge> {
        match self {
            Self::Found(path) => path,
            _ => Vec::new(),
        }
    }
}

/// Finds a minimum-hop path from `src_local` to `dst_local` under the
/// given admissibility rule.
///
/// Breadth-first, expanding each node's outgoing edges in registration
/// order; among equal-length paths the one reached first in FIFO order
/// wins, which makes the result deterministic. The search stops the
/// moment the destination becomes visited. Querying a node against
/// itself yields an empty found path (zero hops).
#[must_use]
pub fn shortest_path(
    store: &GraphStore,
    src_local: u16,
    dst_local: u16,
    policy: &EdgePolicy,
) -> PathOutcome {
    if !store.contains_node(src_local) {
        return PathOutcome::MissingEndpoint(src_local);
    }
    if !store.contains_node(dst_local) {
        return PathOutcome::MissingEndpoint(dst_local);
    }
    if src_local == dst_local {
        return PathOutcome::Found(Vec::new());
    }

    // Per-call search state; dropped on every exit path.
    let mut visited: HashSet<u16> = HashSet::new();
    let mut prev_edge: HashMap<u16, EdgeId> = HashMap::new();
    let mut queue: VecDeque<u16> = VecDeque::new();

    visited.insert(src_local);
    queue.push_back(src_local);

    'search: while let Some(current) = queue.pop_front() {
        for &edge_id in store.outgoing_ids(current) {
            let edge = store.edge(edge_id);
            if !policy.admits(edge) {
                continue;
            }
            let next = edge.target().local();
            if visited.insert(next) {
                prev_edge.insert(next, edge_id);
                if next == dst_local {
                    break 'search;
                }
                queue.push_back(next);
            }
        }
    }

    if !visited.contains(&dst_local) {
        return PathOutcome::NoPath;
    }

    // Walk predecessor edges back to the source, then flip into
    // source-to-destination order.
    let mut path: Vec<GraphEdge> = Vec::new();
    let mut current = dst_local;
    while current != src_local {
        let Some(&edge_id) = prev_edge.get(&current) else {
            return PathOutcome::NoPath;
        };
        let edge = store.edge(edge_id);
        path.push(edge.clone());
        current = edge.source().local();
    }
    path.reverse();
    PathOutcome::Found(path)
}
