//! Node registry and edge arena.
//!
//! Each store owns its nodes exclusively, keyed by **local id** only;
//! the same local id may legitimately exist in other stores (separate
//! partitions keep separate registries). Edges live in an arena and are
//! addressed by [`EdgeId`]; adjacency lists hold arena indices in
//! registration order, which the breadth-first search relies on for
//! deterministic tie-breaking.

use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::id::NodeId;

use super::traversal::{shortest_path, EdgePolicy, PathOutcome};
use super::types::{GraphEdge, GraphNode};

/// Index of an edge in its owning store's arena.
///
/// Only valid for the store that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EdgeId(usize);

/// A registry of nodes plus the edges connecting them.
#[derive(Debug, Default, Clone)]
pub struct GraphStore {
    /// Nodes keyed by local id.
    nodes: HashMap<u16, GraphNode>,
    /// Edge arena; an edge is owned exactly once, here.
    edges: Vec<GraphEdge>,
    /// Outgoing adjacency: source local id -> edge ids, registration order.
    outgoing: HashMap<u16, Vec<EdgeId>>,
    /// Incoming adjacency: target local id -> edge ids, registration order.
    incoming: HashMap<u16, Vec<EdgeId>>,
}

impl GraphStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // ── Nodes ──────────────────────────────────────────────────────────

    /// Registers a node.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NodeExists`] if the local id is already taken.
    pub fn add_node(&mut self, node: GraphNode) -> Result<()> {
        let local = node.local();
        if self.nodes.contains_key(&local) {
            return Err(Error::NodeExists(local));
        }
        self.nodes.insert(local, node);
        Ok(())
    }

    /// Creates both endpoints of an edge when they are not yet registered.
    ///
    /// Call this before [`insert_edge`](Self::insert_edge) when building a
    /// graph from raw edge descriptions.
    pub fn ensure_endpoints(&mut self, source: NodeId, target: NodeId) {
        self.resolve_or_insert(source);
        self.resolve_or_insert(target);
    }

    /// Returns the registered node for `id`'s local id, creating it
    /// when absent.
    ///
    /// The first registration fixes the node's partition; a later
    /// mention of the same local id under a different partition
    /// resolves to the existing node (node identity is the local id).
    pub fn resolve_or_insert(&mut self, id: NodeId) -> NodeId {
        self.nodes
            .entry(id.local())
            .or_insert_with(|| GraphNode::new(id))
            .id()
    }

    /// Looks up a node by local id.
    #[must_use]
    pub fn node(&self, local: u16) -> Option<&GraphNode> {
        self.nodes.get(&local)
    }

    /// Returns true if a node with the given local id is registered.
    #[must_use]
    pub fn contains_node(&self, local: u16) -> bool {
        self.nodes.contains_key(&local)
    }

    /// Returns the number of registered nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Iterates over all nodes (arbitrary order).
    pub fn nodes(&self) -> impl Iterator<Item = &GraphNode> {
        self.nodes.values()
    }

    /// Returns all local ids in ascending order.
    ///
    /// Ordered iteration keeps boundary discovery and graph assembly
    /// deterministic.
    #[must_use]
    pub fn locals_sorted(&self) -> Vec<u16> {
        let mut locals: Vec<u16> = self.nodes.keys().copied().collect();
        locals.sort_unstable();
        locals
    }

    // ── Edges ──────────────────────────────────────────────────────────

    /// Registers an edge, indexing each endpoint side that lives here.
    ///
    /// An endpoint side is indexed only when a node with that **exact**
    /// packed id is registered, so a partition holds just the outgoing
    /// side of an edge leaving it and just the incoming side of an edge
    /// entering it, and a foreign endpoint can never collide with an
    /// unrelated local node that shares its local id.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DetachedEdge`] when the edge connects to no
    /// registered node at all, or when an intra-partition edge is
    /// missing either endpoint (such an edge lives wholly in one
    /// registry, so both sides must be present).
    pub fn insert_edge(&mut self, edge: GraphEdge) -> Result<EdgeId> {
        let source = edge.source();
        let target = edge.target();
        let source_here = self
            .nodes
            .get(&source.local())
            .is_some_and(|n| n.id() == source);
        let target_here = self
            .nodes
            .get(&target.local())
            .is_some_and(|n| n.id() == target);

        let complete = if edge.is_intra_partition() {
            source_here && target_here
        } else {
            source_here || target_here
        };
        if !complete {
            return Err(Error::DetachedEdge {
                from: source,
                to: target,
            });
        }

        let id = EdgeId(self.edges.len());
        if source_here {
            self.outgoing.entry(source.local()).or_default().push(id);
        }
        if target_here {
            self.incoming.entry(target.local()).or_default().push(id);
        }
        self.edges.push(edge);
        Ok(id)
    }

    /// Resolves an edge id issued by this store.
    #[must_use]
    pub fn edge(&self, id: EdgeId) -> &GraphEdge {
        &self.edges[id.0]
    }

    /// Returns the number of registered edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Iterates over all edges in registration order.
    pub fn edges(&self) -> impl Iterator<Item = &GraphEdge> {
        self.edges.iter()
    }

    /// Returns the outgoing edge ids of a node in registration order.
    #[must_use]
    pub fn outgoing_ids(&self, local: u16) -> &[EdgeId] {
        self.outgoing.get(&local).map_or(&[], Vec::as_slice)
    }

    /// Returns the outgoing edges of a node in registration order.
    #[must_use]
    pub fn outgoing(&self, local: u16) -> Vec<&GraphEdge> {
        self.outgoing
            .get(&local)
            .map(|ids| ids.iter().map(|&id| self.edge(id)).collect())
            .unwrap_or_default()
    }

    /// Returns the incoming edges of a node in registration order.
    #[must_use]
    pub fn incoming(&self, local: u16) -> Vec<&GraphEdge> {
        self.incoming
            .get(&local)
            .map(|ids| ids.iter().map(|&id| self.edge(id)).collect())
            .unwrap_or_default()
    }

    // ── Queries ────────────────────────────────────────────────────────

    /// Finds a minimum-hop path between two local ids with every edge
    /// admitted.
    ///
    /// The returned edges are in source-to-destination order. A missing
    /// endpoint yields [`PathOutcome::MissingEndpoint`], an unreachable
    /// pair [`PathOutcome::NoPath`]; neither is an error.
    #[must_use]
    pub fn find_path(&self, src_local: u16, dst_local: u16) -> PathOutcome {
        shortest_path(self, src_local, dst_local, &EdgePolicy::All)
    }
}
