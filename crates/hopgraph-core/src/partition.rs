//! A single partition's induced subgraph.
//!
//! A partition owns its own registry. Nodes of other partitions never
//! appear in it; edges crossing the boundary are held one-sided
//! (outgoing for edges leaving, incoming for edges entering), which is
//! exactly the information boundary discovery needs.

use rayon::prelude::*;
use tracing::debug;

use crate::error::Result;
use crate::graph::{shortest_path, EdgePolicy, GraphEdge, GraphStore, PathOutcome};
use crate::id::NodeId;

/// One partition of the input graph.
#[derive(Debug, Default, Clone)]
pub struct Partition {
    id: u16,
    store: GraphStore,
    /// Boundary ("external") nodes, ascending local id, no duplicates.
    boundary: Vec<u16>,
}

impl Partition {
    /// Creates an empty partition.
    #[must_use]
    pub fn new(id: u16) -> Self {
        Self {
            id,
            store: GraphStore::new(),
            boundary: Vec::new(),
        }
    }

    /// Returns the partition id.
    #[must_use]
    pub fn id(&self) -> u16 {
        self.id
    }

    /// Returns the partition's node and edge registry.
    #[must_use]
    pub fn store(&self) -> &GraphStore {
        &self.store
    }

    pub(crate) fn store_mut(&mut self) -> &mut GraphStore {
        &mut self.store
    }

    /// Returns the boundary nodes found by the last
    /// [`identify_boundary_nodes`](Self::identify_boundary_nodes) run.
    #[must_use]
    pub fn boundary(&self) -> &[u16] {
        &self.boundary
    }

    /// Runs boundary discovery, then hop-edge construction.
    ///
    /// Hop-edge construction depends on the boundary set being final,
    /// so the order is fixed.
    pub fn initialize(&mut self) -> Result<()> {
        self.identify_boundary_nodes();
        self.build_hop_edges()
    }

    /// Recomputes the boundary-node set from scratch.
    ///
    /// A node is boundary iff any incident edge crosses the partition
    /// boundary; outgoing edges are checked first, incoming only when
    /// needed. Idempotent: re-running yields the same set.
    pub fn identify_boundary_nodes(&mut self) {
        let mut boundary = Vec::new();
        for local in self.store.locals_sorted() {
            let crosses = self
                .store
                .outgoing(local)
                .iter()
                .any(|e| e.is_inter_partition())
                || self
                    .store
                    .incoming(local)
                    .iter()
                    .any(|e| e.is_inter_partition());
            if crosses {
                boundary.push(local);
            }
        }
        self.boundary = boundary;
    }

    /// Precomputes hop edges between every ordered pair of distinct
    /// boundary nodes and registers them in this partition.
    ///
    /// Each pair search runs under [`EdgePolicy::IntraPartition`], so a
    /// shortcut is never built from another shortcut and never leaves
    /// the partition. Only paths of two or more edges become hop edges;
    /// a direct edge needs no shortcut and unreachable pairs are
    /// skipped. The O(B²) pair searches are independent (search state
    /// is traversal-local) and run in parallel; registration stays in
    /// pair order to keep the arena deterministic.
    pub fn build_hop_edges(&mut self) -> Result<()> {
        let mut pairs: Vec<(u16, u16)> = Vec::new();
        for &src in &self.boundary {
            for &dst in &self.boundary {
                if src != dst {
                    pairs.push((src, dst));
                }
            }
        }

        let id = self.id;
        let store = &self.store;
        let hops: Vec<GraphEdge> = pairs
            .par_iter()
            .filter_map(|&(src, dst)| {
                match shortest_path(store, src, dst, &EdgePolicy::IntraPartition) {
                    PathOutcome::Found(path) if path.len() > 1 => Some(GraphEdge::hop(
                        NodeId::new(id, src),
                        NodeId::new(id, dst),
                        path,
                    )),
                    _ => None,
                }
            })
            .collect::<Result<Vec<_>>>()?;

        let count = hops.len();
        for hop in hops {
            self.store.insert_edge(hop)?;
        }
        debug!(
            partition = self.id,
            boundary = self.boundary.len(),
            hop_edges = count,
            "partition precomputation complete"
        );
        Ok(())
    }
}
