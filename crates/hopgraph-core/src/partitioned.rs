//! Partitioned orchestration and the derived query graphs.
//!
//! [`PartitionedGraph::new`] splits a flat input graph into
//! per-partition registries, runs boundary discovery and hop-edge
//! precomputation on each, then assembles the two derived graphs:
//! [`CombinedGraph`], the union searched by cross-partition queries,
//! and [`ExternalGraph`], the reduced boundary-only graph kept as an
//! auxiliary query surface.

use std::collections::BTreeMap;

use rayon::prelude::*;
use tracing::debug;

use crate::error::Result;
use crate::graph::{shortest_path, EdgePolicy, GraphStore, PathOutcome};
use crate::partition::Partition;

/// Union of every partition's nodes and edges, including hop edges and
/// inter-partition edges.
///
/// This is the graph cross-partition queries actually search. Its
/// admissibility rule admits every plain edge but takes a hop edge only
/// when the hop's partition is purely in transit between the query
/// endpoints.
#[derive(Debug, Clone)]
pub struct CombinedGraph {
    store: GraphStore,
}

impl CombinedGraph {
    fn build(partitions: &BTreeMap<u16, Partition>) -> Result<Self> {
        let mut store = GraphStore::new();
        // Partitions split one flat registry, so their local ids are
        // disjoint sets.
        for partition in partitions.values() {
            for local in partition.store().locals_sorted() {
                let Some(node) = partition.store().node(local) else {
                    continue;
                };
                store.add_node(*node)?;
            }
        }
        for partition in partitions.values() {
            for edge in partition.store().edges() {
                // An inter-partition edge is held by both partitions
                // (one side each); register it once, from its source's.
                if edge.is_inter_partition() && edge.source().partition() != partition.id() {
                    continue;
                }
                store.insert_edge(edge.clone())?;
            }
        }
        debug!(
            nodes = store.node_count(),
            edges = store.edge_count(),
            "combined graph assembled"
        );
        Ok(Self { store })
    }

    /// Returns the underlying union store.
    #[must_use]
    pub fn store(&self) -> &GraphStore {
        &self.store
    }

    /// Finds a minimum-hop path, admitting hop edges only for purely
    /// in-transit partitions.
    #[must_use]
    pub fn find_path(&self, src_local: u16, dst_local: u16) -> PathOutcome {
        let Some(src) = self.store.node(src_local) else {
            return PathOutcome::MissingEndpoint(src_local);
        };
        let Some(dst) = self.store.node(dst_local) else {
            return PathOutcome::MissingEndpoint(dst_local);
        };
        let policy = EdgePolicy::TransitHops {
            src_partition: src.partition(),
            dst_partition: dst.partition(),
        };
        shortest_path(&self.store, src_local, dst_local, &policy)
    }
}

/// Reduced graph containing only boundary nodes and the edges that
/// connect them: hop edges, inter-partition edges, and plain
/// intra-partition edges between two boundary nodes.
///
/// Built eagerly alongside [`CombinedGraph`] but not consulted by the
/// primary query path; it remains available for boundary-level
/// reachability questions.
#[derive(Debug, Clone)]
pub struct ExternalGraph {
    store: GraphStore,
}

impl ExternalGraph {
    fn build(partitions: &BTreeMap<u16, Partition>) -> Result<Self> {
        let mut store = GraphStore::new();
        for partition in partitions.values() {
            for &local in partition.boundary() {
                let Some(node) = partition.store().node(local) else {
                    continue;
                };
                store.add_node(*node)?;
            }
        }
        for partition in partitions.values() {
            for &local in partition.boundary() {
                for edge in partition.store().outgoing(local) {
                    if edge.is_hop() || edge.is_inter_partition() {
                        store.insert_edge(edge.clone())?;
                    } else {
                        // Plain intra-partition edges survive only when
                        // both endpoints made it into the boundary set.
                        let src_here = store
                            .node(edge.source().local())
                            .is_some_and(|n| n.id() == edge.source());
                        let dst_here = store
                            .node(edge.target().local())
                            .is_some_and(|n| n.id() == edge.target());
                        if src_here && dst_here {
                            store.insert_edge(edge.clone())?;
                        }
                    }
                }
            }
        }
        debug!(
            nodes = store.node_count(),
            edges = store.edge_count(),
            "external graph assembled"
        );
        Ok(Self { store })
    }

    /// Returns the underlying boundary-only store.
    #[must_use]
    pub fn store(&self) -> &GraphStore {
        &self.store
    }

    /// Finds a minimum-hop path between two boundary nodes.
    #[must_use]
    pub fn find_boundary_path(&self, src_local: u16, dst_local: u16) -> PathOutcome {
        shortest_path(&self.store, src_local, dst_local, &EdgePolicy::All)
    }
}

/// Orchestrator: splits an input graph into partitions, precomputes
/// each partition's boundary and hop edges, and serves cross-partition
/// path queries.
///
/// # Example
///
/// ```rust
/// use hopgraph_core::{loader, PartitionedGraph};
///
/// let (graph, _) = loader::load_str("0 1 0 2\n0 2 1 5\n1 5 1 6\n1 6 2 9\n")?;
/// let partitioned = PartitionedGraph::new(&graph)?;
/// assert!(partitioned.find_path(1, 9).is_found());
/// # Ok::<(), hopgraph_core::Error>(())
/// ```
#[derive(Debug)]
pub struct PartitionedGraph {
    partitions: BTreeMap<u16, Partition>,
    external: ExternalGraph,
    combined: CombinedGraph,
}

impl PartitionedGraph {
    /// Splits `source` by partition id, initializes every partition,
    /// and assembles the derived graphs.
    ///
    /// Every original edge is re-registered explicitly: into its source
    /// partition (outgoing side) and, when it crosses the boundary,
    /// into its destination partition as well (incoming side).
    ///
    /// # Errors
    ///
    /// Propagates registration errors, which indicate a corrupt input
    /// store rather than a query-time condition.
    pub fn new(source: &GraphStore) -> Result<Self> {
        let mut partitions: BTreeMap<u16, Partition> = BTreeMap::new();

        for local in source.locals_sorted() {
            let Some(node) = source.node(local) else {
                continue;
            };
            partitions
                .entry(node.partition())
                .or_insert_with(|| Partition::new(node.partition()))
                .store_mut()
                .add_node(*node)?;
        }

        for edge in source.edges() {
            let src_partition = edge.source().partition();
            let dst_partition = edge.target().partition();
            if let Some(partition) = partitions.get_mut(&src_partition) {
                partition.store_mut().insert_edge(edge.clone())?;
            }
            if dst_partition != src_partition {
                if let Some(partition) = partitions.get_mut(&dst_partition) {
                    partition.store_mut().insert_edge(edge.clone())?;
                }
            }
        }

        // Per-partition precomputation is independent; search state is
        // local to each traversal, so partitions run in parallel.
        let mut refs: Vec<&mut Partition> = partitions.values_mut().collect();
        refs.par_iter_mut().try_for_each(|p| p.initialize())?;

        let external = ExternalGraph::build(&partitions)?;
        let combined = CombinedGraph::build(&partitions)?;
        debug!(partitions = partitions.len(), "partitioned graph ready");

        Ok(Self {
            partitions,
            external,
            combined,
        })
    }

    /// Looks up a partition by id.
    #[must_use]
    pub fn partition(&self, id: u16) -> Option<&Partition> {
        self.partitions.get(&id)
    }

    /// Iterates over partitions in ascending partition-id order.
    pub fn partitions(&self) -> impl Iterator<Item = &Partition> {
        self.partitions.values()
    }

    /// Returns the number of partitions.
    #[must_use]
    pub fn partition_count(&self) -> usize {
        self.partitions.len()
    }

    /// Returns the union graph served by [`find_path`](Self::find_path).
    #[must_use]
    pub fn combined_graph(&self) -> &CombinedGraph {
        &self.combined
    }

    /// Returns the auxiliary boundary-only graph.
    #[must_use]
    pub fn external_graph(&self) -> &ExternalGraph {
        &self.external
    }

    /// Finds a cross-partition path via the combined graph.
    #[must_use]
    pub fn find_path(&self, src_local: u16, dst_local: u16) -> PathOutcome {
        self.combined.find_path(src_local, dst_local)
    }
}
