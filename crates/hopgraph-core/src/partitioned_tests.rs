//! Tests for the orchestrator and the derived query graphs.

use crate::graph::{GraphEdge, GraphStore, PathOutcome};
use crate::id::NodeId;
use crate::partitioned::PartitionedGraph;

fn add_edge(store: &mut GraphStore, src: NodeId, dst: NodeId) {
    store.ensure_endpoints(src, dst);
    store.insert_edge(GraphEdge::new(src, dst)).unwrap();
}

/// The reference example: partitions 0, 1, 2 chained through partition
/// 1's internal nodes 5 and 6.
///
/// ```text
/// (0,1) → (0,2) → (1,5) → (1,6) → (2,9)
/// ```
fn build_example_graph() -> GraphStore {
    let mut store = GraphStore::new();
    add_edge(&mut store, NodeId::new(0, 1), NodeId::new(0, 2));
    add_edge(&mut store, NodeId::new(0, 2), NodeId::new(1, 5));
    add_edge(&mut store, NodeId::new(1, 5), NodeId::new(1, 6));
    add_edge(&mut store, NodeId::new(1, 6), NodeId::new(2, 9));
    store
}

/// Like the example graph, but partition 1 has a longer interior
/// (5 → 6 → 7 → 8), so its boundary pair earns a hop edge.
fn build_long_transit_graph() -> GraphStore {
    let mut store = GraphStore::new();
    add_edge(&mut store, NodeId::new(0, 1), NodeId::new(0, 2));
    add_edge(&mut store, NodeId::new(0, 2), NodeId::new(1, 5));
    add_edge(&mut store, NodeId::new(1, 5), NodeId::new(1, 6));
    add_edge(&mut store, NodeId::new(1, 6), NodeId::new(1, 7));
    add_edge(&mut store, NodeId::new(1, 7), NodeId::new(1, 8));
    add_edge(&mut store, NodeId::new(1, 8), NodeId::new(2, 9));
    store
}

#[test]
fn test_split_by_partition_id() {
    let partitioned = PartitionedGraph::new(&build_example_graph()).unwrap();
    assert_eq!(partitioned.partition_count(), 3);

    let p0 = partitioned.partition(0).unwrap();
    assert_eq!(p0.store().locals_sorted(), vec![1, 2]);
    let p1 = partitioned.partition(1).unwrap();
    assert_eq!(p1.store().locals_sorted(), vec![5, 6]);
    let p2 = partitioned.partition(2).unwrap();
    assert_eq!(p2.store().locals_sorted(), vec![9]);
}

#[test]
fn test_cross_edges_registered_one_sided() {
    let partitioned = PartitionedGraph::new(&build_example_graph()).unwrap();

    // (0,2) → (1,5): outgoing side in partition 0, incoming in 1.
    let p0 = partitioned.partition(0).unwrap();
    assert!(p0.store().outgoing(2).iter().any(|e| e.is_inter_partition()));
    let p1 = partitioned.partition(1).unwrap();
    assert!(p1.store().incoming(5).iter().any(|e| e.is_inter_partition()));
    assert!(p1.store().outgoing(2).is_empty());
}

#[test]
fn test_boundaries_after_initialization() {
    let partitioned = PartitionedGraph::new(&build_example_graph()).unwrap();
    assert_eq!(partitioned.partition(0).unwrap().boundary(), &[2]);
    assert_eq!(partitioned.partition(1).unwrap().boundary(), &[5, 6]);
    assert_eq!(partitioned.partition(2).unwrap().boundary(), &[9]);
}

#[test]
fn test_end_to_end_example() {
    let store = build_example_graph();

    // Unpartitioned query: the full four-edge chain, source first.
    let flat = store.find_path(1, 9).into_edges();
    assert_eq!(flat.len(), 4);
    assert_eq!(flat[0].source(), NodeId::new(0, 1));
    assert_eq!(flat[3].target(), NodeId::new(2, 9));

    // Partitioned query: never empty, logically equivalent length.
    // Partition 1's hop 5 → 6 would be a one-edge path, so no hop edge
    // exists and the combined search walks the same four real edges.
    let partitioned = PartitionedGraph::new(&store).unwrap();
    let path = partitioned.find_path(1, 9).into_edges();
    assert_eq!(path.len(), 4);
    assert!(path.iter().all(|e| !e.is_hop()));
    assert_eq!(path[0].source(), NodeId::new(0, 1));
    assert_eq!(path[3].target(), NodeId::new(2, 9));
}

#[test]
fn test_transit_partition_compresses_through_hop() {
    let partitioned = PartitionedGraph::new(&build_long_transit_graph()).unwrap();

    // Partition 1 precomputed a 5 → 8 shortcut over its interior.
    let p1 = partitioned.partition(1).unwrap();
    let hops: Vec<&GraphEdge> = p1.store().edges().filter(|e| e.is_hop()).collect();
    assert_eq!(hops.len(), 1);
    assert_eq!(hops[0].members().len(), 3);

    // Querying 0 → 2 crosses partition 1 purely in transit, so the
    // shortcut is admissible: 1→2, 2→5, hop(5→8), 8→9.
    let path = partitioned.find_path(1, 9).into_edges();
    assert_eq!(path.len(), 4);
    assert!(path[2].is_hop());
    assert_eq!(path[2].members().len(), 3);

    // Logical length (hops expanded) matches the flat search.
    let logical: usize = path
        .iter()
        .map(|e| if e.is_hop() { e.members().len() } else { 1 })
        .sum();
    let flat = build_long_transit_graph().find_path(1, 9).into_edges();
    assert_eq!(logical, flat.len());
}

#[test]
fn test_hop_rejected_when_query_starts_or_ends_in_its_partition() {
    let partitioned = PartitionedGraph::new(&build_long_transit_graph()).unwrap();

    // Source inside partition 1: its own hop may not skip node 5's
    // fine-grained neighborhood.
    let path = partitioned.find_path(5, 9).into_edges();
    assert!(path.iter().all(|e| !e.is_hop()));
    assert_eq!(path.len(), 4); // 5→6, 6→7, 7→8, 8→9

    // Destination inside partition 1: same rule.
    let path = partitioned.find_path(1, 8).into_edges();
    assert!(path.iter().all(|e| !e.is_hop()));
    assert_eq!(path.len(), 5); // 1→2, 2→5, 5→6, 6→7, 7→8
}

#[test]
fn test_missing_and_unreachable_outcomes() {
    let partitioned = PartitionedGraph::new(&build_example_graph()).unwrap();
    assert_eq!(
        partitioned.find_path(1, 42),
        PathOutcome::MissingEndpoint(42)
    );
    // Edges all point forward; the reverse query is unreachable.
    assert_eq!(partitioned.find_path(9, 1), PathOutcome::NoPath);
}

#[test]
fn test_external_graph_contents() {
    let partitioned = PartitionedGraph::new(&build_long_transit_graph()).unwrap();
    let external = partitioned.external_graph();

    // Boundary nodes only: 2 (p0), 5 and 8 (p1), 9 (p2).
    assert_eq!(external.store().locals_sorted(), vec![2, 5, 8, 9]);

    // Edges: 2→5 and 8→9 (inter-partition) plus the hop 5→8.
    assert_eq!(external.store().edge_count(), 3);
    assert!(external.store().edges().any(|e| e.is_hop()));

    // The reduced graph answers boundary-to-boundary reachability.
    let path = external.find_boundary_path(2, 9).into_edges();
    assert_eq!(path.len(), 3);
}

#[test]
fn test_external_graph_keeps_boundary_to_boundary_plain_edges() {
    // Partition 1's two boundary nodes are directly connected, so the
    // plain intra-partition edge 5 → 6 survives into the reduced graph.
    let partitioned = PartitionedGraph::new(&build_example_graph()).unwrap();
    let external = partitioned.external_graph();

    assert_eq!(external.store().locals_sorted(), vec![2, 5, 6, 9]);
    assert!(external
        .store()
        .edges()
        .any(|e| e.is_intra_partition() && !e.is_hop()));

    let path = external.find_boundary_path(2, 9).into_edges();
    assert_eq!(path.len(), 3);
}

#[test]
fn test_single_partition_graph() {
    // Everything in partition 0: no boundary, no hops, plain search.
    let mut store = GraphStore::new();
    add_edge(&mut store, NodeId::new(0, 1), NodeId::new(0, 2));
    add_edge(&mut store, NodeId::new(0, 2), NodeId::new(0, 3));

    let partitioned = PartitionedGraph::new(&store).unwrap();
    assert_eq!(partitioned.partition_count(), 1);
    assert!(partitioned.partition(0).unwrap().boundary().is_empty());
    assert_eq!(partitioned.external_graph().store().node_count(), 0);

    let path = partitioned.find_path(1, 3).into_edges();
    assert_eq!(path.len(), 2);
}

#[test]
fn test_derived_graphs_cover_every_node_exactly_once() {
    // Splitting one flat registry yields disjoint partitions, and the
    // combined graph re-registers each node from exactly one of them.
    let store = build_long_transit_graph();
    let partitioned = PartitionedGraph::new(&store).unwrap();

    let per_partition: usize = partitioned
        .partitions()
        .map(|p| p.store().node_count())
        .sum();
    assert_eq!(per_partition, store.node_count());
    assert_eq!(
        partitioned.combined_graph().store().node_count(),
        store.node_count()
    );
}

#[test]
fn test_combined_graph_matches_flat_reachability() {
    // Whatever is reachable flat must stay reachable partitioned.
    let store = build_long_transit_graph();
    let partitioned = PartitionedGraph::new(&store).unwrap();

    for &(src, dst) in &[(1, 2), (1, 5), (2, 9), (5, 8), (1, 9)] {
        let flat = store.find_path(src, dst);
        let part = partitioned.find_path(src, dst);
        assert!(
            flat.is_found() && part.is_found(),
            "pair ({src}, {dst}) lost reachability"
        );
    }
}
