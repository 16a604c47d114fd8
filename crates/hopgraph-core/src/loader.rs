//! Text graph-file loading.
//!
//! One edge per line: four whitespace-separated integers
//! `srcPartition srcLocalId dstPartition dstLocalId`. Blank lines are
//! skipped, and any line containing `#` is treated as a comment.
//! Malformed lines are skipped and counted rather than aborting the
//! load; the count is reported back so callers can surface it.
//!
//! Node identity is the local id. The first mention of a local id
//! fixes its partition; a later line naming the same local id under a
//! different partition aliases to the already-registered node, so its
//! edge still connects.

use std::fs;
use std::path::Path;

use tracing::warn;

use crate::error::Result;
use crate::graph::{GraphEdge, GraphStore};
use crate::id::NodeId;

/// Accounting for one load.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LoadStats {
    /// Edges registered.
    pub edges: usize,
    /// Malformed lines skipped (blank lines and comments not included).
    pub skipped: usize,
}

/// Parses a graph from text.
///
/// Endpoint nodes are created on first mention.
///
/// # Errors
///
/// Only registration failures propagate; malformed lines are counted
/// in [`LoadStats::skipped`] instead.
pub fn load_str(input: &str) -> Result<(GraphStore, LoadStats)> {
    let mut store = GraphStore::new();
    let mut stats = LoadStats::default();

    for (index, line) in input.lines().enumerate() {
        if line.trim().is_empty() || line.contains('#') {
            continue;
        }
        match parse_edge_line(line) {
            Some((source, target)) => {
                let source = resolve_endpoint(&mut store, source);
                let target = resolve_endpoint(&mut store, target);
                store.insert_edge(GraphEdge::new(source, target))?;
                stats.edges += 1;
            }
            None => {
                warn!(line = index + 1, content = line, "skipping malformed graph line");
                stats.skipped += 1;
            }
        }
    }
    Ok((store, stats))
}

/// Reads and parses a graph file.
///
/// # Errors
///
/// Returns an IO error when the file cannot be read, plus anything
/// [`load_str`] returns.
pub fn load_path<P: AsRef<Path>>(path: P) -> Result<(GraphStore, LoadStats)> {
    let text = fs::read_to_string(path)?;
    load_str(&text)
}

/// Resolves a mentioned endpoint to its registered node, creating it
/// on first mention. A partition mismatch against the registered node
/// is logged but does not reject the line.
fn resolve_endpoint(store: &mut GraphStore, mentioned: NodeId) -> NodeId {
    let registered = store.resolve_or_insert(mentioned);
    if registered != mentioned {
        warn!(
            mentioned = %mentioned,
            registered = %registered,
            "local id re-used under a different partition; using the registered node"
        );
    }
    registered
}

fn parse_edge_line(line: &str) -> Option<(NodeId, NodeId)> {
    let mut fields = line.split_whitespace();
    let src_partition = fields.next()?.parse::<u16>().ok()?;
    let src_local = fields.next()?.parse::<u16>().ok()?;
    let dst_partition = fields.next()?.parse::<u16>().ok()?;
    let dst_local = fields.next()?.parse::<u16>().ok()?;
    if fields.next().is_some() {
        return None;
    }
    Some((
        NodeId::new(src_partition, src_local),
        NodeId::new(dst_partition, dst_local),
    ))
}
