// src/paths/critical.rs

use tracing::{debug, info};

use crate::errors::Result;
use crate::graph::{NodeId, WeightedGraph, check_node};
use crate::paths::distance::DistanceTable;
use crate::paths::reconstruct::reconstruct_path;
use crate::types::PathStrategy;

/// The longest path out of the source and its total weight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CriticalPath {
    pub target: NodeId,
    pub length: i64,
    pub path: Vec<NodeId>,
}

/// Reached node with the largest distance; ties go to the lowest id.
pub fn farthest_node(longest: &DistanceTable) -> Option<(NodeId, i64)> {
    let mut best: Option<(NodeId, i64)> = None;
    for (node, d) in longest.as_slice().iter().enumerate() {
        if let Some(d) = *d {
            if best.is_none_or(|(_, max)| d > max) {
                best = Some((node, d));
            }
        }
    }
    best
}

/// Critical path from a longest-distance table.
///
/// The endpoint is `target` if given, otherwise the [`farthest_node`].
/// Returns `None` when the endpoint is unreached.
pub fn critical_path(
    longest: &DistanceTable,
    graph: &WeightedGraph,
    order: &[NodeId],
    strategy: PathStrategy,
    target: Option<NodeId>,
) -> Result<Option<CriticalPath>> {
    let endpoint = match target {
        Some(t) => {
            check_node(t, graph.node_count())?;
            longest.get(t).map(|d| (t, d))
        }
        None => farthest_node(longest),
    };

    let Some((target, length)) = endpoint else {
        info!(source = graph.source(), "no critical path: endpoint unreached");
        return Ok(None);
    };

    let path = match strategy {
        PathStrategy::Scan => reconstruct_path(longest, graph, target, order)?,
        PathStrategy::Parent => longest.path_to(target),
    };

    debug!(node = target, length, hops = path.len(), ?strategy, "critical path reconstructed");
    Ok(Some(CriticalPath {
        target,
        length,
        path,
    }))
}
