// src/paths/reconstruct.rs

use tracing::warn;

use crate::errors::{CityschedError, Result};
use crate::graph::{NodeId, WeightedGraph, check_node, check_order};
use crate::paths::distance::DistanceTable;
use crate::topo::positions;

/// Rebuild the path from the graph's source to `target` using only the
/// distance values.
///
/// Walking backwards from `target`, each step scans `order` from the start
/// and takes the first node `u` placed strictly before the current node with
/// an edge `u -> current` satisfying `dist[u] + w == dist[current]`. The
/// earliest such predecessor wins ties.
///
/// Returns an empty path if `target` is unreached. This is best-effort: if
/// no predecessor matches (the table does not come from this graph and
/// order), the partial path found so far is returned.
///
/// Cost is O(V·E) per call, fine for graphs of a few hundred nodes. For
/// anything larger use [`DistanceTable::path_to`], which follows the
/// predecessors recorded during relaxation.
pub fn reconstruct_path(
    dist: &DistanceTable,
    graph: &WeightedGraph,
    target: NodeId,
    order: &[NodeId],
) -> Result<Vec<NodeId>> {
    let n = graph.node_count();
    if dist.len() != n {
        return Err(CityschedError::LengthMismatch {
            expected: n,
            actual: dist.len(),
        });
    }
    check_node(target, n)?;
    check_order(order, n)?;

    if !dist.is_reached(target) {
        return Ok(Vec::new());
    }

    let position = positions(order, n);
    let mut path = vec![target];
    let mut current = target;

    while current != graph.source() {
        let (Some(current_pos), Some(current_dist)) = (position[current], dist.get(current)) else {
            warn!(node = current, "node missing from order; returning partial path");
            break;
        };

        let predecessor = order.iter().copied().find(|&u| {
            let before = position[u].is_some_and(|p| p < current_pos);
            before
                && dist.get(u).is_some_and(|du| {
                    graph
                        .edges_from(u)
                        .iter()
                        .any(|e| e.to == current && du.checked_add(e.weight) == Some(current_dist))
                })
        });

        match predecessor {
            Some(u) => {
                path.push(u);
                current = u;
            }
            None => {
                warn!(
                    node = target,
                    stuck_at = current,
                    "no predecessor matches the distance table; returning partial path"
                );
                break;
            }
        }
    }

    path.reverse();
    Ok(path)
}
