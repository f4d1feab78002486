// src/topo/kahn.rs

use std::collections::VecDeque;

use tracing::{debug, warn};

use crate::errors::{CityschedError, Result};
use crate::graph::{Graph, NodeId};
use crate::metrics::MetricsSink;

/// Kahn's algorithm.
///
/// The frontier is a FIFO seeded with every zero in-degree node in ascending
/// id order; a node is pushed the moment its last incoming edge is consumed.
/// The resulting order is therefore fully determined by the graph's node ids
/// and successor order.
///
/// If the graph contains a cycle, the nodes on and behind it never reach
/// in-degree zero. That case is reported as
/// [`CityschedError::CycleDetected`], which carries the partial order that
/// was emitted before the frontier ran dry.
pub fn kahn_topo_sort(graph: &Graph, metrics: &mut dyn MetricsSink) -> Result<Vec<NodeId>> {
    metrics.start_timer();

    let n = graph.node_count();
    let mut in_degree = vec![0usize; n];
    for (_, v) in graph.edges() {
        in_degree[v] += 1;
    }

    let mut frontier: VecDeque<NodeId> = VecDeque::new();
    for (node, &degree) in in_degree.iter().enumerate() {
        if degree == 0 {
            frontier.push_back(node);
            metrics.kahn_push();
        }
    }

    let mut order = Vec::with_capacity(n);
    while let Some(u) = frontier.pop_front() {
        metrics.kahn_pop();
        order.push(u);

        for &v in graph.successors(u) {
            in_degree[v] -= 1;
            if in_degree[v] == 0 {
                frontier.push_back(v);
                metrics.kahn_push();
            }
        }
    }

    metrics.stop_timer();

    if order.len() < n {
        warn!(
            ordered = order.len(),
            node_count = n,
            "kahn: frontier exhausted early; graph has a cycle"
        );
        return Err(CityschedError::CycleDetected {
            ordered: order,
            node_count: n,
        });
    }

    debug!(node_count = n, "kahn: topological order complete");
    Ok(order)
}
