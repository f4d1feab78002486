// src/paths/distance.rs

use tracing::{debug, warn};

use crate::errors::{CityschedError, Result};
use crate::graph::{NodeId, WeightedGraph, check_order};
use crate::metrics::MetricsSink;

/// Which extremal distance a table holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Objective {
    /// Minimum total weight; unreached nodes sit at `+∞`.
    Shortest,
    /// Maximum total weight; unreached nodes sit at `-∞`.
    Longest,
}

impl Objective {
    /// Whether `candidate` is strictly better than `current`.
    fn improves(self, candidate: i64, current: Option<i64>) -> bool {
        match (self, current) {
            (_, None) => true,
            (Objective::Shortest, Some(d)) => candidate < d,
            (Objective::Longest, Some(d)) => candidate > d,
        }
    }

    /// Display form of the unreached sentinel.
    pub fn sentinel(self) -> &'static str {
        match self {
            Objective::Shortest => "∞",
            Objective::Longest => "-∞",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Objective::Shortest => "Shortest",
            Objective::Longest => "Longest",
        }
    }
}

/// Per-node distances from the graph's source for one objective.
///
/// `None` is the objective's sentinel (`+∞` for shortest, `-∞` for longest)
/// and means the node was never reached. Check [`is_reached`](Self::is_reached)
/// before reading a distance as a number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceTable {
    objective: Objective,
    source: NodeId,
    dist: Vec<Option<i64>>,
    /// Node whose relaxation last strictly improved each entry.
    pred: Vec<Option<NodeId>>,
}

impl DistanceTable {
    fn init(objective: Objective, node_count: usize, source: NodeId) -> Self {
        let mut dist = vec![None; node_count];
        dist[source] = Some(0);
        Self {
            objective,
            source,
            dist,
            pred: vec![None; node_count],
        }
    }

    pub fn objective(&self) -> Objective {
        self.objective
    }

    pub fn source(&self) -> NodeId {
        self.source
    }

    pub fn len(&self) -> usize {
        self.dist.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dist.is_empty()
    }

    /// Finite distance of `node`, or `None` if unreached or out of range.
    pub fn get(&self, node: NodeId) -> Option<i64> {
        self.dist.get(node).copied().flatten()
    }

    pub fn is_reached(&self, node: NodeId) -> bool {
        self.get(node).is_some()
    }

    pub fn as_slice(&self) -> &[Option<i64>] {
        &self.dist
    }

    /// Predecessor recorded for `node` during relaxation.
    pub fn predecessor(&self, node: NodeId) -> Option<NodeId> {
        self.pred.get(node).copied().flatten()
    }

    /// Distance of `node` as text, with `∞`/`-∞` for unreached nodes.
    pub fn display_entry(&self, node: NodeId) -> String {
        match self.get(node) {
            Some(d) => d.to_string(),
            None => self.objective.sentinel().to_string(),
        }
    }

    /// Path from the source to `target` by following recorded predecessors.
    ///
    /// Empty if `target` is unreached. Runs in time linear in the path
    /// length. If the chain breaks before reaching the source the partial
    /// path is returned as-is.
    pub fn path_to(&self, target: NodeId) -> Vec<NodeId> {
        if !self.is_reached(target) {
            return Vec::new();
        }

        let mut path = vec![target];
        let mut current = target;
        while current != self.source {
            // A consistent predecessor chain never revisits a node.
            if path.len() > self.dist.len() {
                warn!(node = target, "predecessor chain loops; returning partial path");
                break;
            }
            match self.predecessor(current) {
                Some(p) => {
                    path.push(p);
                    current = p;
                }
                None => {
                    warn!(node = target, stuck_at = current, "predecessor chain broken; returning partial path");
                    break;
                }
            }
        }

        path.reverse();
        path
    }
}

/// Single-source shortest distances, relaxing nodes in `order`.
pub fn shortest_path(
    graph: &WeightedGraph,
    order: &[NodeId],
    metrics: &mut dyn MetricsSink,
) -> Result<DistanceTable> {
    relax_in_order(graph, order, Objective::Shortest, metrics)
}

/// Single-source longest distances, relaxing nodes in `order`.
pub fn longest_path(
    graph: &WeightedGraph,
    order: &[NodeId],
    metrics: &mut dyn MetricsSink,
) -> Result<DistanceTable> {
    relax_in_order(graph, order, Objective::Longest, metrics)
}

/// DAG dynamic programming: when `u` comes up in `order`, no node later in
/// the order has an edge into it, so `dist[u]` is already final and its
/// outgoing edges can be relaxed once.
fn relax_in_order(
    graph: &WeightedGraph,
    order: &[NodeId],
    objective: Objective,
    metrics: &mut dyn MetricsSink,
) -> Result<DistanceTable> {
    check_order(order, graph.node_count())?;

    metrics.start_timer();
    let result = relax_all(graph, order, objective, metrics);
    metrics.stop_timer();

    let table = result?;
    debug!(
        objective = objective.label(),
        source = graph.source(),
        reached = table.dist.iter().filter(|d| d.is_some()).count(),
        "distances computed"
    );
    Ok(table)
}

fn relax_all(
    graph: &WeightedGraph,
    order: &[NodeId],
    objective: Objective,
    metrics: &mut dyn MetricsSink,
) -> Result<DistanceTable> {
    let mut table = DistanceTable::init(objective, graph.node_count(), graph.source());

    for &u in order {
        let Some(du) = table.dist[u] else {
            continue;
        };

        for edge in graph.edges_from(u) {
            metrics.relaxation();
            let candidate = du
                .checked_add(edge.weight)
                .ok_or_else(|| CityschedError::WeightOverflow { from: u, to: edge.to })?;
            if objective.improves(candidate, table.dist[edge.to]) {
                table.dist[edge.to] = Some(candidate);
                table.pred[edge.to] = Some(u);
            }
        }
    }

    Ok(table)
}
