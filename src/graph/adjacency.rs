// src/graph/adjacency.rs

use std::fmt;

use crate::errors::Result;
use crate::graph::{NodeId, check_node};

/// Directed graph over nodes `0..node_count`, stored as one ordered successor
/// list per node.
///
/// Multi-edges and self-loops are allowed. Successor order is preserved as
/// inserted; the engines iterate it as-is, which keeps their output
/// deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Graph {
    adjacency: Vec<Vec<NodeId>>,
}

impl Graph {
    /// A graph with `node_count` nodes and no edges.
    pub fn new(node_count: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); node_count],
        }
    }

    /// Build from a ready-made adjacency list, validating every target.
    pub fn from_adjacency(adjacency: Vec<Vec<NodeId>>) -> Result<Self> {
        let node_count = adjacency.len();
        for targets in &adjacency {
            for &v in targets {
                check_node(v, node_count)?;
            }
        }
        Ok(Self { adjacency })
    }

    /// Wrap an adjacency list whose targets are already known to be in range.
    pub(crate) fn new_unchecked(adjacency: Vec<Vec<NodeId>>) -> Self {
        Self { adjacency }
    }

    /// Build from an edge list, keeping edges in the order given.
    pub fn from_edges(
        node_count: usize,
        edges: impl IntoIterator<Item = (NodeId, NodeId)>,
    ) -> Result<Self> {
        let mut graph = Self::new(node_count);
        for (u, v) in edges {
            graph.add_edge(u, v)?;
        }
        Ok(graph)
    }

    /// Append the edge `u -> v`.
    pub fn add_edge(&mut self, u: NodeId, v: NodeId) -> Result<()> {
        let n = self.node_count();
        check_node(u, n)?;
        check_node(v, n)?;
        self.adjacency[u].push(v);
        Ok(())
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    /// Immediate successors of `u`, in insertion order.
    ///
    /// Returns an empty slice for ids outside the graph.
    pub fn successors(&self, u: NodeId) -> &[NodeId] {
        self.adjacency.get(u).map(Vec::as_slice).unwrap_or(&[])
    }

    /// All edges as `(u, v)` pairs, grouped by source in ascending id order.
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.adjacency
            .iter()
            .enumerate()
            .flat_map(|(u, targets)| targets.iter().map(move |&v| (u, v)))
    }

    pub fn has_edge(&self, u: NodeId, v: NodeId) -> bool {
        self.successors(u).contains(&v)
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Graph[n={}, edges={}]",
            self.node_count(),
            self.edge_count()
        )
    }
}
