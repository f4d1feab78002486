// src/graph/weighted.rs

use std::fmt;

use crate::errors::{CityschedError, Result};
use crate::graph::{Graph, NodeId, check_node};

/// Outgoing edge of a [`WeightedGraph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeightedEdge {
    pub to: NodeId,
    pub weight: i64,
}

impl fmt::Display for WeightedEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(->{}, w:{})", self.to, self.weight)
    }
}

/// Weighted directed graph with a designated source node.
///
/// Nothing requires the source to reach every node; unreachable nodes keep
/// their sentinel distance in the path engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeightedGraph {
    source: NodeId,
    adjacency: Vec<Vec<WeightedEdge>>,
}

impl WeightedGraph {
    /// A graph with `node_count` nodes, no edges and the given source.
    pub fn new(node_count: usize, source: NodeId) -> Result<Self> {
        if node_count == 0 {
            return Err(CityschedError::EmptyGraph);
        }
        if source >= node_count {
            return Err(CityschedError::SourceOutOfRange {
                node: source,
                node_count,
            });
        }
        Ok(Self {
            source,
            adjacency: vec![Vec::new(); node_count],
        })
    }

    /// Build from `(from, to, weight)` triples, keeping their order.
    pub fn from_edges(
        node_count: usize,
        source: NodeId,
        edges: impl IntoIterator<Item = (NodeId, NodeId, i64)>,
    ) -> Result<Self> {
        let mut graph = Self::new(node_count, source)?;
        for (u, v, w) in edges {
            graph.add_edge(u, v, w)?;
        }
        Ok(graph)
    }

    pub fn add_edge(&mut self, u: NodeId, v: NodeId, weight: i64) -> Result<()> {
        let n = self.node_count();
        check_node(u, n)?;
        check_node(v, n)?;
        self.adjacency[u].push(WeightedEdge { to: v, weight });
        Ok(())
    }

    pub fn source(&self) -> NodeId {
        self.source
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    /// Outgoing edges of `u`, in insertion order.
    pub fn edges_from(&self, u: NodeId) -> &[WeightedEdge] {
        self.adjacency.get(u).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Weight of the first `u -> v` edge, if any.
    pub fn weight(&self, u: NodeId, v: NodeId) -> Option<i64> {
        self.edges_from(u)
            .iter()
            .find(|e| e.to == v)
            .map(|e| e.weight)
    }

    /// The same topology with weights dropped.
    pub fn structure(&self) -> Graph {
        // Endpoints were validated on insertion.
        Graph::new_unchecked(
            self.adjacency
                .iter()
                .map(|edges| edges.iter().map(|e| e.to).collect())
                .collect(),
        )
    }
}

impl fmt::Display for WeightedGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Graph[n={}, edges={}, source={}]",
            self.node_count(),
            self.edge_count(),
            self.source
        )
    }
}
