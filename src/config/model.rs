// src/config/model.rs

use serde::Deserialize;

use crate::errors::Result;
use crate::graph::{Graph, NodeId, WeightedGraph};
use crate::types::PathStrategy;

/// Top-level configuration as read from a TOML file.
///
/// ```toml
/// [config]
/// path_strategy = "scan"
/// target = 7
///
/// [graph]
/// nodes = 8
/// source = 4
/// edges = [
///   { from = 4, to = 5, weight = 2 },
///   { from = 5, to = 6 },
/// ]
/// ```
///
/// This is the unchecked form; convert with `ConfigFile::try_from`.
#[derive(Debug, Clone, Deserialize)]
pub struct RawConfigFile {
    /// Analysis options from `[config]`.
    #[serde(default)]
    pub config: ConfigSection,

    /// The graph itself from `[graph]`.
    pub graph: GraphSection,
}

/// `[config]` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigSection {
    /// `"scan"` (default) or `"parent"`.
    #[serde(default)]
    pub path_strategy: PathStrategy,

    /// Endpoint of the reported critical path.
    ///
    /// If `None`, the reached node with the largest longest-path distance
    /// is used.
    #[serde(default)]
    pub target: Option<NodeId>,
}

/// `[graph]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphSection {
    /// Node count; nodes are `0..nodes`.
    pub nodes: usize,

    /// Start node for the distance computations.
    pub source: NodeId,

    /// Directed edges, in adjacency order.
    #[serde(default)]
    pub edges: Vec<EdgeConfig>,
}

/// One `{ from, to, weight }` entry of `graph.edges`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct EdgeConfig {
    pub from: NodeId,
    pub to: NodeId,

    /// Defaults to 1 when omitted.
    #[serde(default = "default_weight")]
    pub weight: i64,
}

fn default_weight() -> i64 {
    1
}

/// Validated configuration.
///
/// Every edge endpoint, the source and the optional target are known to be
/// `< graph.nodes`, and `graph.nodes >= 1`.
#[derive(Debug, Clone)]
pub struct ConfigFile {
    pub config: ConfigSection,
    pub graph: GraphSection,
}

impl ConfigFile {
    pub(crate) fn new_unchecked(config: ConfigSection, graph: GraphSection) -> Self {
        Self { config, graph }
    }

    /// Unweighted structure of the configured graph (edge order preserved).
    pub fn graph(&self) -> Result<Graph> {
        Graph::from_edges(
            self.graph.nodes,
            self.graph.edges.iter().map(|e| (e.from, e.to)),
        )
    }

    /// Weighted form of the configured graph, rooted at `graph.source`.
    pub fn weighted_graph(&self) -> Result<WeightedGraph> {
        WeightedGraph::from_edges(
            self.graph.nodes,
            self.graph.source,
            self.graph.edges.iter().map(|e| (e.from, e.to, e.weight)),
        )
    }
}
