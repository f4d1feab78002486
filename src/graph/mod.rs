// src/graph/mod.rs

//! Adjacency-list graphs consumed by the analysis engines.
//!
//! - [`adjacency`] holds the unweighted [`Graph`] used for SCC detection and
//!   topological sorting (also the shape of a condensation graph).
//! - [`weighted`] holds the [`WeightedGraph`] with a designated source, used
//!   by the DAG distance engine.
//!
//! Both validate node ids eagerly: once constructed, every referenced id is
//! `< node_count`, so the engines can index without bounds surprises.

pub mod adjacency;
pub mod weighted;

pub use adjacency::Graph;
pub use weighted::{WeightedEdge, WeightedGraph};

/// Nodes are addressed by dense integer ids in `[0, node_count)`.
pub type NodeId = usize;

use crate::errors::{CityschedError, Result};

/// Reject `node` unless it addresses one of `node_count` nodes.
pub(crate) fn check_node(node: NodeId, node_count: usize) -> Result<()> {
    if node < node_count {
        Ok(())
    } else {
        Err(CityschedError::NodeOutOfRange { node, node_count })
    }
}

/// Reject any id in `order` that does not address one of `node_count` nodes.
pub(crate) fn check_order(order: &[NodeId], node_count: usize) -> Result<()> {
    order
        .iter()
        .try_for_each(|&node| check_node(node, node_count))
}
