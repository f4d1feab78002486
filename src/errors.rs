// src/errors.rs

//! Crate-wide error aliases and helpers.

use thiserror::Error;

use crate::graph::NodeId;

#[derive(Error, Debug)]
pub enum CityschedError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Graph must contain at least one node")]
    EmptyGraph,

    #[error("Node {node} is out of range for a graph with {node_count} nodes")]
    NodeOutOfRange { node: NodeId, node_count: usize },

    #[error("Source node {node} is out of range for a graph with {node_count} nodes")]
    SourceOutOfRange { node: NodeId, node_count: usize },

    #[error("Cycle detected: topological order covers {} of {node_count} nodes", ordered.len())]
    CycleDetected {
        /// The partial order emitted before the frontier ran dry.
        ordered: Vec<NodeId>,
        node_count: usize,
    },

    #[error("Size mismatch: expected {expected} nodes, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("Distance overflow relaxing edge {from} -> {to}")]
    WeightOverflow { from: NodeId, to: NodeId },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, CityschedError>;
