// src/topo/mod.rs

//! Topological ordering.
//!
//! - [`kahn`] orders any DAG-shaped [`Graph`](crate::graph::Graph) with
//!   Kahn's in-degree frontier algorithm.
//! - [`expand`] turns a component-level order into a node-level one.

pub mod expand;
pub mod kahn;

pub use expand::original_node_order;
pub use kahn::kahn_topo_sort;

use crate::graph::NodeId;

/// `position[node]` = index of `node` in `order`; `None` for absent nodes.
pub fn positions(order: &[NodeId], node_count: usize) -> Vec<Option<usize>> {
    let mut position = vec![None; node_count];
    for (i, &node) in order.iter().enumerate() {
        if let Some(slot) = position.get_mut(node) {
            *slot = Some(i);
        }
    }
    position
}
