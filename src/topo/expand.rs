// src/topo/expand.rs

use crate::errors::Result;
use crate::graph::{NodeId, check_node};
use crate::scc::Component;

/// Expand a component-level order into a node-level order.
///
/// Concatenates the members of each component in `component_order`, keeping
/// each component's internal member order. When `component_order` is a
/// topological order of the condensation graph, the result is a topological
/// order of every edge that crosses components; edges inside a component
/// have no consistent order by definition.
///
/// Fails if `component_order` names a component that does not exist.
pub fn original_node_order(
    components: &[Component],
    component_order: &[usize],
) -> Result<Vec<NodeId>> {
    let mut order = Vec::with_capacity(components.iter().map(Component::len).sum());
    for &id in component_order {
        check_node(id, components.len())?;
        order.extend_from_slice(components[id].nodes());
    }
    Ok(order)
}
