// src/scc/decomposition.rs

use std::collections::HashSet;

use tracing::debug;

use crate::graph::{Graph, NodeId};

/// A strongly connected component: a set of mutually reachable nodes.
///
/// Member order is the order nodes left the Tarjan stack and carries no
/// meaning; use [`Component::sorted`] for presentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    nodes: Vec<NodeId>,
}

impl Component {
    pub(crate) fn new(nodes: Vec<NodeId>) -> Self {
        Self { nodes }
    }

    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, node: NodeId) -> bool {
        self.nodes.contains(&node)
    }

    /// Members in ascending id order.
    pub fn sorted(&self) -> Vec<NodeId> {
        let mut nodes = self.nodes.clone();
        nodes.sort_unstable();
        nodes
    }
}

/// Components of one graph plus the node → component index map.
#[derive(Debug, Clone)]
pub struct SccDecomposition<'g> {
    graph: &'g Graph,
    components: Vec<Component>,
    component_of: Vec<usize>,
}

impl<'g> SccDecomposition<'g> {
    pub(crate) fn new(graph: &'g Graph, components: Vec<Component>) -> Self {
        let mut component_of = vec![0; graph.node_count()];
        for (id, component) in components.iter().enumerate() {
            for &node in component.nodes() {
                component_of[node] = id;
            }
        }
        Self {
            graph,
            components,
            component_of,
        }
    }

    pub fn components(&self) -> &[Component] {
        &self.components
    }

    pub fn into_components(self) -> Vec<Component> {
        self.components
    }

    /// Number of components.
    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Index (into [`components`](Self::components)) of the component that
    /// holds `node`, or `None` for ids outside the graph.
    pub fn component_of(&self, node: NodeId) -> Option<usize> {
        self.component_of.get(node).copied()
    }

    /// Contract each component to a single node.
    ///
    /// Edge `i -> j` exists iff some original edge leaves component `i` for a
    /// different component `j`. Parallel crossings collapse to one edge and
    /// the result never has self-loops. Per component, edges appear in the
    /// order their first crossing is found scanning the original graph by
    /// ascending source id.
    pub fn condensation(&self) -> Graph {
        let mut adjacency: Vec<Vec<usize>> = vec![Vec::new(); self.components.len()];
        let mut seen: HashSet<(usize, usize)> = HashSet::new();

        for (u, v) in self.graph.edges() {
            let (cu, cv) = (self.component_of[u], self.component_of[v]);
            if cu != cv && seen.insert((cu, cv)) {
                adjacency[cu].push(cv);
            }
        }

        debug!(
            components = self.components.len(),
            edges = seen.len(),
            "condensation graph built"
        );

        // Component ids index `adjacency`, so every target is in range.
        Graph::new_unchecked(adjacency)
    }
}
