// src/scc/tarjan.rs

use tracing::{debug, trace};

use crate::graph::{Graph, NodeId};
use crate::metrics::MetricsSink;
use crate::scc::decomposition::{Component, SccDecomposition};

/// One suspended `strong_connect(node)` call: the node and the index of the
/// next outgoing edge to examine.
#[derive(Debug, Clone, Copy)]
struct Frame {
    node: NodeId,
    cursor: usize,
}

/// Tarjan's SCC engine over one [`Graph`].
///
/// All DFS bookkeeping lives in this value. [`TarjanScc::find_sccs`] consumes
/// it, so every decomposition starts from a fresh engine.
#[derive(Debug)]
pub struct TarjanScc<'g> {
    graph: &'g Graph,
    /// Next discovery index to hand out.
    counter: usize,
    /// Discovery index per node; `None` until visited.
    index: Vec<Option<usize>>,
    lowlink: Vec<usize>,
    on_stack: Vec<bool>,
    /// Nodes belonging to a component that has not been closed yet.
    stack: Vec<NodeId>,
    components: Vec<Component>,
}

impl<'g> TarjanScc<'g> {
    pub fn new(graph: &'g Graph) -> Self {
        let n = graph.node_count();
        Self {
            graph,
            counter: 0,
            index: vec![None; n],
            lowlink: vec![0; n],
            on_stack: vec![false; n],
            stack: Vec::new(),
            components: Vec::new(),
        }
    }

    /// Decompose the graph into strongly connected components.
    ///
    /// Roots are tried in ascending id order and components are emitted in
    /// the order their root finishes, which is a reverse topological order
    /// of the condensation graph.
    pub fn find_sccs(mut self, metrics: &mut dyn MetricsSink) -> SccDecomposition<'g> {
        metrics.start_timer();

        for v in 0..self.graph.node_count() {
            if self.index[v].is_none() {
                self.strong_connect(v, metrics);
            }
        }

        metrics.stop_timer();
        debug!(
            nodes = self.graph.node_count(),
            components = self.components.len(),
            "tarjan: decomposition complete"
        );

        SccDecomposition::new(self.graph, self.components)
    }

    fn discover(&mut self, v: NodeId, metrics: &mut dyn MetricsSink) {
        metrics.dfs_visit();
        self.index[v] = Some(self.counter);
        self.lowlink[v] = self.counter;
        self.counter += 1;
        self.stack.push(v);
        self.on_stack[v] = true;
    }

    /// Iterative form of the recursive `strong_connect(root)`.
    fn strong_connect(&mut self, root: NodeId, metrics: &mut dyn MetricsSink) {
        let graph = self.graph;
        let mut frames = vec![Frame {
            node: root,
            cursor: 0,
        }];
        self.discover(root, metrics);

        while let Some(frame) = frames.last_mut() {
            let v = frame.node;

            if let Some(&w) = graph.successors(v).get(frame.cursor) {
                frame.cursor += 1;
                metrics.dfs_edge();

                match self.index[w] {
                    None => {
                        // Descend; the parent's lowlink is folded in when `w` finishes.
                        self.discover(w, metrics);
                        frames.push(Frame { node: w, cursor: 0 });
                    }
                    Some(w_index) if self.on_stack[w] => {
                        self.lowlink[v] = self.lowlink[v].min(w_index);
                    }
                    // Finished and off-stack: belongs to an already closed component.
                    Some(_) => {}
                }
                continue;
            }

            frames.pop();

            if self.index[v] == Some(self.lowlink[v]) {
                self.close_component(v);
            }

            if let Some(parent) = frames.last() {
                let p = parent.node;
                self.lowlink[p] = self.lowlink[p].min(self.lowlink[v]);
            }
        }
    }

    /// Pop the stack down to and including `root`, emitting one component.
    fn close_component(&mut self, root: NodeId) {
        let mut nodes = Vec::new();
        while let Some(w) = self.stack.pop() {
            self.on_stack[w] = false;
            nodes.push(w);
            if w == root {
                break;
            }
        }
        trace!(root, size = nodes.len(), "tarjan: closed component");
        self.components.push(Component::new(nodes));
    }
}
