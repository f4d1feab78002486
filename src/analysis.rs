// src/analysis.rs

//! The full analysis pipeline.
//!
//! ```text
//! Graph ──TarjanScc──▶ components ──condensation──▶ component DAG
//!                                                     │ kahn_topo_sort
//!                                                     ▼
//!                         node order ◀──expand── component order
//!                             │
//! WeightedGraph ──────────────┴──▶ shortest / longest distances ──▶ critical path
//! ```
//!
//! Each engine reports into one [`Metrics`] value that is snapshotted and
//! reset between phases.

use std::fmt;

use tracing::{debug, info};

use crate::config::{ConfigFile, ConfigSection};
use crate::errors::{CityschedError, Result};
use crate::graph::{Graph, NodeId, WeightedGraph};
use crate::metrics::Metrics;
use crate::paths::{CriticalPath, DistanceTable, critical_path, longest_path, shortest_path};
use crate::scc::{Component, TarjanScc};
use crate::topo::{kahn_topo_sort, original_node_order};
use crate::types::PathStrategy;

/// A metered stage of the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Scc,
    TopoSort,
    ShortestPath,
    LongestPath,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Phase::Scc => "SCC",
            Phase::TopoSort => "Topo Sort",
            Phase::ShortestPath => "Shortest Path",
            Phase::LongestPath => "Longest Path",
        };
        f.write_str(label)
    }
}

/// Counters collected during one phase.
#[derive(Debug, Clone)]
pub struct PhaseMetrics {
    pub phase: Phase,
    pub metrics: Metrics,
}

/// Knobs for the path-reconstruction step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnalysisOptions {
    pub path_strategy: PathStrategy,
    /// Critical path endpoint; farthest reached node if `None`.
    pub target: Option<NodeId>,
}

impl From<&ConfigSection> for AnalysisOptions {
    fn from(section: &ConfigSection) -> Self {
        Self {
            path_strategy: section.path_strategy,
            target: section.target,
        }
    }
}

/// Everything the pipeline produces for one graph.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub components: Vec<Component>,
    pub condensation: Graph,
    /// Topological order of the condensation graph (component ids).
    pub component_order: Vec<usize>,
    /// Component order expanded to original node ids.
    pub node_order: Vec<NodeId>,
    pub shortest: DistanceTable,
    pub longest: DistanceTable,
    pub critical_path: Option<CriticalPath>,
    pub phases: Vec<PhaseMetrics>,
}

impl Analysis {
    pub fn phase_metrics(&self, phase: Phase) -> Option<&Metrics> {
        self.phases
            .iter()
            .find(|p| p.phase == phase)
            .map(|p| &p.metrics)
    }
}

/// Run the pipeline on a validated config.
pub fn analyze_config(cfg: &ConfigFile, options: AnalysisOptions) -> Result<Analysis> {
    let graph = cfg.graph()?;
    let weighted = cfg.weighted_graph()?;
    analyze(&graph, &weighted, options)
}

/// Run SCC → condensation → Kahn → expansion → distances → critical path.
///
/// `graph` drives the ordering; `weighted` must have the same node count and
/// be acyclic along every edge reachable from its source.
pub fn analyze(
    graph: &Graph,
    weighted: &WeightedGraph,
    options: AnalysisOptions,
) -> Result<Analysis> {
    if graph.node_count() != weighted.node_count() {
        return Err(CityschedError::LengthMismatch {
            expected: graph.node_count(),
            actual: weighted.node_count(),
        });
    }

    info!(%graph, source = weighted.source(), "starting analysis");

    let mut metrics = Metrics::new();
    let mut phases = Vec::with_capacity(4);
    let mut snapshot = |phase: Phase, metrics: &mut Metrics| {
        debug!(%phase, %metrics, "phase complete");
        phases.push(PhaseMetrics {
            phase,
            metrics: metrics.clone(),
        });
        metrics.reset();
    };

    let decomposition = TarjanScc::new(graph).find_sccs(&mut metrics);
    snapshot(Phase::Scc, &mut metrics);

    let condensation = decomposition.condensation();
    let component_order = kahn_topo_sort(&condensation, &mut metrics)?;
    snapshot(Phase::TopoSort, &mut metrics);

    let components = decomposition.into_components();
    let node_order = original_node_order(&components, &component_order)?;

    let shortest = shortest_path(weighted, &node_order, &mut metrics)?;
    snapshot(Phase::ShortestPath, &mut metrics);

    let longest = longest_path(weighted, &node_order, &mut metrics)?;
    snapshot(Phase::LongestPath, &mut metrics);

    let critical_path = critical_path(
        &longest,
        weighted,
        &node_order,
        options.path_strategy,
        options.target,
    )?;

    info!(
        components = components.len(),
        critical_length = critical_path.as_ref().map(|c| c.length),
        "analysis complete"
    );

    Ok(Analysis {
        components,
        condensation,
        component_order,
        node_order,
        shortest,
        longest,
        critical_path,
        phases,
    })
}
