// src/report.rs

//! Plain-text rendering of an [`Analysis`].

use std::fmt::Write;

use crate::analysis::Analysis;
use crate::graph::{Graph, WeightedGraph};
use crate::paths::DistanceTable;

/// Render the full report printed by the binary.
pub fn render(analysis: &Analysis, weighted: &WeightedGraph) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_report(&mut out, analysis, weighted);
    out
}

fn write_report(out: &mut String, analysis: &Analysis, weighted: &WeightedGraph) -> std::fmt::Result {
    writeln!(out, "--- 1. Strongly Connected Components ---")?;
    writeln!(
        out,
        "Strongly Connected Components ({} components):",
        analysis.components.len()
    )?;
    for (i, component) in analysis.components.iter().enumerate() {
        writeln!(
            out,
            "  Component {} (size {}): {:?}",
            i,
            component.len(),
            component.sorted()
        )?;
    }

    writeln!(out)?;
    writeln!(out, "--- 2. Condensation Graph & Topological Sort ---")?;
    writeln!(
        out,
        "Condensation graph has {} nodes",
        analysis.condensation.node_count()
    )?;
    write_adjacency(out, &analysis.condensation)?;
    writeln!(out, "Topological Order: {:?}", analysis.component_order)?;
    writeln!(out, "Original nodes order: {:?}", analysis.node_order)?;

    writeln!(out)?;
    writeln!(out, "--- 3. Shortest/Longest Paths in DAG ---")?;
    write_weighted(out, weighted)?;
    write_distances(out, &analysis.shortest)?;
    write_distances(out, &analysis.longest)?;

    writeln!(out)?;
    match &analysis.critical_path {
        Some(cp) => writeln!(
            out,
            "Critical Path (Longest): {:?} (length: {})",
            cp.path, cp.length
        )?,
        None => writeln!(
            out,
            "No critical path found from source {}",
            weighted.source()
        )?,
    }

    writeln!(out)?;
    for phase in &analysis.phases {
        writeln!(out, "{} {}", phase.phase, phase.metrics)?;
    }

    Ok(())
}

fn write_adjacency(out: &mut String, graph: &Graph) -> std::fmt::Result {
    for u in 0..graph.node_count() {
        writeln!(out, "  C{} -> {:?}", u, graph.successors(u))?;
    }
    Ok(())
}

/// Adjacency listing of a weighted graph, one line per node.
pub fn write_weighted(out: &mut String, graph: &WeightedGraph) -> std::fmt::Result {
    writeln!(out, "{graph}:")?;
    for u in 0..graph.node_count() {
        let edges: Vec<String> = graph.edges_from(u).iter().map(|e| e.to_string()).collect();
        writeln!(out, "  Node {} -> [{}]", u, edges.join(", "))?;
    }
    Ok(())
}

fn write_distances(out: &mut String, table: &DistanceTable) -> std::fmt::Result {
    writeln!(out, "{} distances from source:", table.objective().label())?;
    for node in 0..table.len() {
        writeln!(out, "  Node {}: {}", node, table.display_entry(node))?;
    }
    Ok(())
}
