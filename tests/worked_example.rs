// tests/worked_example.rs

use std::error::Error;

use citysched::analysis::{AnalysisOptions, Phase, analyze, analyze_config};
use citysched::config::sample;
use citysched::report;
use citysched::types::PathStrategy;
use citysched_test_utils::builders::ConfigFileBuilder;
use citysched_test_utils::fixtures;
use citysched_test_utils::init_tracing;

type TestResult = Result<(), Box<dyn Error>>;

#[test]
fn full_pipeline_on_the_worked_example() -> TestResult {
    init_tracing();

    let analysis = analyze_config(&sample::worked_example(), AnalysisOptions::default())?;

    let mut components: Vec<Vec<usize>> = analysis.components.iter().map(|c| c.sorted()).collect();
    components.sort();
    assert_eq!(
        components,
        vec![vec![0], vec![1, 2, 3], vec![4], vec![5], vec![6], vec![7]]
    );

    assert_eq!(analysis.condensation.node_count(), 6);
    assert_eq!(analysis.node_order, vec![0, 4, 3, 2, 1, 5, 6, 7]);

    let expected = [(4, 0), (5, 2), (6, 7), (7, 8)];
    for (node, d) in expected {
        assert_eq!(analysis.shortest.get(node), Some(d));
        assert_eq!(analysis.longest.get(node), Some(d));
    }
    for node in 0..4 {
        assert!(!analysis.shortest.is_reached(node));
        assert!(!analysis.longest.is_reached(node));
    }

    let cp = analysis.critical_path.as_ref().expect("critical path from 4");
    assert_eq!(cp.path, vec![4, 5, 6, 7]);
    assert_eq!(cp.length, 8);
    Ok(())
}

#[test]
fn phase_metrics_are_reset_between_phases() -> TestResult {
    let analysis = analyze(
        &fixtures::worked_example(),
        &fixtures::worked_example_weighted(),
        AnalysisOptions::default(),
    )?;

    let scc = analysis.phase_metrics(Phase::Scc).expect("scc phase");
    assert_eq!(scc.dfs_visits, 8);
    assert_eq!(scc.dfs_edges, 7);
    assert_eq!(scc.relaxations, 0);

    let topo = analysis.phase_metrics(Phase::TopoSort).expect("topo phase");
    assert_eq!(topo.kahn_pushes, 6);
    assert_eq!(topo.kahn_pops, 6);
    assert_eq!(topo.dfs_visits, 0);

    for phase in [Phase::ShortestPath, Phase::LongestPath] {
        let m = analysis.phase_metrics(phase).expect("path phase");
        assert_eq!(m.relaxations, 3);
        assert_eq!(m.kahn_pops, 0);
    }
    Ok(())
}

#[test]
fn parent_strategy_matches_scan() -> TestResult {
    let scan = analyze_config(&sample::worked_example(), AnalysisOptions::default())?;
    let parent = analyze_config(
        &sample::worked_example(),
        AnalysisOptions {
            path_strategy: PathStrategy::Parent,
            target: None,
        },
    )?;

    assert_eq!(scan.critical_path, parent.critical_path);
    Ok(())
}

#[test]
fn configured_target_is_honoured() -> TestResult {
    let cfg = ConfigFileBuilder::new(4, 0)
        .edge(0, 1, 2)
        .edge(1, 2, 2)
        .edge(2, 3, 2)
        .target(2)
        .build();

    let analysis = analyze_config(&cfg, AnalysisOptions::from(&cfg.config))?;

    let cp = analysis.critical_path.expect("2 is reached");
    assert_eq!(cp.path, vec![0, 1, 2]);
    assert_eq!(cp.length, 4);
    Ok(())
}

#[test]
fn cycle_reachable_from_source_is_not_relaxed_through() -> TestResult {
    // 0 -> 1 <-> 2 -> 3. Node order inside {1, 2} is arbitrary: 2 comes up
    // before 1 has reached it, so 3 is never reached.
    let cfg = ConfigFileBuilder::new(4, 0)
        .edge(0, 1, 1)
        .edge(1, 2, 1)
        .edge(2, 1, 1)
        .edge(2, 3, 1)
        .build();

    let analysis = analyze_config(&cfg, AnalysisOptions::default())?;

    assert_eq!(analysis.components.len(), 3);
    assert_eq!(analysis.node_order, vec![0, 2, 1, 3]);
    assert_eq!(analysis.longest.get(2), Some(2));
    assert!(!analysis.longest.is_reached(3));
    // No predecessor of 2 sits before it in the order: best-effort partial path.
    assert_eq!(analysis.critical_path.map(|cp| cp.path), Some(vec![2]));
    Ok(())
}

#[test]
fn report_lists_every_section() -> TestResult {
    let weighted = fixtures::worked_example_weighted();
    let analysis = analyze(&fixtures::worked_example(), &weighted, AnalysisOptions::default())?;

    let text = report::render(&analysis, &weighted);

    assert!(text.contains("Strongly Connected Components (6 components):"));
    assert!(text.contains("Component 0 (size 3): [1, 2, 3]"));
    assert!(text.contains("Condensation graph has 6 nodes"));
    assert!(text.contains("Original nodes order: [0, 4, 3, 2, 1, 5, 6, 7]"));
    assert!(text.contains("Node 4 -> [(->5, w:2)]"));
    assert!(text.contains("Shortest distances from source:"));
    assert!(text.contains("  Node 0: ∞"));
    assert!(text.contains("  Node 0: -∞"));
    assert!(text.contains("Critical Path (Longest): [4, 5, 6, 7] (length: 8)"));
    assert!(text.contains("SCC Metrics[DFS Visits: 8, DFS Edges: 7"));
    Ok(())
}
