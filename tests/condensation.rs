// tests/condensation.rs

use citysched::graph::Graph;
use citysched::metrics::NoopMetrics;
use citysched::scc::TarjanScc;
use citysched_test_utils::fixtures;

#[test]
fn cycle_plus_pair_condenses_to_three_nodes() {
    let graph = fixtures::cycle_and_pair();
    let decomposition = TarjanScc::new(&graph).find_sccs(&mut NoopMetrics);

    let condensation = decomposition.condensation();

    assert_eq!(decomposition.len(), 3);
    assert_eq!(condensation.node_count(), 3);
    assert_eq!(condensation.edge_count(), 1);

    let from = decomposition.component_of(3).unwrap();
    let to = decomposition.component_of(4).unwrap();
    assert!(condensation.has_edge(from, to));
}

#[test]
fn parallel_crossings_collapse_to_one_edge() {
    // Both 0 and 1 (one component) point at 2 twice over.
    let graph = Graph::from_edges(3, [(0, 1), (1, 0), (0, 2), (1, 2), (0, 2)]).unwrap();
    let decomposition = TarjanScc::new(&graph).find_sccs(&mut NoopMetrics);

    let condensation = decomposition.condensation();

    assert_eq!(condensation.node_count(), 2);
    assert_eq!(condensation.edge_count(), 1);
}

#[test]
fn condensation_has_no_self_loops() {
    let graph = fixtures::worked_example();
    let decomposition = TarjanScc::new(&graph).find_sccs(&mut NoopMetrics);

    let condensation = decomposition.condensation();

    for (u, v) in condensation.edges() {
        assert_ne!(u, v);
    }
    assert_eq!(condensation.node_count(), 6);
    assert_eq!(condensation.edge_count(), 4);
}
