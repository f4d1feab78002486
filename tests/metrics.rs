// tests/metrics.rs

use std::time::Duration;

use citysched::metrics::{Metrics, MetricsSink, NoopMetrics};
use citysched::paths::longest_path;
use citysched::scc::TarjanScc;
use citysched::topo::kahn_topo_sort;
use citysched_test_utils::fixtures;

#[test]
fn counting_sink_does_not_change_results() {
    let graph = fixtures::worked_example();

    let counted = TarjanScc::new(&graph).find_sccs(&mut Metrics::new());
    let silent = TarjanScc::new(&graph).find_sccs(&mut NoopMetrics);
    assert_eq!(counted.components(), silent.components());

    let weighted = fixtures::worked_example_weighted();
    let order = [0, 4, 3, 2, 1, 5, 6, 7];
    assert_eq!(
        longest_path(&weighted, &order, &mut Metrics::new()).unwrap(),
        longest_path(&weighted, &order, &mut NoopMetrics).unwrap()
    );
}

#[test]
fn timer_records_elapsed_between_start_and_stop() {
    let mut metrics = Metrics::new();
    assert_eq!(metrics.elapsed(), Duration::ZERO);

    metrics.start_timer();
    std::thread::sleep(Duration::from_millis(2));
    metrics.stop_timer();

    assert!(metrics.elapsed() >= Duration::from_millis(2));
}

#[test]
fn engines_stop_their_own_timer() {
    let mut metrics = Metrics::new();

    kahn_topo_sort(&fixtures::four_node_dag(), &mut metrics).unwrap();

    // A second stop without a start leaves the recorded time alone.
    let recorded = metrics.elapsed();
    metrics.stop_timer();
    assert_eq!(metrics.elapsed(), recorded);
}

#[test]
fn reset_clears_counters_and_time() {
    let mut metrics = Metrics::new();
    metrics.dfs_visit();
    metrics.dfs_edge();
    metrics.kahn_push();
    metrics.kahn_pop();
    metrics.relaxation();
    metrics.start_timer();
    metrics.stop_timer();

    metrics.reset();

    assert_eq!(
        metrics.to_string(),
        "Metrics[DFS Visits: 0, DFS Edges: 0, Kahn Pushes: 0, Kahn Pops: 0, Relaxations: 0, Time: 0 ns]"
    );
}
