// tests/error_handling.rs

use std::io::Write;

use citysched::config::{ConfigFile, load_and_validate};
use citysched::errors::CityschedError;
use citysched::graph::{Graph, WeightedGraph};
use citysched::metrics::NoopMetrics;
use citysched::paths::{reconstruct_path, shortest_path};
use citysched::types::PathStrategy;
use citysched_test_utils::builders::ConfigFileBuilder;
use tempfile::NamedTempFile;

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{contents}").unwrap();
    file
}

#[test]
fn test_full_config_round_trip() {
    let file = write_config(
        r#"
[config]
path_strategy = "parent"
target = 2

[graph]
nodes = 3
source = 0
edges = [
  { from = 0, to = 1, weight = -4 },
  { from = 1, to = 2 },
]
"#,
    );

    let cfg = load_and_validate(file.path()).unwrap();

    assert_eq!(cfg.config.path_strategy, PathStrategy::Parent);
    assert_eq!(cfg.config.target, Some(2));
    assert_eq!(cfg.graph.edges[0].weight, -4);
    assert_eq!(cfg.graph.edges[1].weight, 1);

    let weighted = cfg.weighted_graph().unwrap();
    assert_eq!(weighted.source(), 0);
    assert_eq!(weighted.weight(1, 2), Some(1));
    assert_eq!(cfg.graph().unwrap().edge_count(), 2);
}

#[test]
fn test_missing_config_section_uses_defaults() {
    let file = write_config(
        r#"
[graph]
nodes = 1
source = 0
"#,
    );

    let cfg = load_and_validate(file.path()).unwrap();

    assert_eq!(cfg.config.path_strategy, PathStrategy::Scan);
    assert_eq!(cfg.config.target, None);
    assert!(cfg.graph.edges.is_empty());
}

#[test]
fn test_edge_out_of_range_returns_config_error() {
    let raw = ConfigFileBuilder::new(3, 0).edge(0, 1, 1).edge(1, 5, 1).build_raw();

    match ConfigFile::try_from(raw) {
        Err(CityschedError::ConfigError(msg)) => {
            assert!(msg.contains("graph.edges[1].to"));
            assert!(msg.contains("5"));
        }
        other => panic!("Expected ConfigError, got: {:?}", other),
    }
}

#[test]
fn test_source_out_of_range_returns_config_error() {
    let raw = ConfigFileBuilder::new(3, 3).build_raw();

    match ConfigFile::try_from(raw) {
        Err(CityschedError::ConfigError(msg)) => assert!(msg.contains("[graph].source")),
        other => panic!("Expected ConfigError, got: {:?}", other),
    }
}

#[test]
fn test_target_out_of_range_returns_config_error() {
    let raw = ConfigFileBuilder::new(3, 0).target(9).build_raw();

    match ConfigFile::try_from(raw) {
        Err(CityschedError::ConfigError(msg)) => assert!(msg.contains("[config].target")),
        other => panic!("Expected ConfigError, got: {:?}", other),
    }
}

#[test]
fn test_zero_nodes_returns_config_error() {
    let raw = ConfigFileBuilder::new(0, 0).build_raw();

    match ConfigFile::try_from(raw) {
        Err(CityschedError::ConfigError(msg)) => assert!(msg.contains("nodes must be >= 1")),
        other => panic!("Expected ConfigError, got: {:?}", other),
    }
}

#[test]
fn test_negative_node_count_is_a_toml_error() {
    let file = write_config(
        r#"
[graph]
nodes = -2
source = 0
"#,
    );

    let result = load_and_validate(file.path());

    assert!(matches!(result, Err(CityschedError::TomlError(_))));
}

#[test]
fn test_unknown_path_strategy_is_a_toml_error() {
    let file = write_config(
        r#"
[config]
path_strategy = "dijkstra"

[graph]
nodes = 1
source = 0
"#,
    );

    let result = load_and_validate(file.path());

    assert!(matches!(result, Err(CityschedError::TomlError(_))));
}

#[test]
fn test_missing_file_is_an_io_error() {
    let result = load_and_validate("/definitely/not/here/citysched.toml");
    assert!(matches!(result, Err(CityschedError::IoError(_))));
}

#[test]
fn test_graph_rejects_out_of_range_targets() {
    let result = Graph::from_adjacency(vec![vec![1], vec![2]]);

    assert!(matches!(
        result,
        Err(CityschedError::NodeOutOfRange { node: 2, node_count: 2 })
    ));

    let mut graph = Graph::new(2);
    assert!(graph.add_edge(2, 0).is_err());
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn test_weighted_graph_rejects_bad_source() {
    assert!(matches!(
        WeightedGraph::new(2, 2),
        Err(CityschedError::SourceOutOfRange { node: 2, node_count: 2 })
    ));
    assert!(matches!(WeightedGraph::new(0, 0), Err(CityschedError::EmptyGraph)));
}

#[test]
fn test_order_with_unknown_node_is_rejected_before_relaxing() {
    let graph = WeightedGraph::from_edges(2, 0, [(0, 1, 1)]).unwrap();

    let result = shortest_path(&graph, &[0, 7], &mut NoopMetrics);

    assert!(matches!(
        result,
        Err(CityschedError::NodeOutOfRange { node: 7, node_count: 2 })
    ));
}

#[test]
fn test_reconstruct_rejects_foreign_table() {
    let small = WeightedGraph::from_edges(2, 0, [(0, 1, 1)]).unwrap();
    let large = WeightedGraph::new(3, 0).unwrap();
    let dist = shortest_path(&small, &[0, 1], &mut NoopMetrics).unwrap();

    assert!(matches!(
        reconstruct_path(&dist, &large, 1, &[0, 1, 2]),
        Err(CityschedError::LengthMismatch { expected: 3, actual: 2 })
    ));
    assert!(matches!(
        reconstruct_path(&dist, &small, 4, &[0, 1]),
        Err(CityschedError::NodeOutOfRange { node: 4, .. })
    ));
}

#[test]
fn test_weight_overflow_is_reported() {
    let graph = WeightedGraph::from_edges(3, 0, [(0, 1, i64::MAX), (1, 2, 1)]).unwrap();

    let result = shortest_path(&graph, &[0, 1, 2], &mut NoopMetrics);

    assert!(matches!(
        result,
        Err(CityschedError::WeightOverflow { from: 1, to: 2 })
    ));
}
