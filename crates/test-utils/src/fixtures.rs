//! Small named graphs shared by the integration tests.

use citysched::graph::{Graph, WeightedGraph};

fn graph(n: usize, edges: &[(usize, usize)]) -> Graph {
    Graph::from_edges(n, edges.iter().copied()).expect("fixture edges in range")
}

/// `0 -> 1 -> 2 -> 0`
pub fn three_cycle() -> Graph {
    graph(3, &[(0, 1), (1, 2), (2, 0)])
}

/// `0 -> 1, 0 -> 3, 1 -> 2`
pub fn four_node_dag() -> Graph {
    graph(4, &[(0, 1), (0, 3), (1, 2)])
}

/// `0 <-> 1` and `2 <-> 3`, no edges between the pairs.
pub fn two_disjoint_cycles() -> Graph {
    graph(4, &[(0, 1), (1, 0), (2, 3), (3, 2)])
}

/// `0 -> 1 -> 2 -> 0` plus `3 -> 4`.
pub fn cycle_and_pair() -> Graph {
    graph(5, &[(0, 1), (1, 2), (2, 0), (3, 4)])
}

const WORKED_EDGES: [(usize, usize, i64); 7] = [
    (0, 1, 3),
    (1, 2, 2),
    (2, 3, 4),
    (3, 1, 1),
    (4, 5, 2),
    (5, 6, 5),
    (6, 7, 1),
];

/// Structure of the 8-node scheduling example: `0 -> 1 -> 2 -> 3 -> 1` and
/// `4 -> 5 -> 6 -> 7`.
pub fn worked_example() -> Graph {
    graph(8, &WORKED_EDGES.map(|(u, v, _)| (u, v)))
}

/// Weighted mirror of [`worked_example`], source `4`.
pub fn worked_example_weighted() -> WeightedGraph {
    WeightedGraph::from_edges(8, 4, WORKED_EDGES).expect("fixture edges in range")
}

/// Diamond with two equally long routes to 3: `0 -> 1 -> 3` and
/// `0 -> 2 -> 3`, each of total weight 5. Source `0`.
pub fn tied_diamond() -> WeightedGraph {
    WeightedGraph::from_edges(4, 0, [(0, 1, 2), (0, 2, 1), (1, 3, 3), (2, 3, 4)])
        .expect("fixture edges in range")
}
