// src/paths/mod.rs

//! Single-source distances over a weighted DAG.
//!
//! - [`distance`] relaxes edges in a caller-supplied topological order for
//!   the shortest ([`shortest_path`]) and longest ([`longest_path`])
//!   objectives, recording a predecessor per node as it goes.
//! - [`reconstruct`] rebuilds a path backwards from a distance table by
//!   scanning for a predecessor that satisfies the relaxation equality.
//! - [`critical`] picks the farthest node of a longest-path table and
//!   returns the path to it.
//!
//! The caller guarantees that the weighted graph, restricted to the edges
//! actually relaxed, is acyclic and consistent with the order passed in.
//! Negative weights are fine under that guarantee; negative cycles are not
//! detected.

pub mod critical;
pub mod distance;
pub mod reconstruct;

pub use critical::{CriticalPath, critical_path, farthest_node};
pub use distance::{DistanceTable, Objective, longest_path, shortest_path};
pub use reconstruct::reconstruct_path;
