// src/scc/mod.rs

//! Strongly connected components.
//!
//! - [`tarjan`] runs Tarjan's low-link algorithm with an explicit frame stack.
//! - [`decomposition`] holds the result: the component list, the
//!   node → component map, and condensation-graph construction.

pub mod decomposition;
pub mod tarjan;

pub use decomposition::{Component, SccDecomposition};
pub use tarjan::TarjanScc;
