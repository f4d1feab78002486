// src/metrics.rs

//! Operation counters and wall-clock timing reported by the engines.
//!
//! The engines only ever *write* into a [`MetricsSink`]; none of their
//! results depend on what the sink does with the calls.

use std::fmt;
use std::time::{Duration, Instant};

/// Increment-only hooks the analysis engines report into.
pub trait MetricsSink {
    /// A node was discovered by the SCC depth-first search.
    fn dfs_visit(&mut self);
    /// An edge was traversed by the SCC depth-first search.
    fn dfs_edge(&mut self);
    /// A node entered the Kahn frontier.
    fn kahn_push(&mut self);
    /// A node left the Kahn frontier.
    fn kahn_pop(&mut self);
    /// An edge was examined by a distance relaxation pass.
    fn relaxation(&mut self);
    fn start_timer(&mut self);
    fn stop_timer(&mut self);
}

/// Sink that discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopMetrics;

impl MetricsSink for NoopMetrics {
    fn dfs_visit(&mut self) {}
    fn dfs_edge(&mut self) {}
    fn kahn_push(&mut self) {}
    fn kahn_pop(&mut self) {}
    fn relaxation(&mut self) {}
    fn start_timer(&mut self) {}
    fn stop_timer(&mut self) {}
}

/// Counting sink with a start/stop timer.
#[derive(Debug, Clone, Default)]
pub struct Metrics {
    pub dfs_visits: u64,
    pub dfs_edges: u64,
    pub kahn_pushes: u64,
    pub kahn_pops: u64,
    pub relaxations: u64,
    started: Option<Instant>,
    elapsed: Duration,
}

impl Metrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Time between the last `start_timer` and `stop_timer` calls.
    ///
    /// Zero if the timer was never stopped.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Clear all counters and the timer.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl MetricsSink for Metrics {
    fn dfs_visit(&mut self) {
        self.dfs_visits += 1;
    }

    fn dfs_edge(&mut self) {
        self.dfs_edges += 1;
    }

    fn kahn_push(&mut self) {
        self.kahn_pushes += 1;
    }

    fn kahn_pop(&mut self) {
        self.kahn_pops += 1;
    }

    fn relaxation(&mut self) {
        self.relaxations += 1;
    }

    fn start_timer(&mut self) {
        self.started = Some(Instant::now());
    }

    fn stop_timer(&mut self) {
        if let Some(started) = self.started.take() {
            self.elapsed = started.elapsed();
        }
    }
}

impl fmt::Display for Metrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Metrics[DFS Visits: {}, DFS Edges: {}, Kahn Pushes: {}, Kahn Pops: {}, Relaxations: {}, Time: {} ns]",
            self.dfs_visits,
            self.dfs_edges,
            self.kahn_pushes,
            self.kahn_pops,
            self.relaxations,
            self.elapsed.as_nanos()
        )
    }
}
