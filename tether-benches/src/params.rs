//! Benchmark parameter types.
//!
//! `Display` implementations produce the `BenchmarkId` labels, so reports
//! group runs by dataset size and strategy.

use std::fmt;

use tether_core::ExecutionStrategy;

/// Parameters for an edge generation or full-connectivity run.
#[derive(Clone, Debug)]
pub struct ConnectivityBenchParams {
    /// Number of points in the dataset.
    pub point_count: usize,
    /// How the pairwise distances are computed.
    pub strategy: ExecutionStrategy,
}

impl fmt::Display for ConnectivityBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},{:?}", self.point_count, self.strategy)
    }
}

/// Parameters for a bounded-components run.
#[derive(Clone, Debug)]
pub struct BoundedBenchParams {
    /// Number of points in the dataset.
    pub point_count: usize,
    /// Number of shortest edges applied.
    pub edge_limit: usize,
}

impl fmt::Display for BoundedBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},k={}", self.point_count, self.edge_limit)
    }
}
