//! Benchmark parameter types, rendered as Criterion benchmark ids.

use std::fmt;

/// Parameters for an edge-list benchmark run.
#[derive(Clone, Copy, Debug)]
pub struct GraphBenchParams {
    /// Number of vertices.
    pub node_count: usize,
    /// Number of edges or union requests.
    pub edge_count: usize,
}

impl fmt::Display for GraphBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},m={}", self.node_count, self.edge_count)
    }
}

/// Parameters for a grid activation benchmark run.
#[derive(Clone, Copy, Debug)]
pub struct GridBenchParams {
    /// Number of grid rows.
    pub rows: usize,
    /// Number of grid columns.
    pub cols: usize,
}

impl fmt::Display for GridBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}
