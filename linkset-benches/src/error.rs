//! Benchmark setup error type.
//!
//! Aggregates the errors that may arise while preparing benchmark inputs so
//! setup functions can propagate failures with `?`.

use linkset_core::{ConnectivityError, MstError};

use crate::synthetic::SyntheticError;

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Synthetic workload generation failed.
    #[error("synthetic workload generation failed: {0}")]
    Synthetic(#[from] SyntheticError),
    /// MST computation failed.
    #[error("MST computation failed: {0}")]
    Mst(#[from] MstError),
    /// Grid construction or tracking failed.
    #[error("connectivity setup failed: {0}")]
    Connectivity(#[from] ConnectivityError),
}
