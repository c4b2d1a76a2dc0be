//! Benchmark support crate for linkset.
//!
//! Provides seeded synthetic workloads and parameter types used by the
//! Criterion benchmarks for the disjoint set, Kruskal and incremental
//! connectivity.

pub mod error;
pub mod params;
pub mod synthetic;
