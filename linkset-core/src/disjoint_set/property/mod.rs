//! Property-based tests for the disjoint-set engine.
//!
//! Random operation scripts are replayed against both [`super::DisjointSet`]
//! and a naive relabelling oracle. The suites check the partition and count
//! invariants, idempotence of `find`, and symmetry of `union`.

mod oracle;
mod types;
