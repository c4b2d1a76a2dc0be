//! Linkset core library.
//!
//! A disjoint-set (union-find) engine and the algorithms built on it:
//! Kruskal minimum spanning forests in [`mst`] and incremental connectivity
//! over activation streams in [`connectivity`].
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod connectivity;
mod disjoint_set;
mod error;
pub mod mst;

pub use crate::{
    connectivity::{ConnectivityError, ConnectivityErrorCode, ConnectivityTracker},
    disjoint_set::{Activation, DisjointSet, DisjointSetBuilder, KeyedDisjointSet, MergeStrategy},
    error::{DisjointSetError, DisjointSetErrorCode},
    mst::{
        MinimumSpanningForest, MstEdge, MstError, MstErrorCode, Weight, WeightedEdge, kruskal,
        minimum_spanning_cost,
    },
};
