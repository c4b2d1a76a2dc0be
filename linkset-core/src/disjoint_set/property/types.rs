//! Type definitions for disjoint-set property tests.

use test_strategy::Arbitrary;

use crate::{Activation, MergeStrategy};

/// Largest universe exercised by the generated scripts.
pub(super) const MAX_CAPACITY: usize = 48;

/// Kind of operation drawn for each script step.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Arbitrary)]
pub(super) enum OperationKind {
    /// Activate one element.
    #[weight(2)]
    MakeSet,
    /// Merge two elements.
    #[weight(5)]
    Union,
    /// Look up a representative.
    #[weight(2)]
    Find,
}

/// A single step of a generated script.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum Operation {
    /// Activate `element`.
    MakeSet(usize),
    /// Merge the sets of the two elements.
    Union(usize, usize),
    /// Look up the representative of `element`.
    Find(usize),
}

impl Operation {
    /// Returns the same operation with union arguments swapped.
    pub(super) const fn mirrored(self) -> Self {
        match self {
            Self::Union(left, right) => Self::Union(right, left),
            other => other,
        }
    }
}

/// A generated universe configuration plus the steps to replay on it.
#[derive(Clone, Debug)]
pub(super) struct OperationScript {
    /// Number of addressable elements.
    pub capacity: usize,
    /// Merge heuristic under test.
    pub strategy: MergeStrategy,
    /// Initial activation mode.
    pub activation: Activation,
    /// Steps to replay in order.
    pub operations: Vec<Operation>,
}
