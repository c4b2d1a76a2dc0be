//! Builder utilities for configuring [`DisjointSet`] instances.
//!
//! Exposes the merge heuristic and activation mode selected before the
//! parent and rank arrays are allocated.

use super::DisjointSet;

/// Heuristic deciding which root survives a merge.
///
/// Both heuristics bound amortised `find`/`union` cost at O(α(n)) when paired
/// with path compression. Set sizes are tracked under either choice; the
/// strategy only changes which tree is attached beneath the other.
///
/// # Examples
/// ```
/// use linkset_core::MergeStrategy;
///
/// assert_eq!(MergeStrategy::default(), MergeStrategy::ByRank);
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum MergeStrategy {
    /// Attach the root with the lower rank (approximate tree height).
    #[default]
    ByRank,
    /// Attach the root with the smaller population.
    BySize,
}

/// Initial state of the elements in a freshly built set.
///
/// # Examples
/// ```
/// use linkset_core::{Activation, DisjointSet};
///
/// let eager = DisjointSet::builder(4).build();
/// assert_eq!(eager.component_count(), 4);
///
/// let lazy = DisjointSet::builder(4).with_activation(Activation::Lazy).build();
/// assert_eq!(lazy.component_count(), 0);
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Activation {
    /// Every element starts as its own singleton set.
    #[default]
    Eager,
    /// Elements stay inactive until registered with
    /// [`DisjointSet::make_set`].
    Lazy,
}

/// Configures and constructs [`DisjointSet`] instances.
///
/// # Examples
/// ```
/// use linkset_core::{Activation, DisjointSet, MergeStrategy};
///
/// let set = DisjointSet::builder(8)
///     .with_merge_strategy(MergeStrategy::BySize)
///     .with_activation(Activation::Lazy)
///     .build();
/// assert_eq!(set.capacity(), 8);
/// assert_eq!(set.merge_strategy(), MergeStrategy::BySize);
/// assert_eq!(set.active_count(), 0);
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DisjointSetBuilder {
    capacity: usize,
    merge_strategy: MergeStrategy,
    activation: Activation,
}

impl DisjointSetBuilder {
    /// Creates a builder for a universe of `capacity` elements using the
    /// default strategy and eager activation.
    #[must_use]
    pub const fn new(capacity: usize) -> Self {
        Self {
            capacity,
            merge_strategy: MergeStrategy::ByRank,
            activation: Activation::Eager,
        }
    }

    /// Overrides the merge heuristic.
    #[must_use]
    pub const fn with_merge_strategy(mut self, merge_strategy: MergeStrategy) -> Self {
        self.merge_strategy = merge_strategy;
        self
    }

    /// Overrides the activation mode.
    #[must_use]
    pub const fn with_activation(mut self, activation: Activation) -> Self {
        self.activation = activation;
        self
    }

    /// Returns the configured capacity.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the configured merge heuristic.
    #[must_use]
    pub const fn merge_strategy(&self) -> MergeStrategy {
        self.merge_strategy
    }

    /// Returns the configured activation mode.
    #[must_use]
    pub const fn activation(&self) -> Activation {
        self.activation
    }

    /// Allocates the set.
    #[must_use]
    pub fn build(self) -> DisjointSet {
        DisjointSet::from_builder(self)
    }
}
