//! Disjoint-set (union-find) dynamic connectivity.
//!
//! [`DisjointSet`] partitions a universe of `usize` elements into disjoint
//! sets. Lookups use iterative path compression and merges follow a
//! configurable [`MergeStrategy`], which together keep the amortised cost of
//! `find` and `union` at O(α(n)).
//!
//! Elements are either active from construction ([`Activation::Eager`]) or
//! registered one at a time through [`DisjointSet::make_set`]
//! ([`Activation::Lazy`]). Sets only ever merge; nothing splits once joined.
//!
//! [`KeyedDisjointSet`] layers a hash-map index on top for universes whose
//! members are arbitrary keys discovered on the fly.

mod builder;
mod keyed;

use std::cmp::Ordering;

use crate::error::DisjointSetError;

pub use self::builder::{Activation, DisjointSetBuilder, MergeStrategy};
pub use self::keyed::KeyedDisjointSet;

/// Partition of `[0, capacity)` into disjoint sets.
///
/// # Examples
/// ```
/// use linkset_core::DisjointSet;
///
/// let mut set = DisjointSet::new(5);
/// assert!(set.union(0, 1)?);
/// assert!(set.union(3, 4)?);
/// assert!(!set.union(1, 0)?);
/// assert!(set.connected(0, 1)?);
/// assert!(!set.connected(1, 3)?);
/// assert_eq!(set.component_count(), 3);
/// assert_eq!(set.set_size(4)?, 2);
/// # Ok::<(), linkset_core::DisjointSetError>(())
/// ```
#[derive(Clone, Debug)]
pub struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u8>,
    size: Vec<usize>,
    active: Vec<bool>,
    components: usize,
    active_count: usize,
    merge_strategy: MergeStrategy,
}

impl DisjointSet {
    /// Creates a set of `capacity` eagerly activated singletons merged by
    /// rank.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        DisjointSetBuilder::new(capacity).build()
    }

    /// Creates a set of `capacity` inactive elements merged by rank.
    ///
    /// # Examples
    /// ```
    /// use linkset_core::{DisjointSet, DisjointSetError};
    ///
    /// let mut set = DisjointSet::lazy(3);
    /// assert_eq!(set.find(1), Err(DisjointSetError::Inactive { element: 1 }));
    /// assert!(set.make_set(1)?);
    /// assert_eq!(set.find(1)?, 1);
    /// # Ok::<(), DisjointSetError>(())
    /// ```
    #[must_use]
    pub fn lazy(capacity: usize) -> Self {
        DisjointSetBuilder::new(capacity)
            .with_activation(Activation::Lazy)
            .build()
    }

    /// Returns a builder for a universe of `capacity` elements.
    #[must_use]
    pub const fn builder(capacity: usize) -> DisjointSetBuilder {
        DisjointSetBuilder::new(capacity)
    }

    fn from_builder(builder: DisjointSetBuilder) -> Self {
        let capacity = builder.capacity();
        let eager = builder.activation() == Activation::Eager;
        let initially_active = if eager { capacity } else { 0 };
        Self {
            parent: (0..capacity).collect(),
            rank: vec![0; capacity],
            size: vec![1; capacity],
            active: vec![eager; capacity],
            components: initially_active,
            active_count: initially_active,
            merge_strategy: builder.merge_strategy(),
        }
    }

    /// Number of addressable elements, active or not.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.parent.len()
    }

    /// Number of activated elements.
    #[must_use]
    pub const fn active_count(&self) -> usize {
        self.active_count
    }

    /// Number of disjoint sets among the active elements.
    #[must_use]
    pub const fn component_count(&self) -> usize {
        self.components
    }

    /// The heuristic used to pick the surviving root of a merge.
    #[must_use]
    pub const fn merge_strategy(&self) -> MergeStrategy {
        self.merge_strategy
    }

    /// Returns `true` when `element` has been activated. Out-of-range ids
    /// report `false`.
    #[must_use]
    pub fn is_active(&self, element: usize) -> bool {
        self.active.get(element).copied().unwrap_or(false)
    }

    /// Registers `element` as a singleton set.
    ///
    /// Returns `false` without touching any state when the element is
    /// already active.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::OutOfBounds`] when `element >= capacity`.
    pub fn make_set(&mut self, element: usize) -> Result<bool, DisjointSetError> {
        let capacity = self.capacity();
        let slot = self
            .active
            .get_mut(element)
            .ok_or(DisjointSetError::OutOfBounds { element, capacity })?;
        if *slot {
            return Ok(false);
        }
        // Inactive elements are never linked, so their parent, rank and size
        // still hold the singleton values written at construction.
        *slot = true;
        self.components += 1;
        self.active_count += 1;
        Ok(true)
    }

    /// Grows the universe by one element, activated as a singleton, and
    /// returns its id.
    ///
    /// # Examples
    /// ```
    /// use linkset_core::DisjointSet;
    ///
    /// let mut set = DisjointSet::new(0);
    /// let first = set.push();
    /// let second = set.push();
    /// assert_eq!((first, second), (0, 1));
    /// assert_eq!(set.component_count(), 2);
    /// ```
    pub fn push(&mut self) -> usize {
        let element = self.parent.len();
        self.parent.push(element);
        self.rank.push(0);
        self.size.push(1);
        self.active.push(true);
        self.components += 1;
        self.active_count += 1;
        element
    }

    /// Returns the representative of the set containing `element`,
    /// relinking every node on the lookup path directly to it.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::OutOfBounds`] for ids outside the
    /// universe and [`DisjointSetError::Inactive`] for ids never activated.
    pub fn find(&mut self, element: usize) -> Result<usize, DisjointSetError> {
        self.check(element)?;
        Ok(self.find_root(element))
    }

    /// Merges the sets containing `left` and `right`.
    ///
    /// Returns `false` when both already share a set; the partition and the
    /// component count are then unchanged. Both ids are validated before any
    /// state is modified.
    ///
    /// # Errors
    /// Returns [`DisjointSetError`] when either id is out of bounds or
    /// inactive.
    pub fn union(&mut self, left: usize, right: usize) -> Result<bool, DisjointSetError> {
        self.check(left)?;
        self.check(right)?;
        Ok(self.link(left, right))
    }

    /// Returns `true` when `left` and `right` share a set.
    ///
    /// # Errors
    /// Returns [`DisjointSetError`] when either id is out of bounds or
    /// inactive.
    pub fn connected(&mut self, left: usize, right: usize) -> Result<bool, DisjointSetError> {
        self.check(left)?;
        self.check(right)?;
        Ok(self.find_root(left) == self.find_root(right))
    }

    /// Returns the population of the set containing `element`.
    ///
    /// # Errors
    /// Returns [`DisjointSetError`] when `element` is out of bounds or
    /// inactive.
    pub fn set_size(&mut self, element: usize) -> Result<usize, DisjointSetError> {
        self.check(element)?;
        Ok(self.root_size(element))
    }

    /// Groups the active elements by set.
    ///
    /// Each group is sorted ascending and groups are ordered by their
    /// smallest member.
    ///
    /// # Examples
    /// ```
    /// use linkset_core::DisjointSet;
    ///
    /// let mut set = DisjointSet::new(4);
    /// set.union(3, 0)?;
    /// assert_eq!(set.sets(), vec![vec![0, 3], vec![1], vec![2]]);
    /// # Ok::<(), linkset_core::DisjointSetError>(())
    /// ```
    pub fn sets(&mut self) -> Vec<Vec<usize>> {
        let mut slot_of_root: Vec<Option<usize>> = vec![None; self.capacity()];
        let mut groups: Vec<Vec<usize>> = Vec::with_capacity(self.components);
        for element in 0..self.capacity() {
            if !self.active[element] {
                continue;
            }
            let root = self.find_root(element);
            match slot_of_root[root] {
                Some(slot) => groups[slot].push(element),
                None => {
                    slot_of_root[root] = Some(groups.len());
                    groups.push(vec![element]);
                }
            }
        }
        groups
    }

    fn check(&self, element: usize) -> Result<(), DisjointSetError> {
        match self.active.get(element) {
            Some(true) => Ok(()),
            Some(false) => Err(DisjointSetError::Inactive { element }),
            None => Err(DisjointSetError::OutOfBounds {
                element,
                capacity: self.capacity(),
            }),
        }
    }

    /// Merges the sets of two active elements. Callers must have validated
    /// both ids.
    pub(super) fn link(&mut self, left: usize, right: usize) -> bool {
        let left_root = self.find_root(left);
        let right_root = self.find_root(right);
        if left_root == right_root {
            return false;
        }

        let (root, child) = self.choose_parent_child(left_root, right_root);
        self.parent[child] = root;
        self.size[root] += self.size[child];
        if self.merge_strategy == MergeStrategy::ByRank && self.rank[root] == self.rank[child] {
            self.rank[root] = self.rank[root].saturating_add(1);
        }
        self.components -= 1;
        true
    }

    pub(super) fn root_size(&mut self, element: usize) -> usize {
        let root = self.find_root(element);
        self.size[root]
    }

    pub(super) fn find_root(&mut self, mut node: usize) -> usize {
        let mut root = node;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        while self.parent[node] != root {
            let parent = self.parent[node];
            self.parent[node] = root;
            node = parent;
        }

        root
    }

    fn choose_parent_child(&self, left_root: usize, right_root: usize) -> (usize, usize) {
        let ordering = match self.merge_strategy {
            MergeStrategy::ByRank => self.rank[left_root].cmp(&self.rank[right_root]),
            MergeStrategy::BySize => self.size[left_root].cmp(&self.size[right_root]),
        };
        match ordering {
            Ordering::Less => (right_root, left_root),
            Ordering::Equal | Ordering::Greater => (left_root, right_root),
        }
    }
}

#[cfg(test)]
mod property;
