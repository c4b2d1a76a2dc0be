//! Map-backed disjoint set whose universe grows as keys are first seen.

use std::collections::HashMap;
use std::hash::Hash;

use super::{DisjointSet, DisjointSetBuilder, MergeStrategy};

/// Disjoint set over arbitrary hashable keys.
///
/// Keys are registered on first use, so the universe never has to be sized
/// up front. Internally each key maps to a dense index into a
/// [`DisjointSet`] grown with [`DisjointSet::push`]. Every stored index is
/// active, so lookups through a registered key cannot fail.
///
/// # Examples
/// ```
/// use linkset_core::KeyedDisjointSet;
///
/// let mut accounts = KeyedDisjointSet::new();
/// accounts.union("alice@example.com", "alice@work.example");
/// accounts.union("bob@example.com", "bob@example.com");
/// assert_eq!(accounts.len(), 3);
/// assert_eq!(accounts.component_count(), 2);
/// assert!(accounts.connected(&"alice@work.example", &"alice@example.com"));
/// assert!(!accounts.connected(&"alice@example.com", &"carol@example.com"));
/// ```
#[derive(Clone, Debug)]
pub struct KeyedDisjointSet<K> {
    index: HashMap<K, usize>,
    keys: Vec<K>,
    set: DisjointSet,
}

impl<K> Default for KeyedDisjointSet<K>
where
    K: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K> KeyedDisjointSet<K>
where
    K: Eq + Hash + Clone,
{
    /// Creates an empty set merged by rank.
    #[must_use]
    pub fn new() -> Self {
        Self::with_merge_strategy(MergeStrategy::ByRank)
    }

    /// Creates an empty set using `merge_strategy`.
    #[must_use]
    pub fn with_merge_strategy(merge_strategy: MergeStrategy) -> Self {
        Self {
            index: HashMap::new(),
            keys: Vec::new(),
            set: DisjointSetBuilder::new(0)
                .with_merge_strategy(merge_strategy)
                .build(),
        }
    }

    /// Number of registered keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns `true` when no key has been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Number of disjoint sets among the registered keys.
    #[must_use]
    pub const fn component_count(&self) -> usize {
        self.set.component_count()
    }

    /// Returns `true` when `key` has been registered.
    #[must_use]
    pub fn contains(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    /// Registers `key` as a singleton if unseen and returns its dense index.
    pub fn insert(&mut self, key: K) -> usize {
        if let Some(&element) = self.index.get(&key) {
            return element;
        }
        let element = self.set.push();
        self.keys.push(key.clone());
        self.index.insert(key, element);
        element
    }

    /// Merges the sets containing `left` and `right`, registering either key
    /// if unseen. Returns `false` when they already shared a set.
    pub fn union(&mut self, left: K, right: K) -> bool {
        let left = self.insert(left);
        let right = self.insert(right);
        self.set.link(left, right)
    }

    /// Returns the representative key of the set containing `key`, or `None`
    /// when `key` is unregistered.
    pub fn find(&mut self, key: &K) -> Option<&K> {
        let element = *self.index.get(key)?;
        let root = self.set.find_root(element);
        self.keys.get(root)
    }

    /// Returns `true` when both keys are registered and share a set.
    pub fn connected(&mut self, left: &K, right: &K) -> bool {
        let (Some(&left), Some(&right)) = (self.index.get(left), self.index.get(right)) else {
            return false;
        };
        self.set.find_root(left) == self.set.find_root(right)
    }

    /// Returns the population of the set containing `key`, or `None` when
    /// `key` is unregistered.
    pub fn set_size(&mut self, key: &K) -> Option<usize> {
        let element = *self.index.get(key)?;
        Some(self.set.root_size(element))
    }

    /// Groups the registered keys by set, in registration order within and
    /// across groups.
    pub fn groups(&mut self) -> Vec<Vec<K>> {
        self.set
            .sets()
            .into_iter()
            .map(|members| {
                members
                    .into_iter()
                    .filter_map(|element| self.keys.get(element).cloned())
                    .collect()
            })
            .collect()
    }
}
