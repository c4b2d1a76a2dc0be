//! Naive relabelling oracle for disjoint-set property verification.
//!
//! Every element carries an explicit set label; a merge rewrites all labels
//! of one set. Quadratic, but obviously correct.

use crate::Activation;

/// Reference partition with O(n) merges.
#[derive(Clone, Debug)]
pub(super) struct LabelOracle {
    labels: Vec<Option<usize>>,
}

impl LabelOracle {
    pub(super) fn new(capacity: usize, activation: Activation) -> Self {
        let labels = (0..capacity)
            .map(|element| (activation == Activation::Eager).then_some(element))
            .collect();
        Self { labels }
    }

    pub(super) fn is_active(&self, element: usize) -> bool {
        self.labels[element].is_some()
    }

    pub(super) fn make_set(&mut self, element: usize) {
        if self.labels[element].is_none() {
            self.labels[element] = Some(element);
        }
    }

    /// Returns `true` when two distinct sets were merged.
    pub(super) fn union(&mut self, left: usize, right: usize) -> bool {
        let (Some(keep), Some(replace)) = (self.labels[left], self.labels[right]) else {
            return false;
        };
        if keep == replace {
            return false;
        }
        for label in self.labels.iter_mut().flatten() {
            if *label == replace {
                *label = keep;
            }
        }
        true
    }

    pub(super) fn connected(&self, left: usize, right: usize) -> bool {
        matches!(
            (self.labels[left], self.labels[right]),
            (Some(a), Some(b)) if a == b
        )
    }

    pub(super) fn set_size(&self, element: usize) -> usize {
        let label = self.labels[element];
        self.labels.iter().filter(|other| **other == label).count()
    }

    pub(super) fn component_count(&self) -> usize {
        let mut labels: Vec<usize> = self.labels.iter().flatten().copied().collect();
        labels.sort_unstable();
        labels.dedup();
        labels.len()
    }

    pub(super) fn active_count(&self) -> usize {
        self.labels.iter().flatten().count()
    }
}
