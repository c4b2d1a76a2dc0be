//! Stones on an unbounded integer lattice, grouped by shared rows and
//! columns.
//!
//! Two stones belong to the same group when a chain of stones links them,
//! each step sharing a row or a column. Rather than compare stones
//! pairwise, each stone unions its row line with its column line in a
//! [`KeyedDisjointSet`]; lines are only ever registered through a stone, so
//! line components and stone groups coincide.

use std::collections::HashSet;

use tracing::{debug, instrument, trace};

use crate::KeyedDisjointSet;

/// A stone position as `(row, column)`.
pub type Stone = (i64, i64);

/// A full row or column of the lattice.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Line {
    /// Every position with this row coordinate.
    Row(i64),
    /// Every position with this column coordinate.
    Column(i64),
}

/// Number of stone groups after each stone is placed.
///
/// Placing a stone on an occupied position is a duplicate event and
/// repeats the previous count.
///
/// # Examples
/// ```
/// use linkset_core::connectivity::stones::stone_group_counts;
///
/// let stones = [(0, 0), (5, 5), (0, 5), (9, 9), (0, 0)];
/// assert_eq!(stone_group_counts(&stones), vec![1, 2, 1, 2, 2]);
/// ```
#[must_use]
#[instrument(name = "connectivity.stone_group_counts", skip(stones), fields(stones = stones.len()))]
pub fn stone_group_counts(stones: &[Stone]) -> Vec<usize> {
    let mut lines = KeyedDisjointSet::new();
    let mut placed = HashSet::with_capacity(stones.len());
    let counts = stones
        .iter()
        .map(|&(row, col)| {
            if placed.insert((row, col)) {
                lines.union(Line::Row(row), Line::Column(col));
            } else {
                trace!(row, col, "stone already placed");
            }
            lines.component_count()
        })
        .collect();
    debug!(
        distinct = placed.len(),
        groups = lines.component_count(),
        "stone groups resolved"
    );
    counts
}

/// Largest number of stones that can be removed when a stone may only be
/// taken while another stone shares its row or column.
///
/// Every group can be reduced to a single stone, so the answer is the number
/// of distinct stones minus the number of groups. Repeated positions count
/// once.
///
/// # Examples
/// ```
/// use linkset_core::connectivity::stones::removable_stones;
///
/// let stones = [(0, 0), (0, 1), (1, 0), (1, 2), (2, 1), (2, 2)];
/// assert_eq!(removable_stones(&stones), 5);
/// assert_eq!(removable_stones(&[(0, 0), (0, 2), (1, 1), (2, 0), (2, 2)]), 3);
/// ```
#[must_use]
pub fn removable_stones(stones: &[Stone]) -> usize {
    let distinct: HashSet<Stone> = stones.iter().copied().collect();
    let groups = stone_group_counts(stones).last().copied().unwrap_or(0);
    distinct.len() - groups
}
