//! Incremental connectivity over a stream of activation events.
//!
//! [`ConnectivityTracker`] owns a lazily activated [`DisjointSet`]. Each
//! event activates one element and unions it with whichever of its
//! caller-supplied neighbours are already active, so the live component
//! count is maintained without ever recomputing connectivity from scratch.
//!
//! The submodules are concrete consumers of the tracker: land cells on a
//! grid ([`grid`]), regions sealed off from the grid border ([`enclosure`]),
//! stones sharing rows or columns ([`stones`]) and one-shot batch queries
//! ([`batch`]).

pub mod batch;
pub mod enclosure;
pub mod grid;
pub mod stones;

use tracing::trace;

use crate::{Activation, DisjointSet, DisjointSetError, MergeStrategy, error::define_error_codes};

/// Errors produced by connectivity consumers.
#[derive(Clone, Copy, Debug, Eq, thiserror::Error, PartialEq)]
#[non_exhaustive]
pub enum ConnectivityError {
    /// An element or neighbour id was rejected by the disjoint set.
    #[error("element rejected: {source}")]
    Element {
        /// Error raised by the disjoint set.
        #[from]
        source: DisjointSetError,
    },
    /// A cell coordinate lies outside the grid.
    #[error("cell ({row}, {col}) lies outside a {rows}x{cols} grid")]
    CellOutOfBounds {
        /// Row of the offending cell.
        row: usize,
        /// Column of the offending cell.
        col: usize,
        /// Number of grid rows.
        rows: usize,
        /// Number of grid columns.
        cols: usize,
    },
    /// The grid has more cells than can be addressed.
    #[error("a {rows}x{cols} grid has too many cells to index")]
    GridTooLarge {
        /// Requested number of rows.
        rows: usize,
        /// Requested number of columns.
        cols: usize,
    },
    /// A cell mask does not cover the grid exactly.
    #[error("mask holds {found} cells but the grid has {expected}")]
    MaskLengthMismatch {
        /// Number of cells in the grid.
        expected: usize,
        /// Number of entries in the mask.
        found: usize,
    },
    /// An adjacency matrix row has the wrong length.
    #[error("adjacency row {row} has {found} entries, expected {expected}")]
    NonSquareMatrix {
        /// Index of the offending row.
        row: usize,
        /// Number of rows in the matrix.
        expected: usize,
        /// Length of the offending row.
        found: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`ConnectivityError`] variants.
    enum ConnectivityErrorCode for ConnectivityError {
        /// An element or neighbour id was rejected by the disjoint set.
        Element => Element { .. } => "CONNECTIVITY_ELEMENT",
        /// A cell coordinate lies outside the grid.
        CellOutOfBounds => CellOutOfBounds { .. } => "CONNECTIVITY_CELL_OUT_OF_BOUNDS",
        /// The grid has more cells than can be addressed.
        GridTooLarge => GridTooLarge { .. } => "CONNECTIVITY_GRID_TOO_LARGE",
        /// A cell mask does not cover the grid exactly.
        MaskLengthMismatch => MaskLengthMismatch { .. } => "CONNECTIVITY_MASK_LENGTH_MISMATCH",
        /// An adjacency matrix row has the wrong length.
        NonSquareMatrix => NonSquareMatrix { .. } => "CONNECTIVITY_NON_SQUARE_MATRIX",
    }
}

/// Running component count over a stream of element activations.
///
/// The tracker knows nothing about adjacency: every event comes with the
/// neighbours of the new element, and only neighbours that are already
/// active are merged with it.
///
/// # Examples
/// ```
/// use linkset_core::ConnectivityTracker;
///
/// // A path 0 - 1 - 2 - 3, activated out of order.
/// let path = |element: usize| {
///     [element.checked_sub(1), Some(element + 1)]
///         .into_iter()
///         .flatten()
///         .filter(|&neighbour| neighbour < 4)
/// };
/// let mut tracker = ConnectivityTracker::new(4);
/// let counts = tracker.add_elements([0, 2, 1, 2, 3], path)?;
/// assert_eq!(counts, vec![1, 2, 1, 1, 1]);
/// # Ok::<(), linkset_core::ConnectivityError>(())
/// ```
#[derive(Clone, Debug)]
pub struct ConnectivityTracker {
    set: DisjointSet,
}

impl ConnectivityTracker {
    /// Creates a tracker over `universe` inactive elements, merged by rank.
    #[must_use]
    pub fn new(universe: usize) -> Self {
        Self::with_merge_strategy(universe, MergeStrategy::ByRank)
    }

    /// Creates a tracker over `universe` inactive elements.
    #[must_use]
    pub fn with_merge_strategy(universe: usize, merge_strategy: MergeStrategy) -> Self {
        Self {
            set: DisjointSet::builder(universe)
                .with_merge_strategy(merge_strategy)
                .with_activation(Activation::Lazy)
                .build(),
        }
    }

    /// Activates `element` and merges it with its active neighbours,
    /// returning the component count afterwards.
    ///
    /// Activating an element twice is a duplicate event: nothing changes
    /// and the current count is returned again. An element with no active
    /// neighbours becomes a new component; one touching `k` distinct
    /// components fuses them, leaving the count `k - 1` lower than before.
    ///
    /// # Errors
    /// Returns [`ConnectivityError::Element`] when `element` or any of its
    /// neighbours lies outside the universe. The tracker is left untouched.
    pub fn add_element<F, I>(
        &mut self,
        element: usize,
        neighbours: F,
    ) -> Result<usize, ConnectivityError>
    where
        F: FnOnce(usize) -> I,
        I: IntoIterator<Item = usize>,
    {
        let capacity = self.set.capacity();
        let in_bounds = |candidate: usize| {
            if candidate < capacity {
                Ok(candidate)
            } else {
                Err(DisjointSetError::OutOfBounds {
                    element: candidate,
                    capacity,
                })
            }
        };

        in_bounds(element)?;
        let neighbours = neighbours(element)
            .into_iter()
            .map(in_bounds)
            .collect::<Result<Vec<_>, _>>()?;

        if self.set.is_active(element) {
            trace!(
                element,
                components = self.set.component_count(),
                "duplicate activation"
            );
            record_duplicate();
            return Ok(self.set.component_count());
        }

        self.set.make_set(element)?;
        for neighbour in neighbours {
            if self.set.is_active(neighbour) {
                self.set.union(element, neighbour)?;
            }
        }
        Ok(self.set.component_count())
    }

    /// Applies [`add_element`](Self::add_element) to each event in turn and
    /// collects the running counts.
    ///
    /// # Errors
    /// Stops at the first rejected event. Events before it stay applied.
    pub fn add_elements<E, F, I>(
        &mut self,
        events: E,
        mut neighbours: F,
    ) -> Result<Vec<usize>, ConnectivityError>
    where
        E: IntoIterator<Item = usize>,
        F: FnMut(usize) -> I,
        I: IntoIterator<Item = usize>,
    {
        events
            .into_iter()
            .map(|element| self.add_element(element, &mut neighbours))
            .collect()
    }

    /// Number of components among the active elements.
    #[must_use]
    pub const fn component_count(&self) -> usize {
        self.set.component_count()
    }

    /// Number of elements activated so far.
    #[must_use]
    pub const fn active_count(&self) -> usize {
        self.set.active_count()
    }

    /// Size of the addressable universe.
    #[must_use]
    pub fn universe(&self) -> usize {
        self.set.capacity()
    }

    /// Returns `true` when `element` has been activated.
    #[must_use]
    pub fn is_active(&self, element: usize) -> bool {
        self.set.is_active(element)
    }

    /// Returns `true` when both elements are active and share a component.
    ///
    /// # Errors
    /// Returns [`ConnectivityError::Element`] for out-of-range or inactive
    /// ids.
    pub fn connected(&mut self, left: usize, right: usize) -> Result<bool, ConnectivityError> {
        Ok(self.set.connected(left, right)?)
    }

    /// Population of the component containing `element`.
    ///
    /// # Errors
    /// Returns [`ConnectivityError::Element`] for out-of-range or inactive
    /// ids.
    pub fn set_size(&mut self, element: usize) -> Result<usize, ConnectivityError> {
        Ok(self.set.set_size(element)?)
    }

    /// Consumes the tracker, returning the underlying disjoint set.
    #[must_use]
    pub fn into_inner(self) -> DisjointSet {
        self.set
    }
}

#[cfg(feature = "metrics")]
fn record_duplicate() {
    metrics::counter!("connectivity_duplicate_events").increment(1);
}

#[cfg(not(feature = "metrics"))]
const fn record_duplicate() {}

#[cfg(test)]
mod property;
