//! Rectangular grids with 4-directional adjacency.
//!
//! Cells flatten to `row * cols + col`, which is the element id the
//! [`ConnectivityTracker`] sees.

use tracing::{debug, instrument};

use super::{ConnectivityError, ConnectivityTracker};

/// A cell coordinate.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct Cell {
    /// Zero-based row.
    pub row: usize,
    /// Zero-based column.
    pub col: usize,
}

impl Cell {
    /// Creates a cell at `(row, col)`.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for Cell {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

/// Dimensions of a `rows x cols` grid.
///
/// # Examples
/// ```
/// use linkset_core::connectivity::grid::{Cell, Grid};
///
/// let grid = Grid::new(2, 3)?;
/// assert_eq!(grid.len(), 6);
/// assert_eq!(grid.index(Cell::new(1, 2))?, 5);
/// let mut around = grid.neighbours(4).collect::<Vec<_>>();
/// around.sort_unstable();
/// assert_eq!(around, vec![1, 3, 5]);
/// # Ok::<(), linkset_core::ConnectivityError>(())
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    len: usize,
}

impl Grid {
    /// Creates a grid, checking that every cell can be indexed.
    ///
    /// # Errors
    /// Returns [`ConnectivityError::GridTooLarge`] when `rows * cols`
    /// overflows.
    pub fn new(rows: usize, cols: usize) -> Result<Self, ConnectivityError> {
        let len = rows
            .checked_mul(cols)
            .ok_or(ConnectivityError::GridTooLarge { rows, cols })?;
        Ok(Self { rows, cols, len })
    }

    /// Number of rows.
    #[must_use]
    #[rustfmt::skip]
    pub const fn rows(&self) -> usize { self.rows }

    /// Number of columns.
    #[must_use]
    #[rustfmt::skip]
    pub const fn cols(&self) -> usize { self.cols }

    /// Number of cells.
    #[must_use]
    #[rustfmt::skip]
    pub const fn len(&self) -> usize { self.len }

    /// Returns `true` when the grid has no cells.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Flattens `cell` to its element id.
    ///
    /// # Errors
    /// Returns [`ConnectivityError::CellOutOfBounds`] when the cell lies
    /// outside the grid.
    pub const fn index(&self, cell: Cell) -> Result<usize, ConnectivityError> {
        if cell.row < self.rows && cell.col < self.cols {
            Ok(cell.row * self.cols + cell.col)
        } else {
            Err(ConnectivityError::CellOutOfBounds {
                row: cell.row,
                col: cell.col,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    /// Expands an element id back into its cell, or `None` when out of range.
    #[must_use]
    pub const fn cell(&self, index: usize) -> Option<Cell> {
        if index < self.len {
            Some(Cell::new(index / self.cols, index % self.cols))
        } else {
            None
        }
    }

    /// Ids of the up, down, left and right neighbours of `index` that lie
    /// inside the grid. Out-of-range ids have no neighbours.
    pub fn neighbours(self, index: usize) -> impl Iterator<Item = usize> {
        self.cell(index).into_iter().flat_map(move |cell| {
            [
                (cell.row > 0).then(|| index - self.cols),
                (cell.row + 1 < self.rows).then(|| index + self.cols),
                (cell.col > 0).then(|| index - 1),
                (cell.col + 1 < self.cols).then(|| index + 1),
            ]
            .into_iter()
            .flatten()
        })
    }

    /// Returns `true` when `index` sits on the outer ring of the grid.
    #[must_use]
    pub const fn is_border(&self, index: usize) -> bool {
        match self.cell(index) {
            Some(cell) => {
                cell.row == 0
                    || cell.col == 0
                    || cell.row + 1 == self.rows
                    || cell.col + 1 == self.cols
            }
            None => false,
        }
    }
}

/// Number of islands after each land cell is added to an all-water grid.
///
/// Repeated cells are duplicate events and repeat the previous count.
///
/// # Errors
/// Returns [`ConnectivityError::CellOutOfBounds`] before adding anything
/// when any cell lies outside the grid.
///
/// # Examples
/// ```
/// use linkset_core::connectivity::grid::{Cell, Grid, island_counts};
///
/// let grid = Grid::new(3, 3)?;
/// let cells = [(0, 0), (0, 1), (1, 2), (2, 1)].map(Cell::from);
/// assert_eq!(island_counts(grid, &cells)?, vec![1, 1, 2, 3]);
/// # Ok::<(), linkset_core::ConnectivityError>(())
/// ```
#[instrument(
    name = "connectivity.island_counts",
    err,
    skip(cells),
    fields(rows = grid.rows(), cols = grid.cols(), events = cells.len()),
)]
pub fn island_counts(grid: Grid, cells: &[Cell]) -> Result<Vec<usize>, ConnectivityError> {
    let events = cells
        .iter()
        .map(|&cell| grid.index(cell))
        .collect::<Result<Vec<_>, _>>()?;

    let mut tracker = ConnectivityTracker::new(grid.len());
    let counts = tracker.add_elements(events, |index| grid.neighbours(index))?;
    debug!(
        land = tracker.active_count(),
        islands = tracker.component_count(),
        "island stream processed"
    );
    Ok(counts)
}
