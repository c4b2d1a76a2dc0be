//! Open regions sealed off from the grid border.
//!
//! Every border cell is unioned with a boundary sentinel, an extra element
//! at id `rows * cols` that is active before any cell. A region is enclosed
//! exactly when it never joins the sentinel's component.

use std::iter;

use tracing::{debug, instrument};

use super::grid::{Cell, Grid};
use super::{ConnectivityError, ConnectivityTracker};

/// Enclosed open cells and the number of regions they form.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct EnclosureReport {
    cells: Vec<Cell>,
    regions: usize,
}

impl EnclosureReport {
    /// Enclosed cells in row-major order.
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of distinct enclosed regions.
    #[must_use]
    pub const fn regions(&self) -> usize {
        self.regions
    }

    /// Consumes the report, returning the enclosed cells.
    #[must_use]
    pub fn into_cells(self) -> Vec<Cell> {
        self.cells
    }
}

/// Finds the open cells of `grid` with no open path to its border.
///
/// `open` is a row-major mask with one entry per cell; `true` marks a cell
/// that can be traversed.
///
/// # Errors
/// Returns [`ConnectivityError::MaskLengthMismatch`] when `open` does not
/// hold exactly `rows * cols` entries, and
/// [`ConnectivityError::GridTooLarge`] when the sentinel id cannot be
/// allocated.
///
/// # Examples
/// ```
/// use linkset_core::connectivity::enclosure::enclosed_cells;
/// use linkset_core::connectivity::grid::{Cell, Grid};
///
/// // X X X X
/// // X . . X
/// // X X . X
/// // X . X X
/// let grid = Grid::new(4, 4)?;
/// let open = [
///     false, false, false, false,
///     false, true, true, false,
///     false, false, true, false,
///     false, true, false, false,
/// ];
/// let report = enclosed_cells(grid, &open)?;
/// assert_eq!(report.cells(), &[Cell::new(1, 1), Cell::new(1, 2), Cell::new(2, 2)]);
/// assert_eq!(report.regions(), 1);
/// # Ok::<(), linkset_core::ConnectivityError>(())
/// ```
#[instrument(
    name = "connectivity.enclosed_cells",
    err,
    skip(open),
    fields(rows = grid.rows(), cols = grid.cols()),
)]
pub fn enclosed_cells(grid: Grid, open: &[bool]) -> Result<EnclosureReport, ConnectivityError> {
    if open.len() != grid.len() {
        return Err(ConnectivityError::MaskLengthMismatch {
            expected: grid.len(),
            found: open.len(),
        });
    }
    let boundary = grid.len();
    let universe = boundary
        .checked_add(1)
        .ok_or(ConnectivityError::GridTooLarge {
            rows: grid.rows(),
            cols: grid.cols(),
        })?;

    let mut tracker = ConnectivityTracker::new(universe);
    tracker.add_element(boundary, |_| iter::empty())?;

    let open_cells = (0..grid.len()).filter(|&index| open[index]);
    tracker.add_elements(open_cells, |index| {
        let sentinel = grid.is_border(index).then_some(boundary);
        grid.neighbours(index).chain(sentinel)
    })?;

    let mut cells = Vec::new();
    for index in (0..grid.len()).filter(|&index| open[index]) {
        if !tracker.connected(index, boundary)? {
            cells.extend(grid.cell(index));
        }
    }
    // The sentinel's component is never enclosed.
    let regions = tracker.component_count() - 1;

    debug!(
        open = tracker.active_count() - 1,
        enclosed = cells.len(),
        regions,
        "enclosure resolved"
    );
    Ok(EnclosureReport { cells, regions })
}
