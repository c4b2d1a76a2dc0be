//! One-shot connectivity queries over a complete edge list or matrix.

use crate::DisjointSet;

use super::ConnectivityError;

/// Number of connected components of an undirected graph on `node_count`
/// vertices.
///
/// # Errors
/// Returns [`ConnectivityError::Element`] when an edge endpoint is
/// `>= node_count`. Edges before it have already been merged, but the set
/// is discarded.
///
/// # Examples
/// ```
/// use linkset_core::connectivity::batch::count_components;
///
/// assert_eq!(count_components(5, &[(0, 1), (1, 2), (3, 4)])?, 2);
/// assert_eq!(count_components(3, &[])?, 3);
/// # Ok::<(), linkset_core::ConnectivityError>(())
/// ```
pub fn count_components(
    node_count: usize,
    edges: &[(usize, usize)],
) -> Result<usize, ConnectivityError> {
    let mut set = DisjointSet::new(node_count);
    for &(left, right) in edges {
        set.union(left, right)?;
    }
    Ok(set.component_count())
}

/// Number of connected components of a graph given as a square adjacency
/// matrix. Only the upper triangle is read.
///
/// # Errors
/// Returns [`ConnectivityError::NonSquareMatrix`] when any row length
/// differs from the number of rows.
///
/// # Examples
/// ```
/// use linkset_core::connectivity::batch::components_from_adjacency;
///
/// let provinces = [
///     [true, true, false],
///     [true, true, false],
///     [false, false, true],
/// ];
/// assert_eq!(components_from_adjacency(&provinces)?, 2);
/// # Ok::<(), linkset_core::ConnectivityError>(())
/// ```
pub fn components_from_adjacency<R>(matrix: &[R]) -> Result<usize, ConnectivityError>
where
    R: AsRef<[bool]>,
{
    let node_count = matrix.len();
    if let Some((row, found)) = matrix
        .iter()
        .map(|row| row.as_ref().len())
        .enumerate()
        .find(|&(_, len)| len != node_count)
    {
        return Err(ConnectivityError::NonSquareMatrix {
            row,
            expected: node_count,
            found,
        });
    }

    let mut set = DisjointSet::new(node_count);
    for (left, row) in matrix.iter().enumerate() {
        for (right, &linked) in row.as_ref().iter().enumerate().skip(left + 1) {
            if linked {
                set.union(left, right)?;
            }
        }
    }
    Ok(set.component_count())
}

/// Returns the first edge that closes a cycle, i.e. whose endpoints were
/// already connected by the edges before it.
///
/// In a tree plus one extra edge this is the redundant connection.
///
/// # Errors
/// Returns [`ConnectivityError::Element`] when an endpoint examined before
/// the answer is found is `>= node_count`.
///
/// # Examples
/// ```
/// use linkset_core::connectivity::batch::first_cycle_edge;
///
/// let edges = [(0, 1), (1, 2), (3, 2), (0, 2), (2, 4)];
/// assert_eq!(first_cycle_edge(5, &edges)?, Some((0, 2)));
/// assert_eq!(first_cycle_edge(3, &[(0, 1), (1, 2)])?, None);
/// # Ok::<(), linkset_core::ConnectivityError>(())
/// ```
pub fn first_cycle_edge(
    node_count: usize,
    edges: &[(usize, usize)],
) -> Result<Option<(usize, usize)>, ConnectivityError> {
    let mut set = DisjointSet::new(node_count);
    for &(left, right) in edges {
        if !set.union(left, right)? {
            return Ok(Some((left, right)));
        }
    }
    Ok(None)
}
