//! Spanning trees over integer points in the plane.
//!
//! The cost of linking two points is their Manhattan distance, so the
//! cheapest way to connect a point set is the MST of its complete graph.

use tracing::instrument;

use super::{MstError, WeightedEdge, kruskal};

/// A point on the integer lattice, as `(x, y)`.
pub type Point = (i64, i64);

/// Manhattan distance between two points, saturating at `u64::MAX`.
///
/// # Examples
/// ```
/// use linkset_core::mst::points::manhattan_distance;
///
/// assert_eq!(manhattan_distance((0, 0), (2, -3)), 5);
/// ```
#[must_use]
pub const fn manhattan_distance(left: Point, right: Point) -> u64 {
    left.0
        .abs_diff(right.0)
        .saturating_add(left.1.abs_diff(right.1))
}

/// Builds the complete graph over `points` weighted by Manhattan distance.
///
/// Vertex `i` corresponds to `points[i]`; each unordered pair appears once.
#[must_use]
pub fn manhattan_edges(points: &[Point]) -> Vec<WeightedEdge<u64>> {
    let pair_count = points.len() * points.len().saturating_sub(1) / 2;
    let mut edges = Vec::with_capacity(pair_count);
    for (i, &left) in points.iter().enumerate() {
        for (offset, &right) in points.iter().skip(i + 1).enumerate() {
            edges.push(WeightedEdge::new(
                i,
                i + 1 + offset,
                manhattan_distance(left, right),
            ));
        }
    }
    edges
}

/// Minimum total Manhattan length needed to connect every point.
///
/// Duplicate points connect at zero cost; an empty or single-point input
/// costs nothing.
///
/// # Errors
/// Returns [`MstError::WeightOverflow`] when the total length exceeds
/// `u64::MAX`. Other [`MstError`] variants cannot arise from point input.
///
/// # Examples
/// ```
/// use linkset_core::mst::points::min_cost_to_connect;
///
/// let points = [(0, 0), (2, 2), (3, 10), (5, 2), (7, 0)];
/// assert_eq!(min_cost_to_connect(&points)?, 20);
/// # Ok::<(), linkset_core::MstError>(())
/// ```
#[instrument(name = "mst.min_cost_to_connect", err, skip(points), fields(points = points.len()))]
pub fn min_cost_to_connect(points: &[Point]) -> Result<u64, MstError> {
    let forest = kruskal(points.len(), &manhattan_edges(points))?;
    forest.total_weight().ok_or(MstError::WeightOverflow {
        edge_count: forest.edges().len(),
    })
}
