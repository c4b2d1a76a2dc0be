//! Minimum spanning tree (MST) construction.
//!
//! Implements Kruskal's algorithm over a caller-supplied weighted edge list.
//! Edges are validated up front, sorted by weight (in parallel via Rayon when
//! the `parallel` feature is enabled) and then scanned once, using a
//! [`DisjointSet`] purely as a cycle oracle: an edge is kept exactly when its
//! union merges two previously separate components.

pub mod points;
mod weight;

use std::cmp::Ordering;

use tracing::{debug, instrument};

use crate::{DisjointSet, DisjointSetError, error::define_error_codes};

pub use self::weight::Weight;

/// Errors returned while computing a minimum spanning tree/forest.
#[derive(Clone, Copy, Debug, Eq, thiserror::Error, PartialEq)]
#[non_exhaustive]
pub enum MstError {
    /// An edge referenced a node id that is not present in the graph.
    #[error("edge references node {node}, but node_count is {node_count}")]
    InvalidNodeId {
        /// The invalid node id referenced by an edge.
        node: usize,
        /// The number of nodes in the graph.
        node_count: usize,
    },
    /// An edge carried a weight outside the admissible range, such as a
    /// non-finite float.
    #[error("edge ({left}, {right}) has an inadmissible weight")]
    InvalidWeight {
        /// The first endpoint id, as provided.
        left: usize,
        /// The second endpoint id, as provided.
        right: usize,
    },
    /// The accepted edge weights sum past the range of the weight type.
    #[error("total weight of {edge_count} spanning edges overflows the weight type")]
    WeightOverflow {
        /// The number of accepted edges being summed.
        edge_count: usize,
    },
    /// The underlying disjoint set rejected an operation.
    #[error("disjoint set failure: {source}")]
    DisjointSet {
        /// Error raised by the disjoint set.
        #[from]
        source: DisjointSetError,
    },
}

define_error_codes! {
    /// Stable codes describing [`MstError`] variants.
    enum MstErrorCode for MstError {
        /// An edge referenced a node id that is not present in the graph.
        InvalidNodeId => InvalidNodeId { .. } => "MST_INVALID_NODE_ID",
        /// An edge carried an inadmissible weight.
        InvalidWeight => InvalidWeight { .. } => "MST_INVALID_WEIGHT",
        /// The spanning weight does not fit the weight type.
        WeightOverflow => WeightOverflow { .. } => "MST_WEIGHT_OVERFLOW",
        /// The underlying disjoint set rejected an operation.
        DisjointSet => DisjointSet { .. } => "MST_DISJOINT_SET",
    }
}

/// An undirected, weighted input edge.
///
/// # Examples
/// ```
/// use linkset_core::WeightedEdge;
///
/// let edge = WeightedEdge::from((2, 0, 7_u32));
/// assert_eq!((edge.source(), edge.target(), edge.weight()), (2, 0, 7));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WeightedEdge<W> {
    source: usize,
    target: usize,
    weight: W,
}

impl<W: Copy> WeightedEdge<W> {
    /// Creates an edge between `source` and `target`.
    #[must_use]
    pub const fn new(source: usize, target: usize, weight: W) -> Self {
        Self {
            source,
            target,
            weight,
        }
    }

    /// Returns the first endpoint id.
    #[must_use]
    #[rustfmt::skip]
    pub const fn source(&self) -> usize { self.source }

    /// Returns the second endpoint id.
    #[must_use]
    #[rustfmt::skip]
    pub const fn target(&self) -> usize { self.target }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> W { self.weight }
}

impl<W: Copy> From<(usize, usize, W)> for WeightedEdge<W> {
    fn from((source, target, weight): (usize, usize, W)) -> Self {
        Self::new(source, target, weight)
    }
}

/// An edge accepted into a spanning forest.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MstEdge<W> {
    source: usize,
    target: usize,
    weight: W,
    sequence: usize,
}

impl<W: Weight> MstEdge<W> {
    /// Returns the first endpoint id, as provided.
    #[must_use]
    #[rustfmt::skip]
    pub const fn source(&self) -> usize { self.source }

    /// Returns the second endpoint id, as provided.
    #[must_use]
    #[rustfmt::skip]
    pub const fn target(&self) -> usize { self.target }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> W { self.weight }

    /// Returns the position of the edge in the input list.
    #[must_use]
    #[rustfmt::skip]
    pub const fn sequence(&self) -> usize { self.sequence }

    /// Kruskal scan order: ascending weight, then input position.
    fn scan_order(&self, other: &Self) -> Ordering {
        self.weight
            .total_order(&other.weight)
            .then_with(|| self.sequence.cmp(&other.sequence))
    }
}

/// The output of a minimum spanning forest computation.
///
/// When the input graph is connected, the forest is a minimum spanning tree.
#[derive(Clone, Debug, PartialEq)]
pub struct MinimumSpanningForest<W> {
    edges: Vec<MstEdge<W>>,
    node_count: usize,
    component_count: usize,
}

impl<W: Weight> MinimumSpanningForest<W> {
    /// Returns the accepted edges in the order Kruskal accepted them.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[MstEdge<W>] { &self.edges }

    /// Returns the number of vertices the forest spans.
    #[must_use]
    #[rustfmt::skip]
    pub const fn node_count(&self) -> usize { self.node_count }

    /// Returns the number of connected components in the resulting forest.
    #[must_use]
    #[rustfmt::skip]
    pub const fn component_count(&self) -> usize { self.component_count }

    /// Returns `true` when the forest spans a single connected component.
    #[must_use]
    pub const fn is_tree(&self) -> bool {
        self.component_count == 1
    }

    /// Returns the sum of the accepted edge weights, or `None` when the sum
    /// overflows `W`.
    #[must_use]
    pub fn total_weight(&self) -> Option<W> {
        self.edges
            .iter()
            .try_fold(W::ZERO, |total, edge| total.checked_add(edge.weight))
    }

    /// Consumes the forest, returning its edges.
    #[must_use]
    pub fn into_edges(self) -> Vec<MstEdge<W>> {
        self.edges
    }
}

/// Computes a minimum spanning forest with Kruskal's algorithm.
///
/// Edges are undirected. Ties between equal weights are broken by input
/// position, so the result is deterministic. Self-loops never merge two sets
/// and are therefore never accepted. An empty graph (`node_count == 0`)
/// yields an empty forest with zero components.
///
/// # Errors
///
/// Returns an error, before doing any other work, when an edge references a
/// node id `>= node_count` or carries an inadmissible weight.
///
/// # Examples
/// ```
/// use linkset_core::{WeightedEdge, kruskal};
///
/// let edges: Vec<WeightedEdge<u32>> = [(0, 1, 10), (0, 2, 6), (0, 3, 5), (1, 3, 15), (2, 3, 4)]
///     .into_iter()
///     .map(WeightedEdge::from)
///     .collect();
/// let forest = kruskal(4, &edges)?;
/// assert!(forest.is_tree());
/// assert_eq!(forest.total_weight(), Some(19));
/// # Ok::<(), linkset_core::MstError>(())
/// ```
#[instrument(
    name = "mst.kruskal",
    err,
    skip(edges),
    fields(edge_count = edges.len()),
)]
pub fn kruskal<W: Weight>(
    node_count: usize,
    edges: &[WeightedEdge<W>],
) -> Result<MinimumSpanningForest<W>, MstError> {
    let edge_list = prepare_edge_list(edges, node_count)?;

    let mut union_find = DisjointSet::new(node_count);
    let mut forest_edges = Vec::with_capacity(node_count.saturating_sub(1));

    for edge in &edge_list {
        if union_find.component_count() <= 1 {
            break;
        }
        if union_find.union(edge.source, edge.target)? {
            forest_edges.push(*edge);
        }
    }

    // Edges left unscanned after the early exit would all close cycles.
    let rejected = edge_list.len() - forest_edges.len();
    record_scan(forest_edges.len(), rejected);
    debug!(
        accepted = forest_edges.len(),
        rejected,
        components = union_find.component_count(),
        "kruskal scan completed"
    );

    Ok(MinimumSpanningForest {
        edges: forest_edges,
        node_count,
        component_count: union_find.component_count(),
    })
}

/// Returns the weight of a minimum spanning tree, or `None` when the graph
/// is disconnected and no single tree spans it.
///
/// # Errors
/// Propagates the validation errors of [`kruskal`], and returns
/// [`MstError::WeightOverflow`] when the tree weight does not fit `W`.
///
/// # Examples
/// ```
/// use linkset_core::{WeightedEdge, minimum_spanning_cost};
///
/// let connected = [WeightedEdge::new(0, 1, 5_i64), WeightedEdge::new(1, 2, 3)];
/// assert_eq!(minimum_spanning_cost(3, &connected)?, Some(8));
///
/// let split = [WeightedEdge::new(0, 1, 5_i64)];
/// assert_eq!(minimum_spanning_cost(3, &split)?, None);
/// # Ok::<(), linkset_core::MstError>(())
/// ```
pub fn minimum_spanning_cost<W: Weight>(
    node_count: usize,
    edges: &[WeightedEdge<W>],
) -> Result<Option<W>, MstError> {
    let forest = kruskal(node_count, edges)?;
    if !forest.is_tree() {
        return Ok(None);
    }
    forest.total_weight().map(Some).ok_or(MstError::WeightOverflow {
        edge_count: forest.edges.len(),
    })
}

fn validate_edge<W: Weight>(
    edge: &WeightedEdge<W>,
    sequence: usize,
    node_count: usize,
) -> Result<MstEdge<W>, MstError> {
    for node in [edge.source, edge.target] {
        if node >= node_count {
            return Err(MstError::InvalidNodeId { node, node_count });
        }
    }
    if !edge.weight.is_admissible() {
        return Err(MstError::InvalidWeight {
            left: edge.source,
            right: edge.target,
        });
    }
    Ok(MstEdge {
        source: edge.source,
        target: edge.target,
        weight: edge.weight,
        sequence,
    })
}

fn prepare_edge_list<W: Weight>(
    edges: &[WeightedEdge<W>],
    node_count: usize,
) -> Result<Vec<MstEdge<W>>, MstError> {
    let mut edge_list = edges
        .iter()
        .enumerate()
        .map(|(sequence, edge)| validate_edge(edge, sequence, node_count))
        .collect::<Result<Vec<_>, _>>()?;
    sort_edges(&mut edge_list);
    Ok(edge_list)
}

#[cfg(feature = "parallel")]
fn sort_edges<W: Weight>(edges: &mut [MstEdge<W>]) {
    use rayon::slice::ParallelSliceMut;

    // Sequence numbers are unique, so the unstable sort is deterministic.
    edges.par_sort_unstable_by(MstEdge::scan_order);
}

#[cfg(not(feature = "parallel"))]
fn sort_edges<W: Weight>(edges: &mut [MstEdge<W>]) {
    edges.sort_unstable_by(MstEdge::scan_order);
}

#[cfg(feature = "metrics")]
fn record_scan(accepted: usize, rejected: usize) {
    metrics::counter!("mst_edges_accepted").increment(u64::try_from(accepted).unwrap_or(u64::MAX));
    metrics::counter!("mst_edges_rejected").increment(u64::try_from(rejected).unwrap_or(u64::MAX));
}

#[cfg(not(feature = "metrics"))]
const fn record_scan(_accepted: usize, _rejected: usize) {}
