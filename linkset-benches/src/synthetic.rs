//! Seeded synthetic workloads.
//!
//! Every generator is driven by a [`SmallRng`] seeded from the config, so
//! benchmark inputs are identical across runs.

use linkset_core::WeightedEdge;
use linkset_core::connectivity::grid::{Cell, Grid};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng, rngs::SmallRng};

/// Errors that may occur during synthetic workload generation.
#[derive(Clone, Debug, thiserror::Error, PartialEq, Eq)]
pub enum SyntheticError {
    /// The requested vertex count was zero.
    #[error("node count must be greater than zero")]
    ZeroNodes,
    /// The land probability was outside `[0, 1]`.
    #[error("land probability {0} is outside [0, 1]")]
    InvalidProbability(String),
}

/// Configuration for random edge lists.
#[derive(Clone, Debug)]
pub struct SyntheticGraphConfig {
    /// Number of vertices.
    pub node_count: usize,
    /// Number of edges to draw.
    pub edge_count: usize,
    /// RNG seed for reproducibility.
    pub seed: u64,
}

/// Draws `edge_count` random edges with weights in `[0, 1_000_000)`.
///
/// Endpoints are uniform, so self-loops and parallel edges occur at their
/// natural rate.
///
/// # Errors
/// Returns [`SyntheticError::ZeroNodes`] when `node_count` is zero.
///
/// # Examples
/// ```
/// use linkset_benches::synthetic::{SyntheticGraphConfig, random_edges};
///
/// let config = SyntheticGraphConfig { node_count: 8, edge_count: 20, seed: 7 };
/// let edges = random_edges(&config).expect("valid config");
/// assert_eq!(edges.len(), 20);
/// assert!(edges.iter().all(|edge| edge.source() < 8 && edge.target() < 8));
/// ```
pub fn random_edges(
    config: &SyntheticGraphConfig,
) -> Result<Vec<WeightedEdge<u64>>, SyntheticError> {
    if config.node_count == 0 {
        return Err(SyntheticError::ZeroNodes);
    }
    let mut rng = SmallRng::seed_from_u64(config.seed);
    Ok((0..config.edge_count)
        .map(|_| {
            WeightedEdge::new(
                rng.gen_range(0..config.node_count),
                rng.gen_range(0..config.node_count),
                rng.gen_range(0..1_000_000),
            )
        })
        .collect())
}

/// Draws `edge_count` random union requests, discarding weights.
///
/// # Errors
/// Returns [`SyntheticError::ZeroNodes`] when `node_count` is zero.
pub fn random_pairs(config: &SyntheticGraphConfig) -> Result<Vec<(usize, usize)>, SyntheticError> {
    Ok(random_edges(config)?
        .into_iter()
        .map(|edge| (edge.source(), edge.target()))
        .collect())
}

/// Land cells of `grid`, each kept with probability `land`, in a seeded
/// random activation order.
///
/// # Errors
/// Returns [`SyntheticError::InvalidProbability`] when `land` is outside
/// `[0, 1]`.
///
/// # Examples
/// ```
/// use linkset_benches::synthetic::land_events;
/// use linkset_core::connectivity::grid::Grid;
///
/// let grid = Grid::new(4, 4)?;
/// assert_eq!(land_events(grid, 1.0, 3)?.len(), 16);
/// assert!(land_events(grid, 0.0, 3)?.is_empty());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn land_events(grid: Grid, land: f64, seed: u64) -> Result<Vec<Cell>, SyntheticError> {
    if !(0.0..=1.0).contains(&land) {
        return Err(SyntheticError::InvalidProbability(land.to_string()));
    }
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut cells: Vec<Cell> = (0..grid.len())
        .filter(|_| rng.gen_bool(land))
        .filter_map(|index| grid.cell(index))
        .collect();
    cells.shuffle(&mut rng);
    Ok(cells)
}
