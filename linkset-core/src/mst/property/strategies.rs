//! Strategy builders for MST property-based tests.
//!
//! Each generator is driven by a seeded [`SmallRng`] so a failing proptest
//! case can be replayed through the rstest suite from its seed alone.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::WeightedEdge;

use super::types::{MstFixture, WeightDistribution};

const MIN_NODES: usize = 2;
const MAX_NODES: usize = 48;

/// Largest graph handed to the brute-force oracle.
pub(super) const BRUTE_FORCE_MAX_NODES: usize = 6;
/// Largest edge list handed to the brute-force oracle.
pub(super) const BRUTE_FORCE_MAX_EDGES: usize = 11;

/// Generates fixtures covering every weight distribution.
pub(super) fn mst_fixture_strategy() -> impl Strategy<Value = MstFixture> {
    (any::<WeightDistribution>(), any::<u64>()).prop_map(|(distribution, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(distribution, &mut rng)
    })
}

/// Generates small, possibly disconnected multigraphs (self-loops and
/// parallel edges included) for exhaustive comparison.
pub(super) fn small_graph_strategy() -> impl Strategy<Value = (usize, Vec<WeightedEdge<u32>>)> {
    (1..=BRUTE_FORCE_MAX_NODES).prop_flat_map(|node_count| {
        let edge = (0..node_count, 0..node_count, 0_u32..20)
            .prop_map(|(source, target, weight)| WeightedEdge::new(source, target, weight));
        (
            Just(node_count),
            proptest::collection::vec(edge, 0..=BRUTE_FORCE_MAX_EDGES),
        )
    })
}

/// Generates a fixture for a specific weight distribution.
pub(super) fn generate_fixture(distribution: WeightDistribution, rng: &mut SmallRng) -> MstFixture {
    let (node_count, edges) = match distribution {
        WeightDistribution::Unique => generate_unique_weights(rng),
        WeightDistribution::ManyIdentical => generate_identical_weights(rng),
        WeightDistribution::Sparse => generate_sparse(rng),
        WeightDistribution::Disconnected => generate_disconnected(rng),
    };
    MstFixture {
        node_count,
        edges,
        distribution,
    }
}

fn generate_unique_weights(rng: &mut SmallRng) -> (usize, Vec<WeightedEdge<u32>>) {
    let node_count = rng.gen_range(MIN_NODES..=MAX_NODES);
    let mut pairs = all_pairs(0, node_count);
    pairs.retain(|_| rng.gen_bool(0.4));
    let mut weights: Vec<u32> = (0..).take(pairs.len()).collect();
    weights.shuffle(rng);
    let edges = pairs
        .into_iter()
        .zip(weights)
        .map(|((source, target), weight)| WeightedEdge::new(source, target, weight))
        .collect();
    (node_count, edges)
}

fn generate_identical_weights(rng: &mut SmallRng) -> (usize, Vec<WeightedEdge<u32>>) {
    let node_count = rng.gen_range(MIN_NODES..=MAX_NODES);
    let pool: Vec<u32> = (0..rng.gen_range(1..=3))
        .map(|_| rng.gen_range(1..=10))
        .collect();
    let mut edges = Vec::new();
    for (source, target) in all_pairs(0, node_count) {
        if rng.gen_bool(0.5) {
            let weight = pool[rng.gen_range(0..pool.len())];
            edges.push(WeightedEdge::new(source, target, weight));
        }
    }
    (node_count, edges)
}

fn generate_sparse(rng: &mut SmallRng) -> (usize, Vec<WeightedEdge<u32>>) {
    let node_count = rng.gen_range(MIN_NODES..=MAX_NODES);
    let mut order: Vec<usize> = (0..node_count).collect();
    order.shuffle(rng);

    let mut edges: Vec<_> = order
        .windows(2)
        .map(|pair| WeightedEdge::new(pair[0], pair[1], rng.gen_range(0..1_000)))
        .collect();

    let extra = rng.gen_range(node_count / 2..=node_count);
    for _ in 0..extra {
        let source = rng.gen_range(0..node_count);
        let target = rng.gen_range(0..node_count);
        edges.push(WeightedEdge::new(source, target, rng.gen_range(0..1_000)));
    }
    edges.shuffle(rng);
    (node_count, edges)
}

fn generate_disconnected(rng: &mut SmallRng) -> (usize, Vec<WeightedEdge<u32>>) {
    let sizes: Vec<usize> = (0..rng.gen_range(2..=5))
        .map(|_| rng.gen_range(1..=12))
        .collect();
    let mut edges = Vec::new();
    let mut offset = 0;
    for &size in &sizes {
        for (source, target) in all_pairs(offset, size) {
            if rng.gen_bool(0.6) {
                edges.push(WeightedEdge::new(source, target, rng.gen_range(0..100)));
            }
        }
        offset += size;
    }
    edges.shuffle(rng);
    (offset, edges)
}

/// All unordered pairs `(offset + i, offset + j)` with `i < j < size`.
fn all_pairs(offset: usize, size: usize) -> Vec<(usize, usize)> {
    (0..size)
        .flat_map(|i| ((i + 1)..size).map(move |j| (offset + i, offset + j)))
        .collect()
}
