//! Sequential reference implementation for Kruskal equivalence checks.
//!
//! Uses a stable sort and a flat label vector that is relabelled on every
//! merge. Quadratic, but obviously correct.

use crate::WeightedEdge;

/// Outcome of the reference Kruskal scan.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(super) struct OracleForest {
    /// Input positions of the accepted edges, in acceptance order.
    pub accepted: Vec<usize>,
    /// Components remaining after the scan.
    pub component_count: usize,
    /// Sum of the accepted weights.
    pub total_weight: u64,
}

/// Runs Kruskal with a stable weight sort and label relabelling.
pub(super) fn reference_kruskal(node_count: usize, edges: &[WeightedEdge<u32>]) -> OracleForest {
    let mut order: Vec<usize> = (0..edges.len()).collect();
    order.sort_by_key(|&index| edges[index].weight());

    let mut labels: Vec<usize> = (0..node_count).collect();
    let mut accepted = Vec::new();
    let mut total_weight = 0_u64;

    for index in order {
        let edge = edges[index];
        let (keep, drop) = (labels[edge.source()], labels[edge.target()]);
        if keep == drop {
            continue;
        }
        for label in &mut labels {
            if *label == drop {
                *label = keep;
            }
        }
        accepted.push(index);
        total_weight += u64::from(edge.weight());
    }

    OracleForest {
        component_count: node_count - accepted.len(),
        accepted,
        total_weight,
    }
}

/// Number of connected components of the input graph.
pub(super) fn graph_component_count(node_count: usize, edges: &[WeightedEdge<u32>]) -> usize {
    reference_kruskal(node_count, edges).component_count
}
