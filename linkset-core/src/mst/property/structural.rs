//! Structural invariants every Kruskal forest must satisfy.

use proptest::prelude::*;
use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{MinimumSpanningForest, Weight, WeightedEdge};

/// Checks that `forest` is acyclic, has `V - C` edges, matches the
/// component count of the input and only contains input edges, accepted in
/// non-decreasing scan order.
pub(super) fn check_forest_structure<W: Weight>(
    node_count: usize,
    edges: &[WeightedEdge<W>],
    forest: &MinimumSpanningForest<W>,
    expected_components: usize,
) -> TestCaseResult {
    prop_assert_eq!(forest.node_count(), node_count);
    prop_assert_eq!(forest.component_count(), expected_components);
    prop_assert_eq!(forest.edges().len(), node_count - expected_components);

    let mut labels: Vec<usize> = (0..node_count).collect();
    for edge in forest.edges() {
        let input = edges
            .get(edge.sequence())
            .ok_or_else(|| TestCaseError::fail("sequence outside the input"))?;
        prop_assert_eq!(edge.source(), input.source());
        prop_assert_eq!(edge.target(), input.target());
        prop_assert_eq!(edge.weight(), input.weight());

        let (keep, drop) = (labels[edge.source()], labels[edge.target()]);
        prop_assert_ne!(keep, drop, "edge {} closes a cycle", edge.sequence());
        for label in &mut labels {
            if *label == drop {
                *label = keep;
            }
        }
    }

    for pair in forest.edges().windows(2) {
        let order = pair[0]
            .weight()
            .total_order(&pair[1].weight())
            .then_with(|| pair[0].sequence().cmp(&pair[1].sequence()));
        prop_assert!(order.is_lt(), "edges out of scan order: {:?}", pair);
    }

    Ok(())
}
