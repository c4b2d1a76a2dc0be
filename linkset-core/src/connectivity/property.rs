//! Property tests comparing incremental connectivity with batch oracles.

use std::collections::VecDeque;

use proptest::prelude::*;
use proptest::test_runner::{TestCaseError, TestCaseResult};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rstest::rstest;

use crate::test_utils::{flood_fill_components, suite_proptest_config};

use super::ConnectivityTracker;
use super::enclosure::enclosed_cells;
use super::grid::Grid;
use super::stones::{Stone, removable_stones, stone_group_counts};

/// A grid with a land mask and a seed that fixes the activation order.
#[derive(Clone, Debug)]
struct GridCase {
    rows: usize,
    cols: usize,
    open: Vec<bool>,
    seed: u64,
}

impl GridCase {
    fn grid(&self) -> Result<Grid, TestCaseError> {
        Grid::new(self.rows, self.cols).map_err(|e| TestCaseError::fail(e.to_string()))
    }

    /// Open cells in a seeded random order.
    fn shuffled_events(&self) -> Vec<usize> {
        let mut events: Vec<usize> = (0..self.open.len()).filter(|&i| self.open[i]).collect();
        events.shuffle(&mut SmallRng::seed_from_u64(self.seed));
        events
    }
}

fn grid_case_strategy() -> impl Strategy<Value = GridCase> {
    (1_usize..=8, 1_usize..=8).prop_flat_map(|(rows, cols)| {
        (
            proptest::collection::vec(any::<bool>(), rows * cols),
            any::<u64>(),
        )
            .prop_map(move |(open, seed)| GridCase {
                rows,
                cols,
                open,
                seed,
            })
    })
}

/// After every event the running count equals a flood fill over the cells
/// activated so far, whatever the order.
fn run_prefix_equivalence_property(case: &GridCase) -> TestCaseResult {
    let grid = case.grid()?;
    let mut tracker = ConnectivityTracker::new(grid.len());
    let mut activated = vec![false; grid.len()];

    for index in case.shuffled_events() {
        let count = tracker
            .add_element(index, |cell| grid.neighbours(cell))
            .map_err(|e| TestCaseError::fail(e.to_string()))?;
        activated[index] = true;
        prop_assert_eq!(count, flood_fill_components(case.rows, case.cols, &activated));
    }

    prop_assert_eq!(
        tracker.component_count(),
        flood_fill_components(case.rows, case.cols, &case.open)
    );
    Ok(())
}

/// Replaying every event a second time changes nothing.
fn run_duplicate_property(case: &GridCase) -> TestCaseResult {
    let grid = case.grid()?;
    let events = case.shuffled_events();
    let mut tracker = ConnectivityTracker::new(grid.len());
    let first = tracker
        .add_elements(events.iter().copied(), |cell| grid.neighbours(cell))
        .map_err(|e| TestCaseError::fail(e.to_string()))?;
    let settled = first.last().copied().unwrap_or(0);

    let replay = tracker
        .add_elements(events.iter().rev().copied(), |cell| grid.neighbours(cell))
        .map_err(|e| TestCaseError::fail(e.to_string()))?;
    prop_assert!(replay.iter().all(|&count| count == settled));
    prop_assert_eq!(tracker.active_count(), events.len());
    Ok(())
}

/// Open cells unreachable from any open border cell, found by flood fill.
fn enclosed_by_flood_fill(grid: Grid, open: &[bool]) -> Vec<usize> {
    let mut reached = vec![false; open.len()];
    let mut queue: VecDeque<usize> = (0..open.len())
        .filter(|&i| open[i] && grid.is_border(i))
        .collect();
    for &start in &queue {
        reached[start] = true;
    }
    while let Some(index) = queue.pop_front() {
        for next in grid.neighbours(index) {
            if open[next] && !reached[next] {
                reached[next] = true;
                queue.push_back(next);
            }
        }
    }
    (0..open.len()).filter(|&i| open[i] && !reached[i]).collect()
}

fn run_enclosure_property(case: &GridCase) -> TestCaseResult {
    let grid = case.grid()?;
    let report =
        enclosed_cells(grid, &case.open).map_err(|e| TestCaseError::fail(e.to_string()))?;
    let expected = enclosed_by_flood_fill(grid, &case.open);

    let found: Vec<usize> = report
        .cells()
        .iter()
        .map(|&cell| grid.index(cell))
        .collect::<Result<_, _>>()
        .map_err(|e| TestCaseError::fail(e.to_string()))?;
    prop_assert_eq!(&found, &expected);

    let mut mask = vec![false; grid.len()];
    for &index in &expected {
        mask[index] = true;
    }
    prop_assert_eq!(
        report.regions(),
        flood_fill_components(case.rows, case.cols, &mask)
    );
    Ok(())
}

/// Pairwise reference: stones sharing a row or column are merged by
/// relabelling.
fn stone_groups_by_relabelling(stones: &[Stone]) -> usize {
    let mut distinct = stones.to_vec();
    distinct.sort_unstable();
    distinct.dedup();
    let mut labels: Vec<usize> = (0..distinct.len()).collect();
    for i in 0..distinct.len() {
        for j in (i + 1)..distinct.len() {
            let shares_line = distinct[i].0 == distinct[j].0 || distinct[i].1 == distinct[j].1;
            let (keep, drop) = (labels[i], labels[j]);
            if shares_line && keep != drop {
                for label in &mut labels {
                    if *label == drop {
                        *label = keep;
                    }
                }
            }
        }
    }
    labels.sort_unstable();
    labels.dedup();
    labels.len()
}

fn run_stone_property(stones: &[Stone]) -> TestCaseResult {
    let counts = stone_group_counts(stones);
    prop_assert_eq!(counts.len(), stones.len());
    for prefix in 1..=stones.len() {
        prop_assert_eq!(counts[prefix - 1], stone_groups_by_relabelling(&stones[..prefix]));
    }

    let mut distinct = stones.to_vec();
    distinct.sort_unstable();
    distinct.dedup();
    prop_assert_eq!(
        removable_stones(stones),
        distinct.len() - stone_groups_by_relabelling(stones)
    );
    Ok(())
}

fn stones_strategy() -> impl Strategy<Value = Vec<Stone>> {
    proptest::collection::vec((-4_i64..=4, -4_i64..=4), 0..24)
}

proptest! {
    #![proptest_config(suite_proptest_config(128))]

    #[test]
    fn incremental_counts_match_flood_fill(case in grid_case_strategy()) {
        run_prefix_equivalence_property(&case)?;
    }

    #[test]
    fn duplicate_events_are_inert(case in grid_case_strategy()) {
        run_duplicate_property(&case)?;
    }

    #[test]
    fn enclosure_matches_border_flood_fill(case in grid_case_strategy()) {
        run_enclosure_property(&case)?;
    }

    #[test]
    fn stone_groups_match_pairwise_reference(stones in stones_strategy()) {
        run_stone_property(&stones)?;
    }
}

#[rstest]
#[case::checkerboard(4, 4, |i: usize| (i / 4 + i % 4) % 2 == 0)]
#[case::ring(5, 5, |i: usize| i != 12)]
#[case::full(3, 6, |_: usize| true)]
#[case::stripes(6, 3, |i: usize| (i / 3) % 2 == 0)]
fn fixed_grids_satisfy_every_property(
    #[case] rows: usize,
    #[case] cols: usize,
    #[case] open: fn(usize) -> bool,
) {
    for seed in [0, 1, 2] {
        let case = GridCase {
            rows,
            cols,
            open: (0..rows * cols).map(open).collect(),
            seed,
        };
        run_prefix_equivalence_property(&case).expect("incremental counts must match");
        run_duplicate_property(&case).expect("duplicates must be inert");
        run_enclosure_property(&case).expect("enclosure must match");
    }
}
