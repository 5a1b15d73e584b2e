//! Utility functions for local search operations.

use crate::problem::Problem;
use crate::solution::Solution;
use rand::Rng;
use std::collections::BTreeSet;

/// Pick a uniformly random selected subset.
pub fn random_selected<R: Rng>(subset_ids: &BTreeSet<usize>, rng: &mut R) -> Option<usize> {
    if subset_ids.is_empty() {
        return None;
    }
    subset_ids
        .iter()
        .nth(rng.gen_range(0..subset_ids.len()))
        .copied()
}

/// Subset ids after replacing `removed` with `inserted`.
///
/// `inserted` may already be selected (or equal `removed`), in which case the
/// result is a pure removal (or unchanged).
pub fn swapped(subset_ids: &BTreeSet<usize>, removed: usize, inserted: usize) -> BTreeSet<usize> {
    let mut ids = subset_ids.clone();
    ids.remove(&removed);
    ids.insert(inserted);
    ids
}

/// Cost of `current` after the swap, without rebuilding the set.
pub fn swap_cost(current: &Solution, problem: &Problem, removed: usize, inserted: usize) -> u64 {
    if removed == inserted {
        return current.cost;
    }
    let mut cost = current.cost - problem.costs[removed];
    if !current.subset_ids.contains(&inserted) {
        cost += problem.costs[inserted];
    }
    cost
}

/// Check if `subset` covers all of `elements`.
pub fn covers_all(problem: &Problem, subset: usize, elements: &[usize]) -> bool {
    elements
        .iter()
        .all(|&element| problem.coverage[element].binary_search(&subset).is_ok())
}
