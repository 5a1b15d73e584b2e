//! Sequential removal-and-reinsert neighbourhood.

use crate::problem::Problem;
use crate::solution::Solution;
use rand::Rng;

use super::utils::{swap_cost, swapped};
use super::LocalSearch;

impl LocalSearch {
    /// Sweep over the selected subsets, replacing each by one random subset.
    ///
    /// Each tentative swap starts from `current`, so only one subset differs at
    /// a time. The cheapest feasible swap of the sweep is returned, or the
    /// current solution if none was feasible.
    pub fn sequential_removal_neighbour<R: Rng>(
        &self,
        current: &Solution,
        problem: &Problem,
        rng: &mut R,
    ) -> Solution {
        if problem.subset_count == 0 {
            return current.clone();
        }

        let mut best: Option<(u64, usize, usize)> = None;

        for &removed in &current.subset_ids {
            let inserted = rng.gen_range(0..problem.subset_count);
            let cost = swap_cost(current, problem, removed, inserted);

            if best.map_or(false, |(best_cost, _, _)| cost >= best_cost) {
                continue;
            }

            let ids = swapped(&current.subset_ids, removed, inserted);
            if problem.is_feasible(&ids) {
                best = Some((cost, removed, inserted));
            }
        }

        match best {
            Some((_, removed, inserted)) => {
                Solution::from_subsets(swapped(&current.subset_ids, removed, inserted), problem)
            }
            None => current.clone(),
        }
    }
}
