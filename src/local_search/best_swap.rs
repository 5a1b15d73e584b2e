//! Best single-swap neighbourhood.

use crate::problem::Problem;
use crate::solution::Solution;

use super::utils::{covers_all, swap_cost, swapped};
use super::LocalSearch;

impl LocalSearch {
    /// Exhaustive swap: every subset id is tried as replacement for every
    /// selected subset, and the cheapest feasible swap wins (first found on
    /// ties).
    ///
    /// For a removed subset only the elements it alone covered need checking,
    /// so each replacement costs O(|uncovered|) instead of a full feasibility
    /// pass.
    pub fn best_neighbour(&self, current: &Solution, problem: &Problem) -> Solution {
        let mut best: Option<(u64, usize, usize)> = None;

        for &removed in &current.subset_ids {
            let uncovered = problem.uncovered_without(&current.subset_ids, removed);

            for inserted in 0..problem.subset_count {
                let cost = swap_cost(current, problem, removed, inserted);
                if best.map_or(false, |(best_cost, _, _)| cost >= best_cost) {
                    continue;
                }

                if covers_all(problem, inserted, &uncovered) {
                    best = Some((cost, removed, inserted));
                }
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
