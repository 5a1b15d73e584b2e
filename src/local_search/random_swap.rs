//! Random swap neighbourhood.

use crate::problem::Problem;
use crate::solution::Solution;
use log::debug;
use rand::Rng;

use super::utils::{random_selected, swapped};
use super::LocalSearch;

impl LocalSearch {
    /// Drop one random selected subset and add one random subset id.
    ///
    /// The draw is repeated until the result is feasible, at most
    /// `max_neighbor_attempts` times; after that the current solution is
    /// returned unchanged.
    pub fn random_neighbour<R: Rng>(
        &self,
        current: &Solution,
        problem: &Problem,
        rng: &mut R,
    ) -> Solution {
        if problem.subset_count == 0 {
            return current.clone();
        }

        for _ in 0..self.max_neighbor_attempts {
            let removed = match random_selected(&current.subset_ids, rng) {
                Some(id) => id,
                None => return current.clone(),
            };
            let inserted = rng.gen_range(0..problem.subset_count);

            let ids = swapped(&current.subset_ids, removed, inserted);
            if problem.is_feasible(&ids) {
                return Solution::from_subsets(ids, problem);
            }
        }

        debug!(
            "random swap found no feasible neighbour in {} attempts",
            self.max_neighbor_attempts
        );
        current.clone()
    }
}
