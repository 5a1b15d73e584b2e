//! GRASP drivers: best of several greedy randomized constructions.

use crate::constructive::greedy_randomized;
use crate::error::{Result, ScpError};
use crate::solution::Solution;
use crate::ScpSolver;
use log::{debug, info};

impl<'a> ScpSolver<'a> {
    /// Pure greedy construction: always take the cheapest remaining subset.
    pub fn constructive(&mut self) -> Result<Solution> {
        self.grasp(1, 1)
    }

    /// Run `max_sol_count` randomized constructions with an RCL of size `k`
    /// and keep the cheapest (the first one found on ties).
    pub fn grasp(&mut self, max_sol_count: usize, k: usize) -> Result<Solution> {
        self.grasp_internal(max_sol_count, k, 0)
    }

    /// Like [`ScpSolver::grasp`], but every construction sees its own noisy
    /// copy of the costs, each shifted by up to `rho`.
    ///
    /// The returned cost is the true cost of the chosen subsets.
    pub fn grasp_with_noise(
        &mut self,
        max_sol_count: usize,
        k: usize,
        rho: u64,
    ) -> Result<Solution> {
        self.grasp_internal(max_sol_count, k, rho)
    }

    fn grasp_internal(&mut self, max_sol_count: usize, k: usize, rho: u64) -> Result<Solution> {
        if max_sol_count == 0 {
            return Err(ScpError::InvalidConfiguration(
                "GRASP needs at least one construction".to_string(),
            ));
        }
        if max_sol_count > 1 {
            info!(
                "GRASP on '{}': {} constructions, k = {}, rho = {}",
                self.problem.name, max_sol_count, k, rho
            );
        }

        let mut best: Option<Solution> = None;

        for iteration in 0..max_sol_count {
            let ids = greedy_randomized(self.problem, k, rho, &mut self.rng)?;
            let candidate = Solution::from_subsets(ids, self.problem);

            if best.as_ref().map_or(true, |b| candidate.cost < b.cost) {
                debug!("construction {}: new best cost {}", iteration, candidate.cost);
                best = Some(candidate);
            }
        }

        best.ok_or_else(|| {
            ScpError::InvalidConfiguration("GRASP produced no solution".to_string())
        })
    }
}
