//! Greedy randomized construction (the GRASP construction phase).
//!
//! Follows the template from Resende and Ribeiro, "GRASP: Greedy Randomized
//! Adaptive Search Procedures": at every step a restricted candidate list (RCL)
//! of the `k` cheapest unused subsets is formed and one is drawn uniformly.

use crate::error::{Result, ScpError};
use crate::problem::Problem;
use log::trace;
use rand::Rng;
use std::collections::BTreeSet;

/// Marks a subset as already drawn.
const USED: i64 = i64::MAX;

/// Build one feasible cover.
///
/// When `rho > 0` every cost is replaced by a uniform draw from
/// `[cost - rho, cost + rho)` before construction starts. The returned set only
/// contains subsets that covered at least one new element when they were drawn.
pub fn greedy_randomized<R: Rng>(
    problem: &Problem,
    k: usize,
    rho: u64,
    rng: &mut R,
) -> Result<BTreeSet<usize>> {
    if k == 0 || k > problem.subset_count {
        return Err(ScpError::InvalidConfiguration(format!(
            "RCL size k = {} must lie in 1..={}",
            k, problem.subset_count
        )));
    }
    problem.ensure_coverable()?;

    let mut costs = noisy_costs(problem, rho, rng);
    let mut covered = vec![false; problem.element_count];
    let mut remaining = problem.element_count;
    let mut solution = BTreeSet::new();

    while remaining > 0 {
        let rcl = restricted_candidate_list(&costs, k);
        if rcl.is_empty() {
            // Only reachable if the coverage relation is inconsistent
            let element = covered.iter().position(|&c| !c).unwrap_or_default();
            return Err(ScpError::InfeasibleInstance { element });
        }

        let chosen = rcl[rng.gen_range(0..rcl.len())];
        costs[chosen] = USED;

        let mut newly_covered = 0;
        for &element in &problem.members[chosen] {
            if !covered[element] {
                covered[element] = true;
                newly_covered += 1;
            }
        }

        if newly_covered > 0 {
            solution.insert(chosen);
            remaining -= newly_covered;
            trace!(
                "picked subset {} covering {} new elements, {} left",
                chosen,
                newly_covered,
                remaining
            );
        }
    }

    Ok(solution)
}

/// Copy the costs, perturbing each one when `rho > 0`.
fn noisy_costs<R: Rng>(problem: &Problem, rho: u64, rng: &mut R) -> Vec<i64> {
    let rho = rho as i64;

    problem
        .costs
        .iter()
        .map(|&cost| {
            let cost = cost as i64;
            if rho > 0 {
                rng.gen_range(cost - rho..cost + rho)
            } else {
                cost
            }
        })
        .collect()
}

/// Indices of the `k` cheapest unused subsets (fewer if fewer remain).
fn restricted_candidate_list(costs: &[i64], k: usize) -> Vec<usize> {
    let mut candidates: Vec<usize> = (0..costs.len()).filter(|&i| costs[i] != USED).collect();

    if candidates.len() > k {
        candidates.select_nth_unstable_by_key(k - 1, |&i| (costs[i], i));
        candidates.truncate(k);
    }

    candidates
}
