//! Solution representation for the SCP.

use crate::problem::Problem;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// A set of chosen subsets together with its cost.
///
/// Feasibility is not stored; ask the [`Problem`] whenever the set changes.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solution {
    /// Sum of the costs of the chosen subsets
    pub cost: u64,
    /// Number of chosen subsets
    pub subset_count: usize,
    /// The chosen subset ids (0-indexed)
    pub subset_ids: BTreeSet<usize>,
}

impl Solution {
    /// Create a new, empty solution.
    pub fn new() -> Self {
        Solution::default()
    }

    /// Build a solution from a set of subset ids, computing its cost.
    pub fn from_subsets(subset_ids: BTreeSet<usize>, problem: &Problem) -> Self {
        Solution {
            cost: problem.cost(&subset_ids),
            subset_count: subset_ids.len(),
            subset_ids,
        }
    }

    /// Recompute cost and cardinality after the id set was edited in place.
    pub fn evaluate(&mut self, problem: &Problem) {
        self.cost = problem.cost(&self.subset_ids);
        self.subset_count = self.subset_ids.len();
    }

    /// Check if this solution covers every element of the problem.
    pub fn is_feasible(&self, problem: &Problem) -> bool {
        problem.is_feasible(&self.subset_ids)
    }

    /// Check if no subset is selected.
    pub fn is_empty(&self) -> bool {
        self.subset_ids.is_empty()
    }

    /// Cost difference `self - other`.
    pub fn delta(&self, other: &Solution) -> i64 {
        self.cost as i64 - other.cost as i64
    }

    /// Flatten to `[cost, subset_count, id_0, id_1, ...]` for reporting.
    ///
    /// Consumers must not depend on the order of the ids.
    pub fn to_vec(&self) -> Vec<u64> {
        let mut values = Vec::with_capacity(self.subset_count + 2);
        values.push(self.cost);
        values.push(self.subset_count as u64);
        values.extend(self.subset_ids.iter().map(|&id| id as u64));
        values
    }
}

impl fmt::Debug for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Solution:")?;
        writeln!(f, "  Cost: {}", self.cost)?;
        writeln!(f, "  Subsets: {}", self.subset_count)?;
        writeln!(f, "  IDs: [{}]", self.subset_ids.iter().join(", "))
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Subset ids are printed 1-indexed, as in the instance files
        write!(
            f,
            "cost: {} subsetCount: {} subsetIDs: {}",
            self.cost,
            self.subset_count,
            self.subset_ids.iter().map(|id| id + 1).join(" ")
        )
    }
}
