//! Individual representation for the genetic algorithm population.

use crate::chromosome::Chromosome;
use crate::problem::Problem;
use crate::solution::Solution;
use std::cmp::Ordering;

/// An individual in the BLGA population: a chromosome and its cost.
///
/// The cost is the plain sum of the selected subset costs; random individuals
/// are not necessarily feasible.
#[derive(Debug, Clone)]
pub struct Individual {
    /// The encoded subset selection
    pub chromosome: Chromosome,
    /// Sum of the costs of the selected subsets
    pub cost: u64,
}

impl Individual {
    /// Create an individual, evaluating its cost against the problem.
    pub fn new(chromosome: Chromosome, problem: &Problem) -> Self {
        let cost = chromosome.ones().map(|id| problem.costs[id]).sum();
        Individual { chromosome, cost }
    }

    /// Encode an existing solution.
    pub fn from_solution(solution: &Solution, problem: &Problem) -> Self {
        let chromosome = Chromosome::from_subsets(&solution.subset_ids, problem.subset_count);
        Individual {
            chromosome,
            cost: solution.cost,
        }
    }

    /// Decode back into a solution.
    pub fn to_solution(&self, problem: &Problem) -> Solution {
        Solution::from_subsets(self.chromosome.to_subsets(), problem)
    }

    /// Check if the selected subsets cover every element.
    pub fn is_feasible(&self, problem: &Problem) -> bool {
        problem.is_covered_by(|id| self.chromosome.get(id))
    }

    /// Hamming distance between the two chromosomes.
    pub fn distance(&self, other: &Individual) -> usize {
        self.chromosome.hamming_distance(&other.chromosome)
    }
}

impl PartialEq for Individual {
    fn eq(&self, other: &Self) -> bool {
        self.cost == other.cost
    }
}

impl Eq for Individual {}

impl PartialOrd for Individual {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Individual {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cost.cmp(&other.cost)
    }
}
