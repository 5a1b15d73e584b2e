//! Genetic operators for the BLGA.

use crate::chromosome::Chromosome;
use crate::individual::Individual;
use crate::problem::Problem;
use log::debug;
use rand::Rng;

/// Implements the crossover operator of the binary-coded local GA.
pub struct Genetic {
    /// Probability that a gene is copied from the leader rather than the mate
    pub gene_copy_probability: f64,
    /// How many crossovers to try before giving up on a feasible child
    pub max_attempts: usize,
}

impl Genetic {
    /// Create the operator set.
    pub fn new(gene_copy_probability: f64, max_attempts: usize) -> Self {
        Genetic {
            gene_copy_probability,
            max_attempts,
        }
    }

    /// Uniform crossover between the leader and one mate.
    ///
    /// Each usable bit is inherited from `leader` with probability
    /// `gene_copy_probability`, otherwise from `mate`. Bits past the active
    /// width stay zero.
    pub fn crossover<R: Rng>(
        &self,
        leader: &Chromosome,
        mate: &Chromosome,
        rng: &mut R,
    ) -> Chromosome {
        let width = leader.width();
        let mut child = Chromosome::new(width);

        for i in 0..width {
            let parent = if rng.gen_bool(self.gene_copy_probability) {
                leader
            } else {
                mate
            };
            child.assign(i, parent.get(i));
        }

        child.truncate();
        child
    }

    /// Cross the leader with randomly chosen mates until the child is feasible.
    ///
    /// Every retry draws a fresh mate and fresh coins. Returns `None` once
    /// `max_attempts` children in a row were infeasible.
    pub fn feasible_offspring<R: Rng>(
        &self,
        problem: &Problem,
        leader: &Individual,
        mates: &[&Individual],
        rng: &mut R,
    ) -> Option<Individual> {
        if mates.is_empty() {
            return None;
        }

        for _ in 0..self.max_attempts {
            let mate = mates[rng.gen_range(0..mates.len())];
            let chromosome = self.crossover(&leader.chromosome, &mate.chromosome, rng);

            if problem.is_covered_by(|id| chromosome.get(id)) {
                return Some(Individual::new(chromosome, problem));
            }
        }

        debug!(
            "no feasible offspring after {} crossover attempts",
            self.max_attempts
        );
        None
    }
}
