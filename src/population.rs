//! Population management for the genetic algorithm.

use crate::chromosome::Chromosome;
use crate::individual::Individual;
use crate::problem::Problem;
use log::trace;
use rand::Rng;
use std::collections::BinaryHeap;

/// A fixed-size population, mutated in place by replacement.
///
/// Member order carries no meaning beyond index identity.
pub struct Population {
    pub individuals: Vec<Individual>,
}

impl Population {
    /// Create a population of `size` random individuals.
    ///
    /// Every usable bit is set with probability 0.5.
    pub fn random<R: Rng>(problem: &Problem, size: usize, rng: &mut R) -> Self {
        let individuals = (0..size)
            .map(|_| {
                let chromosome = Chromosome::random(problem.subset_count, 0.5, rng);
                Individual::new(chromosome, problem)
            })
            .collect();

        Population { individuals }
    }

    /// Get the population size.
    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    /// Check if the population has no members.
    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    /// Positive assortative mating: the `count` members closest to `leader`.
    ///
    /// A bounded max-heap keeps the current `count` best; a candidate evicts the
    /// worst entry only when strictly closer, so on equal distances the member
    /// with the lower index wins. Returned indices are in no particular order.
    pub fn select_mates(&self, leader: &Individual, count: usize) -> Vec<usize> {
        let mut heap: BinaryHeap<(usize, usize)> = BinaryHeap::with_capacity(count + 1);

        for (index, individual) in self.individuals.iter().enumerate() {
            let distance = individual.distance(leader);

            if heap.len() < count {
                heap.push((distance, index));
            } else if let Some(&(worst, _)) = heap.peek() {
                if distance < worst {
                    heap.pop();
                    heap.push((distance, index));
                }
            }
        }

        heap.into_iter().map(|(_, index)| index).collect()
    }

    /// Restricted tournament selection.
    ///
    /// Samples `sample_size` indices with replacement and finds the member
    /// nearest to `candidate` (first drawn on ties). The candidate overwrites it
    /// only if strictly cheaper. Returns the replaced index, if any.
    pub fn replace_nearest<R: Rng>(
        &mut self,
        candidate: Individual,
        sample_size: usize,
        rng: &mut R,
    ) -> Option<usize> {
        if self.individuals.is_empty() || sample_size == 0 {
            return None;
        }

        let mut nearest = rng.gen_range(0..self.individuals.len());
        let mut nearest_distance = self.individuals[nearest].distance(&candidate);

        for _ in 1..sample_size {
            let index = rng.gen_range(0..self.individuals.len());
            let distance = self.individuals[index].distance(&candidate);
            if distance < nearest_distance {
                nearest = index;
                nearest_distance = distance;
            }
        }

        if candidate.cost < self.individuals[nearest].cost {
            trace!(
                "replacing member {} (cost {}) with cost {}",
                nearest,
                self.individuals[nearest].cost,
                candidate.cost
            );
            self.individuals[nearest] = candidate;
            Some(nearest)
        } else {
            None
        }
    }

    /// Offer a feasible offspring against the current leader.
    ///
    /// A strictly cheaper offspring becomes the leader and the previous leader
    /// is offered to the population; otherwise the offspring itself is. The
    /// population side always goes through [`Population::replace_nearest`].
    /// Returns `true` if the leader changed.
    pub fn accept<R: Rng>(
        &mut self,
        leader: &mut Individual,
        offspring: Individual,
        sample_size: usize,
        rng: &mut R,
    ) -> bool {
        if offspring.cost < leader.cost {
            let previous = std::mem::replace(leader, offspring);
            self.replace_nearest(previous, sample_size, rng);
            true
        } else {
            self.replace_nearest(offspring, sample_size, rng);
            false
        }
    }

    /// Get the cheapest member.
    pub fn best(&self) -> Option<&Individual> {
        self.individuals.iter().min()
    }
}
