//! Neighbourhood moves shared by simulated annealing and VNS.
//!
//! Every move takes a feasible solution and returns a feasible neighbour, or
//! the unchanged input when no feasible neighbour was found.

pub mod best_swap;
pub mod random_swap;
pub mod sequential_removal;
pub mod utils;

use crate::problem::Problem;
use crate::solution::Solution;
use log::warn;
use rand::Rng;

/// The move classes, in the order VNS tries them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Neighborhood {
    /// Drop one random subset, add one random subset
    RandomSwap,
    /// Try one random replacement for each selected subset, keep the best
    SequentialRemoval,
    /// Try every replacement for each selected subset, keep the best
    BestSwap,
}

impl Neighborhood {
    /// All neighbourhoods, by index.
    pub const ALL: [Neighborhood; 3] = [
        Neighborhood::RandomSwap,
        Neighborhood::SequentialRemoval,
        Neighborhood::BestSwap,
    ];

    /// Map a neighbourhood index to its move class.
    pub fn from_index(k: usize) -> Option<Self> {
        Self::ALL.get(k).copied()
    }
}

/// Generates neighbours of SCP solutions.
pub struct LocalSearch {
    /// How often the random swap is resampled before returning the input
    pub max_neighbor_attempts: usize,
}

impl LocalSearch {
    /// Create a new local search instance.
    pub fn new(max_neighbor_attempts: usize) -> Self {
        LocalSearch {
            max_neighbor_attempts,
        }
    }

    /// Generate a neighbour in neighbourhood `k`.
    ///
    /// An index outside `0..3` yields an empty solution.
    pub fn generate_neighbour<R: Rng>(
        &self,
        current: &Solution,
        problem: &Problem,
        k: usize,
        rng: &mut R,
    ) -> Solution {
        match Neighborhood::from_index(k) {
            Some(neighborhood) => self.neighbour(current, problem, neighborhood, rng),
            None => {
                warn!("unknown neighbourhood index {}", k);
                Solution::default()
            }
        }
    }

    /// Generate a neighbour with the given move class.
    pub fn neighbour<R: Rng>(
        &self,
        current: &Solution,
        problem: &Problem,
        neighborhood: Neighborhood,
        rng: &mut R,
    ) -> Solution {
        match neighborhood {
            Neighborhood::RandomSwap => self.random_neighbour(current, problem, rng),
            Neighborhood::SequentialRemoval => {
                self.sequential_removal_neighbour(current, problem, rng)
            }
            Neighborhood::BestSwap => self.best_neighbour(current, problem),
        }
    }
}
