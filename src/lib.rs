//! # SCP heuristics
//!
//! Metaheuristics for the Set Covering Problem (SCP): given `m` elements and
//! `n` subsets with costs, find a cheap collection of subsets covering every
//! element.
//!
//! The solver offers greedy and GRASP construction (optionally with cost
//! noise), simulated annealing and variable neighbourhood search over three
//! swap neighbourhoods, and a binary-coded local genetic algorithm (BLGA) with
//! assortative mating and restricted tournament replacement.
//!
//! ```no_run
//! use scp_heuristics::config::Config;
//! use scp_heuristics::problem::Problem;
//! use scp_heuristics::ScpSolver;
//!
//! let problem = Problem::from_file("assets/scp41.txt")?;
//! let mut solver = ScpSolver::new(&problem, Config::new().with_seed(7))?;
//! let solution = solver.vns(1_000)?;
//! println!("{}", solution);
//! # Ok::<(), scp_heuristics::error::ScpError>(())
//! ```

pub mod annealing;
pub mod blga;
pub mod chromosome;
pub mod config;
pub mod constructive;
pub mod error;
pub mod genetic;
pub mod grasp;
pub mod individual;
pub mod local_search;
pub mod population;
pub mod problem;
pub mod solution;
pub mod timer;
pub mod utils;
pub mod vns;

use crate::config::Config;
use crate::error::Result;
use crate::local_search::LocalSearch;
use crate::problem::Problem;
use crate::solution::Solution;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Entry point for every SCP algorithm.
///
/// A solver borrows a read-only problem and owns its random generator, so
/// several solvers can work on the same instance independently. The driver
/// methods live in [`grasp`], [`annealing`], [`vns`] and [`blga`].
///
/// The configuration is fixed at construction; the retry caps it carries are
/// wired into the move generators and the genetic operators from there.
pub struct ScpSolver<'a> {
    pub problem: &'a Problem,
    config: Config,
    local_search: LocalSearch,
    rng: ChaCha8Rng,
}

impl<'a> ScpSolver<'a> {
    /// Create a solver for the given problem and configuration.
    ///
    /// Fails with [`error::ScpError::InfeasibleInstance`] if some element is
    /// not covered by any subset.
    pub fn new(problem: &'a Problem, config: Config) -> Result<Self> {
        problem.ensure_coverable()?;

        let rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };

        Ok(ScpSolver {
            problem,
            local_search: LocalSearch::new(config.max_neighbor_attempts),
            config,
            rng,
        })
    }

    /// The configuration this solver was created with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Generate a neighbour of `current` in neighbourhood `k` (0, 1 or 2).
    pub fn generate_neighbour(&mut self, current: &Solution, k: usize) -> Solution {
        self.local_search
            .generate_neighbour(current, self.problem, k, &mut self.rng)
    }

    /// Whether the configured outer iteration cap has been hit.
    fn iteration_cap_reached(&self, iterations: u64) -> bool {
        self.config
            .max_iterations
            .map_or(false, |cap| iterations >= cap)
    }
}
