//! Binary-coded local genetic algorithm (BLGA).
//!
//! A steady-state GA built around a single leader: each generation the leader
//! is crossed with one of its closest population members, and the loser of
//! the leader/offspring comparison is offered to the population through
//! restricted tournament selection.

use crate::chromosome::CHROMOSOME_WIDTH;
use crate::error::{Result, ScpError};
use crate::genetic::Genetic;
use crate::individual::Individual;
use crate::population::Population;
use crate::solution::Solution;
use crate::timer::Timer;
use crate::ScpSolver;
use log::{debug, info};

impl<'a> ScpSolver<'a> {
    /// Run the BLGA for `max_runtime_ms` milliseconds.
    ///
    /// * `population_size` - number of chromosomes kept besides the leader
    /// * `mates_count` - how many of the leader's nearest members are mating candidates
    /// * `gene_copy_probability` - chance a gene is copied from the leader
    /// * `rts_sample_size` - members sampled by restricted tournament selection
    pub fn blga(
        &mut self,
        max_runtime_ms: u64,
        population_size: usize,
        mates_count: usize,
        gene_copy_probability: f64,
        rts_sample_size: usize,
    ) -> Result<Solution> {
        let problem = self.problem;

        if problem.subset_count > CHROMOSOME_WIDTH {
            return Err(ScpError::ChromosomeWidthExceeded {
                subset_count: problem.subset_count,
                capacity: CHROMOSOME_WIDTH,
            });
        }
        if population_size == 0 {
            return Err(ScpError::InvalidConfiguration(
                "population size must be positive".to_string(),
            ));
        }
        if mates_count == 0 || mates_count > population_size {
            return Err(ScpError::InvalidConfiguration(format!(
                "mates count {} must lie in 1..={}",
                mates_count, population_size
            )));
        }
        if !(0.0..=1.0).contains(&gene_copy_probability) {
            return Err(ScpError::InvalidConfiguration(format!(
                "gene copy probability {} must lie in [0, 1]",
                gene_copy_probability
            )));
        }
        if rts_sample_size == 0 {
            return Err(ScpError::InvalidConfiguration(
                "RTS sample size must be positive".to_string(),
            ));
        }

        let mut timer = Timer::from_millis(max_runtime_ms);
        let genetic = Genetic::new(gene_copy_probability, self.config.max_crossover_attempts);

        let initial = self.constructive()?;
        let mut leader = Individual::from_solution(&initial, problem);
        let mut population = Population::random(problem, population_size, &mut self.rng);

        info!(
            "BLGA on '{}': {} ms, population {}, {} mates, p = {}, RTS sample {}, start cost {}",
            problem.name,
            max_runtime_ms,
            population_size,
            mates_count,
            gene_copy_probability,
            rts_sample_size,
            leader.cost
        );

        let mut generation: u64 = 0;
        let mut skipped: u64 = 0;

        while !timer.has_stopped() && !self.iteration_cap_reached(generation) {
            let offspring = {
                let mates: Vec<&Individual> = population
                    .select_mates(&leader, mates_count)
                    .into_iter()
                    .map(|i| &population.individuals[i])
                    .collect();
                genetic.feasible_offspring(problem, &leader, &mates, &mut self.rng)
            };

            match offspring {
                Some(offspring) => {
                    let previous_cost = leader.cost;
                    if population.accept(&mut leader, offspring, rts_sample_size, &mut self.rng) {
                        debug!(
                            "generation {}: leader improved from {} to {}",
                            generation, previous_cost, leader.cost
                        );
                    }
                }
                None => skipped += 1,
            }

            generation += 1;
            timer.tick();
        }

        info!(
            "BLGA finished after {} generations ({} without feasible offspring) in {:?}, \
             leader cost {}, best population cost {}",
            generation,
            skipped,
            timer.elapsed(),
            leader.cost,
            population.best().map_or(0, |best| best.cost)
        );
        Ok(leader.to_solution(problem))
    }
}
