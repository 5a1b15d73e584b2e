//! Simulated annealing over the random swap neighbourhood.
//!
//! Based on the algorithm in Gendreau and Potvin, "Handbook of Metaheuristics".

use crate::error::{Result, ScpError};
use crate::local_search::Neighborhood;
use crate::solution::Solution;
use crate::timer::Timer;
use crate::ScpSolver;
use log::{debug, info, trace};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Built-in temperature schedules.
///
/// A schedule maps the *initial* temperature and the number of completed
/// temperature steps to the next temperature. It is not recursive in the
/// previous temperature.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CoolingSchedule {
    /// `t0 - step * k`, floored at zero
    Linear { step: f64 },
    /// `t0 * alpha^k`
    Geometric { alpha: f64 },
    /// `t0 / ln(k + e)`
    Logarithmic,
    /// `t0 / (1 + k)`
    Cauchy,
}

impl CoolingSchedule {
    /// Temperature after `iteration` steps starting from `initial`.
    pub fn temperature(&self, initial: f64, iteration: u32) -> f64 {
        let k = iteration as f64;
        match *self {
            CoolingSchedule::Linear { step } => (initial - step * k).max(0.0),
            CoolingSchedule::Geometric { alpha } => initial * alpha.powf(k),
            CoolingSchedule::Logarithmic => initial / (k + std::f64::consts::E).ln(),
            CoolingSchedule::Cauchy => initial / (1.0 + k),
        }
    }
}

/// Step count handed to a cooling schedule after `completed` steps.
///
/// Saturates at `u32::MAX`, so a long run keeps the final temperature instead
/// of wrapping back to the initial one.
pub fn cooling_step(completed: u64) -> u32 {
    u32::try_from(completed).unwrap_or(u32::MAX)
}

impl<'a> ScpSolver<'a> {
    /// Simulated annealing starting from the greedy solution.
    ///
    /// Runs while the `max_runtime_ms` budget is not spent and the temperature
    /// is positive. Each temperature step evaluates `iter_per_temp` random swap
    /// neighbours; improving or equal moves are always accepted, worsening ones
    /// with probability `exp(-delta / T)`. After step `i`, the temperature
    /// becomes `cooling(init_temp, i)`.
    ///
    /// Returns the best solution accepted during the run.
    pub fn simulated_annealing<F>(
        &mut self,
        max_runtime_ms: u64,
        init_temp: f64,
        iter_per_temp: usize,
        cooling: F,
    ) -> Result<Solution>
    where
        F: Fn(f64, u32) -> f64,
    {
        if !init_temp.is_finite() || init_temp < 0.0 {
            return Err(ScpError::InvalidConfiguration(format!(
                "initial temperature must be finite and non-negative, got {}",
                init_temp
            )));
        }
        if iter_per_temp == 0 {
            return Err(ScpError::InvalidConfiguration(
                "iterations per temperature must be positive".to_string(),
            ));
        }

        let mut timer = Timer::from_millis(max_runtime_ms);
        let mut current = self.constructive()?;
        let mut best = current.clone();

        info!(
            "SA on '{}': {} ms, T0 = {}, {} iterations per temperature, start cost {}",
            self.problem.name, max_runtime_ms, init_temp, iter_per_temp, current.cost
        );

        let mut temperature = init_temp;
        let mut iteration: u64 = 0;

        while !timer.has_stopped()
            && temperature > 0.0
            && !self.iteration_cap_reached(iteration)
        {
            for _ in 0..iter_per_temp {
                let neighbour = self.local_search.neighbour(
                    &current,
                    self.problem,
                    Neighborhood::RandomSwap,
                    &mut self.rng,
                );
                let delta = neighbour.delta(&current);

                let accept = delta <= 0
                    || self.rng.gen::<f64>() < (-(delta as f64) / temperature).exp();

                if accept {
                    trace!("T = {:.4}: accepted delta {}", temperature, delta);
                    current = neighbour;

                    if current.cost < best.cost {
                        debug!("SA step {}: new best cost {}", iteration, current.cost);
                        best = current.clone();
                    }
                }
            }

            iteration += 1;
            temperature = cooling(init_temp, cooling_step(iteration));
            timer.tick();
        }

        info!(
            "SA finished after {} temperature steps in {:?}, best cost {}",
            iteration,
            timer.elapsed(),
            best.cost
        );
        Ok(best)
    }

    /// Simulated annealing with one of the built-in schedules.
    pub fn simulated_annealing_with_schedule(
        &mut self,
        max_runtime_ms: u64,
        init_temp: f64,
        iter_per_temp: usize,
        schedule: CoolingSchedule,
    ) -> Result<Solution> {
        self.simulated_annealing(max_runtime_ms, init_temp, iter_per_temp, |t0, k| {
            schedule.temperature(t0, k)
        })
    }
}
