//! Variable neighbourhood search.

use crate::error::Result;
use crate::local_search::Neighborhood;
use crate::solution::Solution;
use crate::timer::Timer;
use crate::ScpSolver;
use log::{debug, info};

impl<'a> ScpSolver<'a> {
    /// VNS starting from the greedy solution.
    ///
    /// Every outer iteration tries the neighbourhoods in order and moves to the
    /// first neighbour that is no worse than the current solution. If none is,
    /// the next iteration starts again from the first neighbourhood. The result
    /// never costs more than the greedy start.
    pub fn vns(&mut self, max_runtime_ms: u64) -> Result<Solution> {
        let mut timer = Timer::from_millis(max_runtime_ms);
        let mut current = self.constructive()?;

        info!(
            "VNS on '{}': {} ms, start cost {}",
            self.problem.name, max_runtime_ms, current.cost
        );

        let mut iteration: u64 = 0;
        while !timer.has_stopped() && !self.iteration_cap_reached(iteration) {
            for (k, &neighborhood) in Neighborhood::ALL.iter().enumerate() {
                let neighbour =
                    self.local_search
                        .neighbour(&current, self.problem, neighborhood, &mut self.rng);

                if neighbour.delta(&current) <= 0 {
                    if neighbour.cost < current.cost {
                        debug!(
                            "VNS iteration {}: neighbourhood {} improved cost to {}",
                            iteration, k, neighbour.cost
                        );
                    }
                    current = neighbour;
                    break;
                }
            }

            iteration += 1;
            timer.tick();
        }

        info!(
            "VNS finished after {} iterations in {:?}, cost {}",
            iteration,
            timer.elapsed(),
            current.cost
        );
        Ok(current)
    }
}
