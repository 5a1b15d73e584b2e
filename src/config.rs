//! Configuration parameters for the SCP solvers.

use crate::annealing::CoolingSchedule;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Solver-wide settings shared by every driver.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Seed for the solver's random generator; `None` draws one from the OS
    pub seed: Option<u64>,
    /// Resampling cap of the random swap move before it gives up
    pub max_neighbor_attempts: usize,
    /// Resampling cap of the crossover-until-feasible loop
    pub max_crossover_attempts: usize,
    /// Optional cap on outer iterations of the time-bounded drivers
    pub max_iterations: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            seed: None,
            max_neighbor_attempts: 1000,
            max_crossover_attempts: 1000,
            max_iterations: None,
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Config::default()
    }

    /// Set the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the random swap resampling cap.
    pub fn with_max_neighbor_attempts(mut self, attempts: usize) -> Self {
        self.max_neighbor_attempts = attempts;
        self
    }

    /// Set the crossover resampling cap.
    pub fn with_max_crossover_attempts(mut self, attempts: usize) -> Self {
        self.max_crossover_attempts = attempts;
        self
    }

    /// Set the outer iteration cap.
    pub fn with_max_iterations(mut self, iterations: u64) -> Self {
        self.max_iterations = Some(iterations);
        self
    }
}

/// Parameters of a GRASP run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraspParams {
    pub max_sol_count: usize,
    pub k: usize,
}

/// Parameters of a GRASP run with cost noise.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoiseParams {
    pub max_sol_count: usize,
    pub k: usize,
    pub rho: u64,
}

/// Parameters of a simulated annealing run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnealingParams {
    pub max_runtime_ms: u64,
    pub init_temp: f64,
    pub iter_per_temp: usize,
    pub cooling: CoolingSchedule,
}

/// Parameters of a VNS run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VnsParams {
    pub max_runtime_ms: u64,
}

/// Parameters of a BLGA run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlgaParams {
    pub max_runtime_ms: u64,
    pub population_size: usize,
    pub mates_count: usize,
    pub gene_copy_probability: f64,
    pub rts_sample_size: usize,
}

/// Which algorithms a CLI run executes and with what parameters.
///
/// Algorithms left as `None` are skipped; the constructive heuristic always runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperimentConfig {
    pub solver: Config,
    pub grasp: Option<GraspParams>,
    pub grasp_with_noise: Option<NoiseParams>,
    pub simulated_annealing: Option<AnnealingParams>,
    pub vns: Option<VnsParams>,
    pub blga: Option<BlgaParams>,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        ExperimentConfig {
            solver: Config::default(),
            grasp: Some(GraspParams {
                max_sol_count: 1000,
                k: 10,
            }),
            grasp_with_noise: Some(NoiseParams {
                max_sol_count: 1000,
                k: 10,
                rho: 5,
            }),
            simulated_annealing: Some(AnnealingParams {
                max_runtime_ms: 10_000,
                init_temp: 100.0,
                iter_per_temp: 50,
                cooling: CoolingSchedule::Geometric { alpha: 0.95 },
            }),
            vns: Some(VnsParams {
                max_runtime_ms: 10_000,
            }),
            blga: Some(BlgaParams {
                max_runtime_ms: 10_000,
                population_size: 50,
                mates_count: 5,
                gene_copy_probability: 0.7,
                rts_sample_size: 10,
            }),
        }
    }
}

impl ExperimentConfig {
    /// Load an experiment description from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Override the runtime budget of every time-bounded algorithm.
    pub fn with_time_limit_ms(mut self, millis: u64) -> Self {
        if let Some(params) = self.simulated_annealing.as_mut() {
            params.max_runtime_ms = millis;
        }
        if let Some(params) = self.vns.as_mut() {
            params.max_runtime_ms = millis;
        }
        if let Some(params) = self.blga.as_mut() {
            params.max_runtime_ms = millis;
        }
        self
    }
}
