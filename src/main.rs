//! Command line front-end: run the configured algorithms on SCP instances.

use clap::Parser;
use log::{error, info};
use scp_heuristics::config::ExperimentConfig;
use scp_heuristics::error::Result;
use scp_heuristics::problem::Problem;
use scp_heuristics::solution::Solution;
use scp_heuristics::utils::{save_report, RunRecord};
use scp_heuristics::ScpSolver;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

#[derive(Debug, Parser)]
#[command(
    name = "scp-heuristics",
    version,
    about = "Metaheuristics for the Set Covering Problem"
)]
struct Cli {
    /// Instance files in OR-Library format
    #[arg(required = true)]
    instances: Vec<PathBuf>,

    /// JSON experiment configuration; defaults run every algorithm
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Where to write the JSON report
    #[arg(short, long, default_value = "report.json")]
    output: PathBuf,

    /// Seed for reproducible runs
    #[arg(short, long)]
    seed: Option<u64>,

    /// Runtime budget in milliseconds for SA, VNS and BLGA
    #[arg(short, long)]
    time_limit_ms: Option<u64>,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let mut experiment = match &cli.config {
        Some(path) => ExperimentConfig::from_file(path)?,
        None => ExperimentConfig::default(),
    };
    if let Some(seed) = cli.seed {
        experiment.solver.seed = Some(seed);
    }
    if let Some(millis) = cli.time_limit_ms {
        experiment = experiment.with_time_limit_ms(millis);
    }

    let mut records = Vec::new();

    for path in &cli.instances {
        info!("Loading problem from: {}", path.display());
        let problem = Problem::from_file(path)?;
        println!(
            "Loaded problem: {} with {} elements and {} subsets",
            problem.name, problem.element_count, problem.subset_count
        );

        evaluate_instance(&problem, &experiment, &mut records)?;
    }

    save_report(&records, &cli.output)?;
    println!("Report written to: {}", cli.output.display());
    Ok(())
}

/// Run every configured algorithm on one instance.
fn evaluate_instance(
    problem: &Problem,
    experiment: &ExperimentConfig,
    records: &mut Vec<RunRecord>,
) -> Result<()> {
    let mut solver = ScpSolver::new(problem, experiment.solver.clone())?;

    timed(problem, "constructive", records, || solver.constructive())?;

    if let Some(params) = &experiment.grasp {
        timed(problem, "grasp", records, || {
            solver.grasp(params.max_sol_count, params.k)
        })?;
    }

    if let Some(params) = &experiment.grasp_with_noise {
        timed(problem, "grasp_with_noise", records, || {
            solver.grasp_with_noise(params.max_sol_count, params.k, params.rho)
        })?;
    }

    if let Some(params) = &experiment.simulated_annealing {
        timed(problem, "simulated_annealing", records, || {
            solver.simulated_annealing_with_schedule(
                params.max_runtime_ms,
                params.init_temp,
                params.iter_per_temp,
                params.cooling,
            )
        })?;
    }

    if let Some(params) = &experiment.vns {
        timed(problem, "vns", records, || solver.vns(params.max_runtime_ms))?;
    }

    if let Some(params) = &experiment.blga {
        timed(problem, "blga", records, || {
            solver.blga(
                params.max_runtime_ms,
                params.population_size,
                params.mates_count,
                params.gene_copy_probability,
                params.rts_sample_size,
            )
        })?;
    }

    Ok(())
}

fn timed<F>(
    problem: &Problem,
    algorithm: &str,
    records: &mut Vec<RunRecord>,
    run: F,
) -> Result<()>
where
    F: FnOnce() -> Result<Solution>,
{
    let start = Instant::now();
    let solution = run()?;
    let record = RunRecord::new(problem, algorithm, &solution, start.elapsed());

    println!("{}", record.format());
    records.push(record);
    Ok(())
}
