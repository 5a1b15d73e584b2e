//! Reporting helpers for solver runs.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::problem::Problem;
use crate::solution::Solution;

/// Format a duration as hours, minutes, seconds and milliseconds.
pub fn format_duration(duration: Duration) -> String {
    let total_seconds = duration.as_secs();
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    format!(
        "{}h {:02}m {:02}s {:03}ms",
        hours,
        minutes,
        seconds,
        duration.subsec_millis()
    )
}

/// One algorithm run on one instance, as written to the report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunRecord {
    pub instance: String,
    pub algorithm: String,
    pub cost: u64,
    pub subset_count: usize,
    /// Chosen subsets, 1-indexed as in the instance file
    pub subset_ids: Vec<usize>,
    pub runtime_ms: u128,
}

impl RunRecord {
    /// Describe a finished run.
    pub fn new(
        problem: &Problem,
        algorithm: &str,
        solution: &Solution,
        runtime: Duration,
    ) -> Self {
        RunRecord {
            instance: problem.name.clone(),
            algorithm: algorithm.to_string(),
            cost: solution.cost,
            subset_count: solution.subset_count,
            subset_ids: solution.subset_ids.iter().map(|id| id + 1).collect(),
            runtime_ms: runtime.as_millis(),
        }
    }

    /// Format the record as a single summary line.
    pub fn format(&self) -> String {
        format!(
            "{:<12} {:<20} cost {:>8}  subsets {:>5}  {}",
            self.instance,
            self.algorithm,
            self.cost,
            self.subset_count,
            format_duration(Duration::from_millis(self.runtime_ms as u64))
        )
    }
}

/// Write all records to `path` as a pretty-printed JSON array.
pub fn save_report<P: AsRef<Path>>(records: &[RunRecord], path: P) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, records)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}
