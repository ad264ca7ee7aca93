//! Report shapes and JSON writing

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Serialize;

use destlens_analysis::{EntityAggregate, GapRecord};
use destlens_classifiers::{DistributionResult, DominantResult};
use destlens_core::{Result, RunSummary, Thresholds};

/// Output of the `classify` command
#[derive(Debug, Clone, Serialize)]
pub struct ClassifyReport {
    pub generated_at: DateTime<Utc>,
    pub lexicon: String,
    pub dominant: DominantResult,
    pub distribution: DistributionResult,
}

/// Output of the `assess` command
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentReport {
    pub generated_at: DateTime<Utc>,
    pub thresholds: Thresholds,
    pub entities: Vec<EntityAggregate>,
    pub summary: RunSummary,
}

/// Output of the `gap` command; records are ranked by descending |delta|
#[derive(Debug, Clone, Serialize)]
pub struct GapReport {
    pub generated_at: DateTime<Utc>,
    pub records: Vec<GapRecord>,
    pub summary: RunSummary,
}

/// Write a report as pretty JSON to a file, or to stdout when no path is
/// given.
pub fn write_json(report: &impl Serialize, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            let file = std::fs::File::create(path)?;
            serde_json::to_writer_pretty(file, report)?;
        }
        None => {
            use std::io::Write;
            let stdout = std::io::stdout();
            let mut lock = stdout.lock();
            serde_json::to_writer_pretty(&mut lock, report)?;
            writeln!(lock)?;
        }
    }
    Ok(())
}
