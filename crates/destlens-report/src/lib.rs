//! DestLens batch report runner
//!
//! The thin glue layer around the scoring engine: reads newline-delimited
//! JSON records, runs classification and aggregation in memory, and writes
//! JSON reports for the dashboard. All I/O happens here; the engine crates
//! stay pure.

pub mod cli;
pub mod input;
pub mod report;
pub mod run;

pub use cli::{Cli, Commands};
pub use report::{AssessmentReport, ClassifyReport, GapReport};
pub use run::{run_assess, run_classify, run_gap};
