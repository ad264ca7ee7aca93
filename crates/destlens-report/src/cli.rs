use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "destlens")]
#[command(
    author,
    version,
    about = "Heuristic digital-presence scoring for destination assessment"
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Classify one text against a lexicon (dominant label + distribution)
    Classify {
        /// Text file to classify
        input: PathBuf,

        /// Built-in lexicon: countries, languages, themes, or products
        #[arg(short, long, default_value = "countries", conflicts_with = "lexicon")]
        builtin: String,

        /// Custom lexicon YAML file (overrides --builtin)
        #[arg(short, long)]
        lexicon: Option<PathBuf>,

        /// Thresholds YAML file
        #[arg(short, long)]
        thresholds: Option<PathBuf>,

        /// Write the result JSON here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Enable verbose logging
        #[arg(short, long)]
        verbose: bool,
    },

    /// Aggregate JSONL review records into per-entity summaries
    Assess {
        /// JSONL file of {entity, text, rating?} records
        input: PathBuf,

        /// Theme lexicon YAML file (defaults to the built-in themes)
        #[arg(long)]
        themes: Option<PathBuf>,

        /// Thresholds YAML file
        #[arg(short, long)]
        thresholds: Option<PathBuf>,

        /// Write the report JSON here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Enable verbose logging
        #[arg(short, long)]
        verbose: bool,
    },

    /// Rank score pairs into gap/positioning records
    Gap {
        /// JSON file with an array of {name, score_a, score_b} objects
        input: PathBuf,

        /// Recommendation templates YAML file
        #[arg(long)]
        templates: Option<PathBuf>,

        /// Thresholds YAML file
        #[arg(short, long)]
        thresholds: Option<PathBuf>,

        /// Write the report JSON here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Enable verbose logging
        #[arg(short, long)]
        verbose: bool,
    },
}
