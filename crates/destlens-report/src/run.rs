//! Command orchestration
//!
//! Batch flow per command: read everything, score in memory, write one
//! report. Configuration problems abort before any scoring; per-item
//! problems are skipped and tallied.

use std::collections::BTreeMap;
use std::io::BufReader;
use std::path::Path;

use chrono::Utc;
use tracing::info;

use destlens_analysis::{EntityAggregator, GapEvaluator, RecommendationTemplates};
use destlens_classifiers::{KeywordScorer, RuleClassifier, SentimentScorer};
use destlens_core::{Error, Result, RunSummary, Thresholds};
use destlens_lexicon::{builtin, Lexicon};

use crate::input::{read_gap_inputs, read_records};
use crate::report::{self, AssessmentReport, ClassifyReport, GapReport};

fn load_thresholds(path: Option<&Path>) -> Result<Thresholds> {
    match path {
        Some(path) => Thresholds::from_file(path),
        None => Ok(Thresholds::default()),
    }
}

fn resolve_lexicon(builtin_name: &str, custom: Option<&Path>) -> Result<Lexicon> {
    if let Some(path) = custom {
        return Lexicon::from_file(path);
    }
    match builtin_name {
        "countries" => builtin::countries(),
        "languages" => builtin::languages(),
        "themes" => builtin::themes(),
        "products" => builtin::product_types(),
        other => Err(Error::config(format!(
            "unknown built-in lexicon '{other}' (expected countries, languages, themes, or products)"
        ))),
    }
}

/// Classify one text file against a lexicon and write the result.
pub fn run_classify(
    input: &Path,
    builtin_name: &str,
    lexicon_path: Option<&Path>,
    thresholds_path: Option<&Path>,
    output: Option<&Path>,
) -> Result<ClassifyReport> {
    let thresholds = load_thresholds(thresholds_path)?;
    let lexicon = resolve_lexicon(builtin_name, lexicon_path)?;
    let scorer = KeywordScorer::new(&lexicon)?;
    let rules = RuleClassifier::new(&thresholds, "Unknown");

    let text = std::fs::read_to_string(input)?;
    let counts = scorer.score(&text);

    let result = ClassifyReport {
        generated_at: Utc::now(),
        lexicon: lexicon.name().to_string(),
        dominant: rules.dominant(&counts),
        distribution: rules.distribution(&counts),
    };
    report::write_json(&result, output)?;
    Ok(result)
}

/// Aggregate a JSONL record file into per-entity summaries and write the
/// report.
pub fn run_assess(
    input: &Path,
    themes_path: Option<&Path>,
    thresholds_path: Option<&Path>,
    output: Option<&Path>,
) -> Result<AssessmentReport> {
    let thresholds = load_thresholds(thresholds_path)?;
    let theme_lexicon = match themes_path {
        Some(path) => Lexicon::from_file(path)?,
        None => builtin::themes()?,
    };
    let theme_scorer = KeywordScorer::new(&theme_lexicon)?;
    let sentiment = SentimentScorer::new()?;

    let file = std::fs::File::open(input)?;
    let (records, summary) = read_records(BufReader::new(file))?;

    // Group per entity; BTreeMap keeps report order deterministic
    let mut grouped: BTreeMap<String, Vec<&destlens_core::SourceRecord>> = BTreeMap::new();
    for record in &records {
        grouped.entry(record.entity.clone()).or_default().push(record);
    }

    let entities = grouped
        .into_iter()
        .map(|(entity, records)| {
            let mut aggregator =
                EntityAggregator::new(entity, &theme_scorer, &sentiment, &thresholds);
            for record in records {
                aggregator.push(&record.text, record.rating);
            }
            aggregator.finish()
        })
        .collect::<Vec<_>>();

    info!(entities = entities.len(), %summary, "assessment complete");

    let result = AssessmentReport {
        generated_at: Utc::now(),
        thresholds,
        entities,
        summary,
    };
    report::write_json(&result, output)?;
    Ok(result)
}

/// Evaluate and rank score pairs, writing the gap report.
pub fn run_gap(
    input: &Path,
    templates_path: Option<&Path>,
    thresholds_path: Option<&Path>,
    output: Option<&Path>,
) -> Result<GapReport> {
    let thresholds = load_thresholds(thresholds_path)?;
    let templates = match templates_path {
        Some(path) => RecommendationTemplates::from_file(path)?,
        None => RecommendationTemplates::default(),
    };
    let evaluator = GapEvaluator::new(&thresholds, templates);

    let content = std::fs::read_to_string(input)?;
    let inputs = read_gap_inputs(&content)?;

    let mut summary = RunSummary::new();
    let mut records = Vec::new();
    for row in &inputs {
        match evaluator.evaluate(&row.name, row.score_a, row.score_b) {
            Ok(record) => {
                summary.record_ok();
                records.push(record);
            }
            Err(error) if !error.is_fatal() => {
                summary.record_skip(&row.name, &error);
            }
            Err(error) => return Err(error),
        }
    }
    GapEvaluator::rank(&mut records);

    info!(records = records.len(), %summary, "gap evaluation complete");

    let result = GapReport {
        generated_at: Utc::now(),
        records,
        summary,
    };
    report::write_json(&result, output)?;
    Ok(result)
}
