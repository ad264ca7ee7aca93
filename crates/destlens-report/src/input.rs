//! Record parsing at the I/O boundary
//!
//! Rows arrive as untyped JSON. They are turned into typed records here,
//! exactly once; a non-string text cell is an invalid-input error for that
//! row, never a silent coercion. Bad rows are skipped and tallied, so a
//! batch always runs to completion.

use std::io::BufRead;

use serde::Deserialize;
use serde_json::Value;

use destlens_core::{Error, Result, RunSummary, SourceRecord};

/// Parse one JSONL line into a typed record
pub fn parse_record(line: &str) -> Result<SourceRecord> {
    let value: Value = serde_json::from_str(line)
        .map_err(|e| Error::invalid_input(format!("row is not valid JSON: {e}")))?;

    let Value::Object(fields) = value else {
        return Err(Error::invalid_input("row is not a JSON object"));
    };

    let entity = require_string(&fields, "entity")?;
    let text = require_string(&fields, "text")?;

    let rating = match fields.get("rating") {
        None | Some(Value::Null) => None,
        Some(Value::Number(n)) => n.as_f64(),
        Some(other) => {
            return Err(Error::invalid_input(format!(
                "field 'rating' is not a number (got {other})"
            )))
        }
    };

    let country_hint = match fields.get("country_hint") {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(other) => {
            return Err(Error::invalid_input(format!(
                "field 'country_hint' is not a string (got {other})"
            )))
        }
    };

    let mut record = SourceRecord::new(entity, text);
    record.rating = rating;
    record.country_hint = country_hint;
    record.validate()?;
    Ok(record)
}

fn require_string(fields: &serde_json::Map<String, Value>, name: &str) -> Result<String> {
    match fields.get(name) {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(other) => Err(Error::invalid_input(format!(
            "field '{name}' is not a string (got {other})"
        ))),
        None => Err(Error::invalid_input(format!("field '{name}' is missing"))),
    }
}

/// Read all records from a JSONL reader. Blank lines are ignored; bad rows
/// are skipped and tallied in the returned summary.
pub fn read_records(reader: impl BufRead) -> Result<(Vec<SourceRecord>, RunSummary)> {
    let mut records = Vec::new();
    let mut summary = RunSummary::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match parse_record(&line) {
            Ok(record) => {
                summary.record_ok();
                records.push(record);
            }
            Err(error) if !error.is_fatal() => {
                summary.record_skip(&format!("line {}", index + 1), &error);
            }
            Err(error) => return Err(error),
        }
    }

    Ok((records, summary))
}

/// One row of the gap command's input file
#[derive(Debug, Clone, Deserialize)]
pub struct GapInput {
    /// Subject being positioned
    pub name: String,

    /// First axis score, 0-100
    pub score_a: f64,

    /// Second axis score, 0-100
    pub score_b: f64,
}

/// Read the gap input file (a JSON array). A malformed file is a
/// configuration error; per-row score problems surface later, during
/// evaluation.
pub fn read_gap_inputs(content: &str) -> Result<Vec<GapInput>> {
    serde_json::from_str(content)
        .map_err(|e| Error::config(format!("bad gap input file: {e}")))
}
