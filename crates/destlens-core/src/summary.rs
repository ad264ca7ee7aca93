//! Batch run accounting
//!
//! A batch run never stops on the first bad record. Per-item failures are
//! tallied here and reported once at the end, so "processed N, skipped M"
//! is always available to the operator and to tests.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::Error;

/// Tally of a batch run: how many items scored, how many were skipped,
/// and why.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunSummary {
    /// Items successfully scored
    pub processed: usize,

    /// Items skipped on per-item errors
    pub skipped: usize,

    /// Skip counts bucketed by reason tag
    pub reasons: BTreeMap<String, usize>,
}

impl RunSummary {
    /// Create an empty summary
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one successfully processed item
    pub fn record_ok(&mut self) {
        self.processed += 1;
    }

    /// Record one skipped item. Logs the error and buckets it by reason.
    pub fn record_skip(&mut self, context: &str, error: &Error) {
        warn!(%context, %error, "skipping item");
        self.skipped += 1;
        *self.reasons.entry(error.reason().to_string()).or_insert(0) += 1;
    }

    /// Total items seen
    pub fn total(&self) -> usize {
        self.processed + self.skipped
    }

    /// Fold another summary into this one
    pub fn merge(&mut self, other: &RunSummary) {
        self.processed += other.processed;
        self.skipped += other.skipped;
        for (reason, count) in &other.reasons {
            *self.reasons.entry(reason.clone()).or_insert(0) += count;
        }
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "processed {}, skipped {}", self.processed, self.skipped)?;
        if !self.reasons.is_empty() {
            let reasons: Vec<String> = self
                .reasons
                .iter()
                .map(|(reason, count)| format!("{reason}: {count}"))
                .collect();
            write!(f, " ({})", reasons.join(", "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tally_and_display() {
        let mut summary = RunSummary::new();
        summary.record_ok();
        summary.record_ok();
        summary.record_skip("row 3", &Error::invalid_input("cell is not text"));

        assert_eq!(summary.processed, 2);
        assert_eq!(summary.skipped, 1);
        assert_eq!(summary.total(), 3);
        assert_eq!(summary.reasons["invalid_input"], 1);
        assert_eq!(
            summary.to_string(),
            "processed 2, skipped 1 (invalid_input: 1)"
        );
    }

    #[test]
    fn test_merge() {
        let mut a = RunSummary::new();
        a.record_ok();
        a.record_skip("row 1", &Error::invalid_input("bad"));

        let mut b = RunSummary::new();
        b.record_skip("row 2", &Error::invalid_input("bad"));
        b.merge(&a);

        assert_eq!(b.total(), 3);
        assert_eq!(b.reasons["invalid_input"], 2);
    }
}
