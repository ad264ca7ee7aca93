//! Central threshold configuration
//!
//! Every tunable cutoff used by the scoring rules lives here, so domain
//! experts can adjust them in one YAML file without touching scoring logic.
//! Changing a value here affects classification, aggregation, and gap
//! evaluation consistently.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Threshold table for all rule-based decisions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    /// Minimum per-category count for the mixed-signal rule: when two or
    /// more categories each reach this count, the classifier reports Mixed
    /// instead of picking a winner.
    pub mixed_signal_min: u32,

    /// Minimum primary share (percent) for a distribution to count as pure
    pub pure_share_min: f64,

    /// Polarity above which a text is bucketed as positive
    pub positive_sentiment: f64,

    /// Polarity below which a text is bucketed as negative
    pub negative_sentiment: f64,

    /// Cutoff on both axes of the gap quadrant rule (inclusive)
    pub gap_axis_cutoff: f64,

    /// Cutoffs for maturity tier banding
    pub maturity: MaturityBands,
}

/// Lower bounds of the Developing, Advanced, and Expert maturity bands.
/// Scores below `developing_min` are Emerging.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MaturityBands {
    pub developing_min: f64,
    pub advanced_min: f64,
    pub expert_min: f64,
}

impl Default for MaturityBands {
    fn default() -> Self {
        Self {
            developing_min: 40.0,
            advanced_min: 60.0,
            expert_min: 80.0,
        }
    }
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            mixed_signal_min: 3,
            pure_share_min: 80.0,
            positive_sentiment: 0.3,
            negative_sentiment: -0.1,
            gap_axis_cutoff: 50.0,
            maturity: MaturityBands::default(),
        }
    }
}

impl Thresholds {
    /// Load thresholds from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let thresholds: Self = serde_yaml::from_str(yaml)
            .map_err(|e| Error::config(format!("bad thresholds: {e}")))?;
        thresholds.validate()?;
        Ok(thresholds)
    }

    /// Load thresholds from a YAML file
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Check internal consistency. Fatal at load time.
    pub fn validate(&self) -> Result<()> {
        if self.mixed_signal_min == 0 {
            return Err(Error::config("mixed_signal_min must be at least 1"));
        }
        if !(0.0..=100.0).contains(&self.pure_share_min) {
            return Err(Error::config("pure_share_min must be within 0-100"));
        }
        if !(0.0..=100.0).contains(&self.gap_axis_cutoff) {
            return Err(Error::config("gap_axis_cutoff must be within 0-100"));
        }
        if self.negative_sentiment >= self.positive_sentiment {
            return Err(Error::config(
                "negative_sentiment must be below positive_sentiment",
            ));
        }
        let bands = &self.maturity;
        if bands.developing_min >= bands.advanced_min || bands.advanced_min >= bands.expert_min {
            return Err(Error::config("maturity bands must be strictly increasing"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(Thresholds::default().validate().is_ok());
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let thresholds = Thresholds::from_yaml("mixed_signal_min: 5").unwrap();
        assert_eq!(thresholds.mixed_signal_min, 5);
        assert_eq!(thresholds.pure_share_min, 80.0);
        assert_eq!(thresholds.gap_axis_cutoff, 50.0);
    }

    #[test]
    fn test_inverted_sentiment_cutoffs_rejected() {
        let yaml = "positive_sentiment: -0.5\nnegative_sentiment: 0.5";
        assert!(matches!(Thresholds::from_yaml(yaml), Err(Error::Config(_))));
    }

    #[test]
    fn test_unordered_maturity_bands_rejected() {
        let yaml = "maturity:\n  developing_min: 70\n  advanced_min: 60\n  expert_min: 80";
        assert!(matches!(Thresholds::from_yaml(yaml), Err(Error::Config(_))));
    }
}
