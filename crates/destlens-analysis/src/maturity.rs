//! Maturity tier banding

use serde::{Deserialize, Serialize};

use destlens_core::{thresholds::MaturityBands, Error, Result};

/// Banded maturity label for a combined 0-100 readiness score
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaturityTier {
    Emerging,
    Developing,
    Advanced,
    Expert,
}

impl MaturityTier {
    /// Band a combined score using the configured cutoffs. Scores outside
    /// 0-100 are invalid input.
    pub fn from_score(score: f64, bands: &MaturityBands) -> Result<Self> {
        if !score.is_finite() || !(0.0..=100.0).contains(&score) {
            return Err(Error::invalid_input(format!(
                "maturity score {score} is outside the 0-100 scale"
            )));
        }
        Ok(if score >= bands.expert_min {
            Self::Expert
        } else if score >= bands.advanced_min {
            Self::Advanced
        } else if score >= bands.developing_min {
            Self::Developing
        } else {
            Self::Emerging
        })
    }

    /// Human-readable label
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Emerging => "Emerging",
            Self::Developing => "Developing",
            Self::Advanced => "Advanced",
            Self::Expert => "Expert",
        }
    }
}

impl std::fmt::Display for MaturityTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
