//! Gap/positioning evaluation
//!
//! Compares two scores on a shared 0-100 scale (for example local capacity
//! against externally perceived visibility) and places the subject in one
//! of four quadrants. Reporting ranks records by descending |delta| so the
//! largest mismatches surface first; that ordering is a prioritization
//! policy, not an incidental sort.

use serde::{Deserialize, Serialize};

use destlens_core::{Error, Result, Thresholds};

/// Quadrant label for a pair of scores
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GapLabel {
    /// high-high: strong on both axes
    CompetitiveAdvantage,

    /// high-low: strong internally, invisible externally
    HiddenGem,

    /// low-high: demand without matching capacity
    MarketGap,

    /// low-low
    LowPriority,
}

impl GapLabel {
    /// Human-readable label
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CompetitiveAdvantage => "Competitive Advantage",
            Self::HiddenGem => "Hidden Gem",
            Self::MarketGap => "Market Gap",
            Self::LowPriority => "Low Priority",
        }
    }
}

impl std::fmt::Display for GapLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Recommendation wording per quadrant, with `{name}` standing for the
/// subject. Kept as a configuration table so operators can amend wording
/// without touching the rules.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommendationTemplates {
    pub competitive_advantage: String,
    pub hidden_gem: String,
    pub market_gap: String,
    pub low_priority: String,
}

impl Default for RecommendationTemplates {
    fn default() -> Self {
        Self {
            competitive_advantage: "Promote {name} as a flagship offer; both capacity and \
                                    visibility are strong."
                .to_string(),
            hidden_gem: "Invest in marketing for {name}: the product is ready but \
                         visitors cannot find it."
                .to_string(),
            market_gap: "Build capacity for {name}: demand is visible but the local \
                         offer cannot yet meet it."
                .to_string(),
            low_priority: "Defer {name}; revisit once either capacity or demand \
                           improves."
                .to_string(),
        }
    }
}

impl RecommendationTemplates {
    /// Load templates from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let templates: Self = serde_yaml::from_str(yaml)
            .map_err(|e| Error::config(format!("bad recommendation templates: {e}")))?;
        templates.validate()?;
        Ok(templates)
    }

    /// Load templates from a YAML file
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Reject blank templates at load time
    pub fn validate(&self) -> Result<()> {
        for (label, template) in [
            (GapLabel::CompetitiveAdvantage, &self.competitive_advantage),
            (GapLabel::HiddenGem, &self.hidden_gem),
            (GapLabel::MarketGap, &self.market_gap),
            (GapLabel::LowPriority, &self.low_priority),
        ] {
            if template.trim().is_empty() {
                return Err(Error::config(format!(
                    "recommendation template for '{label}' is blank"
                )));
            }
        }
        Ok(())
    }

    /// Render the template for a label
    pub fn render(&self, label: GapLabel, name: &str) -> String {
        let template = match label {
            GapLabel::CompetitiveAdvantage => &self.competitive_advantage,
            GapLabel::HiddenGem => &self.hidden_gem,
            GapLabel::MarketGap => &self.market_gap,
            GapLabel::LowPriority => &self.low_priority,
        };
        template.replace("{name}", name)
    }
}

/// Outcome of comparing two scores for one subject
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GapRecord {
    /// The entity, sector, or category being positioned
    pub subject: String,

    /// First axis (e.g. capacity, supply, readiness)
    pub score_a: f64,

    /// Second axis (e.g. visibility, demand, impact)
    pub score_b: f64,

    /// score_a - score_b; magnitude drives report ranking
    pub delta: f64,

    /// Quadrant verdict
    pub label: GapLabel,

    /// Rendered recommendation
    pub recommendation: String,
}

/// Applies the quadrant rule to score pairs.
pub struct GapEvaluator {
    cutoff: f64,
    templates: RecommendationTemplates,
}

impl GapEvaluator {
    /// Create an evaluator from the threshold table and a template set
    pub fn new(thresholds: &Thresholds, templates: RecommendationTemplates) -> Self {
        Self {
            cutoff: thresholds.gap_axis_cutoff,
            templates,
        }
    }

    /// Place one subject. Scores outside 0-100 are invalid input; the
    /// caller skips the item and tallies it.
    pub fn evaluate(&self, subject: &str, score_a: f64, score_b: f64) -> Result<GapRecord> {
        for (axis, score) in [("a", score_a), ("b", score_b)] {
            if !score.is_finite() || !(0.0..=100.0).contains(&score) {
                return Err(Error::invalid_input(format!(
                    "score {axis}={score} for '{subject}' is outside the 0-100 scale"
                )));
            }
        }

        // The cutoff is inclusive on both axes: 50/50 is high-high
        let label = match (score_a >= self.cutoff, score_b >= self.cutoff) {
            (true, true) => GapLabel::CompetitiveAdvantage,
            (true, false) => GapLabel::HiddenGem,
            (false, true) => GapLabel::MarketGap,
            (false, false) => GapLabel::LowPriority,
        };

        Ok(GapRecord {
            subject: subject.to_string(),
            score_a,
            score_b,
            delta: score_a - score_b,
            label,
            recommendation: self.templates.render(label, subject),
        })
    }

    /// Order records for reporting: descending |delta|, subject name as a
    /// deterministic tie-break.
    pub fn rank(records: &mut [GapRecord]) {
        records.sort_by(|a, b| {
            b.delta
                .abs()
                .partial_cmp(&a.delta.abs())
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.subject.cmp(&b.subject))
        });
    }
}
