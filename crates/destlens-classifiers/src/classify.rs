//! Decision rules over category counts
//!
//! Turns raw keyword counts into labels: a single dominant category, an
//! explicit Mixed verdict when signals conflict, a percentage distribution
//! for multi-destination content, or a configured fallback when nothing
//! matched. The rules are domain decisions and are reproduced exactly;
//! every numeric cutoff comes from the central threshold table.

use serde::{Deserialize, Serialize};

use destlens_core::{Result, Thresholds};
use destlens_lexicon::builtin;

use crate::scorer::{CategoryCounts, KeywordScorer};

/// Outcome of dominant-category selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "label", rename_all = "snake_case")]
pub enum DominantLabel {
    /// One category clearly won
    Category(String),

    /// Two or more categories carried strong signal; picking one would be
    /// false precision
    Mixed,

    /// Nothing matched; this is the configured zero-signal default
    Fallback(String),
}

impl DominantLabel {
    /// The label text, regardless of how it was decided
    pub fn text(&self) -> &str {
        match self {
            Self::Category(label) | Self::Fallback(label) => label,
            Self::Mixed => "Mixed",
        }
    }
}

/// Dominant-category result, carrying the counts it was derived from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DominantResult {
    /// The decided label
    pub label: DominantLabel,

    /// The counts behind the decision
    pub counts: CategoryCounts,
}

/// One category's slice of a percentage distribution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryShare {
    /// Category name
    pub category: String,

    /// Raw count
    pub count: u32,

    /// Percentage of all non-zero counts, rounded to one decimal
    pub share: f64,
}

/// Percentage distribution across categories with non-zero counts,
/// ranked by descending share.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistributionResult {
    /// Non-zero categories, highest share first
    pub shares: Vec<CategoryShare>,

    /// Category with the highest share, if any matched
    pub primary: Option<String>,

    /// True when the primary share reaches the purity threshold
    pub is_pure: bool,

    /// The counts behind the distribution
    pub counts: CategoryCounts,
}

/// Applies the decision rules to category counts.
///
/// Tie-break on equal counts is the lexicon category order (first-listed
/// wins); `CategoryCounts` preserves that order.
#[derive(Debug, Clone)]
pub struct RuleClassifier {
    mixed_signal_min: u32,
    pure_share_min: f64,
    zero_signal_default: String,
}

impl RuleClassifier {
    /// Create a classifier. The zero-signal default label is required up
    /// front; there is no silent fallback.
    pub fn new(thresholds: &Thresholds, zero_signal_default: impl Into<String>) -> Self {
        Self {
            mixed_signal_min: thresholds.mixed_signal_min,
            pure_share_min: thresholds.pure_share_min,
            zero_signal_default: zero_signal_default.into(),
        }
    }

    /// Select the dominant category.
    ///
    /// Mixed when at least two categories reach the mixed-signal count;
    /// the configured default when nothing matched at all.
    pub fn dominant(&self, counts: &CategoryCounts) -> DominantResult {
        let strong = counts
            .entries()
            .iter()
            .filter(|c| c.count >= self.mixed_signal_min)
            .count();

        let label = if strong >= 2 {
            DominantLabel::Mixed
        } else if counts.is_zero() {
            DominantLabel::Fallback(self.zero_signal_default.clone())
        } else {
            // First category holding the maximum count wins ties
            let top = counts.entries().iter().map(|c| c.count).max().unwrap_or(0);
            counts
                .entries()
                .iter()
                .find(|c| c.count == top)
                .map(|c| DominantLabel::Category(c.category.clone()))
                .unwrap_or_else(|| DominantLabel::Fallback(self.zero_signal_default.clone()))
        };

        DominantResult {
            label,
            counts: counts.clone(),
        }
    }

    /// Percentage split across categories with non-zero counts.
    ///
    /// share = count / sum(non-zero counts) * 100, one decimal. Primary is
    /// the highest share; purity means the primary share reaches the
    /// configured minimum.
    pub fn distribution(&self, counts: &CategoryCounts) -> DistributionResult {
        let total: u32 = counts.total();
        if total == 0 {
            return DistributionResult {
                shares: Vec::new(),
                primary: None,
                is_pure: false,
                counts: counts.clone(),
            };
        }

        let mut shares: Vec<CategoryShare> = counts
            .entries()
            .iter()
            .filter(|c| c.count > 0)
            .map(|c| CategoryShare {
                category: c.category.clone(),
                count: c.count,
                share: (c.count as f64 / total as f64 * 1000.0).round() / 10.0,
            })
            .collect();

        // Stable sort keeps lexicon order between equal shares
        shares.sort_by(|a, b| b.share.partial_cmp(&a.share).unwrap_or(std::cmp::Ordering::Equal));

        let primary = shares.first().map(|s| s.category.clone());
        let is_pure = shares
            .first()
            .map_or(false, |s| s.share >= self.pure_share_min);

        DistributionResult {
            shares,
            primary,
            is_pure,
            counts: counts.clone(),
        }
    }
}

/// Product-type classification with the structured-itinerary context flag.
///
/// The flag both boosts the Itinerary count and decides the zero-signal
/// default, making the auxiliary-signal behavior explicit.
pub struct ProductTypeClassifier {
    scorer: KeywordScorer,
    with_pages: RuleClassifier,
    without_pages: RuleClassifier,
}

/// Count added to Itinerary when the site has structured itinerary pages
const ITINERARY_PAGE_BOOST: u32 = 2;

/// Zero-signal default when no itinerary pages were found
const DEFAULT_PRODUCT_TYPE: &str = "General Offer";

impl ProductTypeClassifier {
    /// Build over the built-in product-type lexicon
    pub fn new(thresholds: &Thresholds) -> Result<Self> {
        let lexicon = builtin::product_types()?;
        Ok(Self {
            scorer: KeywordScorer::new(&lexicon)?,
            with_pages: RuleClassifier::new(thresholds, "Itinerary"),
            without_pages: RuleClassifier::new(thresholds, DEFAULT_PRODUCT_TYPE),
        })
    }

    /// Classify a product description
    pub fn classify(&self, text: &str, has_itinerary_pages: bool) -> Result<DominantResult> {
        let mut counts = self.scorer.score(text);
        if has_itinerary_pages {
            counts.boost("Itinerary", ITINERARY_PAGE_BOOST)?;
        }
        let rules = if has_itinerary_pages {
            &self.with_pages
        } else {
            &self.without_pages
        };
        Ok(rules.dominant(&counts))
    }
}
