//! Lexicon-based sentiment scoring
//!
//! Polarity is the balance of positive and negative term hits, on a
//! [-1, +1] scale. A text with no sentiment terms has no polarity at all
//! (`None`), which is distinct from a balanced 0.0.

use aho_corasick::{AhoCorasick, MatchKind};
use serde::{Deserialize, Serialize};

use destlens_core::{Error, Result, Thresholds};

use crate::scorer::{normalize, word_bounded};

/// Default positive terms, curated from visitor reviews in the domain
const POSITIVE_TERMS: &[&str] = &[
    "good",
    "great",
    "excellent",
    "amazing",
    "wonderful",
    "beautiful",
    "stunning",
    "friendly",
    "welcoming",
    "helpful",
    "love",
    "loved",
    "best",
    "fantastic",
    "awesome",
    "highlight",
    "unforgettable",
    "memorable",
    "recommend",
    "recommended",
    "delicious",
    "clean",
    "comfortable",
];

/// Default negative terms
const NEGATIVE_TERMS: &[&str] = &[
    "bad",
    "terrible",
    "awful",
    "horrible",
    "worst",
    "poor",
    "dirty",
    "rude",
    "disappointing",
    "disappointed",
    "overpriced",
    "scam",
    "unsafe",
    "boring",
    "broken",
    "hate",
    "sad",
    "angry",
    "avoid",
    "uncomfortable",
];

/// Three-bucket polarity classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    Positive,
    Neutral,
    Negative,
}

impl Polarity {
    /// Bucket a polarity score using the configured cutoffs
    pub fn bucket(score: f64, thresholds: &Thresholds) -> Self {
        if score > thresholds.positive_sentiment {
            Self::Positive
        } else if score < thresholds.negative_sentiment {
            Self::Negative
        } else {
            Self::Neutral
        }
    }
}

/// Map a 1-5 star rating onto the polarity scale. 3 stars is the midpoint.
pub fn rating_polarity(rating: f64) -> f64 {
    ((rating - 3.0) / 2.0).clamp(-1.0, 1.0)
}

/// Counts positive and negative term hits and reports their balance.
pub struct SentimentScorer {
    positive: AhoCorasick,
    negative: AhoCorasick,
}

impl SentimentScorer {
    /// Scorer with the default term lists
    pub fn new() -> Result<Self> {
        Self::with_terms(POSITIVE_TERMS, NEGATIVE_TERMS)
    }

    /// Scorer with custom term lists
    pub fn with_terms(positive: &[&str], negative: &[&str]) -> Result<Self> {
        if positive.is_empty() || negative.is_empty() {
            return Err(Error::config("sentiment term lists must not be empty"));
        }
        Ok(Self {
            positive: build_matcher(positive, "positive")?,
            negative: build_matcher(negative, "negative")?,
        })
    }

    /// Polarity of a text in [-1, +1], or `None` when the text carries no
    /// sentiment terms at all.
    pub fn polarity(&self, text: &str) -> Option<f64> {
        let normalized = normalize(text);
        let positive_hits = count_bounded(&self.positive, &normalized);
        let negative_hits = count_bounded(&self.negative, &normalized);
        let total = positive_hits + negative_hits;

        if total == 0 {
            None
        } else {
            Some((positive_hits as f64 - negative_hits as f64) / total as f64)
        }
    }
}

fn build_matcher(terms: &[&str], side: &str) -> Result<AhoCorasick> {
    let lowered: Vec<String> = terms.iter().map(|t| t.trim().to_lowercase()).collect();
    AhoCorasick::builder()
        .match_kind(MatchKind::LeftmostLongest)
        .build(&lowered)
        .map_err(|e| Error::internal(format!("failed to build {side} sentiment matcher: {e}")))
}

fn count_bounded(matcher: &AhoCorasick, normalized: &str) -> u32 {
    matcher
        .find_iter(normalized)
        .filter(|m| word_bounded(normalized, m.start(), m.end()))
        .count() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_text() {
        let scorer = SentimentScorer::new().unwrap();
        let polarity = scorer.polarity("A wonderful, friendly guide. Highly recommended!");
        assert_eq!(polarity, Some(1.0));
    }

    #[test]
    fn test_negative_text() {
        let scorer = SentimentScorer::new().unwrap();
        let polarity = scorer.polarity("Dirty rooms and rude staff. Avoid.").unwrap();
        assert_eq!(polarity, -1.0);
    }

    #[test]
    fn test_mixed_text_balances() {
        let scorer = SentimentScorer::new().unwrap();
        // 2 positive, 1 negative -> (2 - 1) / 3
        let polarity = scorer
            .polarity("Great food and a beautiful beach, but an overpriced bar.")
            .unwrap();
        assert!((polarity - 1.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_no_sentiment_terms_is_none_not_zero() {
        let scorer = SentimentScorer::new().unwrap();
        assert_eq!(scorer.polarity("The ferry departs at noon."), None);
    }

    #[test]
    fn test_term_inside_longer_word_does_not_fire() {
        let scorer = SentimentScorer::new().unwrap();
        // "sad" must not fire inside "saddle"
        assert_eq!(scorer.polarity("We rented a saddle for the ride."), None);
    }

    #[test]
    fn test_bucket_thresholds() {
        let thresholds = Thresholds::default();
        assert_eq!(Polarity::bucket(0.5, &thresholds), Polarity::Positive);
        assert_eq!(Polarity::bucket(0.3, &thresholds), Polarity::Neutral);
        assert_eq!(Polarity::bucket(0.0, &thresholds), Polarity::Neutral);
        assert_eq!(Polarity::bucket(-0.1, &thresholds), Polarity::Neutral);
        assert_eq!(Polarity::bucket(-0.2, &thresholds), Polarity::Negative);
    }

    #[test]
    fn test_rating_polarity_scale() {
        assert_eq!(rating_polarity(5.0), 1.0);
        assert_eq!(rating_polarity(3.0), 0.0);
        assert_eq!(rating_polarity(1.0), -1.0);
        assert_eq!(rating_polarity(4.0), 0.5);
    }

    #[test]
    fn test_empty_term_list_rejected() {
        assert!(matches!(
            SentimentScorer::with_terms(&[], &["bad"]),
            Err(Error::Config(_))
        ));
    }
}
