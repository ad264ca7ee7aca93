//! Property tests for the scoring and classification rules

use proptest::prelude::*;

use destlens_classifiers::{CategoryCounts, DominantLabel, KeywordScorer, RuleClassifier};
use destlens_core::Thresholds;
use destlens_lexicon::builtin;

fn counts_strategy() -> impl Strategy<Value = Vec<u32>> {
    prop::collection::vec(0u32..100, 1..12).prop_filter("at least one non-zero", |counts| {
        counts.iter().any(|&c| c > 0)
    })
}

fn counts_from(values: &[u32]) -> CategoryCounts {
    let named: Vec<(String, u32)> = values
        .iter()
        .enumerate()
        .map(|(i, &count)| (format!("category-{i}"), count))
        .collect();
    let pairs: Vec<(&str, u32)> = named.iter().map(|(name, c)| (name.as_str(), *c)).collect();
    CategoryCounts::from_pairs(&pairs)
}

proptest! {
    /// Scoring the same text twice yields identical counts
    #[test]
    fn scorer_is_deterministic(text in "\\PC{0,300}") {
        let scorer = KeywordScorer::new(&builtin::countries().unwrap()).unwrap();
        prop_assert_eq!(scorer.score(&text), scorer.score(&text));
    }

    /// Distribution shares always sum to 100 within rounding error
    #[test]
    fn distribution_shares_sum_to_100(values in counts_strategy()) {
        let rules = RuleClassifier::new(&Thresholds::default(), "Unknown");
        let result = rules.distribution(&counts_from(&values));

        let sum: f64 = result.shares.iter().map(|s| s.share).sum();
        // Each share is rounded to one decimal, so the sum can drift by
        // up to 0.05 per entry
        let epsilon = 0.05 * result.shares.len() as f64 + 1e-9;
        prop_assert!((sum - 100.0).abs() <= epsilon, "sum was {sum}");
    }

    /// The primary category always holds the maximum share
    #[test]
    fn distribution_primary_is_max_share(values in counts_strategy()) {
        let rules = RuleClassifier::new(&Thresholds::default(), "Unknown");
        let result = rules.distribution(&counts_from(&values));

        let max_share = result.shares.iter().map(|s| s.share).fold(0.0, f64::max);
        let primary_share = result
            .shares
            .iter()
            .find(|s| Some(&s.category) == result.primary.as_ref())
            .map(|s| s.share);
        prop_assert_eq!(primary_share, Some(max_share));
    }

    /// Dominant selection never invents a label: the result is a listed
    /// category, Mixed, or the configured fallback
    #[test]
    fn dominant_label_is_grounded(values in prop::collection::vec(0u32..100, 1..12)) {
        let rules = RuleClassifier::new(&Thresholds::default(), "Fallback");
        let counts = counts_from(&values);
        let result = rules.dominant(&counts);

        match result.label {
            DominantLabel::Category(label) => {
                prop_assert!(counts.entries().iter().any(|c| c.category == label));
            }
            DominantLabel::Fallback(label) => {
                prop_assert_eq!(label, "Fallback");
                prop_assert!(counts.is_zero());
            }
            DominantLabel::Mixed => {
                let strong = counts.entries().iter().filter(|c| c.count >= 3).count();
                prop_assert!(strong >= 2);
            }
        }
    }
}
