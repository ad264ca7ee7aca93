//! Per-entity sentiment/theme aggregation
//!
//! Folds the texts belonging to one entity into summary statistics:
//! overall mean sentiment, per-theme mention counts and mean sentiment,
//! and a positive/neutral/negative distribution per theme.
//!
//! "No data" is represented as `None`, never as 0.0, so downstream
//! reporting can tell "assessed as neutral" apart from "never assessed".

use serde::{Deserialize, Serialize};
use tracing::debug;

use destlens_classifiers::{rating_polarity, KeywordScorer, Polarity, SentimentScorer};
use destlens_core::Thresholds;

/// Positive/neutral/negative text counts for one theme
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentDistribution {
    pub positive: u32,
    pub neutral: u32,
    pub negative: u32,
}

/// Aggregated feedback for one theme of one entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeAggregate {
    /// Theme name
    pub theme: String,

    /// Texts that mention the theme at least once
    pub texts_matched: u32,

    /// Total phrase occurrences across matching texts
    pub occurrences: u32,

    /// Mean polarity over matching texts that carried sentiment;
    /// `None` when no matching text did
    pub mean_sentiment: Option<f64>,

    /// Bucket counts over matching texts that carried sentiment
    pub distribution: SentimentDistribution,
}

/// Summary of all texts processed for one entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityAggregate {
    /// Entity identifier
    pub entity: String,

    /// Total texts folded in
    pub texts: usize,

    /// Mean polarity over texts that carried sentiment; `None` when none
    /// did (including the zero-text case)
    pub overall_sentiment: Option<f64>,

    /// Per-theme aggregates, in theme lexicon order
    pub themes: Vec<ThemeAggregate>,
}

impl EntityAggregate {
    /// True when at least one text was folded in
    pub fn has_data(&self) -> bool {
        self.texts > 0
    }
}

struct ThemeAccumulator {
    theme: String,
    texts_matched: u32,
    occurrences: u32,
    polarity_sum: f64,
    polarity_count: usize,
    distribution: SentimentDistribution,
}

/// Incremental fold of one entity's texts.
///
/// Each text contributes to the overall mean when it carries sentiment,
/// and to every theme it mentions. A text matching zero themes still
/// counts toward the overall mean. Star ratings back-fill polarity only
/// when the text itself has no sentiment terms.
pub struct EntityAggregator<'a> {
    entity: String,
    theme_scorer: &'a KeywordScorer,
    sentiment: &'a SentimentScorer,
    thresholds: &'a Thresholds,
    texts: usize,
    polarity_sum: f64,
    polarity_count: usize,
    themes: Vec<ThemeAccumulator>,
}

impl<'a> EntityAggregator<'a> {
    /// Start a fold for one entity
    pub fn new(
        entity: impl Into<String>,
        theme_scorer: &'a KeywordScorer,
        sentiment: &'a SentimentScorer,
        thresholds: &'a Thresholds,
    ) -> Self {
        Self {
            entity: entity.into(),
            theme_scorer,
            sentiment,
            thresholds,
            texts: 0,
            polarity_sum: 0.0,
            polarity_count: 0,
            themes: theme_scorer
                .categories()
                .iter()
                .map(|name| ThemeAccumulator {
                    theme: name.clone(),
                    texts_matched: 0,
                    occurrences: 0,
                    polarity_sum: 0.0,
                    polarity_count: 0,
                    distribution: SentimentDistribution::default(),
                })
                .collect(),
        }
    }

    /// Fold in one text with its optional star rating
    pub fn push(&mut self, text: &str, rating: Option<f64>) {
        self.texts += 1;

        let polarity = self
            .sentiment
            .polarity(text)
            .or_else(|| rating.map(rating_polarity));

        if let Some(p) = polarity {
            self.polarity_sum += p;
            self.polarity_count += 1;
        }

        let counts = self.theme_scorer.score(text);
        for (accumulator, entry) in self.themes.iter_mut().zip(counts.entries()) {
            if entry.count == 0 {
                continue;
            }
            accumulator.texts_matched += 1;
            accumulator.occurrences += entry.count;
            if let Some(p) = polarity {
                accumulator.polarity_sum += p;
                accumulator.polarity_count += 1;
                match Polarity::bucket(p, self.thresholds) {
                    Polarity::Positive => accumulator.distribution.positive += 1,
                    Polarity::Neutral => accumulator.distribution.neutral += 1,
                    Polarity::Negative => accumulator.distribution.negative += 1,
                }
            }
        }
    }

    /// Finalize the aggregate. Zero pushed texts yield an explicit no-data
    /// aggregate: zero counts and `None` sentiment everywhere.
    pub fn finish(self) -> EntityAggregate {
        let overall_sentiment = if self.polarity_count > 0 {
            Some(self.polarity_sum / self.polarity_count as f64)
        } else {
            None
        };

        let themes = self
            .themes
            .into_iter()
            .map(|acc| ThemeAggregate {
                theme: acc.theme,
                texts_matched: acc.texts_matched,
                occurrences: acc.occurrences,
                mean_sentiment: if acc.polarity_count > 0 {
                    Some(acc.polarity_sum / acc.polarity_count as f64)
                } else {
                    None
                },
                distribution: acc.distribution,
            })
            .collect();

        debug!(
            entity = %self.entity,
            texts = self.texts,
            "finalized entity aggregate"
        );

        EntityAggregate {
            entity: self.entity,
            texts: self.texts,
            overall_sentiment,
            themes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use destlens_lexicon::builtin;

    fn fixtures() -> (KeywordScorer, SentimentScorer, Thresholds) {
        (
            KeywordScorer::new(&builtin::themes().unwrap()).unwrap(),
            SentimentScorer::new().unwrap(),
            Thresholds::default(),
        )
    }

    fn theme<'a>(aggregate: &'a EntityAggregate, name: &str) -> &'a ThemeAggregate {
        aggregate
            .themes
            .iter()
            .find(|t| t.theme == name)
            .unwrap_or_else(|| panic!("theme {name} missing"))
    }

    #[test]
    fn test_zero_texts_is_no_data_not_neutral() {
        let (themes, sentiment, thresholds) = fixtures();
        let aggregate =
            EntityAggregator::new("silent-lodge", &themes, &sentiment, &thresholds).finish();

        assert!(!aggregate.has_data());
        assert_eq!(aggregate.texts, 0);
        assert_eq!(aggregate.overall_sentiment, None);
        for theme in &aggregate.themes {
            assert_eq!(theme.texts_matched, 0);
            assert_eq!(theme.mean_sentiment, None);
        }
    }

    #[test]
    fn test_no_data_differs_from_balanced_zero() {
        let (themes, sentiment, thresholds) = fixtures();

        let mut aggregator =
            EntityAggregator::new("mixed-lodge", &themes, &sentiment, &thresholds);
        // one fully positive and one fully negative review average to 0.0
        aggregator.push("wonderful guide", None);
        aggregator.push("rude guide", None);
        let aggregate = aggregator.finish();

        assert!(aggregate.has_data());
        assert_eq!(aggregate.overall_sentiment, Some(0.0));
    }

    #[test]
    fn test_text_without_themes_feeds_only_overall() {
        let (themes, sentiment, thresholds) = fixtures();
        let mut aggregator = EntityAggregator::new("e", &themes, &sentiment, &thresholds);
        aggregator.push("an excellent trip overall", None);
        let aggregate = aggregator.finish();

        assert_eq!(aggregate.overall_sentiment, Some(1.0));
        assert!(aggregate.themes.iter().all(|t| t.texts_matched == 0));
    }

    #[test]
    fn test_theme_buckets_and_means() {
        let (themes, sentiment, thresholds) = fixtures();
        let mut aggregator = EntityAggregator::new("e", &themes, &sentiment, &thresholds);
        aggregator.push("the guide was wonderful and helpful", None);
        aggregator.push("our guide was rude", None);
        aggregator.push("the guide drove us along the river", None);
        let aggregate = aggregator.finish();

        let service = theme(&aggregate, "Service Quality");
        assert_eq!(service.texts_matched, 3);
        // "guide" + "helpful" in the first text, "guide" in the others
        assert_eq!(service.occurrences, 4);
        assert_eq!(service.distribution.positive, 1);
        assert_eq!(service.distribution.negative, 1);
        // third text has no sentiment terms and no rating: mentions the
        // theme but lands in no bucket
        assert_eq!(service.distribution.neutral, 0);
        assert_eq!(service.mean_sentiment, Some(0.0));
    }

    #[test]
    fn test_rating_backfills_missing_text_sentiment() {
        let (themes, sentiment, thresholds) = fixtures();
        let mut aggregator = EntityAggregator::new("e", &themes, &sentiment, &thresholds);
        // no sentiment words; 5-star rating supplies polarity +1
        aggregator.push("stayed two nights at the lodge", Some(5.0));
        let aggregate = aggregator.finish();

        assert_eq!(aggregate.overall_sentiment, Some(1.0));
        let accommodation = theme(&aggregate, "Accommodation");
        assert_eq!(accommodation.texts_matched, 1);
        assert_eq!(accommodation.distribution.positive, 1);
    }

    #[test]
    fn test_text_sentiment_beats_rating() {
        let (themes, sentiment, thresholds) = fixtures();
        let mut aggregator = EntityAggregator::new("e", &themes, &sentiment, &thresholds);
        // the text says negative even though the rating is high
        aggregator.push("a terrible, dirty room", Some(5.0));
        let aggregate = aggregator.finish();

        assert_eq!(aggregate.overall_sentiment, Some(-1.0));
    }
}
