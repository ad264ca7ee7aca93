//! Keyword scorer
//!
//! Counts non-overlapping, case-insensitive occurrences of each lexicon
//! category's trigger phrases in a normalized text blob. Multi-word phrases
//! are matched literally; single-token phrases must fall on word boundaries
//! so "mali" does not fire inside "formalities".

use aho_corasick::{AhoCorasick, MatchKind};
use serde::{Deserialize, Serialize};

use destlens_core::{Error, Result};
use destlens_lexicon::Lexicon;

/// Normalize text for matching: lowercase, whitespace collapsed to single
/// spaces. Phrase lists are stored in the same form.
pub fn normalize(text: &str) -> String {
    text.to_lowercase().split_whitespace().collect::<Vec<_>>().join(" ")
}

/// True when the match at `start..end` in `text` does not continue a word
/// on either side. Only edges that are alphanumeric in the matched slice
/// are constrained, so phrases like "flight + hotel" keep their literal
/// interior.
pub(crate) fn word_bounded(text: &str, start: usize, end: usize) -> bool {
    let slice = &text[start..end];
    let leading = slice.chars().next().is_some_and(char::is_alphanumeric);
    let trailing = slice.chars().next_back().is_some_and(char::is_alphanumeric);

    let before_ok = !leading
        || text[..start]
            .chars()
            .next_back()
            .map_or(true, |c| !c.is_alphanumeric());
    let after_ok = !trailing
        || text[end..]
            .chars()
            .next()
            .map_or(true, |c| !c.is_alphanumeric());

    before_ok && after_ok
}

/// Per-category match count for one scoring pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    /// Category name
    pub category: String,

    /// Raw phrase occurrences
    pub count: u32,
}

/// Counts for every category of one lexicon, in lexicon priority order.
///
/// Carried inside classification results for auditability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCounts {
    counts: Vec<CategoryCount>,
}

impl CategoryCounts {
    /// Build counts directly from (category, count) pairs. Order is the
    /// tie-break priority, as in a lexicon.
    pub fn from_pairs(pairs: &[(&str, u32)]) -> Self {
        Self {
            counts: pairs
                .iter()
                .map(|(category, count)| CategoryCount {
                    category: category.to_string(),
                    count: *count,
                })
                .collect(),
        }
    }

    /// Count for a category, zero when absent
    pub fn get(&self, category: &str) -> u32 {
        self.counts
            .iter()
            .find(|c| c.category == category)
            .map_or(0, |c| c.count)
    }

    /// Add to a category's count (context-signal boost). The category must
    /// exist in the underlying lexicon.
    pub fn boost(&mut self, category: &str, amount: u32) -> Result<()> {
        match self.counts.iter_mut().find(|c| c.category == category) {
            Some(entry) => {
                entry.count += amount;
                Ok(())
            }
            None => Err(Error::invalid_input(format!(
                "cannot boost unknown category '{category}'"
            ))),
        }
    }

    /// Entries in priority order
    pub fn entries(&self) -> &[CategoryCount] {
        &self.counts
    }

    /// Sum of all counts
    pub fn total(&self) -> u32 {
        self.counts.iter().map(|c| c.count).sum()
    }

    /// True when no category matched
    pub fn is_zero(&self) -> bool {
        self.counts.iter().all(|c| c.count == 0)
    }
}

/// Counts phrase occurrences for every category of one lexicon.
///
/// One automaton over all phrases, with a parallel map from pattern index
/// to category index. Leftmost-longest matching keeps "guinea-bissau" out
/// of the "guinea" counts.
pub struct KeywordScorer {
    lexicon_name: String,
    categories: Vec<String>,
    automaton: AhoCorasick,
    pattern_categories: Vec<usize>,
}

impl KeywordScorer {
    /// Build a scorer over a validated lexicon
    pub fn new(lexicon: &Lexicon) -> Result<Self> {
        let mut patterns: Vec<&str> = Vec::new();
        let mut pattern_categories = Vec::new();

        for (index, category) in lexicon.categories().iter().enumerate() {
            for phrase in category.phrases() {
                patterns.push(phrase);
                pattern_categories.push(index);
            }
        }

        let automaton = AhoCorasick::builder()
            .match_kind(MatchKind::LeftmostLongest)
            .build(&patterns)
            .map_err(|e| {
                Error::internal(format!(
                    "failed to build matcher for lexicon '{}': {e}",
                    lexicon.name()
                ))
            })?;

        tracing::debug!(
            lexicon = %lexicon.name(),
            patterns = patterns.len(),
            "built keyword scorer"
        );

        Ok(Self {
            lexicon_name: lexicon.name().to_string(),
            categories: lexicon
                .categories()
                .iter()
                .map(|c| c.name().to_string())
                .collect(),
            automaton,
            pattern_categories,
        })
    }

    /// Count phrase occurrences per category.
    ///
    /// Empty text yields all-zero counts, not an error. Pure: identical
    /// input always yields identical counts.
    pub fn score(&self, text: &str) -> CategoryCounts {
        let normalized = normalize(text);

        let mut counts = vec![0u32; self.categories.len()];
        for m in self.automaton.find_iter(&normalized) {
            if word_bounded(&normalized, m.start(), m.end()) {
                counts[self.pattern_categories[m.pattern().as_usize()]] += 1;
            }
        }

        CategoryCounts {
            counts: self
                .categories
                .iter()
                .zip(counts)
                .map(|(category, count)| CategoryCount {
                    category: category.clone(),
                    count,
                })
                .collect(),
        }
    }

    /// Name of the lexicon this scorer was built from
    pub fn lexicon_name(&self) -> &str {
        &self.lexicon_name
    }

    /// Category names in priority order
    pub fn categories(&self) -> &[String] {
        &self.categories
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use destlens_lexicon::{builtin, Category};

    #[test]
    fn test_empty_text_scores_zero() {
        let scorer = KeywordScorer::new(&builtin::countries().unwrap()).unwrap();
        let counts = scorer.score("");
        assert!(counts.is_zero());
        assert_eq!(counts.entries().len(), 5);
    }

    #[test]
    fn test_case_insensitive_counting() {
        let scorer = KeywordScorer::new(&builtin::countries().unwrap()).unwrap();
        let counts = scorer.score("DAKAR is lovely. We flew from dakar to Banjul.");
        assert_eq!(counts.get("Senegal"), 2);
        assert_eq!(counts.get("Gambia"), 1);
    }

    #[test]
    fn test_word_boundary_blocks_partial_words() {
        let lexicon = Lexicon::new("test", vec![Category::new("Mali", &["mali"])]).unwrap();
        let scorer = KeywordScorer::new(&lexicon).unwrap();
        assert_eq!(scorer.score("onward travel to mali").get("Mali"), 1);
        assert_eq!(scorer.score("border formalities apply").get("Mali"), 0);
    }

    #[test]
    fn test_longest_phrase_wins() {
        let scorer = KeywordScorer::new(&builtin::countries().unwrap()).unwrap();
        let counts = scorer.score("a ferry from guinea-bissau, then overland through guinea");
        assert_eq!(counts.get("Guinea-Bissau"), 1);
        assert_eq!(counts.get("Guinea"), 1);
    }

    #[test]
    fn test_multiword_phrase_survives_whitespace_noise() {
        let scorer = KeywordScorer::new(&builtin::product_types().unwrap()).unwrap();
        let counts = scorer.score("Book our  guided\n tour today");
        assert_eq!(counts.get("Itinerary"), 1);
    }

    #[test]
    fn test_boost_unknown_category_rejected() {
        let scorer = KeywordScorer::new(&builtin::countries().unwrap()).unwrap();
        let mut counts = scorer.score("dakar");
        assert!(counts.boost("Atlantis", 1).is_err());
        assert!(counts.boost("Gambia", 2).is_ok());
        assert_eq!(counts.get("Gambia"), 2);
    }
}
