//! DestLens Classifiers
//!
//! The heuristic scoring core: configuration-driven rule evaluation over
//! hand-curated lexicons.
//!
//! - [`scorer`] counts trigger-phrase occurrences per category
//! - [`classify`] turns counts into labels and percentage distributions
//! - [`sentiment`] scores text polarity from positive/negative term lists
//!
//! Everything here is pure and in-memory; identical input always yields
//! identical output.

pub mod classify;
pub mod scorer;
pub mod sentiment;

pub use classify::{
    CategoryShare, DistributionResult, DominantLabel, DominantResult, ProductTypeClassifier,
    RuleClassifier,
};
pub use scorer::{normalize, CategoryCount, CategoryCounts, KeywordScorer};
pub use sentiment::{rating_polarity, Polarity, SentimentScorer};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::classify::{
        DistributionResult, DominantLabel, DominantResult, ProductTypeClassifier, RuleClassifier,
    };
    pub use crate::scorer::{CategoryCounts, KeywordScorer};
    pub use crate::sentiment::{Polarity, SentimentScorer};
}
