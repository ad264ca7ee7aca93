//! DestLens Analysis
//!
//! Combines per-text classification results into per-entity summaries and
//! positioning verdicts:
//!
//! - [`aggregate`] folds a collection of texts into an [`EntityAggregate`]
//! - [`gap`] compares two scores on a shared 0-100 scale into a
//!   [`GapRecord`] with a recommendation
//! - [`maturity`] bands a combined score into a maturity tier

pub mod aggregate;
pub mod gap;
pub mod maturity;

pub use aggregate::{EntityAggregate, EntityAggregator, SentimentDistribution, ThemeAggregate};
pub use gap::{GapEvaluator, GapLabel, GapRecord, RecommendationTemplates};
pub use maturity::MaturityTier;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::aggregate::{EntityAggregate, EntityAggregator};
    pub use crate::gap::{GapEvaluator, GapLabel, GapRecord, RecommendationTemplates};
    pub use crate::maturity::MaturityTier;
}
