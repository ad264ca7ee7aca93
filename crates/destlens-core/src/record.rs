//! Typed source records
//!
//! A `SourceRecord` is built once at the I/O boundary (spreadsheet row,
//! scraped page, survey response) and passed around instead of raw untyped
//! cells.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// One row of assessable content for an entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceRecord {
    /// Identifier of the entity the text belongs to (operator, venue, tour)
    pub entity: String,

    /// The free text to score (review, tour description, page body)
    pub text: String,

    /// Star rating attached to the text, on a 1-5 scale
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,

    /// Country hint supplied by the source, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_hint: Option<String>,
}

impl SourceRecord {
    /// Create a new record with just entity and text
    pub fn new(entity: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            entity: entity.into(),
            text: text.into(),
            rating: None,
            country_hint: None,
        }
    }

    /// Attach a star rating
    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = Some(rating);
        self
    }

    /// Attach a country hint
    pub fn with_country_hint(mut self, hint: impl Into<String>) -> Self {
        self.country_hint = Some(hint.into());
        self
    }

    /// Validate a record parsed from an untyped row.
    ///
    /// Rejects blank entity ids and ratings outside the 1-5 star scale.
    /// Empty text is allowed; it scores to all-zero counts downstream.
    pub fn validate(&self) -> Result<()> {
        if self.entity.trim().is_empty() {
            return Err(Error::invalid_input("record has a blank entity id"));
        }
        if let Some(rating) = self.rating {
            if !(1.0..=5.0).contains(&rating) {
                return Err(Error::invalid_input(format!(
                    "rating {rating} outside the 1-5 scale for entity '{}'",
                    self.entity
                )));
            }
        }
        Ok(())
    }
}
