//! Built-in domain lexicons
//!
//! Curated for West-African destination assessment. Each list was compiled
//! from the vocabulary that actually shows up in operator websites, tour
//! listings, and visitor reviews for the region; literal matching is
//! sufficient precision at this curation level, so there is no stemming.
//!
//! All constructors return validated lexicons; the phrase lists are static,
//! so a failure here is a programming error surfaced at startup.

use crate::{Category, Lexicon};
use destlens_core::Result;

/// Destination countries, detected from place-name mentions.
///
/// Category order is the tie-break priority. "guinea-bissau" is listed as
/// its own phrase so leftmost-longest matching keeps it out of the Guinea
/// counts.
pub fn countries() -> Result<Lexicon> {
    Lexicon::new(
        "destination-countries",
        vec![
            Category::new(
                "Senegal",
                &[
                    "senegal",
                    "dakar",
                    "saint-louis",
                    "casamance",
                    "goree",
                    "lac rose",
                    "sine saloum",
                    "cap skirring",
                ],
            ),
            Category::new(
                "Gambia",
                &[
                    "gambia",
                    "banjul",
                    "serekunda",
                    "kololi",
                    "bakau",
                    "makasutu",
                    "kunta kinteh",
                    "janjanbureh",
                ],
            ),
            Category::new(
                "Guinea",
                &["guinea", "conakry", "fouta djallon", "mount nimba"],
            ),
            Category::new(
                "Guinea-Bissau",
                &["guinea-bissau", "bissau", "bijagos", "bolama"],
            ),
            Category::new(
                "Cape Verde",
                &["cape verde", "cabo verde", "praia", "mindelo", "sal island"],
            ),
        ],
    )
}

/// Content languages, detected from high-frequency function words and
/// greeting formulas. Word-boundary matching in the scorer keeps the short
/// markers from firing inside longer words.
pub fn languages() -> Result<Lexicon> {
    Lexicon::new(
        "content-languages",
        vec![
            Category::new(
                "English",
                &["the", "and", "with", "welcome", "discover", "your"],
            ),
            Category::new(
                "French",
                &["le", "la", "les", "et", "vous", "avec", "bienvenue", "decouvrez"],
            ),
            Category::new(
                "German",
                &["der", "die", "das", "und", "mit", "willkommen", "entdecken"],
            ),
            Category::new(
                "Spanish",
                &["el", "los", "con", "bienvenido", "descubre", "usted"],
            ),
            Category::new(
                "Portuguese",
                &["os", "com", "bem-vindo", "descubra", "voce"],
            ),
        ],
    )
}

/// Qualitative feedback themes used to bucket review sentiment.
pub fn themes() -> Result<Lexicon> {
    Lexicon::new(
        "review-themes",
        vec![
            Category::new(
                "Cultural Heritage",
                &[
                    "culture",
                    "cultural",
                    "heritage",
                    "history",
                    "historical",
                    "museum",
                    "tradition",
                    "traditional",
                    "craft",
                ],
            ),
            Category::new(
                "Nature & Wildlife",
                &[
                    "nature",
                    "wildlife",
                    "birds",
                    "birdwatching",
                    "river",
                    "forest",
                    "mangrove",
                    "beach",
                    "national park",
                ],
            ),
            Category::new(
                "Service Quality",
                &[
                    "service",
                    "staff",
                    "guide",
                    "friendly",
                    "helpful",
                    "organized",
                    "professional",
                    "punctual",
                ],
            ),
            Category::new(
                "Food & Dining",
                &["food", "restaurant", "meal", "cuisine", "delicious", "dinner", "lunch"],
            ),
            Category::new(
                "Music & Festivals",
                &["music", "festival", "drumming", "dance", "concert", "kora"],
            ),
            Category::new(
                "Accommodation",
                &["hotel", "lodge", "room", "accommodation", "camp", "eco-lodge"],
            ),
        ],
    )
}

/// Tour product types, classified by packaging indicators.
pub fn product_types() -> Result<Lexicon> {
    Lexicon::new(
        "product-types",
        vec![
            Category::new(
                "Itinerary",
                &[
                    "itinerary",
                    "day 1",
                    "day 2",
                    "day 3",
                    "guided tour",
                    "multi-day",
                    "overnight",
                    "route",
                ],
            ),
            Category::new(
                "Flight Package",
                &[
                    "flight + hotel",
                    "flights included",
                    "all-inclusive",
                    "package deal",
                    "airfare",
                    "charter",
                ],
            ),
            Category::new(
                "Bespoke",
                &["bespoke", "tailor-made", "tailored", "custom tour", "on request"],
            ),
            Category::new(
                "Day Trip",
                &["day trip", "excursion", "half-day", "full-day"],
            ),
        ],
    )
}
