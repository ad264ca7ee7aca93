//! Lexicon store and load-time validation

use serde::{Deserialize, Serialize};
use tracing::info;

use destlens_core::{Error, Result};

/// A named, ordered set of categories with their trigger phrases.
///
/// Immutable after construction. The category order doubles as the
/// tie-break priority for dominant-category selection: when two categories
/// score the same count, the one listed first wins.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lexicon {
    name: String,
    categories: Vec<Category>,
}

/// One category and its trigger phrases.
///
/// Phrases are stored lowercase; multi-word phrases are matched literally
/// against normalized text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    name: String,
    phrases: Vec<String>,
}

impl Category {
    /// Create a category from a name and phrase list
    pub fn new(name: impl Into<String>, phrases: &[&str]) -> Self {
        Self {
            name: name.into(),
            phrases: phrases.iter().map(|p| p.to_string()).collect(),
        }
    }

    /// Category name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Trigger phrases, lowercase
    pub fn phrases(&self) -> &[String] {
        &self.phrases
    }
}

impl Lexicon {
    /// Build a validated lexicon. Phrases are trimmed and lowercased;
    /// validation failures are configuration errors and abort the run.
    pub fn new(name: impl Into<String>, categories: Vec<Category>) -> Result<Self> {
        let mut lexicon = Self {
            name: name.into(),
            categories,
        };
        lexicon.normalize();
        lexicon.validate()?;
        info!(
            lexicon = %lexicon.name,
            categories = lexicon.categories.len(),
            phrases = lexicon.categories.iter().map(|c| c.phrases.len()).sum::<usize>(),
            "loaded lexicon"
        );
        Ok(lexicon)
    }

    /// Load a lexicon from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let raw: Lexicon = serde_yaml::from_str(yaml)
            .map_err(|e| Error::config(format!("bad lexicon: {e}")))?;
        Self::new(raw.name, raw.categories)
    }

    /// Load a lexicon from a YAML file
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    fn normalize(&mut self) {
        for category in &mut self.categories {
            for phrase in &mut category.phrases {
                *phrase = phrase.trim().to_lowercase();
            }
        }
    }

    fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::config("lexicon has no name"));
        }
        if self.categories.is_empty() {
            return Err(Error::config(format!("lexicon '{}' has no categories", self.name)));
        }

        let mut seen_categories = std::collections::HashSet::new();
        for category in &self.categories {
            if category.name.trim().is_empty() {
                return Err(Error::config(format!(
                    "lexicon '{}' has an unnamed category",
                    self.name
                )));
            }
            if !seen_categories.insert(category.name.as_str()) {
                return Err(Error::config(format!(
                    "lexicon '{}' lists category '{}' twice",
                    self.name, category.name
                )));
            }
            if category.phrases.is_empty() {
                return Err(Error::config(format!(
                    "category '{}' in lexicon '{}' has no phrases",
                    category.name, self.name
                )));
            }

            let mut seen_phrases = std::collections::HashSet::new();
            for phrase in &category.phrases {
                if phrase.is_empty() {
                    return Err(Error::config(format!(
                        "category '{}' in lexicon '{}' contains an empty phrase",
                        category.name, self.name
                    )));
                }
                if !seen_phrases.insert(phrase.as_str()) {
                    return Err(Error::config(format!(
                        "category '{}' in lexicon '{}' lists phrase '{}' twice",
                        category.name, self.name, phrase
                    )));
                }
            }
        }
        Ok(())
    }

    /// Lexicon name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Categories in priority order
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Category names in priority order
    pub fn category_names(&self) -> Vec<&str> {
        self.categories.iter().map(|c| c.name.as_str()).collect()
    }

    /// Priority index of a category (0 = highest)
    pub fn priority(&self, category: &str) -> Option<usize> {
        self.categories.iter().position(|c| c.name == category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phrases_are_lowercased() {
        let lexicon = Lexicon::new(
            "test",
            vec![Category::new("Senegal", &["Dakar", "  SALOUM  "])],
        )
        .unwrap();
        assert_eq!(lexicon.categories()[0].phrases(), ["dakar", "saloum"]);
    }

    #[test]
    fn test_empty_category_rejected() {
        let result = Lexicon::new("test", vec![Category::new("Empty", &[])]);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_duplicate_phrase_rejected() {
        let result = Lexicon::new("test", vec![Category::new("C", &["dakar", "Dakar"])]);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_duplicate_category_rejected() {
        let result = Lexicon::new(
            "test",
            vec![Category::new("C", &["a"]), Category::new("C", &["b"])],
        );
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_priority_follows_listing_order() {
        let lexicon = Lexicon::new(
            "test",
            vec![Category::new("First", &["a"]), Category::new("Second", &["b"])],
        )
        .unwrap();
        assert_eq!(lexicon.priority("First"), Some(0));
        assert_eq!(lexicon.priority("Second"), Some(1));
        assert_eq!(lexicon.priority("Missing"), None);
    }

    #[test]
    fn test_yaml_round_trip() {
        let yaml = r#"
name: destinations
categories:
  - name: Senegal
    phrases: [senegal, dakar]
  - name: Gambia
    phrases: [gambia, banjul]
"#;
        let lexicon = Lexicon::from_yaml(yaml).unwrap();
        assert_eq!(lexicon.name(), "destinations");
        assert_eq!(lexicon.category_names(), ["Senegal", "Gambia"]);
    }
}
