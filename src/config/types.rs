//! Configuration file structures.
//!
//! Serde types mirroring the YAML layout of the article catalogue.

use serde::{Deserialize, Serialize};

use crate::articles::Article;

/// The root of the article catalogue file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleCatalog {
    /// Metadata about the catalogued statute.
    pub statute: StatuteMetadata,
    /// The catalogued articles.
    pub articles: Vec<Article>,
}

/// Metadata describing the statute the articles belong to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatuteMetadata {
    /// The statute name (e.g. "Obligationenrecht").
    pub name: String,
    /// The abbreviation used in article references (e.g. "OR").
    pub abbreviation: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_deserializes_from_yaml() {
        let yaml = r#"
statute:
  name: Obligationenrecht
  abbreviation: OR
articles:
  - number: 335
    title: Notice of termination
    description: Open-ended employment may be terminated by either party.
    signal_words: [kündigung]
"#;
        let catalog: ArticleCatalog = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(catalog.statute.abbreviation, "OR");
        assert_eq!(catalog.articles.len(), 1);
        assert_eq!(catalog.articles[0].number, 335);
    }

    #[test]
    fn test_signal_words_default_to_empty() {
        let yaml = r#"
statute:
  name: Obligationenrecht
  abbreviation: OR
articles:
  - number: 335
    title: Notice of termination
    description: Open-ended employment may be terminated by either party.
"#;
        let catalog: ArticleCatalog = serde_yaml::from_str(yaml).unwrap();
        assert!(catalog.articles[0].signal_words.is_empty());
    }
}
