//! Article keyword search.
//!
//! An in-memory index over the statute article catalogue: free text is
//! split into distinct keywords, and articles are matched through their
//! signal words. A simple lookup with no persistence; the catalogue is
//! loaded once from configuration.

use serde::{Deserialize, Serialize};

/// A statute article with the signal words it is found under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    /// The article number within the statute.
    pub number: u32,
    /// The article title.
    pub title: String,
    /// A short description of the article's content.
    pub description: String,
    /// Signal words that map search keywords to this article.
    #[serde(default)]
    pub signal_words: Vec<String>,
}

/// An in-memory keyword index over the article catalogue.
#[derive(Debug, Clone, Default)]
pub struct ArticleIndex {
    articles: Vec<Article>,
}

impl ArticleIndex {
    /// Builds an index over the given articles.
    pub fn new(articles: Vec<Article>) -> Self {
        Self { articles }
    }

    /// Returns the indexed articles.
    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    /// Splits free text into distinct keywords, preserving first-seen order.
    ///
    /// # Example
    ///
    /// ```
    /// use worksafe_engine::articles::ArticleIndex;
    ///
    /// let keywords = ArticleIndex::extract_keywords("Kündigung wegen Krankheit Kündigung");
    /// assert_eq!(keywords, vec!["Kündigung", "wegen", "Krankheit"]);
    /// ```
    pub fn extract_keywords(text: &str) -> Vec<String> {
        let mut keywords: Vec<String> = Vec::new();
        for token in text.split_whitespace() {
            if !keywords.iter().any(|seen| seen == token) {
                keywords.push(token.to_string());
            }
        }
        keywords
    }

    /// Finds the articles whose signal words match any of the keywords.
    ///
    /// Matching is case-insensitive; results are de-duplicated by article
    /// number and returned in keyword order.
    pub fn find(&self, keywords: &[String]) -> Vec<&Article> {
        let mut matches: Vec<&Article> = Vec::new();
        for keyword in keywords {
            let keyword = keyword.to_lowercase();
            for article in &self.articles {
                let hit = article
                    .signal_words
                    .iter()
                    .any(|word| word.to_lowercase() == keyword);
                if hit && !matches.iter().any(|seen| seen.number == article.number) {
                    matches.push(article);
                }
            }
        }
        matches
    }

    /// Extracts keywords from free text and finds the matching articles.
    ///
    /// Text without any keywords yields no matches.
    pub fn search(&self, text: &str) -> Vec<&Article> {
        let keywords = Self::extract_keywords(text);
        if keywords.is_empty() {
            return Vec::new();
        }
        self.find(&keywords)
    }
}
