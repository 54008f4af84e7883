//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the article
//! catalogue from a YAML file.

use std::fs;
use std::path::Path;

use crate::articles::ArticleIndex;
use crate::error::{EngineError, EngineResult};

use super::types::ArticleCatalog;

/// Loads the article catalogue and builds the keyword index.
///
/// # Example
///
/// ```no_run
/// use worksafe_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/articles.yaml").unwrap();
/// let index = loader.into_index();
/// let articles = index.search("Kündigung");
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    catalog: ArticleCatalog,
}

impl ConfigLoader {
    /// Loads the article catalogue from the specified YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ConfigNotFound`] when the file is missing and
    /// [`EngineError::ConfigParseError`] when it contains invalid YAML.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(EngineError::ConfigNotFound {
                path: path.display().to_string(),
            });
        }

        let contents = fs::read_to_string(path).map_err(|err| EngineError::ConfigParseError {
            path: path.display().to_string(),
            message: err.to_string(),
        })?;
        let catalog: ArticleCatalog =
            serde_yaml::from_str(&contents).map_err(|err| EngineError::ConfigParseError {
                path: path.display().to_string(),
                message: err.to_string(),
            })?;

        Ok(Self { catalog })
    }

    /// Returns the loaded catalogue.
    pub fn catalog(&self) -> &ArticleCatalog {
        &self.catalog
    }

    /// Consumes the loader and builds the article keyword index.
    pub fn into_index(self) -> ArticleIndex {
        ArticleIndex::new(self.catalog.articles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_missing_file_fails() {
        let err = ConfigLoader::load("/nonexistent/articles.yaml").unwrap_err();
        assert!(matches!(err, EngineError::ConfigNotFound { .. }));
    }

    #[test]
    fn test_load_bundled_catalog() {
        let loader = ConfigLoader::load("./config/articles.yaml").unwrap();
        assert_eq!(loader.catalog().statute.abbreviation, "OR");
        assert!(!loader.catalog().articles.is_empty());

        let index = loader.into_index();
        let results = index.search("Kündigungsfristen");
        assert!(results.iter().any(|article| article.number == 335));
    }
}
