//! Application state for the termination protection engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::articles::ArticleIndex;

/// Shared application state.
///
/// Contains resources shared across all request handlers; currently the
/// article keyword index loaded from configuration. The protection engine
/// itself is stateless.
#[derive(Clone)]
pub struct AppState {
    articles: Arc<ArticleIndex>,
}

impl AppState {
    /// Creates a new application state over the given article index.
    pub fn new(articles: ArticleIndex) -> Self {
        Self {
            articles: Arc::new(articles),
        }
    }

    /// Returns a reference to the article index.
    pub fn articles(&self) -> &ArticleIndex {
        &self.articles
    }
}
