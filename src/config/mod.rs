//! Configuration for the termination protection engine.
//!
//! The only configurable data is the article catalogue used by the keyword
//! search; protection rules themselves are statutory and fixed in code.

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{ArticleCatalog, StatuteMetadata};
