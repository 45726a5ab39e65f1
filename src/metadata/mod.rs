//! Remote movie-metadata collaborator.
//!
//! The engine only ever asks two questions: free-text search (autocomplete,
//! movies page) and exact title(+year) lookup (trending enrichment). Both are
//! best-effort: network failures, malformed responses, and genuine misses all
//! collapse to "not found" at this boundary, so callers degrade presentation
//! instead of handling transport errors.

pub mod omdb;

pub use omdb::{MetadataConfig, OmdbClient};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// What the collaborator knows about one movie.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieSummary {
    pub title: String,
    pub year: String,
    /// `None` when the upstream reports its "no poster" sentinel.
    pub poster: Option<String>,
}

#[async_trait]
pub trait MetadataClient: Send + Sync {
    /// Free-text search. `None` means not found, including any query failure.
    async fn search(&self, query: &str) -> Option<Vec<MovieSummary>>;

    /// Exact lookup by title, optionally narrowed by release year.
    async fn find(&self, title: &str, year: Option<&str>) -> Option<MovieSummary>;
}
