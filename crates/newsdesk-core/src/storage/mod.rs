//! Store access layer for news records.
//!
//! All database access goes through the `NewsStore` trait. The production
//! implementation lives in [`news`] and talks to MongoDB; [`memory`] holds
//! an in-memory implementation used by the HTTP integration tests.

use async_trait::async_trait;

pub mod memory;
pub mod news;

use crate::error::Result;
use crate::models::NewsArticle;

/// Field-equality constraints applied to a find operation.
///
/// `None` means "no constraint". The `"All"` category sentinel is resolved
/// by the query layer before a filter is built; it never appears here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleFilter {
    /// Exact match on the `date` field.
    pub date: Option<String>,
    /// Exact match on the `category` field.
    pub category: Option<String>,
}

/// Skip/limit window over the sorted result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    /// Number of sorted records to discard.
    pub skip: u64,
    /// Maximum number of records to return after skipping.
    pub limit: i64,
}

/// Store seam for the news collection.
///
/// `find` returns a finite, materialized list sorted by `date` descending
/// (string comparison), then windowed by `page`. `insert` persists one
/// record and returns it with its store-assigned identifier.
#[async_trait]
pub trait NewsStore: Send + Sync {
    /// Finds records matching `filter`, sorted by `date` descending and
    /// windowed by `page`.
    async fn find(&self, filter: &ArticleFilter, page: Page) -> Result<Vec<NewsArticle>>;

    /// Persists a record, returning it with its assigned identifier.
    async fn insert(&self, article: NewsArticle) -> Result<NewsArticle>;

    /// Verifies store connectivity. Used by health endpoints.
    async fn ping(&self) -> Result<()>;
}
