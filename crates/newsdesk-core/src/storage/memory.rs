//! In-memory news store.
//!
//! Backs the HTTP integration tests so the full router can be exercised
//! without a running MongoDB. Mirrors the repository's observable
//! semantics: stable sort by `date` descending with insertion order as the
//! tiebreak, then skip/limit windowing.

use mongodb::bson::oid::ObjectId;
use tokio::sync::RwLock;

use super::{ArticleFilter, NewsStore, Page};
use crate::error::Result;
use crate::models::NewsArticle;

/// News store holding records in process memory.
#[derive(Default)]
pub struct InMemoryStore {
    records: RwLock<Vec<NewsArticle>>,
}

impl InMemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records currently held.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    /// Returns `true` when the store holds no records.
    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

fn matches(filter: &ArticleFilter, article: &NewsArticle) -> bool {
    if let Some(date) = &filter.date {
        if article.date.as_deref() != Some(date.as_str()) {
            return false;
        }
    }
    if let Some(category) = &filter.category {
        if article.category.as_deref() != Some(category.as_str()) {
            return false;
        }
    }
    true
}

#[async_trait::async_trait]
impl NewsStore for InMemoryStore {
    async fn find(&self, filter: &ArticleFilter, page: Page) -> Result<Vec<NewsArticle>> {
        let records = self.records.read().await;

        let mut matched: Vec<NewsArticle> =
            records.iter().filter(|a| matches(filter, a)).cloned().collect();
        // Stable sort: equal dates keep insertion order, like Mongo's
        // natural-order tiebreak. Missing dates sort last.
        matched.sort_by(|a, b| b.date.cmp(&a.date));

        let skip = usize::try_from(page.skip).unwrap_or(usize::MAX);
        let limit = usize::try_from(page.limit).unwrap_or(0);
        Ok(matched.into_iter().skip(skip).take(limit).collect())
    }

    async fn insert(&self, mut article: NewsArticle) -> Result<NewsArticle> {
        article.id = Some(ObjectId::new());
        self.records.write().await.push(article.clone());
        Ok(article)
    }

    async fn ping(&self) -> Result<()> {
        Ok(())
    }
}
