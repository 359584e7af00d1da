//! MongoDB-backed repository for the news collection.
//!
//! Translates `ArticleFilter`/`Page` into driver queries. Every driver call
//! is bounded by a per-operation timeout so a hung connection fails the
//! request instead of suspending it indefinitely.

use std::future::Future;
use std::time::Duration;

use futures::TryStreamExt;
use mongodb::bson::{doc, Document};
use mongodb::{Collection, Database};

use super::{ArticleFilter, NewsStore, Page};
use crate::error::{Result, StoreError};
use crate::models::NewsArticle;

/// Name of the backing collection.
pub const COLLECTION: &str = "news";

/// Repository over the `news` collection.
pub struct Repository {
    collection: Collection<NewsArticle>,
    database: Database,
    op_timeout: Duration,
}

impl Repository {
    /// Creates a repository bound to `database` with the given per-operation
    /// timeout.
    pub fn new(database: &Database, op_timeout: Duration) -> Self {
        Self {
            collection: database.collection(COLLECTION),
            database: database.clone(),
            op_timeout,
        }
    }

    /// Runs a store operation under the configured timeout.
    async fn bounded<T, F>(&self, op: F) -> Result<T>
    where
        F: Future<Output = Result<T>>,
    {
        tokio::time::timeout(self.op_timeout, op)
            .await
            .unwrap_or(Err(StoreError::Timeout(self.op_timeout.as_secs())))
    }
}

/// Builds the equality-constraint document for a find operation.
fn filter_document(filter: &ArticleFilter) -> Document {
    let mut document = doc! {};
    if let Some(date) = &filter.date {
        document.insert("date", date.as_str());
    }
    if let Some(category) = &filter.category {
        document.insert("category", category.as_str());
    }
    document
}

#[async_trait::async_trait]
impl NewsStore for Repository {
    async fn find(&self, filter: &ArticleFilter, page: Page) -> Result<Vec<NewsArticle>> {
        let filter = filter_document(filter);
        self.bounded(async {
            let cursor = self
                .collection
                .find(filter)
                .sort(doc! { "date": -1 })
                .skip(page.skip)
                .limit(page.limit)
                .await?;
            let articles = cursor.try_collect().await?;
            Ok(articles)
        })
        .await
    }

    async fn insert(&self, mut article: NewsArticle) -> Result<NewsArticle> {
        let result = self.bounded(async {
            let result = self.collection.insert_one(&article).await?;
            Ok(result)
        })
        .await?;

        match result.inserted_id.as_object_id() {
            Some(id) => {
                article.id = Some(id);
                Ok(article)
            }
            None => Err(StoreError::InvalidDocument(format!(
                "store assigned a non-ObjectId identifier: {}",
                result.inserted_id
            ))),
        }
    }

    async fn ping(&self) -> Result<()> {
        self.bounded(async {
            self.database.run_command(doc! { "ping": 1 }).await?;
            Ok(())
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use mongodb::Client;

    use super::*;

    #[tokio::test]
    async fn slow_operations_surface_as_timeouts() {
        // The client connects lazily, so no database is needed here.
        let client = Client::with_uri_str("mongodb://127.0.0.1:27017").await.expect("client");
        let repository = Repository::new(&client.database("newsdesk"), Duration::from_millis(10));

        let result: Result<()> = repository
            .bounded(async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                Ok(())
            })
            .await;

        assert!(matches!(result, Err(StoreError::Timeout(_))));
    }

    #[test]
    fn empty_filter_builds_empty_document() {
        let document = filter_document(&ArticleFilter::default());
        assert!(document.is_empty());
    }

    #[test]
    fn filter_document_carries_only_present_constraints() {
        let filter = ArticleFilter { date: Some("2024-01-01".into()), category: None };
        let document = filter_document(&filter);

        assert_eq!(document.get_str("date").expect("date"), "2024-01-01");
        assert!(!document.contains_key("category"));
    }

    #[test]
    fn filter_document_with_both_constraints() {
        let filter = ArticleFilter {
            date: Some("2024-01-01".into()),
            category: Some("Tech".into()),
        };
        let document = filter_document(&filter);

        assert_eq!(document.len(), 2);
        assert_eq!(document.get_str("category").expect("category"), "Tech");
    }
}
