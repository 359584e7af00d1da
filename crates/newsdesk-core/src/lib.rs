//! Core domain model and store adapters.
//!
//! Provides the `NewsArticle` record, the store error taxonomy, and the
//! `NewsStore` seam with its MongoDB-backed and in-memory implementations.
//! The API crate depends on these foundational types.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod models;
pub mod storage;

pub use error::{Result, StoreError};
pub use models::NewsArticle;
pub use storage::{ArticleFilter, NewsStore, Page};
