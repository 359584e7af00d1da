//! Query interpretation for `GET /news`.
//!
//! Turns the raw, all-optional, all-string request parameters into a store
//! filter and a skip/limit window. Pure transform; no side effects.
//!
//! Numeric parameters are validated rather than silently coerced: anything
//! that does not parse as an unsigned integer is rejected, and a parsed 0
//! is clamped to 1. Sort order is fixed (date descending) and lives in the
//! store adapter.

use newsdesk_core::{ArticleFilter, Page};
use serde::Deserialize;

use crate::error::ApiError;

/// Reserved category value meaning "no category filter".
pub const CATEGORY_ALL: &str = "All";

/// Default page number when `page` is absent.
pub const DEFAULT_PAGE: u64 = 1;

/// Default window size when `pageSize` is absent.
pub const DEFAULT_PAGE_SIZE: u64 = 10;

/// Raw query parameters for `GET /news`. All optional, all strings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListParams {
    /// Exact-match date filter, `YYYY-MM-DD`.
    pub date: Option<String>,
    /// Category filter; `"All"` or absent means no filter.
    pub category: Option<String>,
    /// 1-based page number.
    pub page: Option<String>,
    /// Window size.
    #[serde(rename = "pageSize")]
    pub page_size: Option<String>,
}

/// Interprets raw parameters into a filter and a page window.
pub fn interpret(params: &ListParams) -> Result<(ArticleFilter, Page), ApiError> {
    let filter = ArticleFilter {
        date: params.date.clone().filter(|d| !d.is_empty()),
        category: params
            .category
            .clone()
            .filter(|c| !c.is_empty() && c != CATEGORY_ALL),
    };

    let page = parse_positive("page", params.page.as_deref(), DEFAULT_PAGE)?;
    let page_size = parse_positive("pageSize", params.page_size.as_deref(), DEFAULT_PAGE_SIZE)?;

    let skip = page
        .checked_sub(1)
        .and_then(|p| p.checked_mul(page_size))
        .ok_or_else(|| ApiError::InvalidQuery("page window out of range".into()))?;
    let limit = i64::try_from(page_size)
        .map_err(|_| ApiError::InvalidQuery("pageSize out of range".into()))?;

    Ok((filter, Page { skip, limit }))
}

/// Parses an optional string parameter as a positive integer.
///
/// Absent or empty values fall back to `default`; a parsed 0 is clamped
/// to 1; anything unparseable (including negatives) is rejected.
fn parse_positive(name: &str, raw: Option<&str>, default: u64) -> Result<u64, ApiError> {
    match raw {
        None => Ok(default),
        Some(s) if s.is_empty() => Ok(default),
        Some(s) => s
            .parse::<u64>()
            .map(|n| n.max(1))
            .map_err(|_| ApiError::InvalidQuery(format!("{name} must be a positive integer"))),
    }
}
