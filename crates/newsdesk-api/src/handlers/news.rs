//! News collection handlers.
//!
//! `list_news` serves the paginated, filterable read path; `create_news`
//! persists one record per call. The create handler takes the raw body and
//! parses it explicitly so payload errors map to the service's 400 body
//! instead of a framework rejection.

use axum::body::Bytes;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::NaiveDate;
use newsdesk_core::NewsArticle;
use serde::Deserialize;
use tracing::{info, instrument, warn};

use crate::error::ApiError;
use crate::query::{self, ListParams};
use crate::AppState;

/// Request body for `POST /news`.
///
/// Every field is optional; unknown fields are rejected. The store performs
/// any remaining validation.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateNewsRequest {
    /// Headline text.
    pub title: Option<String>,
    /// Short body text.
    pub summary: Option<String>,
    /// URI of the cover image.
    pub image_url: Option<String>,
    /// Publication date, `YYYY-MM-DD`.
    pub date: Option<String>,
    /// URI of the original story.
    pub source_url: Option<String>,
    /// Free-form category label.
    pub category: Option<String>,
}

impl CreateNewsRequest {
    /// Checks that `date`, when present, is a well-formed calendar date.
    ///
    /// Dates are stored and sorted as strings; admitting a malformed value
    /// here would silently corrupt the read-side ordering.
    fn validate(&self) -> Result<(), ApiError> {
        if let Some(date) = &self.date {
            NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|_| {
                ApiError::InvalidBody(format!("date must be a YYYY-MM-DD calendar date, got {date:?}"))
            })?;
        }
        Ok(())
    }

    fn into_article(self) -> NewsArticle {
        NewsArticle {
            id: None,
            title: self.title,
            summary: self.summary,
            image_url: self.image_url,
            date: self.date,
            source_url: self.source_url,
            category: self.category,
        }
    }
}

/// Paginated, filterable read path for `GET /news`. Unauthenticated.
#[instrument(name = "list_news", skip(state))]
pub async fn list_news(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<NewsArticle>>, ApiError> {
    let (filter, page) = query::interpret(&params)?;

    let articles = state.store.find(&filter, page).await.map_err(|e| {
        warn!(error = %e, "Store read failed");
        ApiError::ReadFailed(e)
    })?;

    Ok(Json(articles))
}

/// Persists one record for `POST /news`. The API-key gate runs before this
/// handler; by the time the body is parsed the caller is authorized.
#[instrument(name = "create_news", skip(state, body))]
pub async fn create_news(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<NewsArticle>), ApiError> {
    let draft: CreateNewsRequest = serde_json::from_slice(&body)
        .map_err(|e| ApiError::InvalidBody(format!("invalid news payload: {e}")))?;
    draft.validate()?;

    let article = state.store.insert(draft.into_article()).await.map_err(|e| {
        warn!(error = %e, "Store rejected insert");
        ApiError::WriteRejected(e)
    })?;

    info!(id = ?article.id, "News record created");
    Ok((StatusCode::CREATED, Json(article)))
}
