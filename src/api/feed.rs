use std::collections::HashMap;

use axum::extract::{Query, State};
use axum::Json;
use serde_json::Value;

use crate::db::models::Pagination;
use crate::error::AppError;
use crate::state::{FeedBinding, FeedState};

/// Shared read path for the paginated feed endpoints — separated from
/// the HTTP layer for testability.
///
/// Parses the raw `offset`/`limit` strings, then queries the binding's
/// collection with its fixed sort spec.
pub async fn fetch_feed_page(
    binding: &FeedBinding,
    params: &HashMap<String, String>,
) -> Result<Vec<Value>, AppError> {
    let page = Pagination::from_query(params)?;
    binding.repo.find_page(&binding.sort, page).await
}

/// Axum handler for `GET /v1/newsfeed`.
pub async fn newsfeed_handler(
    State(state): State<FeedState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<Vec<Value>>, AppError> {
    let page = fetch_feed_page(&state.news, &params).await?;
    Ok(Json(page))
}

/// Axum handler for `GET /v1/moviesfeed`.
pub async fn moviesfeed_handler(
    State(state): State<FeedState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<Vec<Value>>, AppError> {
    let page = fetch_feed_page(&state.movies, &params).await?;
    Ok(Json(page))
}
