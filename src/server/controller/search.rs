use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{api::ErrorDto, search::SearchResponseDto},
    server::{
        error::AppError, model::search::SearchParams, service::search::SearchService,
        state::AppState,
    },
};

/// Tag for grouping search endpoints in OpenAPI documentation
pub static SEARCH_TAG: &str = "search";

#[derive(Deserialize, IntoParams)]
pub struct SearchQuery {
    /// Keywords; terms of two characters or fewer are ignored
    #[serde(default)]
    pub q: String,
    /// Category slug
    pub category: Option<String>,
    /// Tag slug
    pub tag: Option<String>,
    /// Language code
    pub lang: Option<String>,
    /// 1-based page number (default: 1)
    pub page: Option<i64>,
    /// Hits per page, 1 to 50 (default: 10)
    pub page_size: Option<i64>,
}

/// Search published articles.
///
/// Every term longer than two characters must appear in the title, content or
/// excerpt of a translation. Hits are ordered by publication date, newest first.
/// When fewer than three hits come back, similar titles are suggested.
///
/// # Returns
/// - `200 OK` - Page of hits, possibly with suggestions
/// - `400 Bad Request` - Empty query
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v1/search",
    tag = SEARCH_TAG,
    params(SearchQuery),
    responses(
        (status = 200, description = "Search results", body = SearchResponseDto),
        (status = 400, description = "Empty query", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn search(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<impl IntoResponse, AppError> {
    let text = query.q.trim().to_string();
    let params = SearchParams {
        query: text.clone(),
        category_slug: query.category,
        tag_slug: query.tag,
        language: query.lang,
        page: SearchParams::page_request(query.page, query.page_size),
    };

    let results = SearchService::new(&state.db).search(params).await?;

    Ok((
        StatusCode::OK,
        Json(SearchResponseDto {
            query: text,
            pagination: results.page.pagination_dto(),
            results: results.page.items.into_iter().map(|h| h.into_dto()).collect(),
            suggestions: results.suggestions,
        }),
    ))
}
