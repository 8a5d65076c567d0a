use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use entity::article::ArticleStatus;
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{
        api::ErrorDto,
        article::{
            ArticleDto, ArticleListDto, CreateArticleDto, PaginatedArticlesDto, UpdateArticleDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{
            article::{
                ArticleFilter, ArticleSort, ArticleWithRelations, CreateArticleParams,
                UpdateArticleParams,
            },
            pagination::{PageRequest, SortDirection},
        },
        service::article::{ArticleService, ARTICLE_PAGE_SIZE},
        state::AppState,
    },
};

/// Tag for grouping article endpoints in OpenAPI documentation
pub static ARTICLE_TAG: &str = "article";

#[derive(Deserialize, IntoParams)]
pub struct ArticleListQuery {
    /// 1-based page number (default: 1)
    pub page: Option<i64>,
    /// Items per page (default: 10)
    pub page_size: Option<i64>,
    /// `draft`, `published` or `archived`
    #[param(value_type = Option<String>)]
    pub status: Option<ArticleStatus>,
    /// Only articles translated into this language
    pub lang: Option<String>,
    pub tag_id: Option<i32>,
    pub category_id: Option<i32>,
    /// `created_at`, `updated_at`, `published_at` or `view_count`
    pub sort: Option<String>,
    /// `asc` or `desc` (default: desc)
    pub order: Option<String>,
}

#[derive(Deserialize, IntoParams)]
pub struct LanguageQuery {
    /// Language code; defaults to the default language
    pub lang: Option<String>,
}

#[derive(Deserialize, IntoParams)]
pub struct PublishedListQuery {
    /// Language code; defaults to the default language
    pub lang: Option<String>,
    /// Number of articles to return
    pub limit: Option<i64>,
}

fn list_dto(articles: Vec<ArticleWithRelations>) -> ArticleListDto {
    ArticleListDto {
        articles: articles.into_iter().map(|a| a.into_dto()).collect(),
    }
}

/// List articles.
///
/// Returns a page of articles with author, translations, tags and categories.
/// Filtering by `lang` keeps only articles translated into that language and
/// loads only those translations.
///
/// # Returns
/// - `200 OK` - Page of articles
/// - `400 Bad Request` - Unknown sort field or direction
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v1/articles",
    tag = ARTICLE_TAG,
    params(ArticleListQuery),
    responses(
        (status = 200, description = "Page of articles", body = PaginatedArticlesDto),
        (status = 400, description = "Invalid sort parameters", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_articles(
    State(state): State<AppState>,
    Query(query): Query<ArticleListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let filter = ArticleFilter {
        status: query.status,
        language: query.lang,
        tag_id: query.tag_id,
        category_id: query.category_id,
        sort: ArticleSort::parse(query.sort.as_deref())?,
        direction: SortDirection::parse(query.order.as_deref())?,
    };
    let page = PageRequest::new(query.page, query.page_size, ARTICLE_PAGE_SIZE);

    let articles = ArticleService::new(&state.db)
        .get_paginated(filter, page)
        .await?;

    Ok((
        StatusCode::OK,
        Json(PaginatedArticlesDto {
            pagination: articles.pagination_dto(),
            articles: articles.items.into_iter().map(|a| a.into_dto()).collect(),
        }),
    ))
}

/// Get an article by ID in any status.
#[utoipa::path(
    get,
    path = "/api/v1/articles/{id}",
    tag = ARTICLE_TAG,
    params(("id" = i32, Path, description = "Article ID")),
    responses(
        (status = 200, description = "Article", body = ArticleDto),
        (status = 404, description = "Article not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_article_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let article = ArticleService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(article.into_dto())))
}

/// Get a published article by slug.
///
/// Each successful lookup counts as one view; the returned `view_count` already
/// includes it.
///
/// # Returns
/// - `200 OK` - Published article
/// - `400 Bad Request` - No language given and no default language registered
/// - `404 Not Found` - No published article with that slug in the language
#[utoipa::path(
    get,
    path = "/api/v1/articles/slug/{slug}",
    tag = ARTICLE_TAG,
    params(
        ("slug" = String, Path, description = "Translation slug"),
        LanguageQuery
    ),
    responses(
        (status = 200, description = "Article", body = ArticleDto),
        (status = 400, description = "No language could be resolved", body = ErrorDto),
        (status = 404, description = "Article not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_article_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(query): Query<LanguageQuery>,
) -> Result<impl IntoResponse, AppError> {
    let article = ArticleService::new(&state.db)
        .get_by_slug(&slug, query.lang)
        .await?;

    Ok((StatusCode::OK, Json(article.into_dto())))
}

/// Featured published articles, newest first (default limit: 5).
#[utoipa::path(
    get,
    path = "/api/v1/articles/featured",
    tag = ARTICLE_TAG,
    params(PublishedListQuery),
    responses(
        (status = 200, description = "Featured articles", body = ArticleListDto),
        (status = 400, description = "No language could be resolved", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_featured_articles(
    State(state): State<AppState>,
    Query(query): Query<PublishedListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let articles = ArticleService::new(&state.db)
        .get_featured(query.lang, query.limit)
        .await?;

    Ok((StatusCode::OK, Json(list_dto(articles))))
}

/// Latest published articles (default limit: 3).
#[utoipa::path(
    get,
    path = "/api/v1/articles/latest",
    tag = ARTICLE_TAG,
    params(PublishedListQuery),
    responses(
        (status = 200, description = "Latest articles", body = ArticleListDto),
        (status = 400, description = "No language could be resolved", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_latest_articles(
    State(state): State<AppState>,
    Query(query): Query<PublishedListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let articles = ArticleService::new(&state.db)
        .get_latest(query.lang, query.limit)
        .await?;

    Ok((StatusCode::OK, Json(list_dto(articles))))
}

/// Published articles in the category whose slug matches in the language (default limit: 2).
#[utoipa::path(
    get,
    path = "/api/v1/articles/category/{slug}",
    tag = ARTICLE_TAG,
    params(
        ("slug" = String, Path, description = "Category slug"),
        PublishedListQuery
    ),
    responses(
        (status = 200, description = "Articles in the category", body = ArticleListDto),
        (status = 400, description = "No language could be resolved", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_articles_by_category(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(query): Query<PublishedListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let articles = ArticleService::new(&state.db)
        .get_by_category_slug(slug, query.lang, query.limit)
        .await?;

    Ok((StatusCode::OK, Json(list_dto(articles))))
}

/// Create an article.
///
/// The authenticated user becomes the author. At least one translation is
/// required; blank slugs are derived from the title.
///
/// # Access Control
/// - `Editor` - Editors and admins
///
/// # Returns
/// - `201 Created` - The created article
/// - `400 Bad Request` - Missing or invalid translations
/// - `401 Unauthorized` / `403 Forbidden` - Not an editor
/// - `404 Not Found` - A referenced tag or category does not exist
/// - `409 Conflict` - Slug already used in that language
#[utoipa::path(
    post,
    path = "/api/v1/admin/articles",
    tag = ARTICLE_TAG,
    security(("bearer" = [])),
    request_body = CreateArticleDto,
    responses(
        (status = 201, description = "Article created", body = ArticleDto),
        (status = 400, description = "Invalid article data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Editor role required", body = ErrorDto),
        (status = 404, description = "Tag or category not found", body = ErrorDto),
        (status = 409, description = "Slug already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_article(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateArticleDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Editor])
        .await?;

    let (params, translations) = CreateArticleParams::from_dto(user.id, payload);

    let article = ArticleService::new(&state.db)
        .create(params, translations)
        .await?;

    Ok((StatusCode::CREATED, Json(article.into_dto())))
}

/// Update an article.
///
/// Omitted fields keep their value. Supplied translations are added or overwrite the
/// existing one for their language; supplied `tag_ids`/`category_ids` replace the
/// current links.
///
/// # Access Control
/// - `Editor` - Editors and admins
#[utoipa::path(
    put,
    path = "/api/v1/admin/articles/{id}",
    tag = ARTICLE_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "Article ID")),
    request_body = UpdateArticleDto,
    responses(
        (status = 200, description = "Article updated", body = ArticleDto),
        (status = 400, description = "Invalid article data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Editor role required", body = ErrorDto),
        (status = 404, description = "Article, tag or category not found", body = ErrorDto),
        (status = 409, description = "Slug already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_article(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateArticleDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Editor])
        .await?;

    let (params, translations) = UpdateArticleParams::from_dto(payload);

    let article = ArticleService::new(&state.db)
        .update(id, params, translations)
        .await?;

    Ok((StatusCode::OK, Json(article.into_dto())))
}

/// Delete an article together with its translations and links.
///
/// # Access Control
/// - `Editor` - Editors and admins
#[utoipa::path(
    delete,
    path = "/api/v1/admin/articles/{id}",
    tag = ARTICLE_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "Article ID")),
    responses(
        (status = 204, description = "Article deleted"),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Editor role required", body = ErrorDto),
        (status = 404, description = "Article not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_article(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Editor])
        .await?;

    ArticleService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
