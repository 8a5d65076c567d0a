use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{
        api::ErrorDto,
        tag::{PaginatedTagsDto, SaveTagDto, TagDto},
    },
    server::{
        controller::article::LanguageQuery,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{
            pagination::{PageRequest, SortDirection},
            tag::{TagFilter, TagTranslationParams},
        },
        service::tag::{TagService, TAG_PAGE_SIZE},
        state::AppState,
    },
};

/// Tag for grouping tag endpoints in OpenAPI documentation
pub static TAG_TAG: &str = "tag";

#[derive(Deserialize, IntoParams)]
pub struct TagListQuery {
    /// 1-based page number (default: 1)
    pub page: Option<i64>,
    /// Items per page (default: 20)
    pub page_size: Option<i64>,
    /// Load only translations in this language
    pub lang: Option<String>,
    /// `asc` or `desc` by creation time (default: desc)
    pub order: Option<String>,
}

fn translations(payload: SaveTagDto) -> Vec<TagTranslationParams> {
    payload
        .translations
        .into_iter()
        .map(TagTranslationParams::from_dto)
        .collect()
}

/// List tags with their translations.
#[utoipa::path(
    get,
    path = "/api/v1/tags",
    tag = TAG_TAG,
    params(TagListQuery),
    responses(
        (status = 200, description = "Page of tags", body = PaginatedTagsDto),
        (status = 400, description = "Invalid sort direction", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_tags(
    State(state): State<AppState>,
    Query(query): Query<TagListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let direction = SortDirection::parse(query.order.as_deref())?;
    let page = PageRequest::new(query.page, query.page_size, TAG_PAGE_SIZE);
    let filter = TagFilter {
        language: query.lang,
    };

    let tags = TagService::new(&state.db)
        .get_paginated(filter, direction, page)
        .await?;

    Ok((
        StatusCode::OK,
        Json(PaginatedTagsDto {
            pagination: tags.pagination_dto(),
            tags: tags.items.into_iter().map(|t| t.into_dto()).collect(),
        }),
    ))
}

/// Get a tag with all its translations.
#[utoipa::path(
    get,
    path = "/api/v1/tags/{id}",
    tag = TAG_TAG,
    params(("id" = i32, Path, description = "Tag ID")),
    responses(
        (status = 200, description = "Tag", body = TagDto),
        (status = 404, description = "Tag not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_tag_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let tag = TagService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(tag.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/v1/tags/slug/{slug}",
    tag = TAG_TAG,
    params(
        ("slug" = String, Path, description = "Translation slug"),
        LanguageQuery
    ),
    responses(
        (status = 200, description = "Tag with the matching translation", body = TagDto),
        (status = 400, description = "No language could be resolved", body = ErrorDto),
        (status = 404, description = "Tag not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_tag_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(query): Query<LanguageQuery>,
) -> Result<impl IntoResponse, AppError> {
    let tag = TagService::new(&state.db)
        .get_by_slug(&slug, query.lang)
        .await?;

    Ok((StatusCode::OK, Json(tag.into_dto())))
}

/// Create a tag.
///
/// # Access Control
/// - `Editor` - Editors and admins
///
/// # Returns
/// - `201 Created` - The created tag
/// - `400 Bad Request` - No translations, unknown language or duplicate language
/// - `409 Conflict` - Slug already used in that language
#[utoipa::path(
    post,
    path = "/api/v1/admin/tags",
    tag = TAG_TAG,
    security(("bearer" = [])),
    request_body = SaveTagDto,
    responses(
        (status = 201, description = "Tag created", body = TagDto),
        (status = 400, description = "Invalid tag data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Editor role required", body = ErrorDto),
        (status = 409, description = "Slug already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_tag(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<SaveTagDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Editor])
        .await?;

    let tag = TagService::new(&state.db)
        .create(translations(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(tag.into_dto())))
}

/// Add or overwrite translations of a tag.
///
/// Languages not present in the request keep their translation.
///
/// # Access Control
/// - `Editor` - Editors and admins
#[utoipa::path(
    put,
    path = "/api/v1/admin/tags/{id}",
    tag = TAG_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "Tag ID")),
    request_body = SaveTagDto,
    responses(
        (status = 200, description = "Tag updated", body = TagDto),
        (status = 400, description = "Invalid tag data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Editor role required", body = ErrorDto),
        (status = 404, description = "Tag not found", body = ErrorDto),
        (status = 409, description = "Slug already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_tag(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<SaveTagDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Editor])
        .await?;

    let tag = TagService::new(&state.db)
        .update(id, translations(payload))
        .await?;

    Ok((StatusCode::OK, Json(tag.into_dto())))
}

/// Delete a tag no article links to.
///
/// # Access Control
/// - `Editor` - Editors and admins
#[utoipa::path(
    delete,
    path = "/api/v1/admin/tags/{id}",
    tag = TAG_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "Tag ID")),
    responses(
        (status = 204, description = "Tag deleted"),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Editor role required", body = ErrorDto),
        (status = 404, description = "Tag not found", body = ErrorDto),
        (status = 409, description = "Tag is still linked to articles", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_tag(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Editor])
        .await?;

    TagService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
