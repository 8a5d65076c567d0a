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
        category::{CategoryDto, PaginatedCategoriesDto, SaveCategoryDto},
    },
    server::{
        controller::article::LanguageQuery,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{
            category::{CategoryFilter, CategoryParams, CategoryTranslationParams},
            pagination::{PageRequest, SortDirection},
        },
        service::category::{CategoryService, CATEGORY_PAGE_SIZE},
        state::AppState,
    },
};

/// Tag for grouping category endpoints in OpenAPI documentation
pub static CATEGORY_TAG: &str = "category";

#[derive(Deserialize, IntoParams)]
pub struct CategoryListQuery {
    /// 1-based page number (default: 1)
    pub page: Option<i64>,
    /// Items per page (default: 20)
    pub page_size: Option<i64>,
    /// Load only translations in this language
    pub lang: Option<String>,
    /// Only direct children of this category
    pub parent_id: Option<i32>,
    /// Only top-level categories
    #[serde(default)]
    pub only_parents: bool,
    /// Embed each category's parent
    #[serde(default)]
    pub include_parent: bool,
    /// `asc` or `desc` by creation time (default: desc)
    pub order: Option<String>,
}

fn split(payload: SaveCategoryDto) -> (CategoryParams, Vec<CategoryTranslationParams>) {
    (
        CategoryParams {
            parent_id: payload.parent_id,
        },
        payload
            .translations
            .into_iter()
            .map(CategoryTranslationParams::from_dto)
            .collect(),
    )
}

/// List categories with their translations.
#[utoipa::path(
    get,
    path = "/api/v1/categories",
    tag = CATEGORY_TAG,
    params(CategoryListQuery),
    responses(
        (status = 200, description = "Page of categories", body = PaginatedCategoriesDto),
        (status = 400, description = "Invalid sort direction", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_categories(
    State(state): State<AppState>,
    Query(query): Query<CategoryListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let direction = SortDirection::parse(query.order.as_deref())?;
    let page = PageRequest::new(query.page, query.page_size, CATEGORY_PAGE_SIZE);
    let filter = CategoryFilter {
        language: query.lang,
        parent_id: query.parent_id,
        only_parents: query.only_parents,
        include_parent: query.include_parent,
    };

    let categories = CategoryService::new(&state.db)
        .get_paginated(filter, direction, page)
        .await?;

    Ok((
        StatusCode::OK,
        Json(PaginatedCategoriesDto {
            pagination: categories.pagination_dto(),
            categories: categories.items.into_iter().map(|c| c.into_dto()).collect(),
        }),
    ))
}

/// Get a category with all translations and its parent.
#[utoipa::path(
    get,
    path = "/api/v1/categories/{id}",
    tag = CATEGORY_TAG,
    params(("id" = i32, Path, description = "Category ID")),
    responses(
        (status = 200, description = "Category", body = CategoryDto),
        (status = 404, description = "Category not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_category_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let category = CategoryService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(category.into_dto())))
}

/// Get a category by its slug in one language.
///
/// Only the translation in that language is returned, for the category and for its
/// embedded parent.
///
/// # Returns
/// - `200 OK` - Category
/// - `400 Bad Request` - No language given and no default language registered
/// - `404 Not Found` - No live category with that slug in the language
#[utoipa::path(
    get,
    path = "/api/v1/categories/slug/{slug}",
    tag = CATEGORY_TAG,
    params(
        ("slug" = String, Path, description = "Translation slug"),
        LanguageQuery
    ),
    responses(
        (status = 200, description = "Category", body = CategoryDto),
        (status = 400, description = "No language could be resolved", body = ErrorDto),
        (status = 404, description = "Category not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_category_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(query): Query<LanguageQuery>,
) -> Result<impl IntoResponse, AppError> {
    let category = CategoryService::new(&state.db)
        .get_by_slug(&slug, query.lang)
        .await?;

    Ok((StatusCode::OK, Json(category.into_dto())))
}

/// Create a category, optionally below an existing parent.
///
/// # Access Control
/// - `Editor` - Editors and admins
#[utoipa::path(
    post,
    path = "/api/v1/admin/categories",
    tag = CATEGORY_TAG,
    security(("bearer" = [])),
    request_body = SaveCategoryDto,
    responses(
        (status = 201, description = "Category created", body = CategoryDto),
        (status = 400, description = "Invalid category data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Editor role required", body = ErrorDto),
        (status = 404, description = "Parent category not found", body = ErrorDto),
        (status = 409, description = "Slug already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_category(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<SaveCategoryDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Editor])
        .await?;

    let (params, translations) = split(payload);

    let category = CategoryService::new(&state.db)
        .create(params, translations)
        .await?;

    Ok((StatusCode::CREATED, Json(category.into_dto())))
}

/// Move a category and add or overwrite its translations.
///
/// A parent that is the category itself or one of its descendants is refused.
///
/// # Access Control
/// - `Editor` - Editors and admins
#[utoipa::path(
    put,
    path = "/api/v1/admin/categories/{id}",
    tag = CATEGORY_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "Category ID")),
    request_body = SaveCategoryDto,
    responses(
        (status = 200, description = "Category updated", body = CategoryDto),
        (status = 400, description = "Invalid category data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Editor role required", body = ErrorDto),
        (status = 404, description = "Category or parent not found", body = ErrorDto),
        (status = 409, description = "Slug in use or parent would create a cycle", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_category(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<SaveCategoryDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Editor])
        .await?;

    let (params, translations) = split(payload);

    let category = CategoryService::new(&state.db)
        .update(id, params, translations)
        .await?;

    Ok((StatusCode::OK, Json(category.into_dto())))
}

/// Delete a category without children or linked articles.
///
/// # Access Control
/// - `Editor` - Editors and admins
#[utoipa::path(
    delete,
    path = "/api/v1/admin/categories/{id}",
    tag = CATEGORY_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "Category ID")),
    responses(
        (status = 204, description = "Category deleted"),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Editor role required", body = ErrorDto),
        (status = 404, description = "Category not found", body = ErrorDto),
        (status = 409, description = "Category has children or linked articles", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_category(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Editor])
        .await?;

    CategoryService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
