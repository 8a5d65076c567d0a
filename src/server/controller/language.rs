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
        language::{CreateLanguageDto, LanguageDto, LanguageOrderDto, UpdateLanguageDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::language::{CreateLanguageParams, LanguageOrder, UpdateLanguageParams},
        service::language::LanguageService,
        state::AppState,
    },
};

/// Tag for grouping language endpoints in OpenAPI documentation
pub static LANGUAGE_TAG: &str = "language";

#[derive(Deserialize, IntoParams)]
pub struct LanguageListQuery {
    /// Only active languages
    #[serde(default)]
    pub active_only: bool,
}

fn list_dto(languages: Vec<entity::language::Model>) -> Vec<LanguageDto> {
    languages.into_iter().map(LanguageDto::from).collect()
}

/// List languages by sort order.
#[utoipa::path(
    get,
    path = "/api/v1/languages",
    tag = LANGUAGE_TAG,
    params(LanguageListQuery),
    responses(
        (status = 200, description = "Languages ordered by sort_order", body = Vec<LanguageDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_languages(
    State(state): State<AppState>,
    Query(query): Query<LanguageListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let languages = LanguageService::new(&state.db)
        .get_all(query.active_only)
        .await?;

    Ok((StatusCode::OK, Json(list_dto(languages))))
}

#[utoipa::path(
    get,
    path = "/api/v1/languages/{id}",
    tag = LANGUAGE_TAG,
    params(("id" = i32, Path, description = "Language ID")),
    responses(
        (status = 200, description = "Language", body = LanguageDto),
        (status = 404, description = "Language not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_language_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let language = LanguageService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(LanguageDto::from(language))))
}

#[utoipa::path(
    get,
    path = "/api/v1/languages/code/{code}",
    tag = LANGUAGE_TAG,
    params(("code" = String, Path, description = "Language code, e.g. zh-TW")),
    responses(
        (status = 200, description = "Language", body = LanguageDto),
        (status = 404, description = "Language not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_language_by_code(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let language = LanguageService::new(&state.db).get_by_code(&code).await?;

    Ok((StatusCode::OK, Json(LanguageDto::from(language))))
}

/// Register a language.
///
/// A language created as default replaces the current default.
///
/// # Access Control
/// - `Admin` - Only admins can change the language registry
#[utoipa::path(
    post,
    path = "/api/v1/admin/languages",
    tag = LANGUAGE_TAG,
    security(("bearer" = [])),
    request_body = CreateLanguageDto,
    responses(
        (status = 201, description = "Language created", body = LanguageDto),
        (status = 400, description = "Invalid language data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Admin role required", body = ErrorDto),
        (status = 409, description = "Code already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_language(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateLanguageDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let params = CreateLanguageParams::from_dto(payload)?;

    let language = LanguageService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(LanguageDto::from(language))))
}

/// Update a language.
///
/// # Access Control
/// - `Admin` - Only admins can change the language registry
#[utoipa::path(
    put,
    path = "/api/v1/admin/languages/{id}",
    tag = LANGUAGE_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "Language ID")),
    request_body = UpdateLanguageDto,
    responses(
        (status = 200, description = "Language updated", body = LanguageDto),
        (status = 400, description = "Invalid language data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Admin role required", body = ErrorDto),
        (status = 404, description = "Language not found", body = ErrorDto),
        (status = 409, description = "Code taken or change would leave no default", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_language(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateLanguageDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let params = UpdateLanguageParams::from_dto(payload)?;

    let language = LanguageService::new(&state.db).update(id, params).await?;

    Ok((StatusCode::OK, Json(LanguageDto::from(language))))
}

/// Delete a language that is neither the default nor used by any translation.
///
/// # Access Control
/// - `Admin` - Only admins can change the language registry
#[utoipa::path(
    delete,
    path = "/api/v1/admin/languages/{id}",
    tag = LANGUAGE_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "Language ID")),
    responses(
        (status = 204, description = "Language deleted"),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Admin role required", body = ErrorDto),
        (status = 404, description = "Language not found", body = ErrorDto),
        (status = 409, description = "Language is the default or still in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_language(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    LanguageService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Make a language the single default.
///
/// # Access Control
/// - `Admin` - Only admins can change the language registry
#[utoipa::path(
    put,
    path = "/api/v1/admin/languages/{id}/default",
    tag = LANGUAGE_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "Language ID")),
    responses(
        (status = 200, description = "New default language", body = LanguageDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Admin role required", body = ErrorDto),
        (status = 404, description = "Language not found", body = ErrorDto),
        (status = 409, description = "Language is inactive", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn set_default_language(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let language = LanguageService::new(&state.db).set_default(id).await?;

    Ok((StatusCode::OK, Json(LanguageDto::from(language))))
}

/// Flip a language between active and inactive.
///
/// # Access Control
/// - `Admin` - Only admins can change the language registry
#[utoipa::path(
    put,
    path = "/api/v1/admin/languages/{id}/toggle",
    tag = LANGUAGE_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "Language ID")),
    responses(
        (status = 200, description = "Language with its new state", body = LanguageDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Admin role required", body = ErrorDto),
        (status = 404, description = "Language not found", body = ErrorDto),
        (status = 409, description = "The default language cannot be disabled", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn toggle_language(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let language = LanguageService::new(&state.db).toggle_active(id).await?;

    Ok((StatusCode::OK, Json(LanguageDto::from(language))))
}

/// Assign new sort orders; all of them apply or none do.
///
/// # Access Control
/// - `Admin` - Only admins can change the language registry
#[utoipa::path(
    put,
    path = "/api/v1/admin/languages/order",
    tag = LANGUAGE_TAG,
    security(("bearer" = [])),
    request_body = LanguageOrderDto,
    responses(
        (status = 200, description = "All languages in their new order", body = Vec<LanguageDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Admin role required", body = ErrorDto),
        (status = 404, description = "A language in the request does not exist", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn reorder_languages(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<LanguageOrderDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let orders = payload
        .languages
        .into_iter()
        .map(|item| LanguageOrder {
            id: item.id,
            sort_order: item.sort_order,
        })
        .collect();

    let languages = LanguageService::new(&state.db).reorder(orders).await?;

    Ok((StatusCode::OK, Json(list_dto(languages))))
}
