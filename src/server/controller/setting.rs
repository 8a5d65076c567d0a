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
        setting::{CreateSettingDto, SettingDto, SettingValueDto, UpdateSettingDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::setting::{CreateSettingParams, UpdateSettingParams},
        service::setting::SettingService,
        state::AppState,
    },
};

/// Tag for grouping setting endpoints in OpenAPI documentation
pub static SETTING_TAG: &str = "setting";

#[derive(Deserialize, IntoParams)]
pub struct SettingListQuery {
    /// Only settings in this group
    pub group: Option<String>,
}

#[derive(Deserialize, IntoParams)]
pub struct SettingValueQuery {
    /// Language to resolve a translatable value for
    pub lang: Option<String>,
}

/// List settings with all their translations.
#[utoipa::path(
    get,
    path = "/api/v1/settings",
    tag = SETTING_TAG,
    params(SettingListQuery),
    responses(
        (status = 200, description = "Settings ordered by group and key", body = Vec<SettingDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_settings(
    State(state): State<AppState>,
    Query(query): Query<SettingListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let settings = SettingService::new(&state.db).get_all(query.group).await?;

    let settings: Vec<SettingDto> = settings.into_iter().map(|s| s.into_dto()).collect();

    Ok((StatusCode::OK, Json(settings)))
}

/// Get one setting's value resolved for a language.
///
/// Translatable settings return the translation for `lang` when one exists;
/// everything else returns the base value.
#[utoipa::path(
    get,
    path = "/api/v1/settings/{key}",
    tag = SETTING_TAG,
    params(
        ("key" = String, Path, description = "Setting key"),
        SettingValueQuery
    ),
    responses(
        (status = 200, description = "Resolved value", body = SettingValueDto),
        (status = 404, description = "Setting not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_setting_value(
    State(state): State<AppState>,
    Path(key): Path<String>,
    Query(query): Query<SettingValueQuery>,
) -> Result<impl IntoResponse, AppError> {
    let setting = SettingService::new(&state.db).get_by_key(&key).await?;

    Ok((StatusCode::OK, Json(setting.resolve(query.lang.as_deref()))))
}

/// Create a setting.
///
/// # Access Control
/// - `Admin` - Only admins can manage settings
#[utoipa::path(
    post,
    path = "/api/v1/admin/settings",
    tag = SETTING_TAG,
    security(("bearer" = [])),
    request_body = CreateSettingDto,
    responses(
        (status = 201, description = "Setting created", body = SettingDto),
        (status = 400, description = "Invalid setting data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Admin role required", body = ErrorDto),
        (status = 409, description = "Key already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_setting(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateSettingDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let (params, translations) = CreateSettingParams::from_dto(payload)?;

    let setting = SettingService::new(&state.db)
        .create(params, translations)
        .await?;

    Ok((StatusCode::CREATED, Json(setting.into_dto())))
}

/// Update a setting and add or overwrite value translations.
///
/// # Access Control
/// - `Admin` - Only admins can manage settings
#[utoipa::path(
    put,
    path = "/api/v1/admin/settings/{id}",
    tag = SETTING_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "Setting ID")),
    request_body = UpdateSettingDto,
    responses(
        (status = 200, description = "Setting updated", body = SettingDto),
        (status = 400, description = "Invalid setting data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Admin role required", body = ErrorDto),
        (status = 404, description = "Setting not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_setting(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateSettingDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let (params, translations) = UpdateSettingParams::from_dto(payload);

    let setting = SettingService::new(&state.db)
        .update(id, params, translations)
        .await?;

    Ok((StatusCode::OK, Json(setting.into_dto())))
}

/// Delete a setting and its translations.
///
/// # Access Control
/// - `Admin` - Only admins can manage settings
#[utoipa::path(
    delete,
    path = "/api/v1/admin/settings/{id}",
    tag = SETTING_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "Setting ID")),
    responses(
        (status = 204, description = "Setting deleted"),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Admin role required", body = ErrorDto),
        (status = 404, description = "Setting not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_setting(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    SettingService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
