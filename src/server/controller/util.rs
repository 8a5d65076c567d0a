use axum::{extract::State, http::HeaderMap, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::api::{ErrorDto, GenerateSlugDto, HealthDto, SlugDto},
    server::{
        error::AppError, middleware::auth::AuthGuard, state::AppState, util::slug::slugify,
    },
};

/// Tag for grouping utility endpoints in OpenAPI documentation
pub static UTIL_TAG: &str = "util";

/// Liveness probe.
#[utoipa::path(
    get,
    path = "/health",
    tag = UTIL_TAG,
    responses(
        (status = 200, description = "Service is running", body = HealthDto)
    ),
)]
pub async fn health() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthDto {
            status: "ok".to_string(),
        }),
    )
}

/// Generate a URL slug from a title.
///
/// Lets editors preview the slug a translation would get when saved without one.
///
/// # Authentication
/// Requires a valid bearer token
///
/// # Returns
/// - `200 OK` - The generated slug
/// - `400 Bad Request` - Title has no characters a slug can keep
/// - `401 Unauthorized` - Missing or invalid token
#[utoipa::path(
    post,
    path = "/api/v1/utils/generate-slug",
    tag = UTIL_TAG,
    security(("bearer" = [])),
    request_body = GenerateSlugDto,
    responses(
        (status = 200, description = "Generated slug", body = SlugDto),
        (status = 400, description = "Title yields an empty slug", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto)
    ),
)]
pub async fn generate_slug(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<GenerateSlugDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let slug = slugify(&payload.title);
    if slug.is_empty() {
        return Err(AppError::BadRequest(
            "Title does not contain any characters usable in a slug".to_string(),
        ));
    }

    Ok((StatusCode::OK, Json(SlugDto { slug })))
}
