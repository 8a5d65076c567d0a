use axum::{extract::State, http::HeaderMap, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{api::ErrorDto, user::UserDto},
    server::{error::AppError, middleware::auth::AuthGuard, state::AppState},
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// GET /api/v1/user - Get the authenticated account
///
/// # Authentication
/// Requires a valid bearer token (no role required)
///
/// # Returns
/// - `200 OK`: The account the token belongs to
/// - `401 Unauthorized`: Missing or invalid token
#[utoipa::path(
    get,
    path = "/api/v1/user",
    tag = USER_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Current user", body = UserDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Account disabled", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    Ok((StatusCode::OK, Json(UserDto::from(user))))
}
